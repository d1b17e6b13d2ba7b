//! Main Curator façade and public API.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::{
    Balance, GapSet, SizeRange, analyze_balance, analyze_gaps, curation_score, detect_imbalance,
    optimal_range,
};
use crate::cache::TtlCache;
use crate::catalogue::{Catalogue, CatalogueType, Item};
use crate::error::Result;
use crate::market::{IdealDistribution, MarketDistributionResolver};
use crate::recommendation::{GenerateOptions, Recommendation, RecommendationEngine};
use crate::store::{CatalogueStore, MarketDataSource};

/// Configuration for the Curator.
#[derive(Debug, Clone)]
pub struct CuratorConfig {
    /// Marketplace items sampled when deriving the ideal distribution.
    pub market_sample_size: usize,
    /// Lifetime of cached market and peer statistics.
    pub cache_ttl: Duration,
    /// Concurrent analyses during portfolio batches.
    pub max_concurrency: usize,
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            market_sample_size: MarketDistributionResolver::DEFAULT_SAMPLE_SIZE,
            cache_ttl: MarketDistributionResolver::DEFAULT_CACHE_TTL,
            max_concurrency: 4,
        }
    }
}

impl CuratorConfig {
    /// Set the market sample size.
    pub fn with_market_sample_size(mut self, size: usize) -> Self {
        self.market_sample_size = size;
        self
    }

    /// Set the statistics cache TTL.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set the batch concurrency bound.
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = limit.max(1);
        self
    }
}

/// Options for [`Curator::auto_curate`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AutoCurateOptions {
    /// Include gap-filling recommendations.
    pub fill_gaps: bool,
    /// Include reorder recommendations for imbalanced categories.
    pub balance_distribution: bool,
    /// Cap the catalogue at this many items, overriding the peer-derived
    /// maximum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_artworks: Option<usize>,
}

impl Default for AutoCurateOptions {
    fn default() -> Self {
        Self {
            fill_gaps: true,
            balance_distribution: true,
            max_artworks: None,
        }
    }
}

/// Result of analyzing one catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurationAnalysis {
    /// Id of the analyzed catalogue.
    pub catalogue_id: String,
    /// Ideal categories absent per facet.
    pub gaps: GapSet,
    /// Category histograms per facet.
    pub balance: Balance,
    /// Prioritized improvement recommendations.
    pub recommendations: Vec<Recommendation>,
    /// Curation quality score (0-100).
    pub score: u8,
    /// Recommended item-count range.
    pub size_range: SizeRange,
    /// When this analysis ran.
    pub analyzed_at: DateTime<Utc>,
}

/// The curation analysis engine.
///
/// Holds no mutable catalogue state: each request reads through the
/// collaborator traits and computes a fresh analysis. Market and peer
/// statistics are cached briefly because they change slowly.
pub struct Curator {
    store: Arc<dyn CatalogueStore>,
    resolver: MarketDistributionResolver,
    peer_cache: TtlCache<CatalogueType, Vec<usize>>,
    config: CuratorConfig,
}

impl Curator {
    /// Create a Curator with default configuration.
    pub fn new(store: Arc<dyn CatalogueStore>, market: Arc<dyn MarketDataSource>) -> Self {
        Self::with_config(store, market, CuratorConfig::default())
    }

    /// Create a Curator with custom configuration.
    pub fn with_config(
        store: Arc<dyn CatalogueStore>,
        market: Arc<dyn MarketDataSource>,
        config: CuratorConfig,
    ) -> Self {
        let resolver = MarketDistributionResolver::with_limits(
            market,
            config.market_sample_size,
            config.cache_ttl,
        );
        Self {
            store,
            resolver,
            peer_cache: TtlCache::new(config.cache_ttl),
            config,
        }
    }

    /// Analyze a catalogue's composition.
    ///
    /// Produces gaps, balance, recommendations, and a 0-100 score. Only a
    /// failure to fetch the catalogue itself is an error; market, peer,
    /// and inventory fetches degrade to documented fallbacks.
    pub async fn analyze_catalogue(&self, catalogue_id: &str) -> Result<CurationAnalysis> {
        let (catalogue, ideal, peer_sizes, pool) = self.gather(catalogue_id).await?;

        let gaps = analyze_gaps(&catalogue.items, &ideal);
        let balance = analyze_balance(&catalogue.items);
        let imbalance = detect_imbalance(&balance);
        let size_range = optimal_range(
            catalogue.catalogue_type,
            catalogue.owner_experience,
            &peer_sizes,
        );
        let recommendations = RecommendationEngine::generate(
            &catalogue,
            &gaps,
            &imbalance,
            &size_range,
            Some(&pool),
        );
        let score = curation_score(&gaps, &imbalance, catalogue.item_count());

        debug!(
            catalogue_id,
            score,
            recommendations = recommendations.len(),
            "analysis complete"
        );

        Ok(CurationAnalysis {
            catalogue_id: catalogue.id,
            gaps,
            balance,
            recommendations,
            score,
            size_range,
            analyzed_at: Utc::now(),
        })
    }

    /// Produce recommendations for automated curation.
    ///
    /// `options` selects which recommendation groups to generate and may
    /// cap the catalogue size below the peer-derived maximum. Size
    /// recommendations are always included.
    pub async fn auto_curate(
        &self,
        catalogue_id: &str,
        options: AutoCurateOptions,
    ) -> Result<Vec<Recommendation>> {
        let (catalogue, ideal, peer_sizes, pool) = self.gather(catalogue_id).await?;

        let gaps = analyze_gaps(&catalogue.items, &ideal);
        let imbalance = detect_imbalance(&analyze_balance(&catalogue.items));
        let mut size_range = optimal_range(
            catalogue.catalogue_type,
            catalogue.owner_experience,
            &peer_sizes,
        );
        if let Some(max) = options.max_artworks {
            size_range = size_range.capped_at(max);
        }

        Ok(RecommendationEngine::generate_with(
            &catalogue,
            &gaps,
            &imbalance,
            &size_range,
            Some(&pool),
            GenerateOptions {
                fill_gaps: options.fill_gaps,
                balance_distribution: options.balance_distribution,
                size: true,
            },
        ))
    }

    /// Analyze many catalogues with bounded concurrency.
    ///
    /// Each analysis is independent; results arrive in input order, and a
    /// failure for one catalogue does not abort the others.
    pub async fn analyze_portfolio(
        &self,
        catalogue_ids: &[String],
    ) -> Vec<Result<CurationAnalysis>> {
        futures::stream::iter(catalogue_ids)
            .map(|id| self.analyze_catalogue(id))
            .buffered(self.config.max_concurrency.max(1))
            .collect()
            .await
    }

    /// Fetch everything an analysis needs.
    ///
    /// The market resolution has no data dependency on the catalogue and
    /// runs concurrently with its fetch; the peer-size and inventory
    /// fetches need the catalogue's type and owner and run concurrently
    /// with each other afterwards.
    async fn gather(
        &self,
        catalogue_id: &str,
    ) -> Result<(Catalogue, IdealDistribution, Vec<usize>, Vec<Item>)> {
        let (catalogue, ideal) = futures::join!(
            self.store.fetch_catalogue(catalogue_id),
            self.resolver.resolve()
        );
        let catalogue = catalogue?;

        let exclude = catalogue.item_ids();
        let (peer_sizes, pool) = futures::join!(
            self.peer_sizes(catalogue.catalogue_type),
            self.store
                .fetch_owner_available_items(&catalogue.owner_id, &exclude)
        );

        let pool = pool.unwrap_or_else(|err| {
            warn!(error = %err, "inventory fetch failed, continuing without candidates");
            Vec::new()
        });

        Ok((catalogue, ideal, peer_sizes, pool))
    }

    /// Peer catalogue sizes, cached per type. A fetch failure falls back
    /// to the type baseline (empty sample) and is not cached.
    async fn peer_sizes(&self, catalogue_type: CatalogueType) -> Vec<usize> {
        if let Some(cached) = self.peer_cache.get(&catalogue_type) {
            return cached;
        }
        match self.store.fetch_peer_catalogue_sizes(catalogue_type).await {
            Ok(sizes) => {
                self.peer_cache.put(catalogue_type, sizes.clone());
                sizes
            }
            Err(err) => {
                warn!(error = %err, "peer size fetch failed, using type baseline");
                Vec::new()
            }
        }
    }
}
