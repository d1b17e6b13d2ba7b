//! Market distribution resolution with caching and a static fallback.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::store::MarketDataSource;

use super::{IdealDistribution, defaults};

/// Derives the ideal category set per facet from a marketplace sample.
///
/// Resolution never fails: when the sample fetch errors or returns nothing,
/// the versioned static distribution is used instead and the degradation is
/// logged. Results are cached because marketplace-wide statistics change
/// slowly.
pub struct MarketDistributionResolver {
    source: Arc<dyn MarketDataSource>,
    sample_size: usize,
    cache: crate::cache::TtlCache<(), IdealDistribution>,
}

impl MarketDistributionResolver {
    /// Default number of marketplace items sampled per resolution.
    pub const DEFAULT_SAMPLE_SIZE: usize = 1000;

    /// Default cache lifetime.
    pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

    /// Create a resolver with default sample size and cache TTL.
    pub fn new(source: Arc<dyn MarketDataSource>) -> Self {
        Self::with_limits(source, Self::DEFAULT_SAMPLE_SIZE, Self::DEFAULT_CACHE_TTL)
    }

    /// Create a resolver with explicit sample size and cache TTL.
    pub fn with_limits(
        source: Arc<dyn MarketDataSource>,
        sample_size: usize,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            source,
            sample_size,
            cache: crate::cache::TtlCache::new(cache_ttl),
        }
    }

    /// Resolve the current ideal distribution.
    pub async fn resolve(&self) -> IdealDistribution {
        if let Some(cached) = self.cache.get(&()) {
            debug!("market distribution cache hit");
            return cached;
        }

        let distribution = match self.source.fetch_market_sample(self.sample_size).await {
            Ok(sample) if !sample.is_empty() => {
                debug!(sample_len = sample.len(), "derived market distribution");
                IdealDistribution::from_sample(&sample)
            }
            Ok(_) => {
                warn!("market sample empty, using static default distribution");
                defaults::static_distribution()
            }
            Err(err) => {
                warn!(error = %err, "market sample fetch failed, using static default distribution");
                defaults::static_distribution()
            }
        };

        self.cache.put((), distribution.clone());
        distribution
    }
}
