//! Collaborator interfaces for catalogue and market data.
//!
//! The engine owns no storage; it reads catalogues, inventories, peer
//! statistics, and market samples through these traits. Implementations
//! must be thread-safe (`Send + Sync`) so one engine instance can serve
//! concurrent analyses.

mod memory;

use async_trait::async_trait;

use crate::catalogue::{Catalogue, CatalogueType, Item};
use crate::error::Result;
use crate::market::MarketItem;

pub use memory::{InMemoryMarket, InMemoryStore};

/// Source of catalogues, owner inventories, and peer statistics.
#[async_trait]
pub trait CatalogueStore: Send + Sync {
    /// Fetch a catalogue with its items, facet fields, and positions.
    ///
    /// Returns [`crate::CurioError::CatalogueNotFound`] when the id is
    /// unknown; this is the one fetch whose failure aborts an analysis.
    async fn fetch_catalogue(&self, catalogue_id: &str) -> Result<Catalogue>;

    /// Fetch items owned by `owner_id` that are not in `exclude_ids`.
    /// These are the candidates for gap-filling and growth
    /// recommendations.
    async fn fetch_owner_available_items(
        &self,
        owner_id: &str,
        exclude_ids: &[String],
    ) -> Result<Vec<Item>>;

    /// Fetch the item counts of other catalogues of the same type.
    async fn fetch_peer_catalogue_sizes(
        &self,
        catalogue_type: CatalogueType,
    ) -> Result<Vec<usize>>;
}

/// Source of marketplace-wide facet samples.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Fetch the facet values of up to `limit` marketplace items.
    async fn fetch_market_sample(&self, limit: usize) -> Result<Vec<MarketItem>>;
}
