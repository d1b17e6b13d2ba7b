//! In-memory reference implementations of the collaborator traits.
//!
//! Used by tests, examples, and the CLI's dataset loader. Not intended
//! as a production storage layer.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::catalogue::{Catalogue, CatalogueType, Item};
use crate::error::{CurioError, Result};
use crate::market::MarketItem;

use super::{CatalogueStore, MarketDataSource};

/// In-memory catalogue store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    catalogues: HashMap<String, Catalogue>,
    inventories: HashMap<String, Vec<Item>>,
    peer_sizes: HashMap<CatalogueType, Vec<usize>>,
    fail_inventory: bool,
    fail_peers: bool,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a catalogue.
    pub fn with_catalogue(mut self, catalogue: Catalogue) -> Self {
        self.catalogues.insert(catalogue.id.clone(), catalogue);
        self
    }

    /// Set an owner's full inventory. Items already in a catalogue are
    /// filtered out per request via `exclude_ids`.
    pub fn with_inventory(
        mut self,
        owner_id: impl Into<String>,
        items: impl IntoIterator<Item = Item>,
    ) -> Self {
        self.inventories
            .insert(owner_id.into(), items.into_iter().collect());
        self
    }

    /// Set the peer catalogue sizes for a type.
    pub fn with_peer_sizes(
        mut self,
        catalogue_type: CatalogueType,
        sizes: impl IntoIterator<Item = usize>,
    ) -> Self {
        self.peer_sizes
            .insert(catalogue_type, sizes.into_iter().collect());
        self
    }

    /// Make inventory fetches fail, to exercise degraded analysis.
    pub fn with_failing_inventory(mut self) -> Self {
        self.fail_inventory = true;
        self
    }

    /// Make peer-size fetches fail, to exercise degraded analysis.
    pub fn with_failing_peer_sizes(mut self) -> Self {
        self.fail_peers = true;
        self
    }
}

#[async_trait]
impl CatalogueStore for InMemoryStore {
    async fn fetch_catalogue(&self, catalogue_id: &str) -> Result<Catalogue> {
        self.catalogues
            .get(catalogue_id)
            .cloned()
            .ok_or_else(|| CurioError::CatalogueNotFound(catalogue_id.to_string()))
    }

    async fn fetch_owner_available_items(
        &self,
        owner_id: &str,
        exclude_ids: &[String],
    ) -> Result<Vec<Item>> {
        if self.fail_inventory {
            return Err(CurioError::Store("inventory unavailable".into()));
        }
        Ok(self
            .inventories
            .get(owner_id)
            .map(|items| {
                items
                    .iter()
                    .filter(|item| !exclude_ids.contains(&item.id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn fetch_peer_catalogue_sizes(
        &self,
        catalogue_type: CatalogueType,
    ) -> Result<Vec<usize>> {
        if self.fail_peers {
            return Err(CurioError::Store("peer sizes unavailable".into()));
        }
        Ok(self
            .peer_sizes
            .get(&catalogue_type)
            .cloned()
            .unwrap_or_default())
    }
}

/// In-memory market data source.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarket {
    sample: Vec<MarketItem>,
    fail: bool,
}

impl InMemoryMarket {
    /// Create an empty market (resolution will use the static defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sample returned to the resolver.
    pub fn with_sample(mut self, sample: impl IntoIterator<Item = MarketItem>) -> Self {
        self.sample = sample.into_iter().collect();
        self
    }

    /// Make sample fetches fail, to exercise the static fallback.
    pub fn failing() -> Self {
        Self {
            sample: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl MarketDataSource for InMemoryMarket {
    async fn fetch_market_sample(&self, limit: usize) -> Result<Vec<MarketItem>> {
        if self.fail {
            return Err(CurioError::Store("market unavailable".into()));
        }
        Ok(self.sample.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_catalogue_is_not_found() {
        let store = InMemoryStore::new();
        let err = futures::executor::block_on(store.fetch_catalogue("nope")).unwrap_err();
        assert!(matches!(err, CurioError::CatalogueNotFound(_)));
    }

    #[test]
    fn test_inventory_respects_exclusions() {
        let store = InMemoryStore::new().with_inventory(
            "owner_1",
            [Item::new("a"), Item::new("b"), Item::new("c")],
        );

        let items = futures::executor::block_on(
            store.fetch_owner_available_items("owner_1", &["b".to_string()]),
        )
        .unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_unknown_owner_has_empty_inventory() {
        let store = InMemoryStore::new();
        let items =
            futures::executor::block_on(store.fetch_owner_available_items("ghost", &[])).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_market_sample_is_limited() {
        let market = InMemoryMarket::new()
            .with_sample((0..10).map(|_| MarketItem::new().with_medium("painting")));
        let sample = futures::executor::block_on(market.fetch_market_sample(3)).unwrap();
        assert_eq!(sample.len(), 3);
    }
}
