//! Dataset bundle loading.
//!
//! The CLI works from a single JSON document holding the catalogue under
//! analysis plus optional market, peer, and inventory data. The bundle
//! backs the in-memory collaborator implementations; the engine itself
//! defines no file format.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use curio::{Catalogue, Curator, InMemoryMarket, InMemoryStore, Item, MarketItem};

/// A self-contained analysis dataset.
///
/// ```json
/// {
///   "catalogue": { "id": "...", "type": "portfolio", "owner_id": "...", "items": [...] },
///   "market_sample": [ { "medium": "painting", "colors": ["blue"] } ],
///   "peer_sizes": [10, 12, 14],
///   "available_items": [ { "id": "...", "medium": "print" } ]
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct Dataset {
    pub catalogue: Catalogue,

    #[serde(default)]
    pub market_sample: Vec<MarketItem>,

    #[serde(default)]
    pub peer_sizes: Vec<usize>,

    #[serde(default)]
    pub available_items: Vec<Item>,
}

impl Dataset {
    /// Load a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Err(format!("File not found: {}", path.display()).into());
        }
        let reader = BufReader::new(File::open(path)?);
        let dataset: Dataset = serde_json::from_reader(reader)?;
        Ok(dataset)
    }

    /// Build a curator over this dataset. Returns the curator and the id
    /// of the catalogue to analyze.
    pub fn into_curator(self) -> (Curator, String) {
        let catalogue_id = self.catalogue.id.clone();
        let owner_id = self.catalogue.owner_id.clone();
        let catalogue_type = self.catalogue.catalogue_type;

        let store = InMemoryStore::new()
            .with_catalogue(self.catalogue)
            .with_inventory(owner_id, self.available_items)
            .with_peer_sizes(catalogue_type, self.peer_sizes);
        let market = InMemoryMarket::new().with_sample(self.market_sample);

        (
            Curator::new(Arc::new(store), Arc::new(market)),
            catalogue_id,
        )
    }
}
