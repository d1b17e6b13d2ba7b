//! Catalogue value type and owner metadata.

use serde::{Deserialize, Serialize};

use super::Item;

/// Kind of catalogue a creator presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogueType {
    Showcase,
    Portfolio,
    Exhibition,
    Collection,
    Series,
    Mixed,
}

impl CatalogueType {
    /// Baseline item count for this catalogue type, before experience
    /// adjustment. Used when no peer sample is available.
    pub fn base_size(&self) -> f64 {
        match self {
            CatalogueType::Showcase => 12.0,
            CatalogueType::Portfolio => 15.0,
            CatalogueType::Exhibition => 20.0,
            CatalogueType::Collection => 10.0,
            CatalogueType::Series => 8.0,
            CatalogueType::Mixed => 12.0,
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CatalogueType::Showcase => "Showcase",
            CatalogueType::Portfolio => "Portfolio",
            CatalogueType::Exhibition => "Exhibition",
            CatalogueType::Collection => "Collection",
            CatalogueType::Series => "Series",
            CatalogueType::Mixed => "Mixed",
        }
    }
}

/// Experience level of the catalogue owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    /// Size multiplier applied to the catalogue-type baseline. More
    /// experienced creators sustain larger catalogues.
    pub fn size_multiplier(&self) -> f64 {
        match self {
            ExperienceLevel::Beginner => 0.8,
            ExperienceLevel::Intermediate => 1.0,
            ExperienceLevel::Advanced => 1.2,
            ExperienceLevel::Expert => 1.4,
        }
    }
}

/// An ordered collection of items owned by one creator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogue {
    /// Unique identifier.
    pub id: String,

    /// Kind of catalogue.
    #[serde(rename = "type")]
    pub catalogue_type: CatalogueType,

    /// Owning creator.
    pub owner_id: String,

    /// Owner's experience level.
    #[serde(default)]
    pub owner_experience: ExperienceLevel,

    /// Items in presentation order.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Catalogue {
    /// Create an empty catalogue.
    pub fn new(
        id: impl Into<String>,
        catalogue_type: CatalogueType,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            catalogue_type,
            owner_id: owner_id.into(),
            owner_experience: ExperienceLevel::default(),
            items: Vec::new(),
        }
    }

    /// Set the owner's experience level.
    pub fn with_experience(mut self, level: ExperienceLevel) -> Self {
        self.owner_experience = level;
        self
    }

    /// Set the items, assigning positions in list order.
    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items = items
            .into_iter()
            .enumerate()
            .map(|(position, item)| item.at_position(position))
            .collect();
        self
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Ids of all items, in order.
    pub fn item_ids(&self) -> Vec<String> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }
}
