//! Imbalance detection: over-represented categories.

use serde::{Deserialize, Serialize};

use crate::facet::Facet;

use super::Balance;

/// Per-facet lists of categories whose share of the catalogue exceeds the
/// facet's skew threshold. This is the single canonical definition of
/// imbalance; the scoring engine consumes it unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImbalanceSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mediums: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub price_ranges: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
}

impl ImbalanceSet {
    /// Flagged categories for a facet. Size has no skew threshold and is
    /// never flagged.
    pub fn for_facet(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Medium => &self.mediums,
            Facet::Style => &self.styles,
            Facet::PriceRange => &self.price_ranges,
            Facet::Color => &self.colors,
            Facet::SizeCategory => &[],
        }
    }

    /// Whether no facet has a flagged category.
    pub fn is_empty(&self) -> bool {
        self.mediums.is_empty()
            && self.styles.is_empty()
            && self.price_ranges.is_empty()
            && self.colors.is_empty()
    }
}

/// Flag categories whose proportion exceeds the facet threshold.
///
/// A facet with a zero total produces no flags.
pub fn detect_imbalance(balance: &Balance) -> ImbalanceSet {
    ImbalanceSet {
        mediums: flagged(balance, Facet::Medium),
        styles: flagged(balance, Facet::Style),
        price_ranges: flagged(balance, Facet::PriceRange),
        colors: flagged(balance, Facet::Color),
    }
}

fn flagged(balance: &Balance, facet: Facet) -> Vec<String> {
    let Some(threshold) = facet.skew_threshold() else {
        return Vec::new();
    };

    let counts = balance.for_facet(facet);
    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    counts
        .iter()
        .filter(|(_, count)| **count as f64 / total as f64 > threshold)
        .map(|(category, _)| category.clone())
        .collect()
}
