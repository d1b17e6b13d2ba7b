//! Balance analysis: per-facet category histograms.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalogue::Item;
use crate::facet::{Facet, normalize_category, price_bucket};

/// Per-facet category counts over a catalogue's items.
///
/// Maps are insertion-ordered (first occurrence in item order), so
/// iteration and serialization are deterministic. An item contributes to
/// one bucket per facet, except color, where it counts once for each of
/// its distinct colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub mediums: IndexMap<String, usize>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub styles: IndexMap<String, usize>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub price_ranges: IndexMap<String, usize>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub colors: IndexMap<String, usize>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub size_categories: IndexMap<String, usize>,
}

impl Balance {
    /// Count map for a facet.
    pub fn for_facet(&self, facet: Facet) -> &IndexMap<String, usize> {
        match facet {
            Facet::Medium => &self.mediums,
            Facet::Style => &self.styles,
            Facet::PriceRange => &self.price_ranges,
            Facet::Color => &self.colors,
            Facet::SizeCategory => &self.size_categories,
        }
    }
}

/// Compute per-facet histograms for a catalogue's items.
pub fn analyze_balance(items: &[Item]) -> Balance {
    let mut balance = Balance::default();

    for item in items {
        if let Some(medium) = &item.medium {
            bump(&mut balance.mediums, medium);
        }
        if let Some(style) = &item.style {
            bump(&mut balance.styles, style);
        }
        if let Some(price) = item.price {
            bump(&mut balance.price_ranges, price_bucket(price));
        }
        let mut seen = Vec::new();
        for color in &item.colors {
            let key = normalize_category(color);
            if key.is_empty() || seen.contains(&key) {
                continue;
            }
            *balance.colors.entry(key.clone()).or_insert(0) += 1;
            seen.push(key);
        }
        if let Some(category) = item.size_category() {
            bump(&mut balance.size_categories, category.as_str());
        }
    }

    balance
}

fn bump(map: &mut IndexMap<String, usize>, value: &str) {
    let key = normalize_category(value);
    if key.is_empty() {
        return;
    }
    *map.entry(key).or_insert(0) += 1;
}
