//! Gap analysis: ideal categories with no representation in a catalogue.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalogue::Item;
use crate::facet::{Facet, normalize_category, price_in_bucket};
use crate::market::IdealDistribution;

/// Per-facet lists of ideal categories absent from a catalogue.
///
/// Each list is a subsequence of the corresponding ideal list, in ideal
/// (popularity) order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mediums: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub price_ranges: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub size_categories: Vec<String>,
}

impl GapSet {
    /// Gap list for a facet.
    pub fn for_facet(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Medium => &self.mediums,
            Facet::Style => &self.styles,
            Facet::PriceRange => &self.price_ranges,
            Facet::Color => &self.colors,
            Facet::SizeCategory => &self.size_categories,
        }
    }

    /// Whether no facet has a gap.
    pub fn is_empty(&self) -> bool {
        Facet::ALL.iter().all(|f| self.for_facet(*f).is_empty())
    }
}

/// Compare a catalogue's present categories against the ideal distribution.
pub fn analyze_gaps(items: &[Item], ideal: &IdealDistribution) -> GapSet {
    let present_mediums: HashSet<String> = items
        .iter()
        .filter_map(|item| item.medium.as_deref())
        .map(normalize_category)
        .collect();

    let present_styles: HashSet<String> = items
        .iter()
        .filter_map(|item| item.style.as_deref())
        .map(normalize_category)
        .collect();

    let present_colors: HashSet<String> = items
        .iter()
        .flat_map(|item| item.colors.iter())
        .map(|c| normalize_category(c))
        .collect();

    // Unparseable dimensions contribute no size evidence.
    let present_sizes: HashSet<&str> = items
        .iter()
        .filter_map(|item| item.size_category())
        .map(|c| c.as_str())
        .collect();

    GapSet {
        mediums: missing(&ideal.mediums, &present_mediums),
        styles: missing(&ideal.styles, &present_styles),
        price_ranges: ideal
            .price_ranges
            .iter()
            .filter(|bucket| {
                !items
                    .iter()
                    .filter_map(|item| item.price)
                    .any(|price| price_in_bucket(price, bucket))
            })
            .cloned()
            .collect(),
        colors: missing(&ideal.colors, &present_colors),
        size_categories: ideal
            .size_categories
            .iter()
            .filter(|category| !present_sizes.contains(normalize_category(category).as_str()))
            .cloned()
            .collect(),
    }
}

/// Ideal categories not present, preserving ideal order.
fn missing(ideal: &[String], present: &HashSet<String>) -> Vec<String> {
    ideal
        .iter()
        .filter(|category| !present.contains(&normalize_category(category)))
        .cloned()
        .collect()
}
