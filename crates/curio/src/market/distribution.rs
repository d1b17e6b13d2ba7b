//! Ideal category distributions derived from market samples.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::facet::{Facet, SizeCategory, normalize_category};

/// Facet values of one marketplace item, as returned by the market data
/// collaborator. Fields are optional because marketplace records are
/// loosely typed; the price range arrives already bucketed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
}

impl MarketItem {
    /// Create an empty market item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the medium.
    pub fn with_medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = Some(medium.into());
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the price range bucket.
    pub fn with_price_range(mut self, range: impl Into<String>) -> Self {
        self.price_range = Some(range.into());
        self
    }

    /// Set the colors.
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }
}

/// Per-facet lists of the most popular market categories, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdealDistribution {
    pub mediums: Vec<String>,
    pub styles: Vec<String>,
    pub price_ranges: Vec<String>,
    pub colors: Vec<String>,
    pub size_categories: Vec<String>,

    /// Version of the static defaults, set only when the fallback was used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_version: Option<u32>,
}

impl IdealDistribution {
    /// Derive a distribution from a market sample.
    ///
    /// Categories are ranked by frequency, descending; ties resolve to
    /// first-seen order in the sample. Market samples carry no dimension
    /// data, so the size-category list is always the full static domain.
    pub fn from_sample(sample: &[MarketItem]) -> Self {
        let mut mediums = FrequencyCounter::new();
        let mut styles = FrequencyCounter::new();
        let mut price_ranges = FrequencyCounter::new();
        let mut colors = FrequencyCounter::new();

        for entry in sample {
            if let Some(medium) = &entry.medium {
                mediums.add(medium);
            }
            if let Some(style) = &entry.style {
                styles.add(style);
            }
            if let Some(range) = &entry.price_range {
                price_ranges.add(range);
            }
            let mut seen = Vec::new();
            for color in &entry.colors {
                let key = normalize_category(color);
                if !seen.contains(&key) {
                    colors.add(color);
                    seen.push(key);
                }
            }
        }

        Self {
            mediums: mediums.top(Facet::Medium.ideal_count()),
            styles: styles.top(Facet::Style.ideal_count()),
            price_ranges: price_ranges.top(Facet::PriceRange.ideal_count()),
            colors: colors.top(Facet::Color.ideal_count()),
            size_categories: SizeCategory::ALL
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
            default_version: None,
        }
    }

    /// Ideal category list for a facet.
    pub fn for_facet(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Medium => &self.mediums,
            Facet::Style => &self.styles,
            Facet::PriceRange => &self.price_ranges,
            Facet::Color => &self.colors,
            Facet::SizeCategory => &self.size_categories,
        }
    }
}

/// Insertion-ordered frequency counter, so that equal counts rank in
/// first-seen order.
struct FrequencyCounter {
    counts: IndexMap<String, usize>,
}

impl FrequencyCounter {
    fn new() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }

    fn add(&mut self, value: &str) {
        let key = normalize_category(value);
        if key.is_empty() {
            return;
        }
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Top `n` categories by count, descending. The sort is stable over
    /// insertion order, which resolves ties deterministically.
    fn top(mut self, n: usize) -> Vec<String> {
        self.counts
            .sort_by(|_, a, _, b| b.cmp(a));
        self.counts.into_keys().take(n).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry(medium: &str) -> MarketItem {
        MarketItem::new().with_medium(medium)
    }

    #[test]
    fn test_ranking_by_frequency() {
        let sample = vec![
            sample_entry("print"),
            sample_entry("painting"),
            sample_entry("painting"),
            sample_entry("sculpture"),
            sample_entry("painting"),
            sample_entry("sculpture"),
        ];

        let dist = IdealDistribution::from_sample(&sample);
        assert_eq!(dist.mediums, vec!["painting", "sculpture", "print"]);
    }

    #[test]
    fn test_ties_resolve_to_first_seen_order() {
        let sample = vec![
            sample_entry("drawing"),
            sample_entry("textile"),
            sample_entry("drawing"),
            sample_entry("textile"),
        ];

        let dist = IdealDistribution::from_sample(&sample);
        assert_eq!(dist.mediums, vec!["drawing", "textile"]);
    }

    #[test]
    fn test_top_n_truncation() {
        let sample: Vec<MarketItem> = (0..12)
            .flat_map(|i| {
                // medium_00 appears 12 times, medium_01 11 times, ...
                (i..12).map(move |_| sample_entry(&format!("medium_{i:02}")))
            })
            .collect();

        let dist = IdealDistribution::from_sample(&sample);
        assert_eq!(dist.mediums.len(), Facet::Medium.ideal_count());
        assert_eq!(dist.mediums[0], "medium_00");
    }

    #[test]
    fn test_counting_is_case_insensitive() {
        let sample = vec![
            sample_entry("Painting"),
            sample_entry("painting"),
            sample_entry("PAINTING"),
            sample_entry("print"),
        ];

        let dist = IdealDistribution::from_sample(&sample);
        assert_eq!(dist.mediums, vec!["painting", "print"]);
    }

    #[test]
    fn test_item_colors_count_once_each() {
        let sample = vec![
            MarketItem::new().with_colors(["blue", "Blue", "red"]),
            MarketItem::new().with_colors(["red"]),
        ];

        let dist = IdealDistribution::from_sample(&sample);
        // red: 2, blue: 1 (the duplicate within one entry is ignored)
        assert_eq!(dist.colors, vec!["red", "blue"]);
    }

    #[test]
    fn test_size_categories_are_static() {
        let dist = IdealDistribution::from_sample(&[]);
        assert_eq!(
            dist.size_categories,
            vec!["small", "medium", "large", "extra_large"]
        );
    }
}
