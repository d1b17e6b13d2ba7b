//! Categorical facets and their bucketing rules.
//!
//! A facet is one dimension along which catalogue composition is analyzed.
//! Medium, style, and color are literal categories carried on each item;
//! price range and size category are bucketed from numeric inputs.

use serde::{Deserialize, Serialize};

/// A categorical dimension of catalogue composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Medium,
    Style,
    PriceRange,
    Color,
    SizeCategory,
}

impl Facet {
    /// All facets, in canonical order.
    pub const ALL: [Facet; 5] = [
        Facet::Medium,
        Facet::Style,
        Facet::PriceRange,
        Facet::Color,
        Facet::SizeCategory,
    ];

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Facet::Medium => "medium",
            Facet::Style => "style",
            Facet::PriceRange => "price range",
            Facet::Color => "color",
            Facet::SizeCategory => "size",
        }
    }

    /// Number of top-ranked market categories that make up the ideal
    /// distribution for this facet.
    pub fn ideal_count(&self) -> usize {
        match self {
            Facet::Medium | Facet::Color => 8,
            Facet::Style => 6,
            Facet::PriceRange => 4,
            Facet::SizeCategory => SizeCategory::ALL.len(),
        }
    }

    /// Skew threshold above which a category's share of the catalogue is
    /// flagged as imbalanced. Size has no skew threshold.
    pub fn skew_threshold(&self) -> Option<f64> {
        match self {
            Facet::Medium | Facet::Style => Some(0.4),
            Facet::PriceRange => Some(0.5),
            Facet::Color => Some(0.3),
            Facet::SizeCategory => None,
        }
    }
}

/// Physical size class, derived from a piece's area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl SizeCategory {
    /// All size categories, smallest first.
    pub const ALL: [SizeCategory; 4] = [
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::ExtraLarge,
    ];

    /// Classify an area (width × height) into a size category.
    pub fn from_area(area: f64) -> Self {
        if area < 100.0 {
            SizeCategory::Small
        } else if area < 400.0 {
            SizeCategory::Medium
        } else if area < 1000.0 {
            SizeCategory::Large
        } else {
            SizeCategory::ExtraLarge
        }
    }

    /// Canonical category string, as used in gap sets and balance maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeCategory::Small => "small",
            SizeCategory::Medium => "medium",
            SizeCategory::Large => "large",
            SizeCategory::ExtraLarge => "extra_large",
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SizeCategory::Small => "Small",
            SizeCategory::Medium => "Medium",
            SizeCategory::Large => "Large",
            SizeCategory::ExtraLarge => "Extra Large",
        }
    }
}

/// Canonical price bucket labels, ascending.
pub const PRICE_BUCKETS: [&str; 4] = ["0-1000", "1000-5000", "5000-10000", "10000+"];

/// Bucket a numeric price into its canonical label.
pub fn price_bucket(price: f64) -> &'static str {
    if price < 1000.0 {
        PRICE_BUCKETS[0]
    } else if price < 5000.0 {
        PRICE_BUCKETS[1]
    } else if price < 10_000.0 {
        PRICE_BUCKETS[2]
    } else {
        PRICE_BUCKETS[3]
    }
}

/// Whether a numeric price falls within a bucket label.
///
/// Labels of the form `lo-hi` cover `[lo, hi)`; `lo+` covers `[lo, ∞)`.
/// Labels that parse as neither are matched against the price's canonical
/// bucket instead.
pub fn price_in_bucket(price: f64, label: &str) -> bool {
    let label = label.trim();

    if let Some(lo) = label.strip_suffix('+') {
        if let Ok(lo) = lo.trim().parse::<f64>() {
            return price >= lo;
        }
    } else if let Some((lo, hi)) = label.split_once('-') {
        if let (Ok(lo), Ok(hi)) = (lo.trim().parse::<f64>(), hi.trim().parse::<f64>()) {
            return price >= lo && price < hi;
        }
    }

    normalize_category(label) == price_bucket(price)
}

/// Normalize a category value for counting and matching.
///
/// Category comparison is case-insensitive and ignores surrounding
/// whitespace throughout the engine.
pub fn normalize_category(value: &str) -> String {
    value.trim().to_lowercase()
}
