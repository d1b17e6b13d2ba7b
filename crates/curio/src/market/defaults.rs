//! Static fallback distribution.
//!
//! Used when the market sample cannot be fetched or comes back empty. The
//! lists are fixed and versioned so degraded analyses stay deterministic
//! and comparable across releases.

use crate::facet::{PRICE_BUCKETS, SizeCategory};

use super::IdealDistribution;

/// Version of the static default distribution. Bump when any list changes.
pub const DEFAULT_DISTRIBUTION_VERSION: u32 = 1;

/// Default top mediums, most popular first.
pub const DEFAULT_MEDIUMS: [&str; 8] = [
    "painting",
    "photography",
    "sculpture",
    "digital",
    "print",
    "drawing",
    "mixed media",
    "textile",
];

/// Default top styles, most popular first.
pub const DEFAULT_STYLES: [&str; 6] = [
    "abstract",
    "contemporary",
    "minimalist",
    "impressionist",
    "realism",
    "surrealism",
];

/// Default top colors, most popular first.
pub const DEFAULT_COLORS: [&str; 8] = [
    "blue", "black", "white", "red", "green", "yellow", "orange", "purple",
];

/// Build the static fallback distribution.
pub fn static_distribution() -> IdealDistribution {
    IdealDistribution {
        mediums: DEFAULT_MEDIUMS.iter().map(|s| s.to_string()).collect(),
        styles: DEFAULT_STYLES.iter().map(|s| s.to_string()).collect(),
        price_ranges: PRICE_BUCKETS.iter().map(|s| s.to_string()).collect(),
        colors: DEFAULT_COLORS.iter().map(|s| s.to_string()).collect(),
        size_categories: SizeCategory::ALL
            .iter()
            .map(|c| c.as_str().to_string())
            .collect(),
        default_version: Some(DEFAULT_DISTRIBUTION_VERSION),
    }
}
