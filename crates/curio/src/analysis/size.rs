//! Catalogue size optimization.

use serde::{Deserialize, Serialize};

use crate::catalogue::{CatalogueType, ExperienceLevel};

/// Global floor for catalogue size recommendations.
pub const MIN_CATALOGUE_SIZE: usize = 6;

/// Global ceiling for catalogue size recommendations.
pub const MAX_CATALOGUE_SIZE: usize = 25;

/// Recommended item-count range for a catalogue.
///
/// Always satisfies `6 ≤ min ≤ ideal ≤ max ≤ 25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: usize,
    pub max: usize,
    pub ideal: usize,
}

impl SizeRange {
    /// Build a range from raw bounds, restoring the ordering and global
    /// clamp invariants.
    fn normalized(min: usize, max: usize, ideal: usize) -> Self {
        let min = min.clamp(MIN_CATALOGUE_SIZE, MAX_CATALOGUE_SIZE);
        let max = max.clamp(min, MAX_CATALOGUE_SIZE);
        let ideal = ideal.clamp(min, max);
        Self { min, max, ideal }
    }

    /// Whether an item count falls within the range.
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }

    /// Cap the upper bound (and ideal, if needed) at `limit`.
    pub fn capped_at(self, limit: usize) -> Self {
        let max = self.max.min(limit.max(MIN_CATALOGUE_SIZE));
        Self::normalized(self.min.min(max), max, self.ideal)
    }
}

/// Compute the ideal item-count range.
///
/// With at least one peer catalogue of the same type, the range derives
/// from the peer mean; otherwise from a per-type baseline adjusted by the
/// owner's experience level.
pub fn optimal_range(
    catalogue_type: CatalogueType,
    experience: ExperienceLevel,
    peer_sizes: &[usize],
) -> SizeRange {
    if peer_sizes.is_empty() {
        let target = catalogue_type.base_size() * experience.size_multiplier();
        return SizeRange::normalized(
            (target * 0.8).floor().max(MIN_CATALOGUE_SIZE as f64) as usize,
            (target * 1.2).ceil().min(MAX_CATALOGUE_SIZE as f64) as usize,
            target.round() as usize,
        );
    }

    let avg = peer_sizes.iter().sum::<usize>() as f64 / peer_sizes.len() as f64;
    SizeRange::normalized(
        (avg * 0.7).floor().max(MIN_CATALOGUE_SIZE as f64) as usize,
        (avg * 1.3).ceil().min(MAX_CATALOGUE_SIZE as f64) as usize,
        avg.round() as usize,
    )
}
