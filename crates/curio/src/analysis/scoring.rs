//! Curation score: a single 0–100 quality metric.

use super::{GapSet, ImbalanceSet};

/// Penalty per missing ideal medium.
pub const MEDIUM_GAP_PENALTY: i32 = 5;
/// Penalty per missing ideal price bucket.
pub const PRICE_GAP_PENALTY: i32 = 3;
/// Penalty per missing ideal style.
pub const STYLE_GAP_PENALTY: i32 = 4;
/// Penalty per missing ideal color.
pub const COLOR_GAP_PENALTY: i32 = 2;
/// Penalty per over-represented medium category.
pub const MEDIUM_IMBALANCE_PENALTY: i32 = 3;
/// Penalty per item short of the minimum viable count of 5.
pub const UNDERSIZE_PENALTY: i32 = 10;

/// Fold gaps, imbalance, and size deviation into a 0–100 score.
///
/// The imbalance penalty counts the medium categories flagged by the
/// detector, so a single skew threshold (0.4 for mediums) governs both
/// flagging and scoring.
pub fn curation_score(gaps: &GapSet, imbalance: &ImbalanceSet, item_count: usize) -> u8 {
    let mut score = 100i32;

    score -= MEDIUM_GAP_PENALTY * gaps.mediums.len() as i32;
    score -= PRICE_GAP_PENALTY * gaps.price_ranges.len() as i32;
    score -= STYLE_GAP_PENALTY * gaps.styles.len() as i32;
    score -= COLOR_GAP_PENALTY * gaps.colors.len() as i32;
    score -= MEDIUM_IMBALANCE_PENALTY * imbalance.mediums.len() as i32;
    score -= UNDERSIZE_PENALTY * (5 - item_count as i32).max(0);

    score.clamp(0, 100) as u8
}
