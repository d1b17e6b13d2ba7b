//! Compositional analysis: gaps, balance, imbalance, size, scoring.
//!
//! Everything here is a pure function over catalogue items and market
//! data. The façade fetches inputs; these modules never perform I/O.

mod balance;
mod gap;
mod imbalance;
mod scoring;
mod size;

pub use balance::{Balance, analyze_balance};
pub use gap::{GapSet, analyze_gaps};
pub use imbalance::{ImbalanceSet, detect_imbalance};
pub use scoring::curation_score;
pub use size::{MAX_CATALOGUE_SIZE, MIN_CATALOGUE_SIZE, SizeRange, optimal_range};
