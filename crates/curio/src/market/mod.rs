//! Market distribution resolution.
//!
//! The "ideal" composition of a catalogue is defined by what is popular in
//! the marketplace: the top-N categories per facet over a bounded sample of
//! market items. When no sample is available, a fixed, versioned default
//! takes its place.

pub mod defaults;

mod distribution;
mod resolver;

pub use defaults::{
    DEFAULT_COLORS, DEFAULT_DISTRIBUTION_VERSION, DEFAULT_MEDIUMS, DEFAULT_STYLES,
};
pub use distribution::{IdealDistribution, MarketItem};
pub use resolver::MarketDistributionResolver;
