//! Recommendation types and synthesis.

mod generator;
mod recommendation;

pub use generator::{GenerateOptions, RecommendationEngine};
pub use recommendation::{
    PositionChange, Priority, Recommendation, RecommendationType, SuggestedItem,
    sort_recommendations,
};
