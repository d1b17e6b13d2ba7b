//! Curio: curation analysis and optimization engine for creator catalogues.
//!
//! Curio evaluates how well-composed a catalogue of artworks is along five
//! categorical facets (medium, style, price range, color, size), scores it
//! 0-100, and produces prioritized recommendations to improve it.
//!
//! # Core Principles
//!
//! - **Read-only**: the engine never mutates a catalogue; it recommends
//!   changes for a human or an automated actor to apply
//! - **Market-anchored**: "ideal" composition is derived from what is
//!   popular in the marketplace, with a versioned static fallback
//! - **Degradable**: only a missing target catalogue aborts an analysis;
//!   every other data source has a documented fallback
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use curio::{Curator, InMemoryMarket, InMemoryStore};
//!
//! # async fn run() -> curio::Result<()> {
//! let store = Arc::new(InMemoryStore::new());
//! let market = Arc::new(InMemoryMarket::new());
//!
//! let curator = Curator::new(store, market);
//! let analysis = curator.analyze_catalogue("cat_123").await?;
//!
//! println!("Score: {}", analysis.score);
//! println!("Recommendations: {}", analysis.recommendations.len());
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cache;
pub mod catalogue;
pub mod error;
pub mod facet;
pub mod market;
pub mod recommendation;
pub mod store;

mod curator;

pub use crate::curator::{AutoCurateOptions, CurationAnalysis, Curator, CuratorConfig};
pub use analysis::{Balance, GapSet, ImbalanceSet, SizeRange};
pub use catalogue::{Catalogue, CatalogueType, Dimensions, EngagementStats, ExperienceLevel, Item};
pub use error::{CurioError, Result};
pub use facet::{Facet, SizeCategory};
pub use market::{IdealDistribution, MarketDistributionResolver, MarketItem};
pub use recommendation::{Priority, Recommendation, RecommendationType};
pub use store::{CatalogueStore, InMemoryMarket, InMemoryStore, MarketDataSource};
