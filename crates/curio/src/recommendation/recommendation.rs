//! Recommendation types for catalogue improvements.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of change a recommendation proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    /// Add items to the catalogue.
    AddArtwork,
    /// Remove items from the catalogue.
    RemoveArtwork,
    /// Move items to new positions.
    Reorder,
    /// Keep the catalogue as-is.
    Maintain,
}

impl RecommendationType {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationType::AddArtwork => "Add Artwork",
            RecommendationType::RemoveArtwork => "Remove Artwork",
            RecommendationType::Reorder => "Reorder",
            RecommendationType::Maintain => "Maintain",
        }
    }
}

/// Urgency of a recommendation. Declaration order is sort order: high
/// priority recommendations surface first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// A candidate item attached to an add/remove recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedItem {
    /// Id of the candidate item.
    pub item_id: String,
    /// Why this item was selected.
    pub reason: String,
}

impl SuggestedItem {
    /// Create a suggested item.
    pub fn new(item_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            reason: reason.into(),
        }
    }
}

/// A proposed move of one item to a new position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionChange {
    /// Id of the item to move.
    pub item_id: String,
    /// Where the item sits today.
    pub current_position: usize,
    /// Proposed position, always within `[0, item_count - 1]`.
    pub suggested_position: usize,
    /// Why the move helps.
    pub reason: String,
}

/// A prioritized, actionable recommendation for a catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Unique identifier for this recommendation.
    pub id: String,

    /// Kind of change proposed.
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,

    /// Urgency.
    pub priority: Priority,

    /// Short headline.
    pub title: String,

    /// What to do.
    pub description: String,

    /// Why it matters.
    pub reason: String,

    /// Estimated effect on catalogue quality (0–100).
    pub impact: u8,

    /// Candidate items to add or remove.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_items: Vec<SuggestedItem>,

    /// Proposed position moves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub position_changes: Vec<PositionChange>,

    /// When this recommendation was generated.
    pub generated_at: DateTime<Utc>,
}

impl Recommendation {
    /// Create a new recommendation.
    pub fn new(
        recommendation_type: RecommendationType,
        priority: Priority,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: generate_recommendation_id(),
            recommendation_type,
            priority,
            title: title.into(),
            description: String::new(),
            reason: String::new(),
            impact: 0,
            suggested_items: Vec::new(),
            position_changes: Vec::new(),
            generated_at: Utc::now(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Set the impact estimate.
    pub fn with_impact(mut self, impact: u8) -> Self {
        self.impact = impact.min(100);
        self
    }

    /// Set the suggested items.
    pub fn with_suggested_items(mut self, items: Vec<SuggestedItem>) -> Self {
        self.suggested_items = items;
        self
    }

    /// Set the position changes.
    pub fn with_position_changes(mut self, changes: Vec<PositionChange>) -> Self {
        self.position_changes = changes;
        self
    }
}

/// Generate a unique recommendation ID.
fn generate_recommendation_id() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    format!("rec_{:03}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Stable-sort recommendations by priority (high first), then by
/// descending impact.
pub fn sort_recommendations(recommendations: &mut [Recommendation]) {
    recommendations.sort_by_key(|r| (r.priority, std::cmp::Reverse(r.impact)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_recommendation() {
        let rec = Recommendation::new(
            RecommendationType::AddArtwork,
            Priority::High,
            "Add medium variety",
        )
        .with_reason("Popular mediums are missing")
        .with_impact(30)
        .with_suggested_items(vec![SuggestedItem::new("art_1", "fills print gap")]);

        assert!(rec.id.starts_with("rec_"));
        assert_eq!(rec.recommendation_type, RecommendationType::AddArtwork);
        assert_eq!(rec.impact, 30);
        assert_eq!(rec.suggested_items.len(), 1);
    }

    #[test]
    fn test_impact_is_clamped() {
        let rec = Recommendation::new(RecommendationType::Maintain, Priority::Low, "t")
            .with_impact(250);
        assert_eq!(rec.impact, 100);
    }

    #[test]
    fn test_priority_sort_order() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
    }

    #[test]
    fn test_sort_by_priority_then_impact() {
        let mut recs = vec![
            Recommendation::new(RecommendationType::Maintain, Priority::Low, "a").with_impact(0),
            Recommendation::new(RecommendationType::AddArtwork, Priority::Medium, "b")
                .with_impact(20),
            Recommendation::new(RecommendationType::AddArtwork, Priority::High, "c")
                .with_impact(30),
            Recommendation::new(RecommendationType::AddArtwork, Priority::Medium, "d")
                .with_impact(25),
        ];

        sort_recommendations(&mut recs);
        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "d", "b", "a"]);
    }

    #[test]
    fn test_type_serializes_as_type_field() {
        let rec = Recommendation::new(RecommendationType::RemoveArtwork, Priority::Medium, "t");
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "remove_artwork");
        assert_eq!(json["priority"], "medium");
    }
}
