//! Item value type and dimension parsing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::facet::SizeCategory;

/// Pattern for `W x H` dimension strings. Case and whitespace insensitive,
/// accepts `x` or `×`, tolerates trailing unit text ("24 x 36 in").
static DIMENSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*[x×]\s*([0-9]+(?:\.[0-9]+)?)").unwrap()
});

/// Physical dimensions of an item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Create dimensions from a width/height pair.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Parse a raw dimension string like `"24 x 36"` or `"120×80 cm"`.
    ///
    /// Returns `None` when no `W x H` pattern is found. Malformed strings
    /// are not an error; the item simply carries no size evidence.
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = DIMENSION_PATTERN.captures(raw)?;
        let width = caps[1].parse().ok()?;
        let height = caps[2].parse().ok()?;
        Some(Self { width, height })
    }

    /// Surface area, width × height.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Size category derived from the area.
    pub fn size_category(&self) -> SizeCategory {
        SizeCategory::from_area(self.area())
    }
}

impl<'de> Deserialize<'de> for Dimensions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Pair { width: f64, height: f64 },
            Raw(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Pair { width, height } => Ok(Dimensions { width, height }),
            Repr::Raw(raw) => Dimensions::parse(&raw).ok_or_else(|| {
                serde::de::Error::custom(format!("unparseable dimension string '{raw}'"))
            }),
        }
    }
}

/// Deserialize an optional dimension field, mapping unparseable raw strings
/// to `None` instead of failing the whole item. Parsing happens once here,
/// at the ingestion boundary.
pub(crate) fn deserialize_opt_dimensions<'de, D>(
    deserializer: D,
) -> Result<Option<Dimensions>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Pair { width: f64, height: f64 },
        Raw(String),
    }

    Ok(match Option::<Repr>::deserialize(deserializer)? {
        Some(Repr::Pair { width, height }) => Some(Dimensions { width, height }),
        Some(Repr::Raw(raw)) => Dimensions::parse(&raw),
        None => None,
    })
}

/// Engagement counters for an item. All default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementStats {
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub inquiries: u64,
}

impl EngagementStats {
    /// Create counters from raw counts.
    pub fn new(views: u64, likes: u64, inquiries: u64) -> Self {
        Self {
            views,
            likes,
            inquiries,
        }
    }

    /// Weighted performance score used to pick removal candidates.
    /// Inquiries signal the strongest intent, views the weakest.
    pub fn performance_score(&self) -> f64 {
        self.views as f64 * 0.1 + self.likes as f64 * 0.3 + self.inquiries as f64 * 0.6
    }
}

/// A single item in a catalogue.
///
/// Identity and ordering are required; facet fields are optional, since
/// upstream records are loosely typed. An item missing a facet value simply
/// contributes no evidence to that facet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier.
    pub id: String,

    /// Medium category (e.g., "painting").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,

    /// Style or genre category (e.g., "abstract").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Listed price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Dominant colors. An item may carry several.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,

    /// Physical dimensions, parsed at ingestion.
    #[serde(default, deserialize_with = "deserialize_opt_dimensions")]
    pub dimensions: Option<Dimensions>,

    /// Order index within the catalogue.
    #[serde(default)]
    pub position: usize,

    /// Engagement counters.
    #[serde(default)]
    pub stats: EngagementStats,
}

impl Item {
    /// Create a new item with no facet values.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            medium: None,
            style: None,
            price: None,
            colors: Vec::new(),
            dimensions: None,
            position: 0,
            stats: EngagementStats::default(),
        }
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

    /// Set the price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the dominant colors.
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the dimensions.
    pub fn with_dimensions(mut self, width: f64, height: f64) -> Self {
        self.dimensions = Some(Dimensions::new(width, height));
        self
    }

    /// Set the position within the catalogue.
    pub fn at_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Set the engagement counters.
    pub fn with_stats(mut self, stats: EngagementStats) -> Self {
        self.stats = stats;
        self
    }

    /// Size category of this item, when its dimensions are known.
    pub fn size_category(&self) -> Option<SizeCategory> {
        self.dimensions.map(|d| d.size_category())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(Dimensions::parse("24 x 36"), Some(Dimensions::new(24.0, 36.0)));
        assert_eq!(Dimensions::parse("24X36"), Some(Dimensions::new(24.0, 36.0)));
        assert_eq!(
            Dimensions::parse("120 × 80 cm"),
            Some(Dimensions::new(120.0, 80.0))
        );
        assert_eq!(
            Dimensions::parse("8.5x11"),
            Some(Dimensions::new(8.5, 11.0))
        );
    }

    #[test]
    fn test_parse_dimensions_malformed() {
        assert_eq!(Dimensions::parse(""), None);
        assert_eq!(Dimensions::parse("large"), None);
        assert_eq!(Dimensions::parse("24 by 36"), None);
        assert_eq!(Dimensions::parse("x 36"), None);
    }

    #[test]
    fn test_size_category_from_dimensions() {
        assert_eq!(
            Dimensions::new(8.0, 10.0).size_category(),
            SizeCategory::Small
        );
        assert_eq!(
            Dimensions::new(18.0, 20.0).size_category(),
            SizeCategory::Medium
        );
        assert_eq!(
            Dimensions::new(24.0, 36.0).size_category(),
            SizeCategory::Large
        );
        assert_eq!(
            Dimensions::new(40.0, 60.0).size_category(),
            SizeCategory::ExtraLarge
        );
    }

    #[test]
    fn test_performance_score() {
        let stats = EngagementStats::new(100, 10, 5);
        assert!((stats.performance_score() - 16.0).abs() < 1e-9);
        assert_eq!(EngagementStats::default().performance_score(), 0.0);
    }

    #[test]
    fn test_item_builder() {
        let item = Item::new("art_001")
            .with_medium("painting")
            .with_style("abstract")
            .with_price(2500.0)
            .with_colors(["blue", "white"])
            .with_dimensions(24.0, 36.0)
            .at_position(3);

        assert_eq!(item.id, "art_001");
        assert_eq!(item.medium.as_deref(), Some("painting"));
        assert_eq!(item.price, Some(2500.0));
        assert_eq!(item.colors.len(), 2);
        assert_eq!(item.size_category(), Some(SizeCategory::Large));
        assert_eq!(item.position, 3);
    }

    #[test]
    fn test_item_deserialize_raw_dimension_string() {
        let item: Item = serde_json::from_str(
            r#"{"id": "a1", "medium": "print", "dimensions": "11 x 17", "position": 0}"#,
        )
        .unwrap();
        assert_eq!(item.dimensions, Some(Dimensions::new(11.0, 17.0)));
    }

    #[test]
    fn test_item_deserialize_unparseable_dimension_is_skipped() {
        let item: Item =
            serde_json::from_str(r#"{"id": "a1", "dimensions": "oversized"}"#).unwrap();
        assert_eq!(item.dimensions, None);
    }

    #[test]
    fn test_item_deserialize_dimension_pair() {
        let item: Item = serde_json::from_str(
            r#"{"id": "a1", "dimensions": {"width": 30, "height": 40}}"#,
        )
        .unwrap();
        assert_eq!(item.dimensions, Some(Dimensions::new(30.0, 40.0)));
    }
}
