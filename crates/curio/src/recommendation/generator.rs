//! Recommendation synthesis from gap, imbalance, and size findings.

use crate::analysis::{GapSet, ImbalanceSet, SizeRange};
use crate::catalogue::{Catalogue, Item};
use crate::facet::{Facet, normalize_category, price_bucket};

use super::{
    PositionChange, Priority, Recommendation, RecommendationType, SuggestedItem,
    sort_recommendations,
};

/// Maximum candidate items attached to a gap-filling recommendation.
const GAP_CANDIDATE_LIMIT: usize = 5;

/// Maximum candidate items attached to a size-growth recommendation.
const SIZE_CANDIDATE_LIMIT: usize = 10;

/// Priority and impact of every reorder recommendation.
const REORDER_PRIORITY: Priority = Priority::Medium;
const REORDER_IMPACT: u8 = 20;

/// Which recommendation groups to generate.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    /// Emit gap-filling `add_artwork` recommendations.
    pub fill_gaps: bool,
    /// Emit `reorder` recommendations for imbalanced categories.
    pub balance_distribution: bool,
    /// Emit size (`add`/`remove`/`maintain`) recommendations.
    pub size: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            fill_gaps: true,
            balance_distribution: true,
            size: true,
        }
    }
}

/// Synthesizes typed, prioritized recommendations from analysis results.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Generate all recommendation groups and sort them.
    ///
    /// `pool` is the owner's inventory of items not currently in the
    /// catalogue; when present it supplies concrete candidates for
    /// gap-filling and size-growth recommendations. The recommendation
    /// set and its priorities are the same either way.
    pub fn generate(
        catalogue: &Catalogue,
        gaps: &GapSet,
        imbalance: &ImbalanceSet,
        size_range: &SizeRange,
        pool: Option<&[Item]>,
    ) -> Vec<Recommendation> {
        Self::generate_with(
            catalogue,
            gaps,
            imbalance,
            size_range,
            pool,
            GenerateOptions::default(),
        )
    }

    /// Generate only the requested recommendation groups.
    pub fn generate_with(
        catalogue: &Catalogue,
        gaps: &GapSet,
        imbalance: &ImbalanceSet,
        size_range: &SizeRange,
        pool: Option<&[Item]>,
        options: GenerateOptions,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if options.fill_gaps {
            recommendations.extend(Self::gap_recommendations(gaps, pool));
        }
        if options.balance_distribution {
            recommendations.extend(Self::reorder_recommendations(catalogue, imbalance));
        }
        if options.size {
            recommendations.push(Self::size_recommendation(catalogue, size_range, pool));
        }

        sort_recommendations(&mut recommendations);
        recommendations
    }

    /// Gap-filling recommendations, one per facet with missing categories.
    fn gap_recommendations(gaps: &GapSet, pool: Option<&[Item]>) -> Vec<Recommendation> {
        Facet::ALL
            .iter()
            .filter_map(|facet| {
                let (priority, impact) = gap_priority_impact(*facet)?;
                let missing = gaps.for_facet(*facet);
                if missing.is_empty() {
                    return None;
                }

                let candidates: Vec<SuggestedItem> = pool
                    .unwrap_or(&[])
                    .iter()
                    .filter_map(|item| {
                        matched_gap(item, *facet, missing)
                            .map(|category| {
                                SuggestedItem::new(&item.id, format!("fills {category} gap"))
                            })
                    })
                    .take(GAP_CANDIDATE_LIMIT)
                    .collect();

                Some(
                    Recommendation::new(RecommendationType::AddArtwork, priority, gap_title(*facet))
                        .with_description(format!(
                            "Popular {} categories missing from this catalogue: {}.",
                            facet.label(),
                            missing.join(", ")
                        ))
                        .with_reason(format!(
                            "{} of the market's top {} categories are unrepresented",
                            missing.len(),
                            facet.label()
                        ))
                        .with_impact(impact)
                        .with_suggested_items(candidates),
                )
            })
            .collect()
    }

    /// Reorder recommendations, one per imbalanced facet category with more
    /// than two contributing items.
    fn reorder_recommendations(
        catalogue: &Catalogue,
        imbalance: &ImbalanceSet,
    ) -> Vec<Recommendation> {
        let item_count = catalogue.item_count();
        let mut recommendations = Vec::new();

        for facet in [Facet::Medium, Facet::Style, Facet::PriceRange, Facet::Color] {
            for category in imbalance.for_facet(facet) {
                let group: Vec<&Item> = catalogue
                    .items
                    .iter()
                    .filter(|item| item_in_category(item, facet, category))
                    .collect();
                if group.len() <= 2 {
                    continue;
                }

                // Items beyond the first two encountered get spread through
                // the catalogue.
                let excess = &group[2..];
                let raw_targets: Vec<usize> = excess
                    .iter()
                    .enumerate()
                    .map(|(k, _)| raw_target(facet, item_count, excess.len(), k))
                    .collect();

                let reason = format!("spreads out {category} pieces");
                let changes = normalize_changes(excess, &raw_targets, item_count, &reason);
                if changes.is_empty() {
                    continue;
                }

                recommendations.push(
                    Recommendation::new(
                        RecommendationType::Reorder,
                        REORDER_PRIORITY,
                        format!("Rebalance {category} placement"),
                    )
                    .with_description(format!(
                        "{} of {} items share the {} '{}'. Spacing them out gives the catalogue a more varied flow.",
                        group.len(),
                        item_count,
                        facet.label(),
                        category
                    ))
                    .with_reason(format!(
                        "'{category}' exceeds the {} concentration threshold",
                        facet.label()
                    ))
                    .with_impact(REORDER_IMPACT)
                    .with_position_changes(changes),
                );
            }
        }

        recommendations
    }

    /// Size recommendation: grow, trim, or maintain.
    fn size_recommendation(
        catalogue: &Catalogue,
        size_range: &SizeRange,
        pool: Option<&[Item]>,
    ) -> Recommendation {
        let current = catalogue.item_count();

        if current < size_range.min {
            let needed = size_range.min - current;
            let candidates: Vec<SuggestedItem> = pool
                .unwrap_or(&[])
                .iter()
                .take(needed.min(SIZE_CANDIDATE_LIMIT))
                .map(|item| SuggestedItem::new(&item.id, "adds to reach optimal size"))
                .collect();

            return Recommendation::new(
                RecommendationType::AddArtwork,
                Priority::High,
                "Grow the catalogue",
            )
            .with_description(format!(
                "Add {needed} more item(s). Catalogues of this type do best with {}-{} items (ideally {}).",
                size_range.min, size_range.max, size_range.ideal
            ))
            .with_reason(format!(
                "{current} items is below the recommended minimum of {}",
                size_range.min
            ))
            .with_impact(40)
            .with_suggested_items(candidates);
        }

        if current > size_range.max {
            let surplus = current - size_range.max;
            let mut ranked: Vec<&Item> = catalogue.items.iter().collect();
            ranked.sort_by(|a, b| {
                a.stats
                    .performance_score()
                    .total_cmp(&b.stats.performance_score())
            });
            let candidates: Vec<SuggestedItem> = ranked
                .iter()
                .take(surplus)
                .map(|item| {
                    SuggestedItem::new(
                        &item.id,
                        format!(
                            "lowest engagement (score {:.1})",
                            item.stats.performance_score()
                        ),
                    )
                })
                .collect();

            return Recommendation::new(
                RecommendationType::RemoveArtwork,
                Priority::Medium,
                "Trim the catalogue",
            )
            .with_description(format!(
                "Remove {surplus} item(s). Catalogues of this type do best with {}-{} items (ideally {}).",
                size_range.min, size_range.max, size_range.ideal
            ))
            .with_reason(format!(
                "{current} items is above the recommended maximum of {}",
                size_range.max
            ))
            .with_impact(30)
            .with_suggested_items(candidates);
        }

        Recommendation::new(
            RecommendationType::Maintain,
            Priority::Low,
            "Catalogue size is on target",
        )
        .with_description(format!(
            "{current} items sits within the recommended {}-{} range.",
            size_range.min, size_range.max
        ))
        .with_reason("no size change needed")
        .with_impact(0)
    }
}

/// Gap-recommendation priority/impact table. The price-range facet is
/// scored but gets no gap-filling recommendation.
fn gap_priority_impact(facet: Facet) -> Option<(Priority, u8)> {
    match facet {
        Facet::Medium => Some((Priority::High, 30)),
        Facet::Style => Some((Priority::Medium, 25)),
        Facet::SizeCategory => Some((Priority::Medium, 20)),
        Facet::Color => Some((Priority::Low, 15)),
        Facet::PriceRange => None,
    }
}

/// Headline for a gap-filling recommendation.
fn gap_title(facet: Facet) -> &'static str {
    match facet {
        Facet::Medium => "Add more mediums",
        Facet::Style => "Broaden style coverage",
        Facet::Color => "Expand the color palette",
        Facet::SizeCategory => "Vary artwork sizes",
        Facet::PriceRange => "Cover more price ranges",
    }
}

/// The gap category a pool item would fill, if any.
fn matched_gap<'a>(item: &Item, facet: Facet, missing: &'a [String]) -> Option<&'a String> {
    match facet {
        Facet::Medium => {
            let value = normalize_category(item.medium.as_deref()?);
            missing.iter().find(|m| normalize_category(m) == value)
        }
        Facet::Style => {
            let value = normalize_category(item.style.as_deref()?);
            missing.iter().find(|m| normalize_category(m) == value)
        }
        Facet::Color => {
            let colors: Vec<String> = item.colors.iter().map(|c| normalize_category(c)).collect();
            missing
                .iter()
                .find(|m| colors.contains(&normalize_category(m)))
        }
        Facet::SizeCategory => {
            let value = item.size_category()?.as_str();
            missing.iter().find(|m| normalize_category(m) == value)
        }
        Facet::PriceRange => None,
    }
}

/// Whether an item belongs to a facet category, for reorder grouping.
fn item_in_category(item: &Item, facet: Facet, category: &str) -> bool {
    match facet {
        Facet::Medium => item
            .medium
            .as_deref()
            .is_some_and(|m| normalize_category(m) == category),
        Facet::Style => item
            .style
            .as_deref()
            .is_some_and(|s| normalize_category(s) == category),
        Facet::PriceRange => item.price.is_some_and(|p| price_bucket(p) == category),
        Facet::Color => item
            .colors
            .iter()
            .any(|c| normalize_category(c) == category),
        Facet::SizeCategory => false,
    }
}

/// Raw target position for the k-th excess item of a group.
fn raw_target(facet: Facet, item_count: usize, group_size: usize, k: usize) -> usize {
    match facet {
        Facet::Medium => item_count / 2 + k,
        Facet::PriceRange => item_count / 3 + k,
        // Evenly space the group through the catalogue.
        Facet::Style | Facet::Color => (item_count / (group_size + 1)) * (k + 1),
        Facet::SizeCategory => 0,
    }
}

/// Clamp raw targets into range, resolve duplicates by probing forward to
/// the next free slot (wrapping), and drop moves that land on the item's
/// current position. The result is always in `[0, item_count - 1]` with
/// pairwise-distinct targets.
fn normalize_changes(
    excess: &[&Item],
    raw_targets: &[usize],
    item_count: usize,
    reason: &str,
) -> Vec<PositionChange> {
    if item_count == 0 {
        return Vec::new();
    }

    let mut taken = vec![false; item_count];
    let mut changes = Vec::new();

    for (&item, &raw) in excess.iter().zip(raw_targets.iter()) {
        let mut target = raw.min(item_count - 1);
        let mut probed = 0;
        while taken[target] && probed < item_count {
            target = (target + 1) % item_count;
            probed += 1;
        }
        if probed >= item_count {
            break;
        }
        taken[target] = true;

        if target == item.position {
            continue;
        }
        changes.push(PositionChange {
            item_id: item.id.clone(),
            current_position: item.position,
            suggested_position: target,
            reason: reason.to_string(),
        });
    }

    changes
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::analysis::{analyze_balance, analyze_gaps, detect_imbalance, optimal_range};
    use crate::catalogue::{CatalogueType, EngagementStats};
    use crate::market::defaults::static_distribution;

    use super::*;

    fn catalogue_of(items: Vec<Item>) -> Catalogue {
        Catalogue::new("cat_1", CatalogueType::Portfolio, "owner_1").with_items(items)
    }

    fn analyze(
        catalogue: &Catalogue,
        pool: Option<&[Item]>,
    ) -> Vec<Recommendation> {
        let ideal = static_distribution();
        let gaps = analyze_gaps(&catalogue.items, &ideal);
        let imbalance = detect_imbalance(&analyze_balance(&catalogue.items));
        let range = optimal_range(
            catalogue.catalogue_type,
            catalogue.owner_experience,
            &[10, 12, 14],
        );
        RecommendationEngine::generate(catalogue, &gaps, &imbalance, &range, pool)
    }

    #[test]
    fn test_gap_recommendation_with_pool_candidates() {
        let catalogue = catalogue_of(
            (0..8)
                .map(|i| Item::new(format!("a{i}")).with_medium("painting"))
                .collect(),
        );
        let pool = vec![
            Item::new("p1").with_medium("print"),
            Item::new("p2").with_medium("painting"), // not a gap, no match
            Item::new("p3").with_medium("sculpture"),
        ];

        let recs = analyze(&catalogue, Some(&pool));
        let medium_rec = recs
            .iter()
            .find(|r| {
                r.recommendation_type == RecommendationType::AddArtwork
                    && r.title == "Add more mediums"
            })
            .expect("medium gap recommendation");

        assert_eq!(medium_rec.priority, Priority::High);
        assert_eq!(medium_rec.impact, 30);
        let ids: Vec<&str> = medium_rec
            .suggested_items
            .iter()
            .map(|s| s.item_id.as_str())
            .collect();
        assert_eq!(ids, vec!["p1", "p3"]);
        assert!(medium_rec.suggested_items[0].reason.contains("fills print gap"));
    }

    #[test]
    fn test_gap_recommendation_without_pool_uses_same_constants() {
        let catalogue = catalogue_of(
            (0..8)
                .map(|i| Item::new(format!("a{i}")).with_medium("painting"))
                .collect(),
        );

        let recs = analyze(&catalogue, None);
        let medium_rec = recs
            .iter()
            .find(|r| r.title == "Add more mediums")
            .expect("medium gap recommendation");

        assert_eq!(medium_rec.priority, Priority::High);
        assert_eq!(medium_rec.impact, 30);
        assert!(medium_rec.suggested_items.is_empty());
    }

    #[test]
    fn test_gap_candidates_are_capped_at_five() {
        let catalogue = catalogue_of(
            (0..8)
                .map(|i| Item::new(format!("a{i}")).with_medium("painting"))
                .collect(),
        );
        let pool: Vec<Item> = (0..9)
            .map(|i| Item::new(format!("p{i}")).with_medium("print"))
            .collect();

        let recs = analyze(&catalogue, Some(&pool));
        let medium_rec = recs.iter().find(|r| r.title == "Add more mediums").unwrap();
        assert_eq!(medium_rec.suggested_items.len(), GAP_CANDIDATE_LIMIT);
    }

    #[test]
    fn test_no_price_gap_recommendation() {
        let catalogue = catalogue_of(
            (0..8)
                .map(|i| Item::new(format!("a{i}")).with_medium("painting"))
                .collect(),
        );

        let recs = analyze(&catalogue, None);
        assert!(recs.iter().all(|r| r.title != "Cover more price ranges"));
    }

    #[test]
    fn test_reorder_for_dominant_medium() {
        // 6 of 8 items are paintings: flagged, and the 4 beyond the first
        // two get move proposals.
        let mut items: Vec<Item> = (0..6)
            .map(|i| Item::new(format!("p{i}")).with_medium("painting"))
            .collect();
        items.push(Item::new("x").with_medium("print"));
        items.push(Item::new("y").with_medium("drawing"));
        let catalogue = catalogue_of(items);

        let recs = analyze(&catalogue, None);
        let reorder = recs
            .iter()
            .find(|r| r.recommendation_type == RecommendationType::Reorder)
            .expect("reorder recommendation");

        assert_eq!(reorder.priority, Priority::Medium);
        assert_eq!(reorder.impact, REORDER_IMPACT);
        assert_eq!(reorder.position_changes.len(), 4);

        let n = catalogue.item_count();
        let targets: Vec<usize> = reorder
            .position_changes
            .iter()
            .map(|c| c.suggested_position)
            .collect();
        assert!(targets.iter().all(|t| *t < n));
        let distinct: HashSet<usize> = targets.iter().copied().collect();
        assert_eq!(distinct.len(), targets.len());
        assert!(reorder.position_changes[0].reason.contains("painting"));
    }

    #[test]
    fn test_no_reorder_for_two_item_group() {
        // 2 of 3 items share a medium (67% > 40%), but the group needs more
        // than two contributors before moves are proposed.
        let catalogue = catalogue_of(vec![
            Item::new("a").with_medium("painting"),
            Item::new("b").with_medium("painting"),
            Item::new("c").with_medium("print"),
        ]);

        let recs = analyze(&catalogue, None);
        assert!(
            recs.iter()
                .all(|r| r.recommendation_type != RecommendationType::Reorder)
        );
    }

    #[test]
    fn test_reorder_targets_stay_in_range_for_tiny_catalogue() {
        let catalogue = catalogue_of(vec![
            Item::new("a").with_medium("painting"),
            Item::new("b").with_medium("painting"),
            Item::new("c").with_medium("painting"),
        ]);

        let ideal = static_distribution();
        let gaps = analyze_gaps(&catalogue.items, &ideal);
        let imbalance = detect_imbalance(&analyze_balance(&catalogue.items));
        let range = optimal_range(CatalogueType::Portfolio, Default::default(), &[3]);
        let recs = RecommendationEngine::generate_with(
            &catalogue,
            &gaps,
            &imbalance,
            &range,
            None,
            GenerateOptions {
                fill_gaps: false,
                balance_distribution: true,
                size: false,
            },
        );

        for rec in &recs {
            for change in &rec.position_changes {
                assert!(change.suggested_position < catalogue.item_count());
                assert_ne!(change.suggested_position, change.current_position);
            }
        }
    }

    #[test]
    fn test_undersized_catalogue_gets_high_priority_add() {
        let catalogue = catalogue_of(vec![
            Item::new("a").with_medium("painting"),
            Item::new("b").with_medium("print"),
        ]);
        let pool: Vec<Item> = (0..4).map(|i| Item::new(format!("p{i}"))).collect();

        let range = SizeRange { min: 8, max: 16, ideal: 12 };
        let rec = RecommendationEngine::size_recommendation(&catalogue, &range, Some(&pool));

        assert_eq!(rec.recommendation_type, RecommendationType::AddArtwork);
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.impact, 40);
        assert_eq!(rec.suggested_items.len(), 4);
        assert_eq!(rec.suggested_items[0].reason, "adds to reach optimal size");
    }

    #[test]
    fn test_oversized_catalogue_removes_lowest_performers_first() {
        let mut items: Vec<Item> = (0..10)
            .map(|i| {
                Item::new(format!("a{i}"))
                    .with_stats(EngagementStats::new(100 * (i as u64 + 1), 0, 0))
            })
            .collect();
        // One clearly cold item.
        items.push(Item::new("cold"));
        let catalogue = catalogue_of(items);

        let range = SizeRange { min: 6, max: 9, ideal: 8 };
        let rec = RecommendationEngine::size_recommendation(&catalogue, &range, None);

        assert_eq!(rec.recommendation_type, RecommendationType::RemoveArtwork);
        assert_eq!(rec.priority, Priority::Medium);
        assert_eq!(rec.impact, 30);
        assert_eq!(rec.suggested_items.len(), 2);
        assert_eq!(rec.suggested_items[0].item_id, "cold");
        assert_eq!(rec.suggested_items[1].item_id, "a0");
    }

    #[test]
    fn test_in_range_catalogue_maintains() {
        let catalogue = catalogue_of((0..10).map(|i| Item::new(format!("a{i}"))).collect());
        let range = SizeRange { min: 8, max: 16, ideal: 12 };
        let rec = RecommendationEngine::size_recommendation(&catalogue, &range, None);

        assert_eq!(rec.recommendation_type, RecommendationType::Maintain);
        assert_eq!(rec.priority, Priority::Low);
        assert_eq!(rec.impact, 0);
    }

    #[test]
    fn test_recommendations_are_sorted() {
        let catalogue = catalogue_of(
            (0..3)
                .map(|i| Item::new(format!("a{i}")).with_medium("painting"))
                .collect(),
        );

        let recs = analyze(&catalogue, None);
        for pair in recs.windows(2) {
            assert!(
                pair[0].priority < pair[1].priority
                    || (pair[0].priority == pair[1].priority
                        && pair[0].impact >= pair[1].impact)
            );
        }
    }

    #[test]
    fn test_options_suppress_groups() {
        let catalogue = catalogue_of(
            (0..6)
                .map(|i| Item::new(format!("a{i}")).with_medium("painting"))
                .collect(),
        );
        let ideal = static_distribution();
        let gaps = analyze_gaps(&catalogue.items, &ideal);
        let imbalance = detect_imbalance(&analyze_balance(&catalogue.items));
        let range = SizeRange { min: 6, max: 16, ideal: 12 };

        let recs = RecommendationEngine::generate_with(
            &catalogue,
            &gaps,
            &imbalance,
            &range,
            None,
            GenerateOptions {
                fill_gaps: false,
                balance_distribution: false,
                size: true,
            },
        );

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].recommendation_type, RecommendationType::Maintain);
    }
}
