//! Example: analyze a sample catalogue with Curio.
//!
//! Usage:
//!   cargo run --example analyze

use std::sync::Arc;

use curio::{
    Catalogue, CatalogueType, Curator, EngagementStats, ExperienceLevel, InMemoryMarket,
    InMemoryStore, Item, MarketItem,
};

#[tokio::main]
async fn main() -> curio::Result<()> {
    let catalogue = Catalogue::new("studio-selection", CatalogueType::Portfolio, "ines")
        .with_experience(ExperienceLevel::Advanced)
        .with_items([
            Item::new("harbor-dawn")
                .with_medium("painting")
                .with_style("impressionist")
                .with_price(2400.0)
                .with_colors(["blue", "orange"])
                .with_dimensions(24.0, 36.0)
                .with_stats(EngagementStats::new(410, 32, 4)),
            Item::new("harbor-dusk")
                .with_medium("painting")
                .with_style("impressionist")
                .with_price(2600.0)
                .with_colors(["blue", "purple"])
                .with_dimensions(24.0, 36.0)
                .with_stats(EngagementStats::new(380, 28, 2)),
            Item::new("tidal-study-i")
                .with_medium("painting")
                .with_style("abstract")
                .with_price(900.0)
                .with_colors(["blue", "white"])
                .with_dimensions(8.0, 10.0)
                .with_stats(EngagementStats::new(120, 9, 1)),
            Item::new("breakwater")
                .with_medium("photography")
                .with_style("minimalist")
                .with_price(450.0)
                .with_colors(["black", "white"])
                .with_dimensions(16.0, 20.0)
                .with_stats(EngagementStats::new(95, 4, 0)),
        ]);

    let inventory = vec![
        Item::new("clay-form-ii").with_medium("sculpture").with_price(3800.0),
        Item::new("tide-lines").with_medium("print").with_price(300.0),
        Item::new("salt-air").with_medium("painting").with_price(1800.0),
    ];

    let store = InMemoryStore::new()
        .with_catalogue(catalogue)
        .with_inventory("ines", inventory)
        .with_peer_sizes(CatalogueType::Portfolio, [9, 12, 15]);

    let market = InMemoryMarket::new().with_sample((0..50).map(|i| {
        MarketItem::new()
            .with_medium(["painting", "print", "photography", "sculpture", "digital"][i % 5])
            .with_style(["abstract", "contemporary", "impressionist"][i % 3])
            .with_price_range(["0-1000", "1000-5000", "5000-10000", "10000+"][i % 4])
            .with_colors([["blue", "white"], ["red", "black"], ["green", "yellow"]][i % 3])
    }));

    let curator = Curator::new(Arc::new(store), Arc::new(market));
    let analysis = curator.analyze_catalogue("studio-selection").await?;

    let separator = "=".repeat(72);
    println!("{separator}");
    println!("Curation analysis: {}", analysis.catalogue_id);
    println!("{separator}");
    println!();
    println!("Score: {}/100", analysis.score);
    println!(
        "Recommended size: {}-{} items (ideally {})",
        analysis.size_range.min, analysis.size_range.max, analysis.size_range.ideal
    );
    println!();

    println!("Gaps:");
    println!("  mediums:      {:?}", analysis.gaps.mediums);
    println!("  styles:       {:?}", analysis.gaps.styles);
    println!("  price ranges: {:?}", analysis.gaps.price_ranges);
    println!("  colors:       {:?}", analysis.gaps.colors);
    println!("  sizes:        {:?}", analysis.gaps.size_categories);
    println!();

    println!("Recommendations:");
    for rec in &analysis.recommendations {
        println!(
            "  [{}] {} (impact {})",
            rec.priority.label(),
            rec.title,
            rec.impact
        );
        println!("      {}", rec.description);
        for item in &rec.suggested_items {
            println!("      + {} ({})", item.item_id, item.reason);
        }
        for change in &rec.position_changes {
            println!(
                "      ~ {} {} -> {}",
                change.item_id, change.current_position, change.suggested_position
            );
        }
    }

    Ok(())
}
