//! Curate command - produce recommendations for automated application.

use std::path::PathBuf;

use colored::Colorize;

use curio::AutoCurateOptions;

use crate::dataset::Dataset;

pub async fn run(
    file: PathBuf,
    no_fill_gaps: bool,
    no_balance: bool,
    max_artworks: Option<usize>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = Dataset::load(&file)?;
    let (curator, catalogue_id) = dataset.into_curator();

    let options = AutoCurateOptions {
        fill_gaps: !no_fill_gaps,
        balance_distribution: !no_balance,
        max_artworks,
    };
    let recommendations = curator.auto_curate(&catalogue_id, options).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    println!(
        "{} {} recommendation(s) for {}",
        "Generated".cyan().bold(),
        recommendations.len().to_string().white().bold(),
        catalogue_id.white()
    );
    println!();

    for rec in &recommendations {
        println!(
            "[{}] {} ({}, impact {})",
            rec.priority.label().yellow().bold(),
            rec.title.white().bold(),
            rec.recommendation_type.label(),
            rec.impact
        );
        if !rec.reason.is_empty() {
            println!("  {}", rec.reason.dimmed());
        }
        for item in &rec.suggested_items {
            println!("  {} {} ({})", "+".green(), item.item_id, item.reason);
        }
        for change in &rec.position_changes {
            println!(
                "  {} {} {} -> {}",
                "~".blue(),
                change.item_id,
                change.current_position,
                change.suggested_position
            );
        }
        println!();
    }

    Ok(())
}
