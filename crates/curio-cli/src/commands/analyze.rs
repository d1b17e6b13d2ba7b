//! Analyze command - score a catalogue and report its composition.

use std::path::PathBuf;

use colored::Colorize;

use curio::Priority;

use crate::dataset::Dataset;

pub async fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = Dataset::load(&file)?;
    let (curator, catalogue_id) = dataset.into_curator();

    let analysis = curator.analyze_catalogue(&catalogue_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!(
            "{} {}",
            "Analyzed".cyan().bold(),
            catalogue_id.white().bold()
        );
        println!();

        let score = format!("{}/100", analysis.score);
        let score_colored = if analysis.score >= 80 {
            score.green().bold()
        } else if analysis.score >= 50 {
            score.yellow().bold()
        } else {
            score.red().bold()
        };
        println!("Curation score: {}", score_colored);
        println!(
            "Recommended size: {}-{} items (ideally {})",
            analysis.size_range.min, analysis.size_range.max, analysis.size_range.ideal
        );
        println!();

        print_gap_line("mediums", &analysis.gaps.mediums);
        print_gap_line("styles", &analysis.gaps.styles);
        print_gap_line("price ranges", &analysis.gaps.price_ranges);
        print_gap_line("colors", &analysis.gaps.colors);
        print_gap_line("sizes", &analysis.gaps.size_categories);
        println!();

        println!(
            "{} recommendation(s):",
            analysis.recommendations.len().to_string().white().bold()
        );
        for rec in &analysis.recommendations {
            let priority = match rec.priority {
                Priority::High => rec.priority.label().red().bold(),
                Priority::Medium => rec.priority.label().yellow(),
                Priority::Low => rec.priority.label().blue(),
            };
            println!("  [{}] {} (impact {})", priority, rec.title, rec.impact);
            if !rec.description.is_empty() {
                println!("      {}", rec.description.dimmed());
            }
        }
    }

    if let Some(output_path) = output {
        std::fs::write(&output_path, serde_json::to_string_pretty(&analysis)?)?;
        println!();
        println!(
            "{} {}",
            "Saved to".green().bold(),
            output_path.display().to_string().white()
        );
    }

    Ok(())
}

fn print_gap_line(label: &str, gaps: &[String]) {
    if gaps.is_empty() {
        println!("  {:13} {}", label, "covered".green());
    } else {
        println!("  {:13} missing {}", label, gaps.join(", ").yellow());
    }
}
