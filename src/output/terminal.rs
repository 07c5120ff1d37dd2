// Colored terminal output for the summary report.
//
// Sections print in a fixed order: keywords, SVO triples, the one-line
// summary, then the keyword map. `render_report` builds the plain text so it
// can be tested; `display_report` adds color and prints it.

use colored::Colorize;

use crate::summary::Summary;

/// Line shown under a keyword with no related triples.
pub const NO_RELATED_SVO: &str = "no related SVO found";

/// Print the full report to stdout.
pub fn display_report(summary: &Summary) {
    println!("\n{}", "=== Processing text ===".bold());

    println!("\n{}", "Top keywords:".bold());
    for entry in &summary.keywords {
        println!("  - {}: {} occurrences", entry.term.cyan(), entry.frequency);
    }

    println!("\n{}", "SVO structures:".bold());
    if summary.svos.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for svo in &summary.svos {
        println!(
            "  - Subject: {} → Verb: {} → Object: {}",
            svo.subject.green(),
            svo.verb.yellow(),
            svo.object.green()
        );
    }

    println!("\n{}", "Summary:".bold());
    println!("  {}", summary.headline());

    println!("\n{}", "=== Keyword map ===".bold());
    for (keyword, related) in summary.keyword_map.iter() {
        println!("  - Keyword: {}", keyword.cyan());
        if related.is_empty() {
            println!("    + {}", NO_RELATED_SVO.dimmed());
        }
        for svo in related {
            println!("    + Related SVO: {svo}");
        }
    }
}

/// Render the report as uncolored text, one line per entry.
pub fn render_report(summary: &Summary) -> String {
    let mut lines = vec!["Top keywords:".to_string()];
    lines.extend(
        summary
            .keywords
            .iter()
            .map(|k| format!("- {}: {} occurrences", k.term, k.frequency)),
    );

    lines.push("SVO structures:".to_string());
    lines.extend(summary.svos.iter().map(|svo| format!("- {svo}")));

    lines.push("Summary:".to_string());
    lines.push(summary.headline());

    lines.push("Keyword map:".to_string());
    for (keyword, related) in summary.keyword_map.iter() {
        lines.push(format!("- Keyword: {keyword}"));
        if related.is_empty() {
            lines.push(format!("  + {NO_RELATED_SVO}"));
        }
        lines.extend(related.iter().map(|svo| format!("  + Related SVO: {svo}")));
    }

    lines.join("\n")
}
