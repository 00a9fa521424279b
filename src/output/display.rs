//! Display functions for stage reports

use crate::commands::{ClassifyReport, ExtractReport, ResplitReport};
use colored::Colorize;

/// Print the result of a classify run
pub fn print_classify_report(report: &ClassifyReport) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {} ", "CLASSIFIED BUCKETS".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    for &(length, count) in &report.counts {
        println!(
            "   len {length}: {}",
            format!("{count}").bright_yellow()
        );
    }
    println!(
        "   skipped {} invalid, {} out of range",
        report.skipped, report.out_of_range
    );
}

/// Print a re-split report
///
/// Exactly four plain `length count` lines; downstream tooling and habit
/// both expect this shape, so it stays unstyled.
pub fn print_resplit_report(report: &ResplitReport) {
    for &(length, count) in &report.counts {
        println!("{length} {count}");
    }
}

/// Print the result of an extraction run
pub fn print_extract_report(report: &ExtractReport) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {} ", "EXTRACTED ARTIFACTS".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    println!("   sampled:  {}", report.sampled);
    println!(
        "   answers:  {}",
        format!("{}", report.answers).bright_yellow()
    );
    println!(
        "   guesses:  {} distinct",
        format!("{}", report.distinct_guesses).bright_yellow()
    );
}
