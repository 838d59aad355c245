//! Console reporting for the operator.
//!
//! Lines go to stdout and are meant for people, not scripts; use
//! `inspect --json` for machine-readable output.

use std::path::Path;

use casefile_pdf::{BatchSummary, Outcome, RenamePlan};

const LABEL_WIDTH: usize = 12;

// ── Batch run ──

pub fn print_no_files(folder: &Path) {
    println!("No PDF files found in {}", folder.display());
}

pub fn print_start(count: usize, dry_run: bool) {
    if dry_run {
        println!("Planning {count} PDF file(s) (dry run, nothing is renamed)...");
    } else {
        println!("Processing {count} PDF file(s)...");
    }
}

pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Renamed { from, to } => {
            println!("renamed:   {}", file_name(from));
            println!("        -> {}", file_name(to));
        }
        Outcome::Planned { from, to } => {
            println!("would rename: {}", file_name(from));
            println!("           -> {}", file_name(to));
        }
        Outcome::Unchanged { path } => {
            println!("unchanged: {}", file_name(path));
        }
    }
}

pub fn print_summary(summary: &BatchSummary) {
    println!();
    if summary.planned > 0 {
        println!(
            "Done: {} file(s), {} would be renamed, {} unchanged.",
            summary.total, summary.planned, summary.unchanged
        );
    } else {
        println!(
            "Done: {} file(s), {} renamed, {} unchanged.",
            summary.total, summary.renamed, summary.unchanged
        );
    }
}

// ── Inspect ──

/// Print one plan as a vertical card.
pub fn print_plan_card(plan: &RenamePlan) {
    let meta = &plan.metadata;
    println!("=== {} ===", file_name(&plan.source));
    print_field("date", &meta.date);
    print_field("title", &meta.title);
    print_field("author", &meta.author);
    print_field("case number", meta.case_number.as_deref().unwrap_or("-"));
    println!();
    print_field("new name", plan.target_name());
    if plan.is_noop() {
        println!("  (already named correctly)");
    }
}

fn print_field(label: &str, value: &str) {
    println!("  {label:<LABEL_WIDTH$} {value}");
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
