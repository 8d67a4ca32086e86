//! Output formatting and styling module.
//!
//! Provides a centralized interface for all CLI output: colored status
//! lines, the start banner, the progress bar used during the scan, and the
//! end-of-run summary.

use crate::cli::RunStats;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Manages all CLI output with consistent styling and formatting.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    ///
    /// Errors go to stderr so informational output can be piped cleanly.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints the start banner naming the resolved target directory.
    pub fn start_banner(target: &Path) {
        println!("\n{}", "=== File Organizer ===".bold());
        println!("Organizing files in: {}", target.display());
        println!("{}\n", "======================".bold());
    }

    /// Prints a dry-run notice message.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Creates a progress bar for the scan loop.
    ///
    /// Per-item lines should be emitted through [`ProgressBar::println`] so
    /// the bar stays at the bottom of the terminal.
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Prints the end-of-run summary.
    ///
    /// The errors line is omitted when no errors occurred.
    pub fn summary(stats: &RunStats) {
        println!("\n{}", "=== Operation Summary ===".bold());
        println!("Total files processed: {}", stats.total);
        println!("Files moved: {}", stats.moved.to_string().green());
        println!("Files skipped: {}", stats.skipped);

        if stats.errors > 0 {
            println!(
                "Errors encountered: {}",
                stats.errors.to_string().red().bold()
            );
        }

        println!("{}\n", "=========================".bold());
    }
}
