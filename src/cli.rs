//! Command-line interface module for dirsort.
//!
//! This module handles all CLI-related functionality including:
//! - Argument parsing and target path resolution
//! - Organization orchestration over a single directory scan
//! - Per-entry skip/move decisions and run statistics
//! - Dry-run simulation

use crate::file_category::CategoryMap;
use crate::file_organizer::{FileOrganizer, OrganizeError, OrganizeResult};
use crate::output::OutputFormatter;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Sort a directory's files into category subdirectories by extension.
#[derive(Debug, Parser)]
#[command(name = "dirsort", version, about)]
pub struct Cli {
    /// Directory whose immediate contents are organized
    pub target: PathBuf,

    /// Show what would be moved without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

/// Counters for a single organization run.
///
/// Every regular file observed during the scan is counted once into `total`
/// and into exactly one of the three outcome buckets, so
/// `total == moved + skipped + errors` always holds at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Regular files considered by the scan.
    pub total: usize,
    /// Files relocated into a category folder.
    pub moved: usize,
    /// Hidden, extensionless, or already-organized files left in place.
    pub skipped: usize,
    /// Files whose move attempt failed.
    pub errors: usize,
}

/// A regular file encountered during the directory scan.
#[derive(Debug, Clone)]
struct FileEntry {
    /// The file name within the target directory.
    name: String,
    /// The full path to the file.
    path: PathBuf,
}

/// Runs one organization pass over `target`.
///
/// The target is resolved to an absolute path before use; resolution failure
/// (missing or unreadable directory) is fatal. Prints the start banner,
/// delegates to the real or dry-run scan, and prints the summary.
///
/// # Examples
///
/// ```no_run
/// use dirsort::cli::run_cli;
/// use std::path::Path;
///
/// match run_cli(Path::new("/path/to/directory"), false) {
///     Ok(stats) => println!("Moved {} files", stats.moved),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(target: &Path, dry_run: bool) -> OrganizeResult<RunStats> {
    let target = fs::canonicalize(target).map_err(|e| OrganizeError::InvalidBasePath {
        path: target.to_path_buf(),
        source: e,
    })?;

    OutputFormatter::start_banner(&target);

    let stats = if dry_run {
        organize_directory_dry_run(&target)?
    } else {
        organize_directory(&target)?
    };

    OutputFormatter::summary(&stats);
    Ok(stats)
}

/// Organizes the immediate contents of `target` into category folders.
///
/// Preparation runs first and is fatal on failure, as is the directory
/// listing. The scan is a single pass in listing order; each entry is fully
/// decided (skip, move, or error) before the next is considered. Per-file
/// move failures are tallied and never abort the run.
pub fn organize_directory(target: &Path) -> OrganizeResult<RunStats> {
    for folder in FileOrganizer::ensure_category_folders(target)? {
        OutputFormatter::success(&format!("Created folder: {}", folder.display()));
    }

    let files = collect_files(target)?;
    let map = CategoryMap::default();
    let mut stats = RunStats::default();

    let pb = OutputFormatter::create_progress_bar(files.len() as u64);
    for file in &files {
        stats.total += 1;

        let Some(ext) = file_extension(&file.name) else {
            pb.println(format!(
                "Skipping file: {} (hidden or no extension)",
                file.name
            ));
            stats.skipped += 1;
            pb.inc(1);
            continue;
        };

        let category = map.classify(ext);
        let dest_folder = target.join(category.dir_name());

        // Already organized: the file sits in its own category folder. Only
        // immediate children of target are scanned, so in practice this
        // triggers when target itself is reorganized in unusual layouts.
        if file.path.parent() == Some(dest_folder.as_path()) {
            pb.println(format!("File already in correct folder: {}", file.name));
            stats.skipped += 1;
            pb.inc(1);
            continue;
        }

        match FileOrganizer::move_to_category(target, &file.path, category.dir_name()) {
            Ok(_) => {
                pb.println(format!("✓ Moved {} to {}/", file.name, category.dir_name()));
                stats.moved += 1;
            }
            Err(e) => {
                pb.println(format!("✗ {}", e));
                stats.errors += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(stats)
}

/// Simulates an organization run without touching the filesystem.
///
/// Applies the same skip rules and classification as the real scan but
/// creates no folders and moves no files. Files that would relocate are
/// counted as `moved` in the returned stats.
pub fn organize_directory_dry_run(target: &Path) -> OrganizeResult<RunStats> {
    OutputFormatter::dry_run_notice("No files will be moved.");

    let files = collect_files(target)?;
    let map = CategoryMap::default();
    let mut stats = RunStats::default();

    for file in &files {
        stats.total += 1;

        let Some(ext) = file_extension(&file.name) else {
            OutputFormatter::info(&format!(
                "Would skip {} (hidden or no extension)",
                file.name
            ));
            stats.skipped += 1;
            continue;
        };

        let category = map.classify(ext);
        let dest_folder = target.join(category.dir_name());

        if file.path.parent() == Some(dest_folder.as_path()) {
            OutputFormatter::info(&format!("Already in correct folder: {}", file.name));
            stats.skipped += 1;
            continue;
        }

        OutputFormatter::plain(&format!(
            " - {} → would move to {}/",
            file.name,
            category.dir_name()
        ));
        stats.moved += 1;
    }

    Ok(stats)
}

/// Lists the regular files among the immediate children of `target`.
///
/// Non-files (directories, symlinks to directories) are logged at info
/// level and excluded from the scan entirely. A stat failure is treated
/// conservatively as "not a regular file".
fn collect_files(target: &Path) -> OrganizeResult<Vec<FileEntry>> {
    let entries = fs::read_dir(target).map_err(|e| OrganizeError::DirectoryReadFailed {
        path: target.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        // fs::metadata follows symlinks, so a symlink to a regular file
        // counts as a file while a symlink to a directory does not.
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => files.push(FileEntry { name, path }),
            _ => OutputFormatter::info(&format!("Skipping non-file entry: {}", name)),
        }
    }

    Ok(files)
}

/// Returns the extension of a file name eligible for classification.
///
/// Hidden files (leading dot) and names without anything after the last dot
/// yield `None` and are skipped by the scan. The leading dot of the
/// extension itself is stripped.
fn file_extension(name: &str) -> Option<&str> {
    if name.starts_with('.') {
        return None;
    }
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Some(ext),
        _ => None,
    }
}
