//! dirsort - a one-shot directory organization utility
//!
//! This library scans a single directory and relocates each regular file
//! into a subdirectory chosen by mapping the file's extension to a fixed
//! category (documents, images, videos, audio, archives, code, executables,
//! other).

pub mod cli;
pub mod file_category;
pub mod file_organizer;
pub mod output;

pub use cli::{Cli, RunStats, run_cli};
pub use file_category::{Category, CategoryMap};
pub use file_organizer::{FileOrganizer, OrganizeError, OrganizeResult};
