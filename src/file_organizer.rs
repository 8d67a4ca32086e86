/// Filesystem operations for moving files into category directories.
///
/// This module owns the two mutating primitives of a run: preparing the
/// category subdirectories and relocating a single file into one of them.
use crate::file_category::Category;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur during file organization operations.
#[derive(Debug)]
pub enum OrganizeError {
    /// The target directory path is invalid or doesn't exist.
    InvalidBasePath {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create a category directory. Fatal for the whole run.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to list the target directory. Fatal for the whole run.
    DirectoryReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to move a file to its category directory.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
    /// A same-named file already exists at the destination; the move is
    /// refused rather than overwriting.
    DestinationOccupied { destination: PathBuf },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBasePath { path, source } => {
                write!(f, "Invalid target directory {}: {}", path.display(), source)
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::DirectoryReadFailed { path, source } => {
                write!(
                    f,
                    "Failed to read directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
            Self::DestinationOccupied { destination } => {
                write!(
                    f,
                    "Destination {} already exists, refusing to overwrite",
                    destination.display()
                )
            }
        }
    }
}

impl std::error::Error for OrganizeError {}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Moves files into category subdirectories of a target directory.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Ensures every category subdirectory exists under `target`.
    ///
    /// Missing folders are created with a non-recursive `create_dir`;
    /// `target` itself must already exist. Existing folders are left
    /// untouched, so the call is idempotent. Any creation failure aborts
    /// the whole run since files cannot be placed safely without their
    /// destination folders.
    ///
    /// Returns the paths that were actually created this call.
    pub fn ensure_category_folders(target: &Path) -> OrganizeResult<Vec<PathBuf>> {
        let mut created = Vec::new();

        for category in Category::ALL {
            let folder = target.join(category.dir_name());
            if !folder.exists() {
                fs::create_dir(&folder).map_err(|e| OrganizeError::DirectoryCreationFailed {
                    path: folder.clone(),
                    source: e,
                })?;
                created.push(folder);
            }
        }

        Ok(created)
    }

    /// Moves a file into a category directory within the target.
    ///
    /// The destination is `target/category_dir_name/<file name>`. If a file
    /// already occupies that path the move is refused with
    /// [`OrganizeError::DestinationOccupied`]; rename semantics that silently
    /// overwrite are never inherited. A single rename attempt is made, no
    /// retries.
    ///
    /// # Returns
    ///
    /// The destination path on success, or an `OrganizeError` describing the
    /// failure. Callers treat these errors as per-file: they are tallied and
    /// the run continues.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let result = FileOrganizer::move_to_category(
    ///     Path::new("/path/to/target"),
    ///     Path::new("/path/to/target/image.png"),
    ///     "images",
    /// );
    ///
    /// match result {
    ///     Ok(dest) => println!("Moved to {}", dest.display()),
    ///     Err(e) => eprintln!("Move failed: {}", e),
    /// }
    /// ```
    pub fn move_to_category(
        target: &Path,
        file_path: &Path,
        category_dir_name: &str,
    ) -> OrganizeResult<PathBuf> {
        let category_path = target.join(category_dir_name);

        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::FileMoveFailure {
                source: file_path.to_path_buf(),
                destination: category_path.clone(),
                source_error: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "file has no name component",
                ),
            })?;

        let destination_path = category_path.join(file_name);

        if destination_path.exists() {
            return Err(OrganizeError::DestinationOccupied {
                destination: destination_path,
            });
        }

        fs::rename(file_path, &destination_path).map_err(|e| OrganizeError::FileMoveFailure {
            source: file_path.to_path_buf(),
            destination: destination_path.clone(),
            source_error: e,
        })?;

        Ok(destination_path)
    }
}
