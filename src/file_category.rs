/// File categorization table for organizing files by extension.
///
/// This module maps file extensions to one of a fixed set of categories.
/// The table is built once at startup and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use dirsort::file_category::{Category, CategoryMap};
///
/// let map = CategoryMap::default();
/// assert_eq!(map.classify("pdf"), Category::Documents);
/// assert_eq!(map.classify("JPG"), Category::Images);
/// assert_eq!(map.classify("xyz"), Category::Other);
/// ```
use std::collections::HashMap;

/// One of the fixed destination classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Document files (PDF, DOCX, TXT, spreadsheets, presentations).
    Documents,
    /// Image files (PNG, JPG, GIF, etc.)
    Images,
    /// Video files (MP4, MKV, AVI, etc.)
    Videos,
    /// Audio files (MP3, WAV, FLAC, etc.)
    Audio,
    /// Archive files (ZIP, RAR, 7Z, etc.)
    Archives,
    /// Source code files (Rust, Python, JavaScript, etc.)
    Code,
    /// Executables and installers (EXE, MSI, scripts).
    Executables,
    /// Unknown or uncategorized files.
    Other,
}

impl Category {
    /// Every category in declaration order, `Other` last.
    ///
    /// This order drives both table construction (first declaration wins on
    /// overlapping extensions) and folder preparation.
    pub const ALL: [Category; 8] = [
        Category::Documents,
        Category::Images,
        Category::Videos,
        Category::Audio,
        Category::Archives,
        Category::Code,
        Category::Executables,
        Category::Other,
    ];

    /// Returns the subdirectory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::file_category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "images");
    /// assert_eq!(Category::Other.dir_name(), "other");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Documents => "documents",
            Category::Images => "images",
            Category::Videos => "videos",
            Category::Audio => "audio",
            Category::Archives => "archives",
            Category::Code => "code",
            Category::Executables => "executables",
            Category::Other => "other",
        }
    }

    /// Returns the extensions recognized for this category.
    ///
    /// `Other` owns no extensions; it is the fallback for everything the
    /// table does not know.
    fn extensions(&self) -> &'static [&'static str] {
        match self {
            Category::Documents => &[
                "pdf", "doc", "docx", "txt", "rtf", "odt", "xls", "xlsx", "csv", "ppt", "pptx",
            ],
            Category::Images => &[
                "jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "tiff", "ico",
            ],
            Category::Videos => &[
                "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "3gp", "mpeg",
            ],
            Category::Audio => &["mp3", "wav", "ogg", "flac", "aac", "m4a", "wma"],
            Category::Archives => &["zip", "rar", "7z", "tar", "gz", "bz2", "iso", "dmg"],
            Category::Code => &[
                "js", "py", "java", "c", "cpp", "cs", "php", "html", "css", "json", "xml", "yaml",
                "sql",
            ],
            Category::Executables => &["exe", "msi", "bat", "sh", "app", "dmg"],
            Category::Other => &[],
        }
    }
}

/// Maps lowercase file extensions to categories.
///
/// Lookups are case-insensitive; callers must strip the leading dot.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    extension_map: HashMap<String, Category>,
}

impl CategoryMap {
    /// Creates a new `CategoryMap` with the standard extension table.
    pub fn new() -> Self {
        let mut map = Self {
            extension_map: HashMap::new(),
        };
        for category in Category::ALL {
            for ext in category.extensions() {
                map.add_extension_mapping(ext, category);
            }
        }
        map
    }

    /// Adds an extension to category mapping.
    ///
    /// The first mapping registered for an extension wins; later categories
    /// listing the same extension are ignored (`dmg` is declared under both
    /// archives and executables and resolves to archives).
    pub fn add_extension_mapping(&mut self, ext: &str, category: Category) {
        self.extension_map
            .entry(ext.to_lowercase())
            .or_insert(category);
    }

    /// Maps a file extension to a category, if the table knows it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::file_category::{Category, CategoryMap};
    ///
    /// let map = CategoryMap::default();
    /// assert_eq!(map.extension_to_category("mp3"), Some(Category::Audio));
    /// assert_eq!(map.extension_to_category("xyz"), None);
    /// ```
    pub fn extension_to_category(&self, ext: &str) -> Option<Category> {
        self.extension_map.get(&ext.to_lowercase()).copied()
    }

    /// Determines the category for an extension.
    ///
    /// Every input maps to a category; unrecognized extensions fall back to
    /// `Category::Other`.
    pub fn classify(&self, ext: &str) -> Category {
        self.extension_to_category(ext).unwrap_or(Category::Other)
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::new()
    }
}
