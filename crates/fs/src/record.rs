/// A regular file found directly inside the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name
    pub name: String,
    /// File size in bytes
    pub size: u64,
    /// Lowercase extension with its leading dot e.g., '.pdf',
    /// or `NO_EXTENSION`
    pub extension: String,
}

/// One direct child of the scanned directory, classified without following
/// symlinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListedEntry {
    File(FileEntry),
    Dir(String),
}

impl ListedEntry {
    pub fn name(&self) -> &str {
        match self {
            ListedEntry::File(f) => &f.name,
            ListedEntry::Dir(name) => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, ListedEntry::Dir(_))
    }
}
