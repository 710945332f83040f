use std::path::{Path, PathBuf};

use foldscan_fs::{FileEntry, ListedEntry};
use hashbrown::{HashMap, hash_map::Entry};
use log::debug;

use crate::filter::ExtensionFilter;

/// Running count and size for one extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionBucket {
    pub extension: String,
    pub count: u64,
    pub size: u64,
}

/// Aggregate statistics of one scan, consumed once by the renderer.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub(crate) path: PathBuf,
    pub(crate) files: Vec<FileEntry>,
    pub(crate) folders: Vec<String>,
    pub(crate) total_size: u64,
    /// Index into `files`.
    pub(crate) largest: Option<usize>,
    /// First-seen order.
    pub(crate) buckets: Vec<ExtensionBucket>,
    pub(crate) filter: Option<ExtensionFilter>,
}

impl ScanResult {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn total_files(&self) -> usize {
        self.files.len()
    }

    pub fn total_folders(&self) -> usize {
        self.folders.len()
    }

    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Included files in the order they were encountered.
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Subfolder names in the order they were encountered.
    pub fn folders(&self) -> &[String] {
        &self.folders
    }

    /// `None` when no file qualified, which is distinct from an empty file.
    pub fn largest_file(&self) -> Option<&FileEntry> {
        self.largest.map(|idx| &self.files[idx])
    }

    /// Extension buckets in first-seen order.
    pub fn type_breakdown(&self) -> &[ExtensionBucket] {
        &self.buckets
    }

    pub fn bucket(&self, extension: &str) -> Option<&ExtensionBucket> {
        self.buckets.iter().find(|b| b.extension == extension)
    }

    pub fn filter(&self) -> Option<&ExtensionFilter> {
        self.filter.as_ref()
    }
}

/// Accumulates listed entries into a [ScanResult].
#[derive(Debug, Default)]
pub struct Aggregator {
    filter: Option<ExtensionFilter>,
    files: Vec<FileEntry>,
    folders: Vec<String>,
    total_size: u64,
    largest: Option<usize>,
    buckets: Vec<ExtensionBucket>,
    bucket_map: HashMap<String, usize>,
}

impl Aggregator {
    pub fn new(filter: Option<ExtensionFilter>) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn push(&mut self, entry: ListedEntry) {
        match entry {
            ListedEntry::Dir(name) => self.folders.push(name),
            ListedEntry::File(file) => self.push_file(file),
        }
    }

    fn push_file(&mut self, file: FileEntry) {
        if let Some(filter) = &self.filter
            && !filter.allows(&file.extension)
        {
            return;
        }

        let bucket = self.bucket_mut(&file.extension);
        bucket.count += 1;
        bucket.size += file.size;

        self.total_size += file.size;

        // Strictly greater keeps the first-seen file on ties.
        let is_new_max = match self.largest {
            Some(idx) => file.size > self.files[idx].size,
            None => true,
        };
        if is_new_max {
            self.largest = Some(self.files.len());
        }

        self.files.push(file);
    }

    /// Get-or-create the bucket for `extension`.
    pub fn bucket_mut(&mut self, extension: &str) -> &mut ExtensionBucket {
        let idx = match self.bucket_map.entry(extension.to_owned()) {
            Entry::Occupied(o) => *o.get(),
            Entry::Vacant(v) => {
                let idx = self.buckets.len();
                self.buckets.push(ExtensionBucket {
                    extension: extension.to_owned(),
                    count: 0,
                    size: 0,
                });
                v.insert(idx);
                idx
            }
        };
        &mut self.buckets[idx]
    }

    pub fn finish(self, path: PathBuf) -> ScanResult {
        debug!(
            "[aggregate] {} files, {} folders, {} bytes, {} extensions",
            self.files.len(),
            self.folders.len(),
            self.total_size,
            self.buckets.len()
        );

        ScanResult {
            path,
            files: self.files,
            folders: self.folders,
            total_size: self.total_size,
            largest: self.largest,
            buckets: self.buckets,
            filter: self.filter,
        }
    }
}

/// Aggregate a full listing in one pass.
pub fn aggregate<I>(path: PathBuf, entries: I, filter: Option<ExtensionFilter>) -> ScanResult
where
    I: IntoIterator<Item = ListedEntry>,
{
    let mut agg = Aggregator::new(filter);
    for entry in entries {
        agg.push(entry);
    }
    agg.finish(path)
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
