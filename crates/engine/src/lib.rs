mod aggregate;
mod filter;
mod report;

use std::path::Path;

use foldscan_fs::{ListError, list_dir};

pub use aggregate::{Aggregator, ExtensionBucket, ScanResult, aggregate};
pub use filter::{ExtensionFilter, normalize_extension};
pub use report::{format_size, render_report};

/// List `dir` and aggregate its direct children.
///
/// The recorded path is made absolute without resolving symlinks.
pub fn scan_folder(dir: &Path, filter: Option<ExtensionFilter>) -> Result<ScanResult, ListError> {
    let entries = list_dir(dir)?;

    let path = std::path::absolute(dir).map_err(|source| ListError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    Ok(aggregate(path, entries, filter))
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
