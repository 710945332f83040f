use std::{
    fs::{self, read_dir},
    path::Path,
};

use foldscan_runtime::NO_EXTENSION;
use log::debug;

use crate::{
    error::ListError,
    record::{FileEntry, ListedEntry},
};

/// List the immediate children of `dir`.
///
/// Entries come back in whatever order the file system yields them. Symlinks
/// are never followed, and anything that is neither a regular file nor a
/// directory is left out. The first unreadable entry aborts the listing.
pub fn list_dir(dir: &Path) -> Result<Vec<ListedEntry>, ListError> {
    let is_dir = fs::metadata(dir).map(|m| m.is_dir()).unwrap_or(false);
    if !is_dir {
        return Err(ListError::NotADirectory(dir.to_path_buf()));
    }

    let rd = read_dir(dir).map_err(|e| ListError::io(dir, e))?;

    let mut entries = Vec::new();
    for entry_res in rd {
        let entry = entry_res.map_err(|e| ListError::io(dir, e))?;

        if let Some(listed) = inspect_fs_entry(&entry)? {
            entries.push(listed);
        }
    }

    debug!("[list_dir] {} entries in {:?}", entries.len(), dir);

    Ok(entries)
}

fn inspect_fs_entry(entry: &fs::DirEntry) -> Result<Option<ListedEntry>, ListError> {
    let full_path = entry.path();

    // DirEntry::file_type does not traverse symlinks.
    let file_type = entry
        .file_type()
        .map_err(|e| ListError::io(&full_path, e))?;

    let name = entry.file_name().to_string_lossy().into_owned();

    if file_type.is_dir() {
        return Ok(Some(ListedEntry::Dir(name)));
    }

    if !file_type.is_file() {
        debug!("[list_dir] skipping non-regular entry {:?}", full_path);
        return Ok(None);
    }

    let metadata = entry
        .metadata()
        .map_err(|e| ListError::io(&full_path, e))?;

    let extension = extension_of(&name);

    Ok(Some(ListedEntry::File(FileEntry {
        name,
        size: metadata.len(),
        extension,
    })))
}

/// Lowercase extension of a file name, including the dot.
///
/// Leading dots belong to the name, so `.bashrc` has no extension while
/// `archive.tar.GZ` yields `.gz`.
pub fn extension_of(name: &str) -> String {
    let stem_start = name.len() - name.trim_start_matches('.').len();

    match name[stem_start..].rfind('.') {
        Some(idx) => name[stem_start + idx..].to_lowercase(),
        None => NO_EXTENSION.to_owned(),
    }
}

#[cfg(test)]
#[path = "lister_tests.rs"]
mod tests;
