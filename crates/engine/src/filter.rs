use std::collections::BTreeSet;

/// Normalize a user-supplied extension token: lowercase with a leading dot.
///
/// `"py"`, `".py"` and `"PY"` all become `".py"`.
pub fn normalize_extension(token: &str) -> String {
    let token = token.trim().to_lowercase();
    if token.starts_with('.') {
        token
    } else {
        format!(".{token}")
    }
}

/// Allow-list of extensions restricting which files are aggregated.
///
/// Directories are never subject to the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    exts: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Build a filter from raw tokens. An empty token list means no filter.
    pub fn from_tokens<I, S>(tokens: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exts: BTreeSet<String> = tokens
            .into_iter()
            .map(|t| normalize_extension(t.as_ref()))
            .collect();

        if exts.is_empty() {
            None
        } else {
            Some(Self { exts })
        }
    }

    /// `extension` is expected in the lister's form (lowercase, dotted).
    pub fn allows(&self, extension: &str) -> bool {
        self.exts.contains(extension)
    }

    /// Normalized extensions in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.exts.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.exts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exts.is_empty()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
