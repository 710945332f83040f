use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("'{}' is not a valid directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ListError::Io {
            path: path.into(),
            source,
        }
    }
}
