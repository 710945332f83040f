mod error;
mod lister;
mod record;

pub use error::ListError;
pub use lister::{extension_of, list_dir};
pub use record::{FileEntry, ListedEntry};
