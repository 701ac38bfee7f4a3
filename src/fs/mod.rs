pub mod atomic;
pub mod documents;
pub mod index;
pub mod naming;
pub mod workspace;

pub use documents::{read_item, remove_file, write_item, write_script};
pub use index::{CatalogIndex, IndexEntry};
pub use naming::{sanitize_name, DOCUMENT_EXTENSION};
pub use workspace::Workspace;
