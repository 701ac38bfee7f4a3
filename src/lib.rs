pub mod catalog;
pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod models;
pub mod publish;
pub mod utils;
pub mod validation;

pub use catalog::Catalog;
pub use error::CatalogError;

