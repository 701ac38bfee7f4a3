//! Input validation for item names and categories.
//!
//! Names are free-form display strings; they only need to leave something
//! behind once sanitized into a file stem. Categories become directory names
//! verbatim, so they must be a single safe path segment.

use crate::error::{CatalogError, Result};
use crate::fs::naming::sanitize_name;

/// Maximum allowed length for display names and categories.
pub const MAX_NAME_LENGTH: usize = 200;

/// Reserved names that cannot be used as categories (case-insensitive).
const RESERVED_NAMES: &[&str] = &[
    ".", "..", "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7",
    "com8", "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Validate a display name before it is turned into a document path.
///
/// # Examples
///
/// ```
/// use reel::validation::validate_name;
///
/// assert!(validate_name("create", "My First Video").is_ok());
/// assert!(validate_name("create", "").is_err());
/// assert!(validate_name("create", "???").is_err());
/// ```
pub fn validate_name(op: &'static str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::invalid(op, "name cannot be empty"));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CatalogError::invalid(
            op,
            format!(
                "name too long: {} characters (max {MAX_NAME_LENGTH})",
                name.chars().count()
            ),
        ));
    }

    if sanitize_name(name).is_empty() {
        return Err(CatalogError::invalid(
            op,
            format!("name '{name}' has no characters usable in a file name"),
        ));
    }

    Ok(())
}

/// Validate a category, which is used verbatim as a directory name.
pub fn validate_category(op: &'static str, category: &str) -> Result<()> {
    if category.trim().is_empty() {
        return Err(CatalogError::invalid(op, "category cannot be empty"));
    }

    if category.chars().count() > MAX_NAME_LENGTH {
        return Err(CatalogError::invalid(
            op,
            format!("category too long (max {MAX_NAME_LENGTH} characters)"),
        ));
    }

    if category != category.trim() {
        return Err(CatalogError::invalid(
            op,
            format!("category '{category}' has leading or trailing whitespace"),
        ));
    }

    if category
        .chars()
        .any(|c| matches!(c, '/' | '\\' | ':' | '?' | '*' | '<' | '>' | '|' | '"') || c.is_control())
    {
        return Err(CatalogError::invalid(
            op,
            format!("category '{category}' must be a single directory name"),
        ));
    }

    if category.starts_with('.') || RESERVED_NAMES.contains(&category.to_lowercase().as_str()) {
        return Err(CatalogError::invalid(
            op,
            format!("category '{category}' uses a reserved name"),
        ));
    }

    Ok(())
}

/// Clap value parser for name arguments.
pub fn clap_name_validator(s: &str) -> std::result::Result<String, String> {
    validate_name("argument", s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

/// Clap value parser for category arguments.
pub fn clap_category_validator(s: &str) -> std::result::Result<String, String> {
    validate_category("argument", s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}
