//! Starter script written beside each new document.

use std::fs;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::models::Item;

const DEFAULT_TEMPLATE: &str = "\
# {{name}}

Category: {{category}}

## Hook

## Intro

## Main

## Outro
";

/// Fill the template at `template` (or the built-in one) with the item's
/// name and category. Only `{{name}}` and `{{category}}` are substituted.
pub(super) fn render(template: Option<&Path>, item: &Item) -> Result<String> {
    let template = match template {
        Some(path) => fs::read_to_string(path).map_err(|e| CatalogError::io("read template", path, e))?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    Ok(template
        .replace("{{name}}", &item.name)
        .replace("{{category}}", &item.category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_template() {
        let item = Item::new("My Video".to_string(), "devops".to_string());
        let script = render(None, &item).unwrap();
        assert!(script.starts_with("# My Video\n"));
        assert!(script.contains("Category: devops"));
    }

    #[test]
    fn test_custom_template() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("script.md");
        fs::write(&path, "{{category}} / {{name}} / {{unknown}}").unwrap();

        let item = Item::new("Clip".to_string(), "ai".to_string());
        assert_eq!(
            render(Some(&path), &item).unwrap(),
            "ai / Clip / {{unknown}}"
        );
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let item = Item::new("Clip".to_string(), "ai".to_string());
        let err = render(Some(Path::new("/definitely/missing.md")), &item).unwrap_err();
        assert!(err.is_not_found());
    }
}
