//! Item file naming
//!
//! Documents live at `{root}/{category}/{sanitized-name}.yaml`, with the
//! optional script beside them under a different extension:
//! - `"My First Video"` in `devops` → `devops/my-first-video.yaml`
//! - `"What is K8s?"` in `devops` → `devops/what-is-k8s.yaml`
//!
//! The mapping from display name to file stem is stable: the same name always
//! produces the same path.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Extension of item documents.
pub const DOCUMENT_EXTENSION: &str = "yaml";

/// Characters that are illegal in file names on at least one platform.
const ILLEGAL_CHARS: &[char] = &[':', '/', '\\', '?', '*', '<', '>', '|', '"'];

static REPEATED_HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("Invalid regex pattern"));

/// Derive a file stem from a free-form display name.
///
/// Lower-cases, turns whitespace into hyphens, strips characters illegal in
/// file names, collapses repeated hyphens and trims hyphens from both ends.
/// Returns an empty string when nothing usable remains.
pub fn sanitize_name(name: &str) -> String {
    let replaced: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !ILLEGAL_CHARS.contains(c))
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();

    REPEATED_HYPHENS
        .replace_all(&replaced, "-")
        .trim_matches('-')
        .to_string()
}

/// Path of the document for `name` within `category` under `root`.
pub fn document_path(root: &Path, category: &str, name: &str) -> PathBuf {
    root.join(category)
        .join(format!("{}.{DOCUMENT_EXTENSION}", sanitize_name(name)))
}

/// Path of the auxiliary script that accompanies a document.
pub fn script_path(document_path: &Path, script_extension: &str) -> PathBuf {
    document_path.with_extension(script_extension)
}
