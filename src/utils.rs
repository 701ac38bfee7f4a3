use std::path::Path;

/// Display a path relative to `base`, or just the file name if outside.
/// Keeps listings short and avoids printing full system paths.
pub fn display_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| {
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "[path]".to_string())
        })
}

/// Truncate a string safely by character count, not byte count.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Title-case a directory name for display: `cloud-native_ops` becomes
/// `Cloud Native Ops`.
pub fn title_case(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_path_within_base() {
        let base = PathBuf::from("/home/user/channel/manuscript");
        let path = PathBuf::from("/home/user/channel/manuscript/devops/my-video.yaml");
        assert_eq!(display_path(&path, &base), "devops/my-video.yaml");
    }

    #[test]
    fn test_display_path_outside_base() {
        let base = PathBuf::from("/home/user/channel");
        let path = PathBuf::from("/etc/passwd");
        assert_eq!(display_path(&path, &base), "passwd");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("Hello 🦀 world", 10), "Hello 🦀...");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("devops"), "Devops");
        assert_eq!(title_case("cloud-native_ops"), "Cloud Native Ops");
        assert_eq!(title_case("AI"), "AI");
        assert_eq!(title_case("--odd--name"), "Odd Name");
    }
}
