//! Slash-separated paths inside a tree snapshot
//!
//! Tree paths are relative to the snapshot root, use `/` as separator
//! and the empty string denotes the root itself.

/// Whether `path` denotes the root of the tree.
pub fn is_root(path: &str) -> bool {
    matches!(path.trim_matches('/'), "" | ".")
}

/// Join two tree path segments, dropping empty ones.
pub fn join(base: &str, segment: &str) -> String {
    let base = base.trim_matches('/');
    let segment = segment.trim_matches('/');
    match (base.is_empty(), segment.is_empty()) {
        (true, _) => segment.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{base}/{segment}"),
    }
}

/// Directory part of `path`, or the root when it has none.
pub fn parent(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[..idx],
        None => "",
    }
}

/// Resolve `target` relative to the directory `base_dir`.
///
/// `.` and empty components are dropped and `..` pops one level. Returns
/// `None` for absolute targets and for targets that climb above the root.
pub fn resolve(base_dir: &str, target: &str) -> Option<String> {
    if target.starts_with('/') {
        return None;
    }

    let mut components: Vec<&str> = Vec::new();
    for component in base_dir.split('/').chain(target.split('/')) {
        match component {
            "" | "." => {}
            ".." => {
                components.pop()?;
            }
            other => components.push(other),
        }
    }

    Some(components.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "README.md", "README.md")]
    #[case("docs", "README.md", "docs/README.md")]
    #[case("docs/", "/README.md", "docs/README.md")]
    #[case("docs", "", "docs")]
    #[case("", "", "")]
    fn test_join(#[case] base: &str, #[case] segment: &str, #[case] expected: &str) {
        assert_eq!(join(base, segment), expected);
    }

    #[rstest]
    #[case("README.md", "")]
    #[case("docs/README.md", "docs")]
    #[case("a/b/c", "a/b")]
    fn test_parent(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(parent(path), expected);
    }

    #[rstest]
    #[case("", "docs/README.md", Some("docs/README.md"))]
    #[case("docs", "../README.md", Some("README.md"))]
    #[case("docs", "./guide/../README.md", Some("docs/README.md"))]
    #[case("", "../README.md", None)]
    #[case("docs", "/etc/passwd", None)]
    fn test_resolve(#[case] base: &str, #[case] target: &str, #[case] expected: Option<&str>) {
        assert_eq!(resolve(base, target).as_deref(), expected);
    }

    #[test]
    fn test_is_root() {
        assert!(is_root(""));
        assert!(is_root("/"));
        assert!(is_root("."));
        assert!(!is_root("docs"));
    }
}
