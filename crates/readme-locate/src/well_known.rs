//! Well-known README fallback directories.

/// Directories searched for a README when the repository root has none.
///
/// Declaration order is search priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownDir {
    /// The `docs` directory
    Docs,
    /// The `.gitea` directory
    Gitea,
    /// The `.github` directory
    Github,
}

impl WellKnownDir {
    /// All well-known directories in search order.
    pub const ALL: [WellKnownDir; 3] = [Self::Docs, Self::Gitea, Self::Github];

    /// Canonical spelling of the directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Docs => "docs",
            Self::Gitea => ".gitea",
            Self::Github => ".github",
        }
    }

    /// Position in the search order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Match a directory name case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.as_str().eq_ignore_ascii_case(name))
    }

    /// Whether `name` uses the canonical spelling.
    pub fn is_canonical(&self, name: &str) -> bool {
        self.as_str() == name
    }
}

impl AsRef<str> for WellKnownDir {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for WellKnownDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_ignores_case() {
        assert_eq!(WellKnownDir::from_name("DOCS"), Some(WellKnownDir::Docs));
        assert_eq!(WellKnownDir::from_name(".GitHub"), Some(WellKnownDir::Github));
        assert_eq!(WellKnownDir::from_name("doc"), None);
    }

    #[test]
    fn test_search_order() {
        let names: Vec<_> = WellKnownDir::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(names, ["docs", ".gitea", ".github"]);
        assert_eq!(WellKnownDir::Github.index(), 2);
    }
}
