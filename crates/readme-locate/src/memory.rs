//! In-memory tree snapshots
//!
//! A [`MemoryTree`] is a [`TreeSource`] built by hand, for callers that
//! already hold a directory listing and for exercising the resolver
//! without a repository.

use crate::path;
use crate::source::{MAX_LINK_DEPTH, TreeEntry, TreeSource};
use crate::{Error, Result};

/// What a [`MemoryEntry`] is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryKind {
    /// A regular file
    File,
    /// An executable file
    Executable,
    /// A symbolic link with its raw target
    Symlink(String),
    /// A directory with its entries
    Directory(Vec<MemoryEntry>),
    /// A directory whose listing fails with the given error
    Unlistable(Error),
}

/// An entry in a [`MemoryTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEntry {
    name: String,
    kind: MemoryKind,
}

impl MemoryEntry {
    pub fn new(name: impl Into<String>, kind: MemoryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn kind(&self) -> &MemoryKind {
        &self.kind
    }
}

impl TreeEntry for MemoryEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_dir(&self) -> bool {
        matches!(
            self.kind,
            MemoryKind::Directory(_) | MemoryKind::Unlistable(_)
        )
    }

    fn is_symlink(&self) -> bool {
        matches!(self.kind, MemoryKind::Symlink(_))
    }

    fn is_regular(&self) -> bool {
        matches!(self.kind, MemoryKind::File)
    }

    fn is_executable(&self) -> bool {
        matches!(self.kind, MemoryKind::Executable)
    }
}

/// A tree snapshot held in memory.
///
/// Entries keep insertion order, which is the order the resolver sees.
///
/// ```
/// use readme_locate::{MemoryTree, ReadmeResolver, TreeEntry};
///
/// let tree = MemoryTree::new()
///     .file("README.md")
///     .file("README.en.md")
///     .dir("docs", MemoryTree::new().file("README.md"));
///
/// let found = ReadmeResolver::new(&tree)
///     .resolve("", tree.entries(), "en", true)
///     .unwrap()
///     .unwrap();
/// assert_eq!(found.entry.name(), "README.en.md");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTree {
    entries: Vec<MemoryEntry>,
}

impl MemoryTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary entry.
    pub fn entry(mut self, entry: MemoryEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Add a regular file.
    pub fn file(self, name: &str) -> Self {
        self.entry(MemoryEntry::new(name, MemoryKind::File))
    }

    /// Add an executable file.
    pub fn executable(self, name: &str) -> Self {
        self.entry(MemoryEntry::new(name, MemoryKind::Executable))
    }

    /// Add a symbolic link pointing at `target`.
    pub fn symlink(self, name: &str, target: &str) -> Self {
        self.entry(MemoryEntry::new(name, MemoryKind::Symlink(target.into())))
    }

    /// Add a subdirectory.
    pub fn dir(self, name: &str, tree: MemoryTree) -> Self {
        self.entry(MemoryEntry::new(name, MemoryKind::Directory(tree.entries)))
    }

    /// Add a subdirectory whose listing fails with `error`.
    pub fn unlistable_dir(self, name: &str, error: Error) -> Self {
        self.entry(MemoryEntry::new(name, MemoryKind::Unlistable(error)))
    }

    /// Entries at the root of the tree.
    pub fn entries(&self) -> &[MemoryEntry] {
        &self.entries
    }

    /// Find the entry at `tree_path`.
    pub fn lookup(&self, tree_path: &str) -> Result<&MemoryEntry> {
        let mut entries = self.entries.as_slice();
        let mut found = None;

        for component in tree_path.split('/').filter(|c| !c.is_empty()) {
            if found.is_some() {
                entries = match found.map(MemoryEntry::kind) {
                    Some(MemoryKind::Directory(children)) => children.as_slice(),
                    _ => return Err(Error::not_exist(tree_path)),
                };
            }
            found = Some(
                entries
                    .iter()
                    .find(|e| e.name == component)
                    .ok_or_else(|| Error::not_exist(tree_path))?,
            );
        }

        found.ok_or_else(|| Error::not_exist(tree_path))
    }

    /// Entries of the directory at `tree_path`; the root when empty.
    pub fn list_path(&self, tree_path: &str) -> Result<Vec<MemoryEntry>> {
        if path::is_root(tree_path) {
            return Ok(self.entries.clone());
        }
        let dir = self.lookup(tree_path)?;
        self.list_entries(dir)
    }
}

impl TreeSource for MemoryTree {
    type Entry = MemoryEntry;

    fn list_entries(&self, dir: &MemoryEntry) -> Result<Vec<MemoryEntry>> {
        match &dir.kind {
            MemoryKind::Directory(children) => Ok(children.clone()),
            MemoryKind::Unlistable(error) => Err(error.clone()),
            _ => Err(Error::not_exist(dir.name.as_str())),
        }
    }

    fn follow_link(&self, full_path: &str, link: &MemoryEntry) -> Result<MemoryEntry> {
        let mut current_path = full_path.to_string();
        let mut current = link;

        for _ in 0..MAX_LINK_DEPTH {
            let MemoryKind::Symlink(target) = &current.kind else {
                return Ok(current.clone());
            };

            let resolved = path::resolve(path::parent(&current_path), target).ok_or_else(|| {
                Error::BrokenLink {
                    path: current_path.clone(),
                    message: format!("target {target:?} leaves the tree"),
                }
            })?;
            current = self.lookup(&resolved)?;
            current_path = resolved;
        }

        if current.is_symlink() {
            return Err(Error::TooManyLinks {
                path: full_path.to_string(),
            });
        }
        Ok(current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_nested() {
        let tree = MemoryTree::new().dir("docs", MemoryTree::new().file("README.md"));
        assert_eq!(tree.lookup("docs/README.md").unwrap().name(), "README.md");
        assert!(tree.lookup("docs/missing.md").unwrap_err().is_not_exist());
        assert!(tree.lookup("docs/README.md/x").unwrap_err().is_not_exist());
    }

    #[test]
    fn test_follow_link_chain() {
        let tree = MemoryTree::new()
            .symlink("README.md", "docs/intro.md")
            .dir("docs", MemoryTree::new().symlink("intro.md", "../GUIDE.md"))
            .executable("GUIDE.md");

        let link = tree.lookup("README.md").unwrap();
        let target = tree.follow_link("README.md", link).unwrap();
        assert_eq!(target.name(), "GUIDE.md");
        assert!(target.is_executable());
    }

    #[test]
    fn test_follow_link_loop_is_bounded() {
        let tree = MemoryTree::new().symlink("a", "b").symlink("b", "a");

        let link = tree.lookup("a").unwrap();
        assert_eq!(
            tree.follow_link("a", link),
            Err(Error::TooManyLinks { path: "a".into() })
        );
    }

    #[test]
    fn test_follow_link_outside_tree() {
        let tree = MemoryTree::new().symlink("README.md", "../README.md");
        let link = tree.lookup("README.md").unwrap();
        assert!(matches!(
            tree.follow_link("README.md", link),
            Err(Error::BrokenLink { .. })
        ));
    }
}
