//! Locate the README of a directory inside a commit

use readme_locate::{ReadmeResolver, TreeEntry, TreeSource, path};

use crate::{GitEntry, GitTree, Result};

/// A README found for a directory, with the paths needed to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedReadme {
    /// Well-known directory the README came from, empty if none
    pub subfolder: String,

    /// The selected entry, possibly a symbolic link
    pub entry: GitEntry,

    /// Path relative to the searched directory, e.g. `docs/README.md`
    pub path: String,

    /// Path from the repository root
    pub full_path: String,

    /// File whose contents represent the README; `None` when a link
    /// README no longer resolves
    pub target: Option<GitEntry>,
}

impl LocatedReadme {
    /// Whether the selected entry is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        self.entry.is_symlink()
    }
}

/// Find the README representing `tree_path` in `tree`.
///
/// `tree_path` is normalized first (see [`GitTree::normalize_path`]), so
/// the returned paths never carry `.` or `..` components. Fallback to
/// `docs`, `.gitea` and `.github` is only attempted at the repository root.
pub fn locate_readme(
    tree: &GitTree<'_>,
    tree_path: &str,
    locale: &str,
    markup_extension: &str,
) -> Result<Option<LocatedReadme>> {
    let normalized = GitTree::normalize_path(tree_path)?;
    let tree_path = normalized.as_str();
    let entries = tree.list_path(tree_path)?;
    let at_root = path::is_root(tree_path);

    tracing::debug!(
        commit = %tree.commit_id(),
        path = %tree_path,
        locale = %locale,
        entries = entries.len(),
        "Resolving README"
    );

    let resolver = ReadmeResolver::with_markup_extension(tree, markup_extension);
    let Some(found) = resolver.resolve(tree_path, &entries, locale, at_root)? else {
        return Ok(None);
    };

    let relative = found.relative_path();
    let full_path = path::join(tree_path, &relative);
    let target = if found.entry.is_symlink() {
        match tree.follow_link(&full_path, &found.entry) {
            Ok(target) => Some(target),
            Err(e) => {
                tracing::debug!(path = %full_path, error = %e, "README link target vanished");
                None
            }
        }
    } else {
        Some(found.entry.clone())
    };

    Ok(Some(LocatedReadme {
        subfolder: found.subfolder,
        entry: found.entry,
        path: relative,
        full_path,
        target,
    }))
}
