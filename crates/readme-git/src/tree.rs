//! Commit snapshots as a [`TreeSource`]

use std::path::Path;

use git2::{Commit, ErrorCode, Oid, Repository, Tree};
use readme_locate::source::MAX_LINK_DEPTH;
use readme_locate::{TreeEntry, TreeSource, path};

use crate::{Error, GitEntry, Result};

/// The tree of one commit in a repository.
pub struct GitTree<'repo> {
    repo: &'repo Repository,
    commit_id: Oid,
    root: Tree<'repo>,
}

impl<'repo> GitTree<'repo> {
    /// Open the tree of the commit `rev` points to.
    ///
    /// `rev` is any revision spec git understands: a branch, tag, `HEAD`,
    /// or an object id.
    pub fn open(repo: &'repo Repository, rev: &str) -> Result<Self> {
        let commit = repo
            .revparse_single(rev)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| match e.code() {
                ErrorCode::NotFound | ErrorCode::InvalidSpec | ErrorCode::Ambiguous => {
                    Error::RevisionNotFound {
                        rev: rev.to_string(),
                    }
                }
                _ => Error::Git(e),
            })?;
        Self::from_commit(repo, &commit)
    }

    /// Use the tree of an already resolved commit.
    pub fn from_commit(repo: &'repo Repository, commit: &Commit<'repo>) -> Result<Self> {
        Ok(Self {
            repo,
            commit_id: commit.id(),
            root: commit.tree()?,
        })
    }

    /// Id of the commit this tree belongs to.
    pub fn commit_id(&self) -> Oid {
        self.commit_id
    }

    /// Canonical form of a caller-supplied tree path.
    ///
    /// Leading and trailing slashes, `.` and `..` are folded away, so
    /// `./docs/` and `/docs` both become `docs` and the root becomes `""`.
    /// Paths climbing above the root are rejected.
    pub fn normalize_path(tree_path: &str) -> Result<String> {
        path::resolve("", tree_path.trim_start_matches('/')).ok_or_else(|| Error::InvalidPath {
            path: tree_path.to_string(),
        })
    }

    /// Entry at `tree_path`; the root tree itself when the path is empty.
    pub fn entry_at(&self, tree_path: &str) -> Result<GitEntry> {
        let normalized = Self::normalize_path(tree_path)?;
        Ok(self.lookup(&normalized)?)
    }

    /// Entries of the directory at `tree_path`.
    pub fn list_path(&self, tree_path: &str) -> Result<Vec<GitEntry>> {
        let normalized = Self::normalize_path(tree_path)?;
        if path::is_root(&normalized) {
            return Ok(self.root.iter().map(|e| GitEntry::from(&e)).collect());
        }

        let entry = self.lookup(&normalized)?;
        if !entry.is_dir() {
            return Err(Error::NotADirectory {
                path: tree_path.to_string(),
            });
        }
        Ok(self.list_entries(&entry)?)
    }

    /// Raw contents of a blob entry.
    pub fn read_blob(&self, entry: &GitEntry) -> Result<Vec<u8>> {
        Ok(self.repo.find_blob(entry.id())?.content().to_vec())
    }

    fn lookup(&self, tree_path: &str) -> readme_locate::Result<GitEntry> {
        if path::is_root(tree_path) {
            return Ok(GitEntry::root(self.root.id()));
        }

        self.root
            .get_path(Path::new(tree_path.trim_matches('/')))
            .map(|e| GitEntry::from(&e))
            .map_err(|e| match e.code() {
                ErrorCode::NotFound => readme_locate::Error::not_exist(tree_path),
                _ => readme_locate::Error::Listing {
                    path: tree_path.to_string(),
                    message: e.message().to_string(),
                },
            })
    }

    fn link_target(&self, link_path: &str, link: &GitEntry) -> readme_locate::Result<String> {
        let broken = |message: String| readme_locate::Error::BrokenLink {
            path: link_path.to_string(),
            message,
        };

        let blob = self
            .repo
            .find_blob(link.id())
            .map_err(|e| broken(e.message().to_string()))?;
        let target = std::str::from_utf8(blob.content())
            .map_err(|_| broken("link target is not valid UTF-8".to_string()))?;
        Ok(target.to_string())
    }
}

impl TreeSource for GitTree<'_> {
    type Entry = GitEntry;

    fn list_entries(&self, dir: &GitEntry) -> readme_locate::Result<Vec<GitEntry>> {
        if !dir.is_dir() {
            return Err(readme_locate::Error::not_exist(dir.name()));
        }

        let tree = self.repo.find_tree(dir.id()).map_err(|e| match e.code() {
            ErrorCode::NotFound => readme_locate::Error::not_exist(dir.name()),
            _ => readme_locate::Error::Listing {
                path: dir.name().to_string(),
                message: e.message().to_string(),
            },
        })?;

        Ok(tree.iter().map(|e| GitEntry::from(&e)).collect())
    }

    fn follow_link(&self, full_path: &str, link: &GitEntry) -> readme_locate::Result<GitEntry> {
        let mut current_path = full_path.to_string();
        let mut current = link.clone();

        for _ in 0..MAX_LINK_DEPTH {
            if !current.is_symlink() {
                return Ok(current);
            }

            let target = self.link_target(&current_path, &current)?;
            let resolved = path::resolve(path::parent(&current_path), &target).ok_or_else(|| {
                readme_locate::Error::BrokenLink {
                    path: current_path.clone(),
                    message: format!("target {target:?} leaves the repository"),
                }
            })?;

            tracing::trace!(link = %current_path, target = %resolved, "Following link");
            current = self.lookup(&resolved)?;
            current_path = resolved;
        }

        if current.is_symlink() {
            return Err(readme_locate::Error::TooManyLinks {
                path: full_path.to_string(),
            });
        }
        Ok(current)
    }
}
