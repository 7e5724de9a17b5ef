//! [`TestRepo`] temporary repository for README resolution tests.

use std::path::Path;

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

use crate::git::TreeSpec;

/// A temporary git repository that commits [`TreeSpec`]s onto `HEAD`.
///
/// # Example
///
/// ```rust,no_run
/// use readme_test_utils::{TestRepo, TreeSpec};
///
/// let repo = TestRepo::new();
/// repo.commit(&TreeSpec::new().file("docs/README.md", "# Docs"), "Add docs");
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
    repo: Repository,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Initialise an empty repository in a fresh temporary directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("TestRepo::new: failed to create temp dir");
        let repo = Repository::init(temp_dir.path())
            .expect("TestRepo::new: failed to init git repository");
        Self { temp_dir, repo }
    }

    /// Root of the working directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The underlying repository handle.
    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    /// Commit `spec` as the full tree of a new commit on `HEAD`.
    ///
    /// # Panics
    /// Panics if any git operation fails.
    pub fn commit(&self, spec: &TreeSpec, message: &str) -> Oid {
        let tree_id = spec.write(&self.repo);
        let tree = self
            .repo
            .find_tree(tree_id)
            .unwrap_or_else(|e| panic!("TestRepo::commit: tree vanished: {e}"));
        let signature = Signature::now("Test User", "test@test.com")
            .unwrap_or_else(|e| panic!("TestRepo::commit: bad signature: {e}"));

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .unwrap_or_else(|e| panic!("TestRepo::commit: failed to commit: {e}"))
    }

    /// Create a lightweight tag `name` at `commit`.
    pub fn tag(&self, name: &str, commit: Oid) {
        let object = self
            .repo
            .find_object(commit, None)
            .unwrap_or_else(|e| panic!("TestRepo::tag: commit not found: {e}"));
        self.repo
            .tag_lightweight(name, &object, false)
            .unwrap_or_else(|e| panic!("TestRepo::tag: failed to tag: {e}"));
    }
}
