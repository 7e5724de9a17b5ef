//! Commit trees described in code and written with `git2`.

use std::collections::BTreeMap;

use git2::{Oid, Repository};

const MODE_TREE: i32 = 0o040000;
const MODE_BLOB: i32 = 0o100644;
const MODE_BLOB_EXECUTABLE: i32 = 0o100755;
const MODE_LINK: i32 = 0o120000;

#[derive(Debug, Clone)]
enum Node {
    Blob { content: Vec<u8>, mode: i32 },
    Dir(BTreeMap<String, Node>),
    Raw { id: Oid, mode: i32 },
}

/// Describes the tree of a commit.
///
/// Paths use `/` and create intermediate directories as needed.
///
/// ```rust,no_run
/// use readme_test_utils::TreeSpec;
///
/// let spec = TreeSpec::new()
///     .file("docs/README.md", "# Docs")
///     .symlink("README.md", "docs/README.md");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeSpec {
    root: BTreeMap<String, Node>,
}

impl TreeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular file.
    pub fn file(self, path: &str, content: &str) -> Self {
        self.insert(
            path,
            Node::Blob {
                content: content.as_bytes().to_vec(),
                mode: MODE_BLOB,
            },
        )
    }

    /// Add an executable file.
    pub fn executable(self, path: &str, content: &str) -> Self {
        self.insert(
            path,
            Node::Blob {
                content: content.as_bytes().to_vec(),
                mode: MODE_BLOB_EXECUTABLE,
            },
        )
    }

    /// Add a symbolic link whose blob holds `target`.
    pub fn symlink(self, path: &str, target: &str) -> Self {
        self.insert(
            path,
            Node::Blob {
                content: target.as_bytes().to_vec(),
                mode: MODE_LINK,
            },
        )
    }

    /// Add an empty directory.
    pub fn dir(self, path: &str) -> Self {
        self.insert(path, Node::Dir(BTreeMap::new()))
    }

    /// Add an entry pointing at an arbitrary object id with an arbitrary mode.
    ///
    /// Writing such a tree may require
    /// `git2::opts::strict_object_creation(false)`.
    pub fn raw(self, path: &str, id: Oid, mode: i32) -> Self {
        self.insert(path, Node::Raw { id, mode })
    }

    fn insert(mut self, path: &str, node: Node) -> Self {
        let components: Vec<&str> = path.split('/').filter(|c| !c.is_empty()).collect();
        let (name, parents) = components
            .split_last()
            .unwrap_or_else(|| panic!("TreeSpec: empty path {path:?}"));

        let mut dir = &mut self.root;
        for parent in parents {
            let node = dir
                .entry((*parent).to_string())
                .or_insert_with(|| Node::Dir(BTreeMap::new()));
            dir = match node {
                Node::Dir(children) => children,
                _ => panic!("TreeSpec: {parent:?} in {path:?} is not a directory"),
            };
        }
        dir.insert((*name).to_string(), node);
        self
    }

    /// Write all blobs and trees, returning the root tree id.
    ///
    /// # Panics
    /// Panics if any object cannot be written.
    pub fn write(&self, repo: &Repository) -> Oid {
        write_dir(repo, &self.root)
    }
}

fn write_dir(repo: &Repository, dir: &BTreeMap<String, Node>) -> Oid {
    let mut builder = repo
        .treebuilder(None)
        .unwrap_or_else(|e| panic!("TreeSpec: failed to create tree builder: {e}"));

    for (name, node) in dir {
        let (id, mode) = match node {
            Node::Blob { content, mode } => {
                let id = repo
                    .blob(content)
                    .unwrap_or_else(|e| panic!("TreeSpec: failed to write blob {name}: {e}"));
                (id, *mode)
            }
            Node::Dir(children) => (write_dir(repo, children), MODE_TREE),
            Node::Raw { id, mode } => (*id, *mode),
        };
        builder
            .insert(name, id, mode)
            .unwrap_or_else(|e| panic!("TreeSpec: failed to insert {name}: {e}"));
    }

    builder
        .write()
        .unwrap_or_else(|e| panic!("TreeSpec: failed to write tree: {e}"))
}
