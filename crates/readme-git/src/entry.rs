//! Owned tree entries

use git2::Oid;
use readme_locate::TreeEntry;

const MODE_TREE: i32 = 0o040000;
const MODE_BLOB: i32 = 0o100644;
const MODE_BLOB_GROUP_WRITABLE: i32 = 0o100664;
const MODE_BLOB_EXECUTABLE: i32 = 0o100755;
const MODE_LINK: i32 = 0o120000;

/// One entry of a git tree, detached from the tree it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitEntry {
    name: String,
    id: Oid,
    filemode: i32,
}

impl GitEntry {
    pub fn new(name: impl Into<String>, id: Oid, filemode: i32) -> Self {
        Self {
            name: name.into(),
            id,
            filemode,
        }
    }

    /// Entry standing for the root tree of a commit.
    pub(crate) fn root(id: Oid) -> Self {
        Self::new("", id, MODE_TREE)
    }

    /// Object id of the blob, tree or submodule commit.
    pub fn id(&self) -> Oid {
        self.id
    }

    /// Raw git file mode.
    pub fn filemode(&self) -> i32 {
        self.filemode
    }
}

impl From<&git2::TreeEntry<'_>> for GitEntry {
    fn from(entry: &git2::TreeEntry<'_>) -> Self {
        // Non UTF-8 names can never match a README suffix
        let name = String::from_utf8_lossy(entry.name_bytes()).into_owned();
        Self::new(name, entry.id(), entry.filemode())
    }
}

impl TreeEntry for GitEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_dir(&self) -> bool {
        self.filemode == MODE_TREE
    }

    fn is_symlink(&self) -> bool {
        self.filemode == MODE_LINK
    }

    fn is_regular(&self) -> bool {
        matches!(self.filemode, MODE_BLOB | MODE_BLOB_GROUP_WRITABLE)
    }

    fn is_executable(&self) -> bool {
        self.filemode == MODE_BLOB_EXECUTABLE
    }
}
