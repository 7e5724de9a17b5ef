//! Backend traits for versioned tree storage

use crate::Result;

/// Maximum number of links followed before giving up on a chain.
pub const MAX_LINK_DEPTH: usize = 10;

/// One named entry in a single level of a tree snapshot.
pub trait TreeEntry: Clone {
    /// Entry name, including any extension.
    fn name(&self) -> &str;

    /// Whether the entry is a subdirectory.
    fn is_dir(&self) -> bool;

    /// Whether the entry is a symbolic link.
    fn is_symlink(&self) -> bool;

    /// Whether the entry is a regular, non-executable file.
    fn is_regular(&self) -> bool;

    /// Whether the entry is an executable file.
    fn is_executable(&self) -> bool;
}

/// Access to the snapshot a set of entries was listed from.
///
/// Implementations are the only place resolution touches storage.
pub trait TreeSource {
    /// Entry type produced by this source
    type Entry: TreeEntry;

    /// List the entries of the directory `dir`.
    ///
    /// Returns [`crate::Error::NotExist`] when `dir` does not resolve to a
    /// listable tree.
    fn list_entries(&self, dir: &Self::Entry) -> Result<Vec<Self::Entry>>;

    /// Follow the symbolic link `link`, located at `full_path`, to its
    /// final non-link target.
    fn follow_link(&self, full_path: &str, link: &Self::Entry) -> Result<Self::Entry>;
}
