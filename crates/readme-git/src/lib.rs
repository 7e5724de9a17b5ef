//! Git backend for README resolution
//!
//! Reads tree listings and symbolic links out of a commit snapshot with
//! `git2` and feeds them to [`readme_locate::ReadmeResolver`].

pub mod entry;
pub mod error;
pub mod locate;
pub mod tree;

pub use entry::GitEntry;
pub use error::{Error, Result};
pub use locate::{LocatedReadme, locate_readme};
pub use tree::GitTree;
