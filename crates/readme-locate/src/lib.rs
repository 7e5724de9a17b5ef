//! README resolution for versioned directory trees
//!
//! Picks the one README that represents a directory level, honouring the
//! reader's locale, extension classes, natural-order tie-breaks, symbolic
//! links and the root-only `docs`/`.gitea`/`.github` fallback.

pub mod error;
pub mod extensions;
pub mod memory;
pub mod natural;
pub mod path;
pub mod resolver;
pub mod source;
pub mod well_known;

pub use error::{Error, Result};
pub use extensions::{localized_extensions, readme_slot, suffix_priorities};
pub use memory::{MemoryEntry, MemoryTree};
pub use natural::{natural_cmp, natural_sort_less};
pub use resolver::{ReadmeMatch, ReadmeResolver};
pub use source::{TreeEntry, TreeSource};
pub use well_known::WellKnownDir;
