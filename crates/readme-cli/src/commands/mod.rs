//! Command implementations for readme-cli

pub mod extensions;
pub mod find;

pub use extensions::run_extensions;
pub use find::{FindOptions, run_find};
