//! Shared test utilities for the readme-locate workspace.
//!
//! This crate provides git fixtures built straight into the object
//! database, so tests can create symbolic links and executables without
//! touching the working tree. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`] — [`git::TreeSpec`] for describing and writing commit trees
//! - [`repo`] — [`TestRepo`] temporary repository with commit helpers

pub mod git;
pub mod repo;

pub use git::TreeSpec;
pub use repo::TestRepo;
