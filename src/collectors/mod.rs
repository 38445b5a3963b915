//! Data collectors module
//!
//! Implements the commit collector, which pages through a remote commit
//! listing and tags each commit with its repository.
pub mod commits;

pub use commits::CommitCollector;
