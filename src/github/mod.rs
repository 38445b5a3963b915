//! GitHub REST API access
//!
//! `CommitSource` is the seam between the collectors and the network;
//! `GitHubClient` is the real implementation.

mod client;
pub mod wire;

pub use client::GitHubClient;
pub use wire::{RemoteCommit, RemoteProfile};

use crate::error::Result;
use crate::models::{DateRange, Repository};

/// One page of a commit listing
#[derive(Debug, Clone, Copy)]
pub struct PageRequest<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
    pub range: &'a DateRange,
    /// 1-based page number
    pub page: usize,
    pub per_page: usize,
}

/// Read-only access to a commit-hosting API
pub trait CommitSource {
    /// List the repositories owned by `owner`
    fn list_repositories(&self, owner: &str) -> Result<Vec<Repository>>;

    /// Fetch one page of commits authored within the request's range
    fn commit_page(&self, request: &PageRequest<'_>) -> Result<Vec<RemoteCommit>>;

    /// Fetch a single commit including its stats and changed files
    fn commit_detail(&self, owner: &str, repo: &str, sha: &str) -> Result<RemoteCommit>;
}
