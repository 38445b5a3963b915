use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Commit Models
// ============================================================================

/// Line counts reported for a single commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStats {
    pub additions: u64,
    pub deletions: u64,
}

/// A commit fetched from a remote repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Full commit SHA
    pub sha: String,
    /// Author name
    pub author_name: String,
    /// Author email
    pub author_email: String,
    /// Authored timestamp
    pub authored_at: DateTime<Utc>,
    /// Full commit message (title line plus optional body)
    pub message: String,
    /// Name of the repository this commit was fetched from
    pub repository: String,
    /// Canonical web URL of the commit
    pub url: String,
    /// Additions/deletions, only present when commit details were fetched
    pub stats: Option<CommitStats>,
    /// Number of changed files, only present when commit details were fetched
    pub files_changed: Option<usize>,
}

impl Commit {
    /// Short commit hash (first 7 characters)
    pub fn short_sha(&self) -> &str {
        let end = self
            .sha
            .char_indices()
            .nth(7)
            .map(|(i, _)| i)
            .unwrap_or(self.sha.len());
        &self.sha[..end]
    }

    /// First line of the commit message
    pub fn title(&self) -> &str {
        self.message.lines().next().unwrap_or("").trim()
    }

    /// Message body after the title line, if it has any content
    pub fn body(&self) -> Option<&str> {
        let (_, rest) = self.message.split_once('\n')?;
        let body = rest.trim();
        (!body.is_empty()).then_some(body)
    }
}

// ============================================================================
// Repository Models
// ============================================================================

/// A repository as returned by the listing call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}
