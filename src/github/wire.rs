//! Response shapes of the GitHub REST API
//!
//! Only the fields gitdigest reads are declared; everything the API may leave
//! out is optional.

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::Deserialize;
use tracing::warn;

use crate::models::{Commit, CommitStats};

/// One entry of `GET /repos/{owner}/{repo}/commits` (or the single-commit endpoint)
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCommit {
    pub sha: String,
    pub commit: CommitPayload,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub stats: Option<RemoteStats>,
    /// Only counted, so the entries themselves are skipped
    #[serde(default)]
    pub files: Option<Vec<IgnoredAny>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitPayload {
    #[serde(default)]
    pub author: Option<Signature>,
    #[serde(default)]
    pub committer: Option<Signature>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RemoteStats {
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
}

/// `GET /user`
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteProfile {
    pub login: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Error body GitHub sends with non-success responses
#[derive(Debug, Deserialize)]
pub struct RemoteError {
    pub message: String,
}

impl RemoteCommit {
    /// Build a domain commit tagged with the repository it came from
    pub fn into_commit(self, repository: &str) -> Commit {
        let (author_name, author_email, authored_at) = match self.commit.author {
            Some(sig) => (sig.name, sig.email, sig.date),
            None => (None, None, None),
        };
        let committed_at = self.commit.committer.and_then(|sig| sig.date);
        let authored_at = match authored_at.or(committed_at) {
            Some(date) => date,
            None => {
                warn!(sha = %self.sha, "commit has no author or committer date");
                DateTime::<Utc>::UNIX_EPOCH
            }
        };

        Commit {
            sha: self.sha,
            author_name: author_name.unwrap_or_else(|| "Unknown".to_string()),
            author_email: author_email.unwrap_or_default(),
            authored_at,
            message: self.commit.message,
            repository: repository.to_string(),
            url: self.html_url,
            stats: self.stats.map(|s| CommitStats {
                additions: s.additions,
                deletions: s.deletions,
            }),
            files_changed: self.files.map(|files| files.len()),
        }
    }
}
