//! Commit filtering
//!
//! Narrows a commit list to a set of repositories and recomputes the token
//! estimate for the chosen detail level.

use std::collections::BTreeSet;

use crate::models::{Commit, DetailLevel};

/// Repository selection plus detail level
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Selected repository names; empty means every repository
    pub selected: BTreeSet<String>,
    pub detail: DetailLevel,
}

/// Result of applying a `FilterState`
#[derive(Debug, Clone)]
pub struct FilteredCommits<'a> {
    pub commits: Vec<&'a Commit>,
    pub token_estimate: usize,
}

impl FilterState {
    pub fn new<I, S>(selected: I, detail: DetailLevel) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: selected.into_iter().map(Into::into).collect(),
            detail,
        }
    }

    pub fn includes_repository(&self, name: &str) -> bool {
        self.selected.is_empty() || self.selected.contains(name)
    }

    pub fn includes(&self, commit: &Commit) -> bool {
        self.includes_repository(&commit.repository)
    }

    /// Keep the selected commits in their original order
    pub fn apply<'a>(&self, commits: &'a [Commit]) -> FilteredCommits<'a> {
        let commits: Vec<&Commit> = commits.iter().filter(|c| self.includes(c)).collect();
        let token_estimate = self.detail.estimate_tokens(commits.len());

        FilteredCommits {
            commits,
            token_estimate,
        }
    }
}
