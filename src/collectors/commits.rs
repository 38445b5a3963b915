use tracing::{debug, info};

use crate::config::Config;
use crate::error::{DigestError, Result};
use crate::github::{CommitSource, PageRequest};
use crate::models::{Commit, DateRange};

/// Commit collector that pages through a remote commit listing
pub struct CommitCollector<'a> {
    config: &'a Config,
    source: &'a dyn CommitSource,
}

impl<'a> CommitCollector<'a> {
    pub fn new(config: &'a Config, source: &'a dyn CommitSource) -> Self {
        Self { config, source }
    }

    /// Collect commits from each repository in turn.
    ///
    /// The first failure aborts the whole collection; nothing collected so
    /// far is returned.
    pub fn collect(
        &self,
        owner: &str,
        repositories: &[String],
        range: &DateRange,
        with_stats: bool,
    ) -> Result<Vec<Commit>> {
        let mut all_commits = Vec::new();

        for repo in repositories {
            let mut commits = self.collect_repository(owner, repo, range)?;
            if with_stats {
                commits = self.attach_stats(owner, repo, commits)?;
            }
            info!(repository = %repo, commits = commits.len(), "collected commits");
            all_commits.extend(commits);
        }

        Ok(all_commits)
    }

    /// Collect every commit of one repository within `range`.
    ///
    /// Pages are requested one at a time until a short or empty page comes
    /// back. A full page at `max_pages` is an error.
    pub fn collect_repository(
        &self,
        owner: &str,
        repo: &str,
        range: &DateRange,
    ) -> Result<Vec<Commit>> {
        let per_page = self.config.api.page_size;
        let max_pages = self.config.api.max_pages;
        let mut commits = Vec::new();

        for page in 1..=max_pages {
            let items = self.source.commit_page(&PageRequest {
                owner,
                repo,
                range,
                page,
                per_page,
            })?;

            let count = items.len();
            debug!(repository = %repo, page, count, "fetched page");
            commits.extend(items.into_iter().map(|item| item.into_commit(repo)));

            if count < per_page {
                // since/until filter on the committer date, the report uses the author date
                let outside = commits
                    .iter()
                    .filter(|c| !range.contains(c.authored_at))
                    .count();
                if outside > 0 {
                    debug!(repository = %repo, outside, "commits authored outside the range");
                }
                return Ok(commits);
            }
        }

        Err(DigestError::PageLimit(max_pages))
    }

    /// Replace each commit with its detailed form, which carries stats and files
    fn attach_stats(&self, owner: &str, repo: &str, commits: Vec<Commit>) -> Result<Vec<Commit>> {
        commits
            .iter()
            .map(|commit| {
                self.source
                    .commit_detail(owner, repo, &commit.sha)
                    .map(|detail| detail.into_commit(repo))
            })
            .collect()
    }
}
