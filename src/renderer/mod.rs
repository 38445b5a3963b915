//! Markdown renderer module
//!
//! Generates the exported commit history in Markdown format.
//! Renders sections: header, Commits, Summary.

pub mod commit;

pub use commit::format_commit;

use crate::export;
use crate::models::{Commit, ExportDocument, ReportContext, ReportStats};

/// Markdown renderer for commit history exports
pub struct Renderer<'a> {
    context: &'a ReportContext,
}

impl<'a> Renderer<'a> {
    pub fn new(context: &'a ReportContext) -> Self {
        Self { context }
    }

    /// Render the commits into an export document.
    ///
    /// Commits are rendered in the order given.
    pub fn build(&self, commits: &[&Commit]) -> ExportDocument {
        ExportDocument {
            content: self.render(commits),
            token_estimate: self.context.token_estimate,
            file_name: export::file_name(self.context),
        }
    }

    /// Render the complete document to Markdown
    pub fn render(&self, commits: &[&Commit]) -> String {
        let mut output = String::new();

        output.push_str(&self.render_header(commits.len()));
        output.push_str("\n\n");

        output.push_str(&self.render_commits(commits));
        output.push_str("\n\n");

        output.push_str(&self.render_summary(commits));

        output.trim_end().to_string() + "\n"
    }

    /// Render header section
    fn render_header(&self, total_commits: usize) -> String {
        let ctx = self.context;
        let mut output = String::new();

        output.push_str(&format!("# Commit History: {}\n\n", ctx.username));

        let repositories = if ctx.repositories.is_empty() {
            "all".to_string()
        } else {
            ctx.repositories.join(", ")
        };
        output.push_str(&format!("**Repositories:** {}\n", repositories));
        output.push_str(&format!(
            "**Date Range:** {} to {}\n",
            ctx.range.from().format("%Y-%m-%d"),
            ctx.range.to().format("%Y-%m-%d")
        ));
        output.push_str(&format!("**Detail Level:** {}\n", ctx.detail));
        output.push_str(&format!("**Total Commits:** {}\n", total_commits));
        output.push_str(&format!("**Estimated Tokens:** ~{}\n", ctx.token_estimate));
        output.push_str(&format!(
            "**Generated:** {}",
            ctx.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output
    }

    /// Render the per-commit blocks
    fn render_commits(&self, commits: &[&Commit]) -> String {
        let mut output = String::new();

        output.push_str("## Commits\n");

        if commits.is_empty() {
            output.push_str("\n*No commits in this range.*\n");
        }

        for (index, commit) in commits.iter().enumerate() {
            output.push('\n');
            output.push_str(&format_commit(commit, index, self.context.detail));
        }

        output
    }

    /// Render summary statistics
    fn render_summary(&self, commits: &[&Commit]) -> String {
        let stats = ReportStats::compute(commits, &self.context.range);
        let mut output = String::new();

        output.push_str("## Summary\n\n");

        output.push_str("### Commits by Repository\n\n");
        output.push_str("| Repository | Commits |\n");
        output.push_str("|------------|---------|\n");
        for (repo, count) in &stats.per_repository {
            output.push_str(&format!("| {} | {} |\n", repo, count));
        }

        output.push_str("\n### Top Authors\n\n");
        if stats.top_authors.is_empty() {
            output.push_str("*None*\n");
        }
        for (rank, (author, count)) in stats.top_authors.iter().enumerate() {
            let noun = if *count == 1 { "commit" } else { "commits" };
            output.push_str(&format!("{}. {} ({} {})\n", rank + 1, author, count, noun));
        }

        output.push_str("\n### Activity\n\n");
        let days = if stats.span_days == 1 { "day" } else { "days" };
        output.push_str(&format!("- **Time Span:** {} {}\n", stats.span_days, days));
        output.push_str(&format!(
            "- **Commits per Day:** {:.1}",
            stats.commits_per_day
        ));

        output
    }
}
