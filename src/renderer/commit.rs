//! Per-commit Markdown blocks
//!
//! Each detail level appends lines to the block of the level below it, so a
//! higher level never drops anything a lower one shows.

use crate::models::{Commit, DetailLevel};

/// Render one commit as a Markdown block.
///
/// `index` is the zero-based position of the commit in the export.
pub fn format_commit(commit: &Commit, index: usize, level: DetailLevel) -> String {
    let mut output = format!(
        "### {}. `{}` {}\n",
        index + 1,
        commit.short_sha(),
        commit.title()
    );

    if level >= DetailLevel::Basic {
        output.push('\n');
        output.push_str(&format!("- **Author:** {}\n", commit.author_name));
        output.push_str(&format!(
            "- **Date:** {}\n",
            commit.authored_at.format("%Y-%m-%d")
        ));
    }

    if level >= DetailLevel::Standard {
        output.push_str(&format!(
            "- **Timestamp:** {}\n",
            commit.authored_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    if level >= DetailLevel::Detailed {
        output.push_str(&format!("- **Email:** {}\n", commit.author_email));
        output.push_str(&format!("- **Repository:** {}\n", commit.repository));
        output.push_str(&format!("- **URL:** {}\n", commit.url));
    }

    if level >= DetailLevel::Full {
        output.push_str(&format!("- **SHA:** `{}`\n", commit.sha));
        if let Some(stats) = commit.stats {
            output.push_str(&format!(
                "- **Changes:** +{} / -{}\n",
                stats.additions, stats.deletions
            ));
        }
        if let Some(files) = commit.files_changed {
            output.push_str(&format!("- **Files Changed:** {}\n", files));
        }
    }

    if level >= DetailLevel::Standard {
        if let Some(body) = commit.body() {
            output.push_str("\n```text\n");
            output.push_str(body);
            output.push_str("\n```\n");
        }
    }

    output
}
