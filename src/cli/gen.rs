use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::collectors::CommitCollector;
use crate::config;
use crate::display;
use crate::error::{DigestError, Result};
use crate::export::{self, ClipboardProvider, SystemClipboard};
use crate::filter::FilterState;
use crate::github::{CommitSource, GitHubClient};
use crate::identity;
use crate::models::{DateRange, DetailLevel, ReportContext};
use crate::renderer::Renderer;

/// Arguments of `gitdigest gen`
#[derive(Args, Debug, Clone, Default)]
pub struct GenArgs {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// GitHub username whose repositories are read
    #[arg(short, long, env = "GITDIGEST_USER")]
    pub user: Option<String>,

    /// Repository to fetch commits from (repeatable)
    #[arg(short, long = "repo")]
    pub repos: Vec<String>,

    /// Fetch from every repository the user owns
    #[arg(long, conflicts_with = "repos")]
    pub all_repos: bool,

    /// First day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day of the range (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub to: Option<String>,

    /// Use the last N days instead of --from/--to
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub days: Option<u32>,

    /// Only include commits from these repositories (repeatable)
    #[arg(long)]
    pub select: Vec<String>,

    /// Detail level 1-5 (out-of-range values fall back to 3)
    #[arg(short, long, allow_negative_numbers = true)]
    pub detail: Option<i64>,

    /// Fetch each commit individually to include line stats and file counts
    #[arg(long)]
    pub stats: bool,

    /// Copy the export to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Dry run - print to stdout instead of writing a file
    #[arg(long)]
    pub dry_run: bool,

    /// Directory to write the export to (overrides the config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Fetch commits and generate an export
pub fn run(args: GenArgs) -> Result<()> {
    let config = config::resolve(args.config.clone())?;

    let raw_detail = args
        .detail
        .unwrap_or_else(|| i64::from(config.export.detail_level));
    let detail = DetailLevel::from_level(raw_detail);
    if i64::from(detail.as_u8()) != raw_detail {
        warn!(
            "Detail level {} is out of range, using {}",
            raw_detail, detail
        );
    }

    // Everything that needs no network is checked first
    let range = resolve_range(&args, Utc::now())?;
    if !args.all_repos && args.repos.is_empty() {
        return Err(DigestError::MissingInput(
            "no repository selected; pass --repo <name> or --all-repos".to_string(),
        ));
    }

    let client = GitHubClient::new(&config.api);
    let session = super::open_session(&client);
    let username =
        identity::resolve_username(args.user.as_deref(), config.username.as_deref(), &session)?;

    let repositories: Vec<String> = if args.all_repos {
        client
            .list_repositories(&username)?
            .into_iter()
            .map(|r| r.name)
            .collect()
    } else {
        args.repos.clone()
    };
    if repositories.is_empty() {
        println!("{} has no repositories to export.", username);
        return Ok(());
    }

    let collector = CommitCollector::new(&config, &client);
    let commits = collector.collect(
        &username,
        &repositories,
        &range,
        args.stats || config.api.fetch_stats,
    )?;
    info!(total = commits.len(), "fetched commits");

    let filter = FilterState::new(args.select.iter().cloned(), detail);
    for name in &filter.selected {
        if !repositories.contains(name) {
            warn!("Selected repository '{}' was not fetched", name);
        }
    }
    let filtered = filter.apply(&commits);

    let context = ReportContext {
        username,
        repositories: repositories
            .into_iter()
            .filter(|r| filter.includes_repository(r))
            .collect(),
        range,
        detail,
        token_estimate: filtered.token_estimate,
        generated_at: Utc::now(),
    };
    let document = Renderer::new(&context).build(&filtered.commits);

    if args.dry_run {
        display::print_markdown(&document.content);
    } else {
        let output_dir = args
            .output
            .clone()
            .unwrap_or_else(|| config.export.output_dir.clone());
        let path = export::write_document(&document, &output_dir)?;
        println!("Export written to: {}", path.display());
        println!(
            "{} commits, ~{} tokens",
            filtered.commits.len(),
            document.token_estimate
        );
    }

    if args.copy {
        copy_export(&mut SystemClipboard, &document.content, args.dry_run);
    }

    Ok(())
}

/// Copy the export to `clipboard`. A failure is logged and leaves the
/// export where it was already written; returns whether the copy worked.
fn copy_export(clipboard: &mut dyn ClipboardProvider, content: &str, dry_run: bool) -> bool {
    match export::copy_with(clipboard, content) {
        Ok(()) => {
            println!("Copied to clipboard.");
            true
        }
        Err(e) => {
            let location = if dry_run { "above" } else { "on disk" };
            warn!("{}. The export is still available {}.", e, location);
            false
        }
    }
}

/// Turn --from/--to/--days into a range; one of --from or --days is required
fn resolve_range(args: &GenArgs, now: DateTime<Utc>) -> Result<DateRange> {
    if let Some(days) = args.days {
        return DateRange::last_days(days, now);
    }

    let from = args.from.as_deref().ok_or_else(|| {
        DigestError::MissingInput(
            "no date range given; pass --from <date> or --days <n>".to_string(),
        )
    })?;
    let from = parse_date(from)?;
    let to = match args.to.as_deref() {
        Some(to) => parse_date(to)?,
        None => now.date_naive(),
    };

    DateRange::from_dates(from, to)
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        DigestError::InvalidInput(format!(
            "invalid date '{}' (expected YYYY-MM-DD): {}",
            value, e
        ))
    })
}
