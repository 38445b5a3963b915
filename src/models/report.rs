use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use super::detail::DetailLevel;
use super::source::Commit;
use crate::error::{DigestError, Result};

/// Maximum number of authors listed in the summary
pub const TOP_AUTHOR_LIMIT: usize = 5;

const SECONDS_PER_DAY: i64 = 86_400;

/// Inclusive time window for commit extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl DateRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self> {
        if from > to {
            return Err(DigestError::InvalidInput(format!(
                "date range starts after it ends ({} > {})",
                from.format("%Y-%m-%d %H:%M:%S UTC"),
                to.format("%Y-%m-%d %H:%M:%S UTC")
            )));
        }
        Ok(Self { from, to })
    }

    /// Whole calendar days: `from` at 00:00:00, `to` at 23:59:59 UTC
    pub fn from_dates(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        Self::new(
            from.and_time(NaiveTime::MIN).and_utc(),
            to.and_time(end_of_day).and_utc(),
        )
    }

    /// The last `days` days up to `now`
    pub fn last_days(days: u32, now: DateTime<Utc>) -> Result<Self> {
        let from = Duration::try_days(i64::from(days))
            .and_then(|span| now.checked_sub_signed(span))
            .ok_or_else(|| {
                DigestError::InvalidInput(format!(
                    "--days {} reaches past the supported dates",
                    days
                ))
            })?;
        Ok(Self { from, to: now })
    }

    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn to(&self) -> DateTime<Utc> {
        self.to
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.from <= instant && instant <= self.to
    }

    /// Length of the range in whole days, rounded up and never below 1
    pub fn span_days(&self) -> i64 {
        let seconds = (self.to - self.from).num_seconds();
        let days = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
        days.max(1)
    }
}

/// Everything the report header needs besides the commits themselves
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub username: String,
    /// Repositories the report covers, in display order
    pub repositories: Vec<String>,
    pub range: DateRange,
    pub detail: DetailLevel,
    pub token_estimate: usize,
    pub generated_at: DateTime<Utc>,
}

/// A generated Markdown export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub content: String,
    pub token_estimate: usize,
    pub file_name: String,
}

/// Summary statistics over a list of commits
#[derive(Debug, Clone, PartialEq)]
pub struct ReportStats {
    pub total_commits: usize,
    /// Commit count per repository, in first-encounter order
    pub per_repository: Vec<(String, usize)>,
    /// Most active authors, count descending, ties in first-encounter order
    pub top_authors: Vec<(String, usize)>,
    pub span_days: i64,
    pub commits_per_day: f64,
}

impl ReportStats {
    pub fn compute(commits: &[&Commit], range: &DateRange) -> Self {
        let per_repository =
            count_in_encounter_order(commits.iter().map(|c| c.repository.as_str()));

        let mut top_authors =
            count_in_encounter_order(commits.iter().map(|c| c.author_name.as_str()));
        // sort_by is stable, so equal counts keep encounter order
        top_authors.sort_by(|a, b| b.1.cmp(&a.1));
        top_authors.truncate(TOP_AUTHOR_LIMIT);

        let span_days = range.span_days();
        let commits_per_day = commits.len() as f64 / span_days as f64;

        Self {
            total_commits: commits.len(),
            per_repository,
            top_authors,
            span_days,
            commits_per_day,
        }
    }
}

fn count_in_encounter_order<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(name, _)| name == key) {
            Some((_, count)) => *count += 1,
            None => counts.push((key.to_string(), 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn commit(repo: &str, author: &str) -> Commit {
        Commit {
            sha: "0123456789abcdef0123456789abcdef01234567".to_string(),
            author_name: author.to_string(),
            author_email: format!("{}@example.com", author.to_lowercase()),
            authored_at: day(2024, 1, 2),
            message: "change".to_string(),
            repository: repo.to_string(),
            url: String::new(),
            stats: None,
            files_changed: None,
        }
    }

    #[test]
    fn test_range_rejects_inverted() {
        let result = DateRange::new(day(2024, 1, 3), day(2024, 1, 1));
        assert!(matches!(result, Err(DigestError::InvalidInput(_))));
    }

    #[test]
    fn test_span_same_instant_is_one_day() {
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 1)).unwrap();
        assert_eq!(range.span_days(), 1);
    }

    #[test]
    fn test_span_two_days() {
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 3)).unwrap();
        assert_eq!(range.span_days(), 2);
    }

    #[test]
    fn test_span_rounds_up_partial_day() {
        let to = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 1).unwrap();
        let range = DateRange::new(day(2024, 1, 1), to).unwrap();
        assert_eq!(range.span_days(), 3);
    }

    #[test]
    fn test_from_dates_covers_whole_days() {
        let range = DateRange::from_dates(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .unwrap();
        assert_eq!(range.from(), day(2024, 1, 1));
        assert_eq!(
            range.to(),
            Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 59).unwrap()
        );
        assert!(range.contains(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()));
        assert!(!range.contains(day(2024, 1, 2)));
    }

    #[test]
    fn test_last_days() {
        let now = day(2024, 3, 10);
        let range = DateRange::last_days(7, now).unwrap();
        assert_eq!(range.from(), day(2024, 3, 3));
        assert_eq!(range.to(), now);
        assert_eq!(range.span_days(), 7);
    }

    #[test]
    fn test_last_days_beyond_calendar_is_rejected() {
        let result = DateRange::last_days(u32::MAX, day(2024, 3, 10));
        assert!(matches!(result, Err(DigestError::InvalidInput(_))));
    }

    #[test]
    fn test_top_authors_ties_keep_encounter_order() {
        let mut commits = Vec::new();
        for _ in 0..3 {
            commits.push(commit("r", "C"));
        }
        for _ in 0..5 {
            commits.push(commit("r", "A"));
        }
        for _ in 0..5 {
            commits.push(commit("r", "B"));
        }
        // C is encountered first but has fewer commits
        let refs: Vec<&Commit> = commits.iter().collect();
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 3)).unwrap();

        let stats = ReportStats::compute(&refs, &range);

        assert_eq!(
            stats.top_authors,
            vec![
                ("A".to_string(), 5),
                ("B".to_string(), 5),
                ("C".to_string(), 3)
            ]
        );
    }

    #[test]
    fn test_top_authors_limited_to_five() {
        let commits: Vec<Commit> = ["a", "b", "c", "d", "e", "f", "a"]
            .iter()
            .map(|a| commit("r", a))
            .collect();
        let refs: Vec<&Commit> = commits.iter().collect();
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 2)).unwrap();

        let stats = ReportStats::compute(&refs, &range);

        assert_eq!(stats.top_authors.len(), TOP_AUTHOR_LIMIT);
        assert_eq!(stats.top_authors[0], ("a".to_string(), 2));
        assert_eq!(stats.top_authors[4].0, "e");
    }

    #[test]
    fn test_per_repository_counts() {
        let commits = vec![commit("api", "A"), commit("web", "A"), commit("api", "B")];
        let refs: Vec<&Commit> = commits.iter().collect();
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 3)).unwrap();

        let stats = ReportStats::compute(&refs, &range);

        assert_eq!(stats.total_commits, 3);
        assert_eq!(
            stats.per_repository,
            vec![("api".to_string(), 2), ("web".to_string(), 1)]
        );
        assert_eq!(stats.span_days, 2);
        assert!((stats.commits_per_day - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_commits_zero_rate() {
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 1)).unwrap();
        let stats = ReportStats::compute(&[], &range);
        assert_eq!(stats.total_commits, 0);
        assert_eq!(stats.commits_per_day, 0.0);
        assert!(stats.top_authors.is_empty());
    }
}
