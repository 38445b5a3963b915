use serde::{Deserialize, Serialize};
use std::fmt;

/// How much of each commit is rendered, and what it is assumed to cost.
///
/// Levels are totally ordered; every level renders everything the lower
/// levels do.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "u8", into = "u8")]
pub enum DetailLevel {
    /// Short hash and title
    Minimal = 1,
    /// Adds author and day
    Basic = 2,
    /// Adds full timestamp and message body
    #[default]
    Standard = 3,
    /// Adds email, repository and URL
    Detailed = 4,
    /// Adds full hash, line stats and changed-file count
    Full = 5,
}

impl DetailLevel {
    pub const ALL: [DetailLevel; 5] = [
        DetailLevel::Minimal,
        DetailLevel::Basic,
        DetailLevel::Standard,
        DetailLevel::Detailed,
        DetailLevel::Full,
    ];

    /// Map a raw level to a DetailLevel; anything outside 1-5 becomes Standard
    pub fn from_level(level: i64) -> Self {
        match level {
            1 => DetailLevel::Minimal,
            2 => DetailLevel::Basic,
            3 => DetailLevel::Standard,
            4 => DetailLevel::Detailed,
            5 => DetailLevel::Full,
            _ => DetailLevel::Standard,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Assumed token cost of one rendered commit.
    ///
    /// Fixed constants, not a tokenizer.
    pub fn tokens_per_commit(self) -> usize {
        match self {
            DetailLevel::Minimal => 25,
            DetailLevel::Basic => 50,
            DetailLevel::Standard => 100,
            DetailLevel::Detailed => 150,
            DetailLevel::Full => 200,
        }
    }

    /// Estimated token cost of `commit_count` rendered commits
    pub fn estimate_tokens(self, commit_count: usize) -> usize {
        commit_count * self.tokens_per_commit()
    }

    pub fn label(self) -> &'static str {
        match self {
            DetailLevel::Minimal => "minimal",
            DetailLevel::Basic => "basic",
            DetailLevel::Standard => "standard",
            DetailLevel::Detailed => "detailed",
            DetailLevel::Full => "full",
        }
    }
}

impl From<u8> for DetailLevel {
    fn from(level: u8) -> Self {
        DetailLevel::from_level(i64::from(level))
    }
}

impl From<DetailLevel> for u8 {
    fn from(level: DetailLevel) -> Self {
        level.as_u8()
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_u8(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_level_in_range() {
        for (raw, level) in (1..=5).zip(DetailLevel::ALL) {
            assert_eq!(DetailLevel::from_level(raw), level);
        }
    }

    #[test]
    fn test_out_of_range_falls_back_to_standard() {
        assert_eq!(DetailLevel::from_level(0), DetailLevel::Standard);
        assert_eq!(DetailLevel::from_level(6), DetailLevel::Standard);
        assert_eq!(DetailLevel::from_level(-3), DetailLevel::Standard);
        assert_eq!(DetailLevel::from(200u8), DetailLevel::Standard);
    }

    #[test]
    fn test_token_costs() {
        let costs: Vec<usize> = DetailLevel::ALL
            .iter()
            .map(|l| l.tokens_per_commit())
            .collect();
        assert_eq!(costs, vec![25, 50, 100, 150, 200]);
    }

    #[test]
    fn test_estimate_is_count_times_constant() {
        assert_eq!(DetailLevel::Minimal.estimate_tokens(4), 100);
        assert_eq!(DetailLevel::Full.estimate_tokens(4), 800);
        assert_eq!(DetailLevel::Standard.estimate_tokens(0), 0);
    }

    #[test]
    fn test_total_order() {
        assert!(DetailLevel::Minimal < DetailLevel::Basic);
        assert!(DetailLevel::Detailed < DetailLevel::Full);
    }

    #[test]
    fn test_serde_as_integer() {
        let json = serde_json::to_string(&DetailLevel::Detailed).unwrap();
        assert_eq!(json, "4");
        let parsed: DetailLevel = serde_json::from_str("9").unwrap();
        assert_eq!(parsed, DetailLevel::Standard);
    }

    #[test]
    fn test_display() {
        assert_eq!(DetailLevel::Full.to_string(), "5 (full)");
    }
}
