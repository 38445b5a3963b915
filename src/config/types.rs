use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// gitdigest configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default GitHub username when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// GitHub API settings
    #[serde(default)]
    pub api: Api,

    /// Export settings
    #[serde(default)]
    pub export: Export,
}

/// GitHub API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Api {
    /// Base URL of the REST API
    pub base_url: String,

    /// Environment variable holding an optional access token
    pub token_env: String,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Commits requested per page (GitHub caps this at 100)
    pub page_size: usize,

    /// Upper bound on pages fetched per repository
    pub max_pages: usize,

    /// Fetch each commit individually to get additions/deletions and file counts
    pub fetch_stats: bool,
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Export {
    /// Directory where exported documents are written
    pub output_dir: PathBuf,

    /// Default detail level (1-5)
    pub detail_level: u8,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            user_agent: concat!("gitdigest/", env!("CARGO_PKG_VERSION")).to_string(),
            page_size: 100,
            max_pages: 50,
            fetch_stats: false,
        }
    }
}

impl Default for Export {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./exports"),
            detail_level: 3,
        }
    }
}

impl Api {
    /// Read the access token from the configured environment variable
    pub fn token(&self) -> Option<String> {
        std::env::var(&self.token_env)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}
