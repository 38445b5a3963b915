use std::path::PathBuf;

use crate::config;
use crate::display;
use crate::error::Result;
use crate::github::{CommitSource, GitHubClient};
use crate::identity;

/// List the repositories a user owns
pub fn run(config_path: Option<PathBuf>, user: Option<String>) -> Result<()> {
    let config = config::resolve(config_path)?;

    let client = GitHubClient::new(&config.api);
    let session = super::open_session(&client);
    let username =
        identity::resolve_username(user.as_deref(), config.username.as_deref(), &session)?;

    let repositories = client.list_repositories(&username)?;
    tracing::info!(user = %username, count = repositories.len(), "listed repositories");

    display::print_markdown(&display::repositories_table(&username, &repositories));

    Ok(())
}
