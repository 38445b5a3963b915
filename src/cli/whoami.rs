use std::path::PathBuf;

use crate::config;
use crate::error::{DigestError, Result};
use crate::github::GitHubClient;
use crate::identity::IdentityProvider;

/// Show the GitHub user the configured access token belongs to
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = config::resolve(config_path)?;

    let client = GitHubClient::new(&config.api);
    if !client.is_authenticated() {
        return Err(DigestError::MissingInput(format!(
            "no access token found; set {}",
            config.api.token_env
        )));
    }

    let session = super::open_session(&client);
    match session.current_identity() {
        Some(identity) => {
            println!("Signed in as: {}", identity.github_username);
            if let Some(avatar) = identity.avatar_url {
                println!("Avatar: {}", avatar);
            }
            Ok(())
        }
        None => Err(DigestError::Config(
            "the access token was rejected or its user could not be resolved".to_string(),
        )),
    }
}
