//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - config init: Initialize configuration file
//! - repos: List a user's repositories
//! - whoami: Show the user the access token belongs to
//! - gen: Fetch commits and generate an export
//! - show latest: Display the most recent export
pub mod config;
pub mod gen;
pub mod repos;
pub mod show;
pub mod whoami;

use tracing::{debug, info, warn};

use crate::github::GitHubClient;
use crate::identity::{IdentityProvider, Session};

/// Start a session, signed in as the token's user when a token is available.
///
/// A failed profile lookup is reported but does not stop the command.
pub(crate) fn open_session(client: &GitHubClient) -> Session {
    let session = Session::new();
    session.subscribe(Box::new(|identity| match identity {
        Some(identity) => info!(user = %identity.github_username, "signed in"),
        None => debug!("signed out"),
    }));

    if !client.is_authenticated() {
        debug!("no access token, continuing anonymously");
        return session;
    }

    match client.fetch_profile() {
        Ok(profile) => session.sign_in(profile.into()),
        Err(e) => warn!("Could not look up the token's user: {}", e),
    }

    session
}
