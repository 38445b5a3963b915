use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::wire::{RemoteCommit, RemoteError, RemoteProfile};
use super::{CommitSource, PageRequest};
use crate::config::Api;
use crate::error::{DigestError, Result};
use crate::models::Repository;

/// Repositories requested by the single listing call
const REPOSITORY_LIST_SIZE: usize = 100;

/// Blocking GitHub REST client
pub struct GitHubClient {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Build a client, reading the token from the configured environment variable
    pub fn new(api: &Api) -> Self {
        Self::with_token(api, api.token())
    }

    pub fn with_token(api: &Api, token: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(&api.user_agent)
            .build();

        Self {
            agent,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Profile of the user the token belongs to
    pub fn fetch_profile(&self) -> Result<RemoteProfile> {
        if self.token.is_none() {
            return Err(DigestError::MissingInput(
                "an access token is required to look up the signed-in user".to_string(),
            ));
        }
        self.get_json("/user", &[])
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "GET");

        let mut request = self
            .agent
            .get(&url)
            .set("Accept", "application/vnd.github+json")
            .set("X-GitHub-Api-Version", "2022-11-28");
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }
        for (key, value) in query {
            request = request.query(key, value);
        }

        match request.call() {
            Ok(response) => {
                let body = response.into_string()?;
                Ok(serde_json::from_str(&body)?)
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                let message = serde_json::from_str::<RemoteError>(&body)
                    .map(|e| e.message)
                    .unwrap_or(body);
                Err(DigestError::Api {
                    status,
                    url,
                    message,
                })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(DigestError::Network(transport.to_string()))
            }
        }
    }
}

impl CommitSource for GitHubClient {
    fn list_repositories(&self, owner: &str) -> Result<Vec<Repository>> {
        let path = format!("/users/{}/repos", path_segment(owner)?);
        self.get_json(
            &path,
            &[
                ("per_page", REPOSITORY_LIST_SIZE.to_string()),
                ("sort", "updated".to_string()),
            ],
        )
    }

    fn commit_page(&self, request: &PageRequest<'_>) -> Result<Vec<RemoteCommit>> {
        let path = format!(
            "/repos/{}/{}/commits",
            path_segment(request.owner)?,
            path_segment(request.repo)?
        );
        self.get_json(
            &path,
            &[
                ("since", timestamp(request.range.from())),
                ("until", timestamp(request.range.to())),
                ("page", request.page.to_string()),
                ("per_page", request.per_page.to_string()),
            ],
        )
    }

    fn commit_detail(&self, owner: &str, repo: &str, sha: &str) -> Result<RemoteCommit> {
        let path = format!(
            "/repos/{}/{}/commits/{}",
            path_segment(owner)?,
            path_segment(repo)?,
            path_segment(sha)?
        );
        self.get_json(&path, &[])
    }
}

fn timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Reject names that would change the shape of the request path
fn path_segment(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() || name.contains(['/', '?', '#', ' ']) || name == "." || name == ".." {
        return Err(DigestError::InvalidInput(format!(
            "'{}' is not a valid GitHub name",
            name
        )));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateRange;
    use chrono::{TimeZone, Utc};
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serve canned responses, one connection each, returning the request heads
    fn serve(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let mut heads = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().unwrap();
                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    head.extend_from_slice(&buf[..n]);
                }
                heads.push(String::from_utf8_lossy(&head).to_string());

                let reply = format!(
                    "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                stream.write_all(reply.as_bytes()).unwrap();
            }
            heads
        });

        (base_url, handle)
    }

    fn api(base_url: &str) -> Api {
        Api {
            base_url: base_url.to_string(),
            ..Api::default()
        }
    }

    fn range() -> DateRange {
        DateRange::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_commit_page_request_and_parse() {
        let body = r#"[{"sha":"abc1234def","html_url":"u","commit":{"author":{"name":"A","email":"a@x","date":"2024-01-05T10:00:00Z"},"message":"one"}}]"#;
        let (base_url, server) = serve(vec![(200, body.to_string())]);
        let client = GitHubClient::with_token(&api(&base_url), Some("t0k".to_string()));
        let range = range();

        let page = client
            .commit_page(&PageRequest {
                owner: "octocat",
                repo: "demo",
                range: &range,
                page: 2,
                per_page: 100,
            })
            .unwrap();

        assert_eq!(page.len(), 1);
        assert_eq!(page[0].sha, "abc1234def");

        let heads = server.join().unwrap();
        let head = heads[0].to_lowercase();
        assert!(head.starts_with("get /repos/octocat/demo/commits?"));
        assert!(head.contains("page=2"));
        assert!(head.contains("per_page=100"));
        assert!(head.contains("since=2024-01-01t00"));
        assert!(head.contains("until=2024-01-31t23"));
        assert!(head.contains("authorization: bearer t0k"));
    }

    #[test]
    fn test_list_repositories() {
        let body = r#"[{"name":"demo","description":"A demo","language":"Rust"},{"name":"notes","description":null,"language":null}]"#;
        let (base_url, server) = serve(vec![(200, body.to_string())]);
        let client = GitHubClient::with_token(&api(&base_url), None);

        let repos = client.list_repositories("octocat").unwrap();

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].language.as_deref(), Some("Rust"));
        assert_eq!(repos[1].description, None);

        let heads = server.join().unwrap();
        assert!(heads[0].starts_with("GET /users/octocat/repos?"));
        assert!(!heads[0].to_lowercase().contains("authorization:"));
    }

    #[test]
    fn test_error_status_carries_api_message() {
        let (base_url, server) = serve(vec![(404, r#"{"message":"Not Found"}"#.to_string())]);
        let client = GitHubClient::with_token(&api(&base_url), None);

        let err = client.list_repositories("ghost").unwrap_err();
        server.join().unwrap();

        match err {
            DigestError::Api {
                status, message, ..
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_connection_refused_is_network_error() {
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = GitHubClient::with_token(&api(&format!("http://127.0.0.1:{}", port)), None);

        let err = client.list_repositories("octocat").unwrap_err();
        assert!(matches!(err, DigestError::Network(_)));
    }

    #[test]
    fn test_profile_requires_token() {
        let client = GitHubClient::with_token(&api("http://127.0.0.1:1"), None);
        assert!(!client.is_authenticated());
        assert!(matches!(
            client.fetch_profile(),
            Err(DigestError::MissingInput(_))
        ));
    }

    #[test]
    fn test_profile_lookup() {
        let body = r#"{"login":"octocat","avatar_url":"https://avatars.example/1"}"#;
        let (base_url, server) = serve(vec![(200, body.to_string())]);
        let client = GitHubClient::with_token(&api(&base_url), Some("t".to_string()));

        let profile = client.fetch_profile().unwrap();
        server.join().unwrap();

        assert_eq!(profile.login, "octocat");
        assert_eq!(
            profile.avatar_url.as_deref(),
            Some("https://avatars.example/1")
        );
    }

    #[test]
    fn test_path_segment_rejects_slashes() {
        assert!(path_segment("octocat/evil").is_err());
        assert!(path_segment("").is_err());
        assert!(path_segment("..").is_err());
        assert_eq!(path_segment(" demo ").unwrap(), "demo");
    }
}
