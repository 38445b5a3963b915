//! Identity / session handling
//!
//! The rest of the crate only sees `IdentityProvider`. `Session` is the
//! in-process implementation the CLI signs into after resolving a token.

use std::cell::{Cell, RefCell};

use crate::error::{DigestError, Result};
use crate::github::RemoteProfile;

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub github_username: String,
    pub avatar_url: Option<String>,
}

impl From<RemoteProfile> for Identity {
    fn from(profile: RemoteProfile) -> Self {
        Self {
            github_username: profile.login,
            avatar_url: profile.avatar_url,
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

pub type IdentityListener = Box<dyn Fn(Option<&Identity>)>;

/// Source of the current user's identity
pub trait IdentityProvider {
    fn current_identity(&self) -> Option<Identity>;

    /// Register a listener called on every sign-in and sign-out
    fn subscribe(&self, listener: IdentityListener) -> SubscriptionId;

    #[allow(dead_code)]
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Single-threaded session store
#[derive(Default)]
pub struct Session {
    identity: RefCell<Option<Identity>>,
    listeners: RefCell<Vec<(SubscriptionId, IdentityListener)>>,
    next_id: Cell<u64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, identity: Identity) {
        *self.identity.borrow_mut() = Some(identity);
        self.notify();
    }

    #[allow(dead_code)]
    pub fn sign_out(&self) {
        *self.identity.borrow_mut() = None;
        self.notify();
    }

    fn notify(&self) {
        let identity = self.identity.borrow();
        for (_, listener) in self.listeners.borrow().iter() {
            listener(identity.as_ref());
        }
    }
}

impl IdentityProvider for Session {
    fn current_identity(&self) -> Option<Identity> {
        self.identity.borrow().clone()
    }

    fn subscribe(&self, listener: IdentityListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(sid, _)| *sid != id);
    }
}

/// Pick the username to export for.
///
/// An explicit username wins, then the configured default, then the
/// signed-in user.
pub fn resolve_username(
    explicit: Option<&str>,
    configured: Option<&str>,
    provider: &dyn IdentityProvider,
) -> Result<String> {
    let candidate = explicit
        .map(str::to_string)
        .or_else(|| configured.map(str::to_string))
        .or_else(|| provider.current_identity().map(|i| i.github_username));

    match candidate.map(|name| name.trim().to_string()) {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(DigestError::MissingInput(
            "no GitHub username given; pass --user, set `username` in the config, or provide a token"
                .to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn octocat() -> Identity {
        Identity {
            github_username: "octocat".to_string(),
            avatar_url: Some("https://avatars.example/octocat".to_string()),
        }
    }

    #[test]
    fn test_session_starts_signed_out() {
        assert_eq!(Session::new().current_identity(), None);
    }

    #[test]
    fn test_sign_in_and_out_notify_listeners() {
        let session = Session::new();
        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
        let sink = Rc::clone(&seen);
        session.subscribe(Box::new(move |identity| {
            let name = identity.map(|i| i.github_username.clone());
            sink.borrow_mut().push(name);
        }));

        session.sign_in(octocat());
        session.sign_out();

        assert_eq!(*seen.borrow(), vec![Some("octocat".to_string()), None]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let session = Session::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = session.subscribe(Box::new(move |_| counter.set(counter.get() + 1)));

        session.sign_in(octocat());
        session.unsubscribe(id);
        session.sign_out();

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_resolve_prefers_explicit() {
        let session = Session::new();
        session.sign_in(octocat());

        let name = resolve_username(Some("hubot"), Some("configured"), &session).unwrap();
        assert_eq!(name, "hubot");
    }

    #[test]
    fn test_resolve_falls_back_to_config_then_session() {
        let session = Session::new();
        assert_eq!(
            resolve_username(None, Some("configured"), &session).unwrap(),
            "configured"
        );

        session.sign_in(octocat());
        assert_eq!(resolve_username(None, None, &session).unwrap(), "octocat");
    }

    #[test]
    fn test_resolve_missing_username() {
        let session = Session::new();
        assert!(matches!(
            resolve_username(None, None, &session),
            Err(DigestError::MissingInput(_))
        ));
        assert!(matches!(
            resolve_username(Some("   "), None, &session),
            Err(DigestError::MissingInput(_))
        ));
    }
}
