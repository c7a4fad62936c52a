//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the only state shared across routes. Route guards read it;
//! only the mount probe, login, logout and the profile form write it.
//!
//! STATE MACHINE
//! =============
//! `Resolving` (initial) moves to `Authenticated` or `Anonymous` once the
//! `GET /me` probe settles and is never re-entered. A probe result arriving
//! after the session already left `Resolving` is dropped, so a slow probe
//! cannot overwrite a login that finished first.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{ApiClient, Transport};
use crate::net::error::ApiError;
use crate::net::types::Identity;

/// Who the browser is signed in as. Identity is either fully present or absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Resolving,
    Anonymous,
    Authenticated(Identity),
}

impl SessionState {
    pub fn is_resolving(&self) -> bool {
        matches!(self, Self::Resolving)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    /// Apply a session event. Returns `true` if the state changed.
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        let next = match (&*self, event) {
            (Self::Resolving, SessionEvent::Probed(Some(identity))) => Self::Authenticated(identity),
            (Self::Resolving, SessionEvent::Probed(None)) => Self::Anonymous,
            (_, SessionEvent::Probed(_)) => return false,
            (_, SessionEvent::LoggedIn(identity)) => Self::Authenticated(identity),
            (_, SessionEvent::LoggedOut) => Self::Anonymous,
            (Self::Authenticated(_), SessionEvent::IdentityUpdated(identity)) => Self::Authenticated(identity),
            (_, SessionEvent::IdentityUpdated(_)) => return false,
        };
        if *self == next {
            return false;
        }
        *self = next;
        true
    }
}

/// Inputs to the session state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Result of the initial `GET /me` probe; `None` on any failure.
    Probed(Option<Identity>),
    LoggedIn(Identity),
    LoggedOut,
    /// Profile edits replaced fields of the signed-in identity.
    IdentityUpdated(Identity),
}

/// Probe the current session. Failures resolve to anonymous, never an error.
pub async fn probe<T: Transport>(api: &ApiClient<T>) -> SessionEvent {
    match api.me().await {
        Ok(identity) => SessionEvent::Probed(Some(identity)),
        Err(e) => {
            // 401/403 is the normal signed-out answer; anything else is worth a warning.
            if matches!(e.status(), Some(401 | 403)) {
                log::debug!("session probe: anonymous ({e})");
            } else {
                log::warn!("session probe failed, treating as anonymous: {e}");
            }
            SessionEvent::Probed(None)
        }
    }
}

/// Submit credentials, then re-probe to learn who we are.
///
/// # Errors
///
/// Returns the failing call's error; the caller shows it and the session is
/// left untouched.
pub async fn login<T: Transport>(api: &ApiClient<T>, email: &str, password: &str) -> Result<SessionEvent, ApiError> {
    api.login(email, password).await?;
    let identity = api.me().await?;
    log::info!("signed in as {}", identity.email);
    Ok(SessionEvent::LoggedIn(identity))
}

/// End the session. The client forgets the identity even if the call fails.
pub async fn logout<T: Transport>(api: &ApiClient<T>) -> SessionEvent {
    if let Err(e) = api.logout().await {
        log::warn!("logout request failed: {e}");
    }
    SessionEvent::LoggedOut
}

/// Reactive handle over the single session state, provided via context.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Tracked read of the whole state.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    /// Tracked read through a borrow.
    pub fn with<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.state.with(f)
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.with(|s| s.identity().cloned())
    }

    pub fn identity_untracked(&self) -> Option<Identity> {
        self.state.with_untracked(|s| s.identity().cloned())
    }

    pub fn apply(&self, event: SessionEvent) {
        self.state.update(|s| {
            s.apply(event);
        });
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
