//! Route guard decisions and the redirect effect that enforces them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards are UX only: they keep signed-out or non-admin users away from
//! screens that would fail anyway. The backend still authorizes every call.
//! Decisions are pure functions of the session state and hold nothing.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::AppRoute;
use crate::state::session::SessionState;

/// What a guarded route should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still resolving: render nothing yet.
    Pending,
    Allow,
    Redirect(AppRoute),
}

/// Requires any signed-in identity; otherwise sends the user to `/login`.
pub fn require_auth(state: &SessionState) -> GuardOutcome {
    match state {
        SessionState::Resolving => GuardOutcome::Pending,
        SessionState::Authenticated(_) => GuardOutcome::Allow,
        SessionState::Anonymous => GuardOutcome::Redirect(AppRoute::Login),
    }
}

/// Requires an admin identity; everyone else lands on `/dashboard`.
pub fn require_admin(state: &SessionState) -> GuardOutcome {
    match state {
        SessionState::Resolving => GuardOutcome::Pending,
        SessionState::Authenticated(identity) if identity.access_level.is_admin() => GuardOutcome::Allow,
        _ => GuardOutcome::Redirect(AppRoute::Dashboard),
    }
}

/// Navigate away whenever `outcome` becomes a redirect.
pub fn install_guard_redirect<F>(outcome: Memo<GuardOutcome>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardOutcome::Redirect(route) = outcome.get() {
            log::debug!("guard redirect to {}", route.path());
            navigate(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
