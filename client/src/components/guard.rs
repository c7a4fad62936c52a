//! Route guard wrappers.
//!
//! Children render only once the session allows them; a redirect outcome
//! navigates away. Both guards read the shared `SessionStore` and keep no
//! state of their own.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionState, SessionStore};
use crate::util::guard::{GuardOutcome, install_guard_redirect, require_admin, require_auth};

/// Renders children for any signed-in user; otherwise redirects to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(require_auth, children)
}

/// Renders children for admins only; everyone else goes to `/dashboard`.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(require_admin, children)
}

fn guarded(policy: fn(&SessionState) -> GuardOutcome, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let outcome = Memo::new(move |_| session.with(policy));
    install_guard_redirect(outcome, use_navigate());

    move || (outcome.get() == GuardOutcome::Allow).then(|| children())
}
