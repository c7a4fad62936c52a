//! Top navigation bar with session-aware links and logout.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api::Api;
use crate::routes::AppRoute;
use crate::state::session::{SessionState, SessionStore};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let location = use_location();
    let current = Memo::new(move |_| AppRoute::from_path(&location.pathname.get()));
    let active = move |route: AppRoute| move || current.get() == Some(route);

    let is_admin = move || session.identity().is_some_and(|i| i.access_level.is_admin());
    let email = move || session.identity().map(|i| i.email).unwrap_or_default();

    view! {
        <nav class="nav">
            <a href=AppRoute::Home.path() class="nav__brand">"Snipzo"</a>
            <span class="nav__spacer"></span>
            {move || match session.get() {
                SessionState::Resolving => ().into_any(),
                SessionState::Anonymous => view! {
                    <a href=AppRoute::Login.path() class="nav__link" class:nav__link--active=active(AppRoute::Login)>"Log In"</a>
                    <a href=AppRoute::Register.path() class="nav__link nav__link--cta" class:nav__link--active=active(AppRoute::Register)>"Register"</a>
                }
                .into_any(),
                SessionState::Authenticated(_) => view! {
                    <a href=AppRoute::Dashboard.path() class="nav__link" class:nav__link--active=active(AppRoute::Dashboard)>"My URLs"</a>
                    <a href=AppRoute::Profile.path() class="nav__link" class:nav__link--active=active(AppRoute::Profile)>"Profile"</a>
                    <Show when=is_admin>
                        <a href=AppRoute::Admin.path() class="nav__link" class:nav__link--active=active(AppRoute::Admin)>"Admin"</a>
                    </Show>
                    <span class="nav__self">{email}</span>
                    <LogoutButton/>
                }
                .into_any(),
            }}
        </nav>
    }
}

/// Ends the session, then sends the user to `/login`.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = StoredValue::new(expect_context::<Api>());
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let event = crate::state::session::logout(&api).await;
                session.apply(event);
                busy.set(false);
                navigate(AppRoute::Login.path(), leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, &navigate, session);
    };

    view! {
        <button class="btn nav__logout" on:click=on_logout disabled=move || busy.get()>
            "Log Out"
        </button>
    }
}
