//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::{RequireAdmin, RequireAuth};
use crate::components::nav::NavBar;
use crate::net::api::Api;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    profile::ProfilePage, register::RegisterPage, reset::ResetPage,
};
use crate::routes::AppRoute;
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and API client, probes the session once on
/// mount, and wires guarded routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    let api = Api::from_env();
    provide_context(session);
    provide_context(api.clone());

    // Effects only run in the browser, so SSR always renders `Resolving`.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let event = crate::state::session::probe(&api).await;
                session.apply(event);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&api, session);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/snipzo.css"/>
        <Title text="Snipzo"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment(AppRoute::Register.segment()) view=|| view! { <RegisterPage/> }/>
                    <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                    <Route path=StaticSegment(AppRoute::Reset.segment()) view=ResetPage/>
                    <Route
                        path=StaticSegment(AppRoute::Profile.segment())
                        view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Dashboard.segment())
                        view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Admin.segment())
                        view=|| view! { <RequireAdmin><AdminPage/></RequireAdmin> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
