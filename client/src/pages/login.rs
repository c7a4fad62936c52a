//! Login page: e-mail + password form and the quick-shorten card.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{Alert, AlertKind};
use crate::components::form_field::FormField;
use crate::components::shorten_card::ShortenCard;
use crate::net::api::Api;
use crate::routes::AppRoute;
use crate::state::session::SessionStore;
use crate::util::validate::{Field, FormErrors, validate_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = StoredValue::new(expect_context::<Api>());
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        failure.set(None);
        let input = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(input) => {
                errors.set(FormErrors::default());
                input
            }
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.get_value();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::session::login(&api, &input.email, &input.password).await {
                    Ok(event) => {
                        session.apply(event);
                        navigate(AppRoute::Dashboard.path(), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        failure.set(Some(e.user_message("Login failed")));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, &navigate, session, input);
    };

    view! {
        <div class="auth-page">
            <section class="card auth-card">
                <h1 class="card__title">"Log In"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <FormField
                        label="Email"
                        value=email
                        error=Signal::derive(move || errors.get().get(Field::Email))
                        input_type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                    />
                    <FormField
                        label="Password"
                        value=password
                        error=Signal::derive(move || errors.get().get(Field::Password))
                        input_type="password"
                        autocomplete="current-password"
                    />
                    <Alert kind=AlertKind::Error message=failure/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href=AppRoute::Register.path()>"Register"</a>
                </p>
            </section>
            <ShortenCard/>
        </div>
    }
}
