//! Password reset page reached from the e-mailed `/reset?token=…` link.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::alert::{Alert, AlertKind};
use crate::components::form_field::FormField;
use crate::net::api::Api;
use crate::routes::AppRoute;
use crate::util::validate::{Field, FormErrors, validate_reset};

#[component]
pub fn ResetPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<Api>());
    let query = use_query_map();
    let token = Memo::new(move |_| query.with(|q| q.get("token")));

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    // A missing token is reported up front rather than on submit.
    let token_error = Signal::derive(move || {
        errors.get().get(Field::Token).or_else(|| {
            token
                .get()
                .is_none_or(|t| t.trim().is_empty())
                .then_some("This reset link is missing its token.")
        })
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        failure.set(None);
        let token = token.get_untracked();
        let input = match validate_reset(token.as_deref(), &password.get_untracked(), &confirm.get_untracked()) {
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
        leptos::task::spawn_local(async move {
            match api.get_value().reset_password(&input.token, &input.password).await {
                Ok(()) => done.set(true),
                Err(e) => failure.set(Some(e.user_message("Password reset failed"))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, input);
    };

    view! {
        <div class="auth-page">
            <section class="card auth-card">
                <Show
                    when=move || done.get()
                    fallback=move || view! {
                        <h1 class="card__title">"Reset your password"</h1>
                        <Show when=move || token_error.get().is_some()>
                            <p class="alert alert--error" role="alert">
                                {move || token_error.get().unwrap_or_default()}
                            </p>
                        </Show>
                        <form class="auth-form" on:submit=on_submit>
                            <FormField
                                label="New Password"
                                value=password
                                error=Signal::derive(move || errors.get().get(Field::Password))
                                input_type="password"
                                autocomplete="new-password"
                            />
                            <FormField
                                label="Confirm Password"
                                value=confirm
                                error=Signal::derive(move || errors.get().get(Field::Confirm))
                                input_type="password"
                                autocomplete="new-password"
                            />
                            <Alert kind=AlertKind::Error message=failure/>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                "Reset Password"
                            </button>
                        </form>
                    }
                >
                    <div class="result result--success">
                        <h1 class="card__title">"Password Reset!"</h1>
                        <p>"You can now log in with your new password."</p>
                        <a class="btn btn--primary" href=AppRoute::Login.path()>"Go to Log In"</a>
                    </div>
                </Show>
            </section>
        </div>
    }
}
