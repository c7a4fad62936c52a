//! Registration page.

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::form_field::FormField;
use crate::net::api::Api;
use crate::routes::AppRoute;
use crate::util::validate::{Field, FormErrors, validate_register};

/// `on_success` runs once the backend accepts the registration.
#[component]
pub fn RegisterPage(#[prop(optional)] on_success: Option<Callback<()>>) -> impl IntoView {
    let api = StoredValue::new(expect_context::<Api>());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    let error_for = move |field: Field| Signal::derive(move || errors.get().get(field));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        failure.set(None);
        let input = match validate_register(&email.get_untracked(), &password.get_untracked(), &confirm.get_untracked())
        {
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
            match api.get_value().register(&input.email, &input.password).await {
                Ok(()) => {
                    log::info!("registered {}", input.email);
                    registered.set(true);
                    if let Some(callback) = on_success {
                        callback.run(());
                    }
                }
                Err(e) => failure.set(Some(e.user_message("Registration failed"))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, input, on_success);
    };

    view! {
        <div class="auth-page">
            <section class="card auth-card">
                <Show
                    when=move || registered.get()
                    fallback=move || view! {
                        <h1 class="card__title">"Create an account"</h1>
                        <form class="auth-form" on:submit=on_submit>
                            <FormField
                                label="Email"
                                value=email
                                error=error_for(Field::Email)
                                input_type="email"
                                placeholder="you@example.com"
                                autocomplete="email"
                            />
                            <FormField
                                label="Password"
                                value=password
                                error=error_for(Field::Password)
                                input_type="password"
                                autocomplete="new-password"
                            />
                            <FormField
                                label="Confirm Password"
                                value=confirm
                                error=error_for(Field::Confirm)
                                input_type="password"
                                autocomplete="new-password"
                            />
                            <Alert kind=AlertKind::Error message=failure/>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Registering..." } else { "Register" }}
                            </button>
                        </form>
                        <p class="auth-card__footer">
                            "Already registered? "
                            <a href=AppRoute::Login.path()>"Log In"</a>
                        </p>
                    }
                >
                    <div class="result result--success">
                        <h1 class="card__title">"Registration Successful!"</h1>
                        <p>"Check your inbox and verify your e-mail address before logging in."</p>
                        <a class="btn btn--primary" href=AppRoute::Login.path()>"Go to Log In"</a>
                    </div>
                </Show>
            </section>
        </div>
    }
}
