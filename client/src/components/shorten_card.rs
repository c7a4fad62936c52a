//! "Try it now" quick-shorten form.
//!
//! Works without an account; the backend applies anonymous rate limits.

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::form_field::FormField;
use crate::net::api::Api;
use crate::util::validate::{Field, FormErrors, validate_shorten};

#[component]
pub fn ShortenCard() -> impl IntoView {
    let api = StoredValue::new(expect_context::<Api>());
    let url = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let short_url = RwSignal::new(None::<String>);
    let api_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        short_url.set(None);
        api_error.set(None);
        let target = match validate_shorten(&url.get_untracked()) {
            Ok(target) => {
                errors.set(FormErrors::default());
                target
            }
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.get_value().shorten(&target).await {
                Ok(link) => short_url.set(Some(link)),
                Err(e) => api_error.set(Some(e.user_message("Failed to shorten URL. Please try again."))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, target);
    };

    view! {
        <section class="card shorten-card">
            <h2 class="card__title">"Try it now! Shorten a link instantly"</h2>
            <form class="shorten-card__form" on:submit=on_submit>
                <FormField
                    label="Long URL"
                    value=url
                    error=Signal::derive(move || errors.get().get(Field::Url))
                    input_type="url"
                    placeholder="Paste your long URL here"
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Shortening..." } else { "Shorten" }}
                </button>
            </form>
            <Alert kind=AlertKind::Error message=api_error/>
            <Show when=move || short_url.get().is_some()>
                <p class="shorten-card__result">
                    "Short URL: "
                    <a href=move || short_url.get().unwrap_or_default() target="_blank" rel="noopener noreferrer">
                        {move || short_url.get().unwrap_or_default()}
                    </a>
                </p>
            </Show>
        </section>
    }
}
