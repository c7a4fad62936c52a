//! Profile page: change e-mail and/or password for the signed-in user.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::form_field::FormField;
use crate::net::api::{Api, ApiClient, Transport};
use crate::net::error::ApiError;
use crate::net::types::Identity;
use crate::state::session::SessionStore;
use crate::util::validate::{Field, FormErrors, ProfileInput, validate_profile};

/// Apply a validated profile edit against the backend.
///
/// The password changes first, then the e-mail if it differs from `current`.
/// Returns the updated identity when anything was changed.
///
/// # Errors
///
/// Returns the first failing call; later calls are not attempted.
pub async fn submit_profile<T: Transport>(
    api: &ApiClient<T>,
    current: &Identity,
    input: ProfileInput,
) -> Result<Option<Identity>, ApiError> {
    let mut changed = false;
    if let Some(change) = &input.password_change {
        api.change_password(&change.old_password, &change.new_password).await?;
        log::info!("password changed for {}", current.email);
        changed = true;
    }
    let mut identity = current.clone();
    if input.email != current.email {
        api.change_email(&input.email).await?;
        log::info!("email changed from {} to {}", current.email, input.email);
        identity.email = input.email;
        changed = true;
    }
    Ok(changed.then_some(identity))
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = StoredValue::new(expect_context::<Api>());

    let email = RwSignal::new(session.identity_untracked().map(|i| i.email).unwrap_or_default());
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let failure = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let error_for = move |field: Field| Signal::derive(move || errors.get().get(field));
    let level = move || session.identity().map(|i| i.access_level.badge()).unwrap_or_default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        failure.set(None);
        success.set(None);
        let Some(current) = session.identity_untracked() else {
            return;
        };
        let input = match validate_profile(
            &email.get_untracked(),
            &old_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm.get_untracked(),
        ) {
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
            match submit_profile(&api.get_value(), &current, input).await {
                Ok(updated) => {
                    if let Some(identity) = updated {
                        session.apply(crate::state::session::SessionEvent::IdentityUpdated(identity));
                    }
                    old_password.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                    success.set(Some("Profile updated!".to_owned()));
                }
                Err(e) => failure.set(Some(e.user_message("Profile update failed"))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, current, input);
    };

    view! {
        <div class="auth-page">
            <section class="card auth-card">
                <h1 class="card__title">"Profile"</h1>
                <p class="profile__level">"Plan: " <span class="badge">{level}</span></p>
                <form class="auth-form" on:submit=on_submit>
                    <FormField
                        label="Email"
                        value=email
                        error=error_for(Field::Email)
                        input_type="email"
                        autocomplete="email"
                    />
                    <FormField
                        label="Current Password"
                        value=old_password
                        error=error_for(Field::OldPassword)
                        input_type="password"
                        autocomplete="current-password"
                    />
                    <FormField
                        label="New Password"
                        value=new_password
                        error=error_for(Field::Password)
                        input_type="password"
                        placeholder="Leave blank to keep your password"
                        autocomplete="new-password"
                    />
                    <FormField
                        label="Confirm New Password"
                        value=confirm
                        error=error_for(Field::Confirm)
                        input_type="password"
                        autocomplete="new-password"
                    />
                    <Alert kind=AlertKind::Error message=failure/>
                    <Alert kind=AlertKind::Success message=success/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </section>
        </div>
    }
}
