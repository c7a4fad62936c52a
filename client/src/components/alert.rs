//! Inline error / success banners for form and list feedback.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "alert alert--error",
            Self::Success => "alert alert--success",
        }
    }
}

/// Shows `message` while it is `Some`.
#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class=kind.class() role="alert">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
