//! Labelled input with an inline validation message.

use leptos::prelude::*;

/// Text-like `<input>` bound to a string signal.
#[component]
pub fn FormField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = "off")] autocomplete: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field" class:form-field--invalid=move || error.get().is_some()>
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <span class="form-field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
