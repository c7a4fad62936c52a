//! Previous / next pager with a page indicator.

use leptos::prelude::*;

/// `page` is 1-based. `on_page` receives the requested page number.
#[component]
pub fn Pager(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] has_previous: Signal<bool>,
    #[prop(into)] has_next: Signal<bool>,
    #[prop(into)] disabled: Signal<bool>,
    on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pager">
            <button
                class="btn pager__prev"
                disabled=move || disabled.get() || !has_previous.get()
                on:click=move |_| on_page.run(page.get_untracked().saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="pager__label">
                {move || format!("Page {} of {}", page.get(), total_pages.get())}
            </span>
            <button
                class="btn pager__next"
                disabled=move || disabled.get() || !has_next.get()
                on:click=move |_| on_page.run(page.get_untracked().saturating_add(1))
            >
                "Next"
            </button>
        </div>
    }
}
