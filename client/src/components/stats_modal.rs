//! Click-analytics modal for a single short link.

use leptos::prelude::*;

use crate::net::types::ClickStats;
use crate::state::links::StatsView;
use crate::util::format::format_last_click;

/// Renders `state` while it is open. Escape, the backdrop, and "Close" all
/// call `on_close`.
#[component]
pub fn StatsModal(#[prop(into)] state: Signal<StatsView>, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <Show when=move || state.with(StatsView::is_open)>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog dialog--stats"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                    tabindex="0"
                >
                    <h2>"Link Statistics"</h2>
                    {move || match state.get() {
                        StatsView::Closed => ().into_any(),
                        StatsView::Loading { .. } => {
                            view! { <p class="dialog__status">"Loading…"</p> }.into_any()
                        }
                        StatsView::Failed { message, .. } => {
                            view! { <p class="alert alert--error">{message}</p> }.into_any()
                        }
                        StatsView::Loaded { stats, .. } => stats_rows(stats).into_any(),
                    }}
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=move |_| on_close.run(())>"Close"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

fn stats_rows(stats: ClickStats) -> impl IntoView {
    let last_click = format_last_click(stats.last_click.as_deref());
    view! {
        <dl class="stats">
            <dt>"Total Clicks"</dt>
            <dd>{stats.clicks}</dd>
            <dt>"Unique Visitors"</dt>
            <dd>{stats.unique_visitors}</dd>
            <dt>"Last Click"</dt>
            <dd>{last_click}</dd>
        </dl>
    }
}
