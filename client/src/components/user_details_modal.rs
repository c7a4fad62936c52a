//! Admin modal listing one user's short links.

use leptos::prelude::*;

use crate::state::admin::UserDetails;
use crate::util::format::format_timestamp;

#[component]
pub fn UserDetailsModal(#[prop(into)] details: Signal<UserDetails>, on_close: Callback<()>) -> impl IntoView {
    let title = move || details.with(|d| d.user().map(|u| u.email.clone()).unwrap_or_default());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <Show when=move || details.with(|d| d.user().is_some())>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog dialog--user-details"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                    tabindex="0"
                >
                    <h2>{title}</h2>
                    {move || match details.get() {
                        UserDetails::Closed => ().into_any(),
                        UserDetails::Loading(_) => {
                            view! { <p class="dialog__status">"Loading…"</p> }.into_any()
                        }
                        UserDetails::Failed(_, message) => {
                            view! { <p class="alert alert--error">{message}</p> }.into_any()
                        }
                        UserDetails::Loaded(_, urls) if urls.is_empty() => {
                            view! { <p class="dialog__status">"This user has no links."</p> }.into_any()
                        }
                        UserDetails::Loaded(_, urls) => view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Short URL"</th>
                                        <th>"Destination"</th>
                                        <th>"Created"</th>
                                        <th>"Clicks"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {urls
                                        .into_iter()
                                        .map(|link| view! {
                                            <tr>
                                                <td class="table__mono">{link.short_url}</td>
                                                <td class="table__truncate">{link.source_url}</td>
                                                <td>{format_timestamp(&link.created_at)}</td>
                                                <td>{link.clicks}</td>
                                            </tr>
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                        .into_any(),
                    }}
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=move |_| on_close.run(())>"Close"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
