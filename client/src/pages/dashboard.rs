//! User dashboard: paged, filterable list of the user's short links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded by `RequireAuth`. The page owns a `LinksState` signal, fetches on
//! mount, and re-fetches after every filter, page, or delete action. The
//! stats modal loads per-link analytics on demand.

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::nav::LogoutButton;
use crate::components::pager::Pager;
use crate::components::stats_modal::StatsModal;
use crate::net::api::Api;
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::types::HistoryPage;
use crate::net::types::ShortLink;
use crate::state::links::{LinksState, StatsView};
use crate::state::session::SessionStore;
use crate::util::format::format_timestamp;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = StoredValue::new(expect_context::<Api>());
    let links = RwSignal::new(LinksState::default());
    let stats = RwSignal::new(StatsView::default());
    let filter_input = RwSignal::new(String::new());
    let copied = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0_u64);

    // Apply a history result; if rows vanished from under the current page,
    // step back to the last page and fetch again.
    #[cfg(feature = "hydrate")]
    let settle = move |generation: u64, result: Result<HistoryPage, ApiError>| {
        if links.try_update(|s| s.finish_fetch(generation, result) && s.clamp_past_end()) == Some(true) {
            reload.update(|n| *n += 1);
        }
    };

    let load = move || {
        let Some(ticket) = links.try_update(LinksState::begin_fetch) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api.get_value().history(&ticket.query).await;
            if let Err(e) = &result {
                log::warn!("history fetch failed: {e}");
            }
            settle(ticket.generation, result);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, ticket);
    };

    Effect::new(move || {
        reload.track();
        load();
    });

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let filter = filter_input.get_untracked();
        links.update(|s| {
            s.set_filter(&filter);
        });
        load();
    };

    let on_page = Callback::new(move |page: u32| {
        if links.try_update(|s| s.set_page(page)) == Some(true) {
            load();
        }
    });

    let on_delete = move |link_id: String| {
        let Some(ticket) = links.try_update(LinksState::begin_fetch) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::state::links::delete_and_reload(&api.get_value(), &link_id, &ticket.query).await;
            if let Err(e) = &result {
                log::warn!("delete of link {link_id} failed: {e}");
            }
            settle(ticket.generation, result);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (link_id, ticket);
    };

    let on_stats = move |link_id: String| {
        stats.set(StatsView::open(&link_id));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api.get_value().link_stats(&link_id).await;
            stats.update(|view| {
                view.finish(&link_id, result);
            });
        });
    };

    let on_copy = move |link: &ShortLink| {
        #[cfg(feature = "hydrate")]
        {
            let (link_id, short_url) = (link.id.clone(), link.short_url.clone());
            leptos::task::spawn_local(async move {
                if crate::util::clipboard::copy_text(&short_url).await {
                    copied.set(Some(link_id));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (link, copied);
    };

    let level = move || session.identity().map(|i| i.access_level.badge()).unwrap_or_default();
    let email = move || session.identity().map(|i| i.email).unwrap_or_default();
    let loading = Signal::derive(move || links.with(|s| s.loading));
    let error = Signal::derive(move || links.with(|s| s.error.clone()));

    let rows = move || {
        links.with(|s| s.items.clone()).into_iter().map(|link| {
            let created = format_timestamp(&link.created_at);
            let stats_id = link.id.clone();
            let delete_id = link.id.clone();
            let copied_id = link.id.clone();
            let copy_link = link.clone();
            view! {
                <tr>
                    <td>{created}</td>
                    <td class="table__truncate">
                        <a href=link.source_url.clone() target="_blank" rel="noopener noreferrer">
                            {link.source_url.clone()}
                        </a>
                    </td>
                    <td class="table__mono">
                        {link.short_url.clone()}
                        <button class="btn btn--small" on:click=move |_| on_copy(&copy_link)>
                            {move || if copied.get().as_ref() == Some(&copied_id) { "Copied" } else { "Copy" }}
                        </button>
                    </td>
                    <td>
                        <button class="link-button" title="View stats" on:click=move |_| on_stats(stats_id.clone())>
                            {link.clicks}
                        </button>
                    </td>
                    <td>
                        <button class="btn btn--danger btn--small" on:click=move |_| on_delete(delete_id.clone())>
                            "Delete"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>()
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"My URLs"</h1>
                <span class="dashboard-header__email">{email}</span>
                <span class="badge">{level}</span>
                <LogoutButton/>
            </header>

            <form class="dashboard-search" on:submit=on_filter>
                <input
                    class="dashboard-search__input"
                    type="search"
                    placeholder="Filter by URL"
                    prop:value=move || filter_input.get()
                    on:input=move |ev| filter_input.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Search"</button>
            </form>

            <Alert kind=AlertKind::Error message=error/>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Created"</th>
                        <th>"Source URL"</th>
                        <th>"Short URL"</th>
                        <th>"Clicks"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>

            <Show when=move || loading.get()>
                <p class="dashboard__status">"Loading…"</p>
            </Show>
            <Show when=move || !loading.get() && links.with(|s| s.items.is_empty() && s.error.is_none())>
                <p class="dashboard__status">"No links yet. Shorten one to get started."</p>
            </Show>

            <Pager
                page=Signal::derive(move || links.with(|s| s.page))
                total_pages=Signal::derive(move || links.with(LinksState::total_pages))
                has_previous=Signal::derive(move || links.with(LinksState::has_previous))
                has_next=Signal::derive(move || links.with(LinksState::has_next))
                disabled=loading
                on_page=on_page
            />

            <StatsModal state=stats on_close=Callback::new(move |()| stats.set(StatsView::Closed))/>
        </div>
    }
}
