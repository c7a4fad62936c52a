//! Admin user management: search, enable/disable, and per-user link details.

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertKind};
use crate::components::user_details_modal::UserDetailsModal;
use crate::net::api::Api;
use crate::net::types::AdminUser;
use crate::state::admin::{AdminState, UserDetails};
use crate::util::format::format_timestamp;

#[component]
pub fn AdminPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<Api>());
    let admin = RwSignal::new(AdminState::default());
    let search_input = RwSignal::new(String::new());

    let load = move || {
        let Some((generation, search)) = admin.try_update(AdminState::begin_fetch) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api.get_value().admin_users(&search).await;
            if let Err(e) = &result {
                log::warn!("admin user fetch failed: {e}");
            }
            admin.update(|s| {
                s.finish_fetch(generation, result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, generation, search);
    };

    Effect::new(move || load());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let search = search_input.get_untracked();
        admin.update(|s| {
            s.set_search(&search);
        });
        load();
    };

    let on_toggle = move |user: AdminUser| {
        let Some((generation, search)) = admin.try_update(AdminState::begin_fetch) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::state::admin::toggle_active_and_reload(&api.get_value(), &user, &search).await;
            if let Err(e) = &result {
                log::warn!("toggle of {} failed: {e}", user.email);
            }
            admin.update(|s| {
                s.finish_fetch(generation, result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (user, generation, search);
    };

    let on_details = move |user: AdminUser| {
        let user_id = user.id.clone();
        admin.update(|s| s.details = UserDetails::Loading(user));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api.get_value().admin_user_urls(&user_id).await;
            admin.update(|s| {
                s.details.finish(&user_id, result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = user_id;
    };

    let loading = Signal::derive(move || admin.with(|s| s.loading));
    let error = Signal::derive(move || admin.with(|s| s.error.clone()));

    let rows = move || {
        admin
            .with(|s| s.users.clone())
            .into_iter()
            .map(|user| {
                let toggle_user = user.clone();
                let details_user = user.clone();
                let toggle_label = if user.active { "Disable" } else { "Enable" };
                view! {
                    <tr class:table__row--inactive=!user.active>
                        <td>{user.email.clone()}</td>
                        <td><span class="badge">{user.access_level.badge()}</span></td>
                        <td>{format_timestamp(&user.registered)}</td>
                        <td>{if user.active { "Active" } else { "Disabled" }}</td>
                        <td class="table__actions">
                            <button
                                class="btn btn--small"
                                disabled=move || loading.get()
                                on:click=move |_| on_toggle(toggle_user.clone())
                            >
                                {toggle_label}
                            </button>
                            <button class="btn btn--small" on:click=move |_| on_details(details_user.clone())>
                                "Details"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="admin-page">
            <header class="dashboard-header">
                <h1>"User Management"</h1>
            </header>

            <form class="dashboard-search" on:submit=on_search>
                <input
                    class="dashboard-search__input"
                    type="search"
                    placeholder="Search by e-mail"
                    prop:value=move || search_input.get()
                    on:input=move |ev| search_input.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Search"</button>
            </form>

            <Alert kind=AlertKind::Error message=error/>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Email"</th>
                        <th>"Plan"</th>
                        <th>"Registered"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>

            <Show when=move || loading.get()>
                <p class="dashboard__status">"Loading…"</p>
            </Show>
            <Show when=move || !loading.get() && admin.with(|s| s.users.is_empty() && s.error.is_none())>
                <p class="dashboard__status">"No users match this search."</p>
            </Show>

            <UserDetailsModal
                details=Signal::derive(move || admin.with(|s| s.details.clone()))
                on_close=Callback::new(move |()| admin.update(|s| s.details = UserDetails::Closed))
            />
        </div>
    }
}
