use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found."</h1>
            <a href=AppRoute::Home.path()>"Back to home"</a>
        </div>
    }
}
