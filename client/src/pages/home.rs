//! Landing page: hero, pricing grid, and the quick-shorten card.

use leptos::prelude::*;

use crate::components::pricing_card::{PRICING_TIERS, PricingCard};
use crate::components::shorten_card::ShortenCard;
use crate::routes::AppRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Short links, clear numbers."</h1>
                <p class="hero__subtitle">
                    "Shorten, share, and track every click from one dashboard."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href=AppRoute::Register.path()>"Get Started"</a>
                    <a class="btn" href=AppRoute::Login.path()>"Log In"</a>
                </div>
            </section>

            <ShortenCard/>

            <section class="pricing">
                <h2 class="pricing__title">"Pricing"</h2>
                <div class="pricing__grid">
                    {PRICING_TIERS.iter().map(|tier| view! { <PricingCard tier=*tier/> }).collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
