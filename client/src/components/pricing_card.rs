//! Pricing tiers for the landing page.

use leptos::prelude::*;

use crate::net::types::AccessLevel;
use crate::routes::AppRoute;
use crate::util::format::format_price;

/// One plan on the pricing grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub level: AccessLevel,
    pub name: &'static str,
    /// US dollars per month.
    pub price: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub button_text: &'static str,
    pub highlight: Option<&'static str>,
}

pub const PRICING_TIERS: [PricingTier; 4] = [
    PricingTier {
        level: AccessLevel::Free,
        name: "Free",
        price: 0,
        description: "Perfect for getting started or for casual use.",
        features: &[
            "5 shorten calls per minute",
            "Basic link shortening",
            "Simple analytics (total clicks, last clicked)",
            "Limited support",
        ],
        button_text: "Sign Up Free",
        highlight: None,
    },
    PricingTier {
        level: AccessLevel::User,
        name: "User",
        price: 1,
        description: "Great for regular users who need more capacity and control.",
        features: &[
            "All Free features",
            "100 shorten calls per minute",
            "Editable destination URLs (limited time after creation)",
            "Basic analytics",
            "Email support",
        ],
        button_text: "Sign-Up as User",
        highlight: None,
    },
    PricingTier {
        level: AccessLevel::Business,
        name: "Business",
        price: 10,
        description: "For professionals needing insights & unlimited shortening.",
        features: &[
            "All User features",
            "Unlimited shorten URLs",
            "Granular click data visualization",
            "Referrer, device & browser tracking",
            "UTM parameter generation & tracking",
            "Data export (CSV, Excel)",
            "Webhooks for link events",
            "API access",
        ],
        button_text: "Sign-Up for Business",
        highlight: Some("Best Value"),
    },
    PricingTier {
        level: AccessLevel::Enterprise,
        name: "Enterprise",
        price: 25,
        description: "Enterprise-grade features for organizations at scale.",
        features: &[
            "All Business & User features",
            "Custom domains",
            "Branded redirect pages",
            "Dedicated API keys with highest limits",
            "URL tagging & organization (folders/tags)",
            "Bulk URL shortening",
            "Priority support & account manager",
        ],
        button_text: "Sign-Up for Enterprise",
        highlight: None,
    },
];

#[component]
pub fn PricingCard(tier: PricingTier) -> impl IntoView {
    view! {
        <div class="pricing-card" class:pricing-card--highlight=tier.highlight.is_some() data-level=tier.level.as_str()>
            {tier.highlight.map(|label| view! { <div class="pricing-card__ribbon">{label}</div> })}
            <h3 class="pricing-card__name">{tier.name}</h3>
            <div class="pricing-card__price">
                {format_price(tier.price)}
                <span class="pricing-card__period">"/month"</span>
            </div>
            <p class="pricing-card__description">{tier.description}</p>
            <ul class="pricing-card__features">
                {tier.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect::<Vec<_>>()}
            </ul>
            <a class="btn btn--primary pricing-card__cta" href=AppRoute::Register.path()>
                {tier.button_text}
            </a>
        </div>
    }
}
