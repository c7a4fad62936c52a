//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, forms, and modals while reading shared
//! session and API handles from Leptos context providers.

pub mod alert;
pub mod form_field;
pub mod guard;
pub mod nav;
pub mod pager;
pub mod pricing_card;
pub mod shorten_card;
pub mod stats_modal;
pub mod user_details_modal;
