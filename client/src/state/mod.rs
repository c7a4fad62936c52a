//! Client application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is app-wide and provided through context; `links` and `admin`
//! are route-scoped list states owned by their pages.

pub mod admin;
mod generation;
pub mod links;
pub mod session;
