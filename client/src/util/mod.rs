//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep pure rules (guards, validation, formatting) and
//! browser-only concerns (clipboard) out of page components so they stay
//! testable without a DOM.

pub mod clipboard;
pub mod format;
pub mod guard;
pub mod validate;
