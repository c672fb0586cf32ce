//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the application chrome and read shared session state
//! from Leptos context providers.

pub mod layout;
pub mod navbar;
pub mod session_provider;
