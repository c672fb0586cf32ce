//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; the shared chrome comes from
//! `components::layout`.

pub mod create;
pub mod home;
pub mod user;
