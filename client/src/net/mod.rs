//! Networking modules for the auth service REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema they
//! exchange.

pub mod api;
pub mod types;
