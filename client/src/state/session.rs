//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in an `RwSignal` provided by `SessionProvider`. Components only read
//! it; the provider is the sole writer.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Session, SessionUser};

/// Reactive session snapshot plus loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl SessionState {
    /// State before the first fetch has completed.
    #[must_use]
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    /// State after a fetch has resolved, with or without a session.
    #[must_use]
    pub fn resolved(session: Option<Session>) -> Self {
        Self { session, loading: false }
    }

    /// The signed-in user. A session without a user counts as signed out.
    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.session.as_ref().and_then(Session::user)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }
}
