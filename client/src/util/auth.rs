//! Auth actions and shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in and sign-out belong to the external auth service. Components reach
//! it only through the `AuthGateway` carried by `AuthActions` in context, so
//! tests can swap in a recording gateway.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Identity provider requested by the Login control.
pub const SIGN_IN_PROVIDER: &str = "github";

/// Fire-and-forget entry points into the external auth service.
///
/// Implementations must not block; completion (or failure) is observed only
/// through the session changing.
pub trait AuthGateway: Send + Sync {
    /// Begin an out-of-process sign-in flow with the named provider.
    fn sign_in(&self, provider: &str);
    /// Invalidate the current session.
    fn sign_out(&self);
}

/// Context handle for the active [`AuthGateway`].
#[derive(Clone)]
pub struct AuthActions(Arc<dyn AuthGateway>);

impl AuthActions {
    pub fn new(gateway: impl AuthGateway + 'static) -> Self {
        Self(Arc::new(gateway))
    }

    /// Wrap an already shared gateway, keeping the caller's handle to it.
    #[must_use]
    pub fn from_arc(gateway: Arc<dyn AuthGateway>) -> Self {
        Self(gateway)
    }

    /// Actions backed by the auth service's HTTP endpoints.
    #[must_use]
    pub fn http() -> Self {
        Self::new(HttpAuthGateway)
    }

    pub fn run(&self, action: NavAction) {
        action.dispatch(self.0.as_ref());
    }
}

impl Default for AuthActions {
    fn default() -> Self {
        Self::http()
    }
}

impl std::fmt::Debug for AuthActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthActions").finish_non_exhaustive()
    }
}

/// User-triggered auth action exposed by the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    SignIn,
    SignOut,
}

impl NavAction {
    /// Invoke the matching gateway capability exactly once.
    pub fn dispatch(self, gateway: &dyn AuthGateway) {
        match self {
            Self::SignIn => gateway.sign_in(SIGN_IN_PROVIDER),
            Self::SignOut => gateway.sign_out(),
        }
    }
}

/// Gateway that drives the auth service over HTTP and follows its redirects.
///
/// On the server both calls are no-ops.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthGateway;

impl AuthGateway for HttpAuthGateway {
    fn sign_in(&self, provider: &str) {
        #[cfg(feature = "hydrate")]
        {
            let provider = provider.to_owned();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&provider, &current_href()).await {
                    Ok(url) => navigate_to(&url),
                    Err(e) => log::warn!("sign-in with {provider} failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = provider;
        }
    }

    fn sign_out(&self) {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_out(&current_href()).await {
                    // Full navigation so the next page load re-reads the session.
                    Ok(url) => navigate_to(&url),
                    Err(e) => log::warn!("sign-out failed: {e}"),
                }
            });
        }
    }
}

#[cfg(feature = "hydrate")]
fn current_href() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_else(|| "/".to_owned())
}

#[cfg(feature = "hydrate")]
fn navigate_to(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

/// Whether a protected page should send the visitor away.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Redirect to `/` whenever the session has loaded and no user is present.
pub fn install_unauth_redirect<F>(session: ReadSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use std::sync::Mutex;

    use super::AuthGateway;

    /// One recorded gateway invocation.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum AuthCall {
        SignIn(String),
        SignOut,
    }

    /// Gateway that records every call instead of talking to a service.
    #[derive(Debug, Default)]
    pub struct RecordingGateway {
        calls: Mutex<Vec<AuthCall>>,
    }

    impl RecordingGateway {
        pub fn calls(&self) -> Vec<AuthCall> {
            self.calls.lock().expect("calls lock").clone()
        }
    }

    impl AuthGateway for RecordingGateway {
        fn sign_in(&self, provider: &str) {
            self.calls.lock().expect("calls lock").push(AuthCall::SignIn(provider.to_owned()));
        }

        fn sign_out(&self) {
            self.calls.lock().expect("calls lock").push(AuthCall::SignOut);
        }
    }
}
