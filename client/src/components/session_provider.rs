//! Session context provider and accessors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the component tree once (in `App`). Owns the only writable handle to
//! the session signal; descendants get read-only access through
//! `use_session`. In the browser the snapshot is loaded from the auth service
//! on mount and re-read whenever the window regains focus, so sign-ins and
//! sign-outs from other tabs show up without a reload.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::auth::AuthActions;

/// Provide the session signal and auth actions to `children`.
///
/// `actions` defaults to [`AuthActions::http`].
#[component]
pub fn SessionProvider(#[prop(optional)] actions: Option<AuthActions>, children: Children) -> impl IntoView {
    let session = RwSignal::new(SessionState::pending());
    provide_context(session);
    provide_context(actions.unwrap_or_default());

    #[cfg(feature = "hydrate")]
    {
        refresh_session(session);
        let _focus_listener = window_event_listener(leptos::ev::focus, move |_| refresh_session(session));
    }

    children()
}

/// Read-only view of the current session.
///
/// Outside a `SessionProvider` this yields a permanently signed-out state.
pub fn use_session() -> ReadSignal<SessionState> {
    use_context::<RwSignal<SessionState>>()
        .unwrap_or_else(|| RwSignal::new(SessionState::default()))
        .read_only()
}

/// Auth actions from context, falling back to the HTTP gateway.
pub fn use_auth_actions() -> AuthActions {
    use_context::<AuthActions>().unwrap_or_default()
}

#[cfg(feature = "hydrate")]
fn refresh_session(session: RwSignal<SessionState>) {
    leptos::task::spawn_local(async move {
        let next = SessionState::resolved(crate::net::api::fetch_session().await);
        if session.get_untracked() != next {
            log::debug!("session changed: authenticated={}", next.is_authenticated());
            session.set(next);
        }
    });
}

#[cfg(test)]
#[path = "session_provider_test.rs"]
mod session_provider_test;
