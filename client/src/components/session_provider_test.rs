use std::sync::Arc;

use super::*;
use crate::net::types::{Session, SessionUser};
use crate::util::auth::NavAction;
use crate::util::auth::test_helpers::{AuthCall, RecordingGateway};

#[test]
fn use_session_without_provider_is_signed_out() {
    Owner::new().with(|| {
        let state = use_session().get_untracked();
        assert_eq!(state, SessionState::default());
    });
}

#[test]
fn use_session_reads_provided_signal() {
    Owner::new().with(|| {
        let user = SessionUser { id: "42".to_owned(), name: "Ada".to_owned(), email: None, image: None };
        let signal = RwSignal::new(SessionState::resolved(Some(Session { user: Some(user), expires: None })));
        provide_context(signal);

        let session = use_session();
        assert!(session.get_untracked().is_authenticated());

        signal.set(SessionState::resolved(None));
        assert!(!session.get_untracked().is_authenticated());
    });
}

#[test]
fn use_auth_actions_returns_provided_gateway() {
    Owner::new().with(|| {
        let gateway = Arc::new(RecordingGateway::default());
        provide_context(AuthActions::from_arc(gateway.clone()));

        use_auth_actions().run(NavAction::SignOut);
        assert_eq!(gateway.calls(), vec![AuthCall::SignOut]);
    });
}
