#![cfg(feature = "ssr")]

use std::sync::Arc;

use super::*;
use crate::state::session::SessionState;
use crate::util::auth::AuthActions;
use crate::util::auth::test_helpers::RecordingGateway;

fn render(build: impl FnOnce() -> AnyView) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(SessionState::resolved(None)));
        provide_context(AuthActions::from_arc(Arc::new(RecordingGateway::default())));
        build().to_html()
    })
}

#[test]
fn navbar_precedes_children() {
    let html = render(|| view! { <Layout><main id="page">"page body"</main></Layout> }.into_any());
    let nav = html.find("class=\"navbar\"").expect("navbar");
    let body = html.find("page body").expect("children");
    assert!(nav < body);
}

#[test]
fn navbar_rendered_exactly_once() {
    let html = render(|| view! { <Layout><p>"a"</p><p>"b"</p></Layout> }.into_any());
    assert_eq!(html.matches("class=\"navbar\"").count(), 1);
}

#[test]
fn empty_children_still_render_navbar() {
    let html = render(|| view! { <Layout/> }.into_any());
    assert_eq!(html.matches("class=\"navbar\"").count(), 1);
}

#[test]
fn children_are_not_wrapped() {
    let html = render(|| view! { <Layout><main id="page">"x"</main></Layout> }.into_any());
    let layout_open = html.find("class=\"layout\"").expect("layout");
    let main_open = html.find("<main id=\"page\">").expect("main");
    assert!(layout_open < main_open);
    assert_eq!(html.matches("<main").count(), 1);
}
