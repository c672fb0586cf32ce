//! Profile route at `/user/{id}`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::session_provider::use_session;

/// Heading for a profile page: the display name when it is the signed-in
/// user's own page, otherwise the raw id.
#[must_use]
pub fn profile_heading(user_id: &str, own_name: Option<&str>) -> String {
    match own_name {
        Some(name) => name.to_owned(),
        None if user_id.is_empty() => "Unknown user".to_owned(),
        None => format!("User {user_id}"),
    }
}

#[component]
pub fn UserPage() -> impl IntoView {
    let params = use_params_map();
    let session = use_session();

    let heading = move || {
        let user_id = params.read().get("id").unwrap_or_default();
        let state = session.get();
        let own_name = state.user().filter(|u| u.id == user_id).map(|u| u.name.as_str());
        profile_heading(&user_id, own_name)
    };

    view! {
        <section class="user-page">
            <h1>{heading}</h1>
        </section>
    }
}

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;
