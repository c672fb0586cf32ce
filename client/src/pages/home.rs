//! Landing page at `/`.

use leptos::prelude::*;

use crate::components::session_provider::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let greeting = move || {
        session
            .get()
            .user()
            .map_or_else(|| "Pitch your startup.".to_owned(), |u| format!("Welcome back, {}.", u.name))
    };

    view! {
        <section class="home-page">
            <h1>{greeting}</h1>
        </section>
    }
}
