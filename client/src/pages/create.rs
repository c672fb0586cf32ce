//! Startup creation route at `/startup/create`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::session_provider::use_session;
use crate::util::auth::install_unauth_redirect;

/// Sends signed-out visitors back to `/` once the session has loaded.
#[component]
pub fn CreateStartupPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    view! {
        <section class="create-page">
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| view! { <p>"Checking your session..."</p> }
            >
                <h1>"Submit your startup"</h1>
            </Show>
        </section>
    }
}
