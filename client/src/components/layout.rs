//! Page layout shared by every route.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

/// Navigation bar followed by the page content, which is passed through as is.
#[component]
pub fn Layout(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar/>
            {children.map(|children| children())}
        </div>
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;
