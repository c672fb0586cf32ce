//! Top navigation bar reflecting the current session.
//!
//! DESIGN
//! ======
//! The bar is a pure function of the session: `NavState::from_session` picks
//! one of two states and `nav_controls` lists what that state shows, in visual
//! order. The component renders that list and routes button activations to
//! the `AuthActions` in context. It never writes the session itself.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::components::session_provider::{use_auth_actions, use_session};
use crate::net::types::{Session, SessionUser};
use crate::util::auth::{AuthActions, NavAction};

pub const ROOT_PATH: &str = "/";
pub const CREATE_PATH: &str = "/startup/create";

/// Logo linking to the site root, shown in every state.
pub const BRAND: Brand = Brand { href: ROOT_PATH, src: "/logo.png", alt: "logo", width: 144, height: 30 };

/// Brand image metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brand {
    pub href: &'static str,
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

/// A (path, label) pair rendered as an anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub path: String,
    pub label: String,
}

impl NavLink {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self { path: path.into(), label: label.into() }
    }
}

/// The two states the bar can be in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavState {
    Unauthenticated,
    Authenticated(SessionUser),
}

impl NavState {
    /// Absent sessions and sessions without a user are both unauthenticated.
    #[must_use]
    pub fn from_session(session: Option<&Session>) -> Self {
        match session.and_then(Session::user) {
            Some(user) => Self::Authenticated(user.clone()),
            None => Self::Unauthenticated,
        }
    }
}

/// One rendered element of the bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavControl {
    Brand(Brand),
    Link(NavLink),
    Login,
    Logout,
}

impl NavControl {
    /// Auth action a button control triggers; links and the brand have none.
    #[must_use]
    pub fn action(&self) -> Option<NavAction> {
        match self {
            Self::Login => Some(NavAction::SignIn),
            Self::Logout => Some(NavAction::SignOut),
            Self::Brand(_) | Self::Link(_) => None,
        }
    }

    /// Run this control's action, if any, through `actions`.
    pub fn activate(&self, actions: &AuthActions) {
        if let Some(action) = self.action() {
            actions.run(action);
        }
    }
}

/// Profile route for a user id. The id is percent-encoded as a single path segment.
#[must_use]
pub fn profile_path(user_id: &str) -> String {
    format!("/user/{}", urlencoding::encode(user_id))
}

/// Controls shown for `state`, brand first.
#[must_use]
pub fn nav_controls(state: &NavState) -> Vec<NavControl> {
    let mut controls = vec![NavControl::Brand(BRAND)];
    match state {
        NavState::Unauthenticated => controls.push(NavControl::Login),
        NavState::Authenticated(user) => {
            controls.push(NavControl::Link(NavLink::new(CREATE_PATH, "Create")));
            controls.push(NavControl::Logout);
            controls.push(NavControl::Link(NavLink::new(profile_path(&user.id), user.name.clone())));
        }
    }
    controls
}

/// Application header with the brand and the session-dependent controls.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let actions = use_auth_actions();
    let brand = control_view(NavControl::Brand(BRAND), &actions);

    let session_controls = move || {
        let state = NavState::from_session(session.get().session.as_ref());
        nav_controls(&state)
            .into_iter()
            .filter(|control| !matches!(control, NavControl::Brand(_)))
            .map(|control| control_view(control, &actions))
            .collect::<Vec<_>>()
    };

    view! {
        <header class="navbar">
            <nav class="navbar__inner">
                {brand}
                <div class="navbar__controls">{session_controls}</div>
            </nav>
        </header>
    }
}

fn control_view(control: NavControl, actions: &AuthActions) -> AnyView {
    let actions = actions.clone();
    let trigger = control.clone();
    let on_click = move |_: leptos::ev::MouseEvent| trigger.activate(&actions);
    match control {
        NavControl::Brand(brand) => view! {
            <a href=brand.href class="navbar__brand">
                <img
                    src=brand.src
                    alt=brand.alt
                    width=brand.width.to_string()
                    height=brand.height.to_string()
                />
            </a>
        }
        .into_any(),
        NavControl::Link(link) => view! {
            <a href=link.path class="navbar__link">
                <span>{link.label}</span>
            </a>
        }
        .into_any(),
        NavControl::Login => view! {
            <button type="button" class="navbar__login" on:click=on_click>
                "Login"
            </button>
        }
        .into_any(),
        NavControl::Logout => view! {
            <button type="button" class="navbar__logout" on:click=on_click>
                <span>"Logout"</span>
            </button>
        }
        .into_any(),
    }
}
