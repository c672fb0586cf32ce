//! REST helpers for the external auth service mounted at `/api/auth`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since the session cookie
//! and the redirect flow only exist in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. The auth service
//! owns every failure mode; these helpers only report that a call failed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Session;

/// Mount point of the auth service on the application origin.
pub const AUTH_BASE_PATH: &str = "/api/auth";

#[cfg(any(test, feature = "hydrate"))]
fn session_endpoint() -> String {
    format!("{AUTH_BASE_PATH}/session")
}

#[cfg(any(test, feature = "hydrate"))]
fn csrf_endpoint() -> String {
    format!("{AUTH_BASE_PATH}/csrf")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_endpoint(provider: &str) -> String {
    format!("{AUTH_BASE_PATH}/signin/{}", urlencoding::encode(provider))
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_out_endpoint() -> String {
    format!("{AUTH_BASE_PATH}/signout")
}

/// Encode `application/x-www-form-urlencoded` fields.
#[cfg(any(test, feature = "hydrate"))]
fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Fetch the current session from `GET /api/auth/session`.
/// Returns `None` when signed out, on any failure, or on the server.
pub async fn fetch_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&session_endpoint())
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body = resp.text().await.ok()?;
        super::types::parse_session(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch a CSRF token from `GET /api/auth/csrf`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is not a token.
pub async fn fetch_csrf_token() -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&csrf_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("csrf request", resp.status()));
        }
        let body: super::types::CsrfToken = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.csrf_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Start a sign-in flow with `provider` via `POST /api/auth/signin/{provider}`.
///
/// Returns the URL the browser must navigate to (the provider's authorize page).
///
/// # Errors
///
/// Returns an error string if the CSRF fetch or the sign-in request fails.
pub async fn sign_in(provider: &str, callback_url: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let csrf = fetch_csrf_token().await?;
        post_redirect_form(
            &sign_in_endpoint(provider),
            &[("csrfToken", csrf.as_str()), ("callbackUrl", callback_url)],
            "sign-in",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (provider, callback_url);
        Err("not available on server".to_owned())
    }
}

/// End the current session via `POST /api/auth/signout`.
///
/// Returns the URL the browser should navigate to afterwards.
///
/// # Errors
///
/// Returns an error string if the CSRF fetch or the sign-out request fails.
pub async fn sign_out(callback_url: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let csrf = fetch_csrf_token().await?;
        post_redirect_form(
            &sign_out_endpoint(),
            &[("csrfToken", csrf.as_str()), ("callbackUrl", callback_url)],
            "sign-out",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = callback_url;
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
async fn post_redirect_form(url: &str, fields: &[(&str, &str)], action: &str) -> Result<String, String> {
    let resp = gloo_net::http::Request::post(url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("X-Auth-Return-Redirect", "1")
        .body(form_body(fields))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(action, resp.status()));
    }
    let body: super::types::RedirectResponse = resp.json().await.map_err(|e| e.to_string())?;
    Ok(body.url)
}
