//! Sign-in and sign-out form handlers. They own the session cookie.

use axum::{Form, extract::State, response::Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use common::sign_in_notice::SignInNotice;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::api::users;
use crate::config::AppwriteConfig;
use crate::session::{SESSION_COOKIE, session_secret_from_jar};

pub const SIGN_IN_PATH: &str = "/sign-in";

#[derive(Debug, Deserialize)]
pub struct EmailTokenForm {
    pub email: String,
    #[serde(default)]
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionForm {
    pub user_id: String,
    #[serde(default)]
    pub email: String,
    pub secret: String,
}

#[derive(Debug, Default, Serialize)]
struct SignInParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

/// `/sign-in` with the given query parameters, form-encoded. Blank values are left out.
pub fn sign_in_url(user_id: Option<&str>, email: Option<&str>, notice: Option<SignInNotice>) -> String {
    let params = SignInParams {
        user_id: user_id.filter(|v| !v.is_empty()),
        email: email.filter(|v| !v.is_empty()),
        error: notice.map(|n| n.as_str()),
    };
    match serde_urlencoded::to_string(&params) {
        Ok(query) if !query.is_empty() => format!("{SIGN_IN_PATH}?{query}"),
        Ok(_) => SIGN_IN_PATH.to_string(),
        Err(e) => {
            error!("sign_in_url: could not encode query: {:#?}", e);
            SIGN_IN_PATH.to_string()
        }
    }
}

pub fn session_cookie(secret: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, secret))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .build()
}

pub async fn request_email_token(State(config): State<AppwriteConfig>, Form(form): Form<EmailTokenForm>) -> Redirect {
    match users::send_email_otp(&config, &form.email, Some(&form.full_name)).await {
        Ok(account_id) => Redirect::to(&sign_in_url(Some(&account_id), Some(form.email.trim()), None)),
        Err(e) => {
            error!("request_email_token: request failed: {:#?}", e);
            Redirect::to(&sign_in_url(None, Some(form.email.trim()), Some(SignInNotice::CodeNotSent)))
        }
    }
}

pub async fn create_session(
    State(config): State<AppwriteConfig>,
    jar: CookieJar,
    Form(form): Form<SessionForm>,
) -> (CookieJar, Redirect) {
    match users::create_session(&config, &form.user_id, &form.secret).await {
        Ok(secret) => {
            info!("create_session: signed in account {}", form.user_id);
            (jar.add(session_cookie(secret, config.cookie_secure)), Redirect::to("/"))
        }
        Err(e) => {
            error!("create_session: request failed: {:#?}", e);
            let url = sign_in_url(Some(&form.user_id), Some(&form.email), Some(SignInNotice::InvalidCode));
            (jar, Redirect::to(&url))
        }
    }
}

pub async fn sign_out(State(config): State<AppwriteConfig>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(secret) = session_secret_from_jar(&jar) {
        if let Err(e) = users::sign_out(&config, &secret).await {
            error!("sign_out: request failed: {:#?}", e);
        }
    }
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Redirect::to(SIGN_IN_PATH))
}

#[cfg(test)]
#[path = "auth_routes_test.rs"]
mod tests;
