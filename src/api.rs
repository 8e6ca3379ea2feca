//! Authenticated HTTP client. Every request in the app goes through these
//! helpers: the bearer token is attached on the way out, and a 401 response
//! away from the login screen clears the persisted session and sends the
//! browser back to login. All other errors are returned to the calling view.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::list::ListQuery;
use crate::models::PageEnvelope;
use crate::session;

pub const API_BASE_URL: &str = match option_env!("ADMIN_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired")]
    Unauthorized,
    #[error("{message}")]
    Status { code: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match session::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// What the response interceptor does with a status, given where the
/// browser currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionAction {
    ClearAndRedirect,
    PassThrough,
}

/// Only a 401 away from the login screen tears the session down. A 401 on
/// the login screen itself is the server rejecting credentials; redirecting
/// there would reload the page and drop the form along with its error
/// message, so it stays with the caller.
fn on_unauthorized(status: u16, current_path: &str) -> SessionAction {
    if status == 401 && current_path != session::LOGIN_PATH {
        SessionAction::ClearAndRedirect
    } else {
        SessionAction::PassThrough
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}

/// Response phase of the interceptor pair. 401 is the only status handled
/// centrally; everything else is surfaced to the caller with the server's
/// message text verbatim.
async fn check(path: &str, resp: Response) -> Result<Response, ApiError> {
    if resp.status() == 401 {
        if on_unauthorized(resp.status(), &current_path()) == SessionAction::ClearAndRedirect {
            log::warn!("session expired on {path}, redirecting to login");
            session::clear_token();
            session::redirect_to_login();
        }
        return Err(ApiError::Unauthorized);
    }
    if !resp.ok() {
        let mut message = resp.text().await.unwrap_or_default();
        if message.is_empty() {
            message = format!("request failed with status {}", resp.status());
        }
        log::error!("{path} -> {} {message}", resp.status());
        return Err(ApiError::Status {
            code: resp.status(),
            message,
        });
    }
    Ok(resp)
}

async fn send(path: &str, builder: RequestBuilder) -> Result<Response, ApiError> {
    let resp = authorized(builder)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check(path, resp).await
}

async fn send_body<B: Serialize>(
    path: &str,
    builder: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    let request = authorized(builder)
        .json(body)
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    check(path, resp).await
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = format!("{API_BASE_URL}{path}");
    let resp = send(path, Request::get(&url)).await?;
    resp.json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

pub async fn get_page<T: DeserializeOwned>(
    path: &str,
    query: &ListQuery,
) -> Result<PageEnvelope<T>, ApiError> {
    get_json(&format!("{path}?{}", query.to_query_string())).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = format!("{API_BASE_URL}{path}");
    let resp = send_body(path, Request::post(&url), body).await?;
    resp.json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

pub async fn post<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = format!("{API_BASE_URL}{path}");
    send_body(path, Request::post(&url), body).await?;
    Ok(())
}

pub async fn put<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = format!("{API_BASE_URL}{path}");
    send_body(path, Request::put(&url), body).await?;
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = format!("{API_BASE_URL}{path}");
    send(path, Request::delete(&url)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_session_is_torn_down_away_from_login() {
        assert_eq!(
            on_unauthorized(401, "/dashboard"),
            SessionAction::ClearAndRedirect
        );
        assert_eq!(
            on_unauthorized(401, "/history"),
            SessionAction::ClearAndRedirect
        );
    }

    #[test]
    fn rejected_credentials_stay_with_the_login_form() {
        assert_eq!(
            on_unauthorized(401, session::LOGIN_PATH),
            SessionAction::PassThrough
        );
    }

    #[test]
    fn other_statuses_never_touch_the_session() {
        assert_eq!(on_unauthorized(200, "/dashboard"), SessionAction::PassThrough);
        assert_eq!(on_unauthorized(403, "/dashboard"), SessionAction::PassThrough);
        assert_eq!(on_unauthorized(500, session::LOGIN_PATH), SessionAction::PassThrough);
    }
}
