//! JSON transport to the remote API.
//!
//! Every request carries the session cookie and is raced against a timeout.
//! Failures are never retried; callers decide how to surface them, usually
//! through [`notify_error`].

use std::future::Future;

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestCredentials;

use super::api_utils::{api_config, api_url};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Patch,
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
    };
    builder.credentials(RequestCredentials::Include)
}

/// Resolve `fut`, or fail with [`ApiError::Timeout`] once `timeout_ms` elapses
pub async fn with_timeout<F, T>(fut: F, timeout_ms: u32) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let timeout = TimeoutFuture::new(timeout_ms);
    pin_mut!(fut);
    pin_mut!(timeout);
    match select(fut, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout(timeout_ms)),
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

async fn dispatch<B: Serialize>(
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<Response, ApiError> {
    let url = api_url(path);
    let builder = builder(method, &url);
    let request = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?,
    };
    log::debug!("{:?} {}", method, url);
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    post_json_with_timeout(path, body, api_config().timeout_ms).await
}

pub async fn post_json_with_timeout<B, T>(path: &str, body: &B, timeout_ms: u32) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    with_timeout(
        async move { decode(dispatch(Method::Post, path, Some(body)).await?).await },
        timeout_ms,
    )
    .await
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    with_timeout(
        async move { decode(dispatch::<()>(Method::Get, path, None).await?).await },
        api_config().timeout_ms,
    )
    .await
}

/// POST whose response body is an acknowledgement only
pub async fn post_ack<B: Serialize>(path: &str, body: Option<&B>) -> Result<(), ApiError> {
    with_timeout(
        async move { dispatch(Method::Post, path, body).await.map(|_| ()) },
        api_config().timeout_ms,
    )
    .await
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    with_timeout(
        async move { dispatch(Method::Put, path, Some(body)).await.map(|_| ()) },
        api_config().timeout_ms,
    )
    .await
}

pub async fn patch_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    with_timeout(
        async move { dispatch(Method::Patch, path, Some(body)).await.map(|_| ()) },
        api_config().timeout_ms,
    )
    .await
}

/// Log the failure and show it to the user as a blocking alert
pub fn notify_error(action: &str, err: &ApiError) {
    let message = format!("{} failed: {}", action, err);
    log::error!("{}", message);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_carries_code_and_body() {
        let err = ApiError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "server responded 500: Internal Server Error");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_timeout_message() {
        let err = ApiError::Timeout(8_000);
        assert_eq!(err.to_string(), "request timed out after 8000 ms");
        assert_eq!(err.status(), None);
    }
}
