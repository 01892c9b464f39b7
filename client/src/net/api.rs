//! REST API helpers for communicating with the activities service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a dead or misbehaving
//! server degrades into status messages without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ActivityCollection, MutationReply};
#[cfg(any(test, feature = "hydrate"))]
use crate::util::uri::encode_component;

/// Error returned by [`ActivitiesApi`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection refused, CORS, abort).
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body was not JSON of the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The list endpoint answered with a non-2xx status.
    #[error("activities request failed: {0}")]
    Status(u16),
    /// No browser to issue requests from.
    #[error("not available on server")]
    Unavailable,
}

/// Registration mutation kinds exposed by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    Signup,
    Unregister,
}

impl Registration {
    /// Trailing path segment of the mutation endpoint.
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Unregister => "unregister",
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) const ACTIVITIES_ENDPOINT: &str = "/activities";

/// `POST /activities/{name}/{verb}?email={email}` with both values encoded.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn registration_endpoint(kind: Registration, activity: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_ENDPOINT}/{}/{}?email={}",
        encode_component(activity),
        kind.verb(),
        encode_component(email)
    )
}

/// The two REST operations the page controller depends on.
///
/// Futures are `?Send`: everything runs on the browser's single thread.
#[async_trait::async_trait(?Send)]
pub trait ActivitiesApi {
    /// Fetch the full activity collection.
    async fn fetch_activities(&self) -> Result<ActivityCollection, ApiError>;

    /// Sign up or unregister `email` for `activity`.
    ///
    /// Non-2xx statuses are returned as `Ok` replies; only transport and
    /// body-decoding problems are errors.
    async fn register(&self, kind: Registration, activity: &str, email: &str) -> Result<MutationReply, ApiError>;
}

/// [`ActivitiesApi`] backed by same-origin `fetch` calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

#[async_trait::async_trait(?Send)]
impl ActivitiesApi for HttpApi {
    async fn fetch_activities(&self) -> Result<ActivityCollection, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(ACTIVITIES_ENDPOINT)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<ActivityCollection>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, kind: Registration, activity: &str, email: &str) -> Result<MutationReply, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = registration_endpoint(kind, activity, email);
            let resp = gloo_net::http::Request::post(&url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .json::<super::types::MutationBody>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(MutationReply { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (kind, activity, email);
            Err(ApiError::Unavailable)
        }
    }
}
