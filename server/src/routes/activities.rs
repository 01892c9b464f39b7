//! Forwarding routes for the activities API.
//!
//! The browser talks to same-origin `/activities` URLs; these handlers replay
//! each call against the upstream service and return its status and JSON body
//! unchanged.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use crate::state::AppState;

/// Detail returned when the upstream cannot be reached.
pub const UPSTREAM_UNAVAILABLE_DETAIL: &str = "activities service unavailable";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "activities upstream failed");
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "detail": UPSTREAM_UNAVAILABLE_DETAIL }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Upstream URL for `segments` under the base, with each segment encoded.
pub(crate) fn upstream_url(base: &str, segments: &[&str], email: Option<&str>) -> Result<reqwest::Url, ProxyError> {
    let mut url = reqwest::Url::parse(base).map_err(|e| ProxyError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| ProxyError::InvalidUrl(base.to_owned()))?
        .pop_if_empty()
        .extend(segments);
    if let Some(email) = email {
        url.query_pairs_mut().append_pair("email", email);
    }
    Ok(url)
}

async fn relay(resp: reqwest::Response) -> Result<Response, ProxyError> {
    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = resp.headers().get(reqwest::header::CONTENT_TYPE).cloned();
    let body: Bytes = resp.bytes().await?;
    let mut response = (status, body).into_response();
    let content_type = content_type
        .and_then(|v| HeaderValue::from_bytes(v.as_bytes()).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    Ok(response)
}

/// `GET /activities` — forward the activity list.
pub async fn list_activities(State(state): State<AppState>) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.api_base_url, &["activities"], None)?;
    let resp = state.http.get(url).send().await?;
    relay(resp).await
}

/// `POST /activities/{name}/signup?email=` — forward a sign-up.
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Response, ProxyError> {
    forward_registration(&state, &name, "signup", &query.email).await
}

/// `POST /activities/{name}/unregister?email=` — forward a removal.
pub async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Response, ProxyError> {
    forward_registration(&state, &name, "unregister", &query.email).await
}

async fn forward_registration(state: &AppState, name: &str, verb: &str, email: &str) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.api_base_url, &["activities", name, verb], Some(email))?;
    tracing::debug!(activity = %name, verb, "forwarding registration");
    let resp = state.http.post(url).send().await?;
    relay(resp).await
}
