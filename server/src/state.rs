//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only carries immutable upstream settings and a pooled HTTP client; the
//! activity data itself lives in the upstream service.

use std::time::Duration;

use crate::config::HostConfig;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Activities API base URL, without trailing `/`.
    pub api_base_url: String,
}

impl AppState {
    /// Build state with an HTTP client honoring the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(config.upstream_timeout_secs);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;
        Ok(Self { http, api_base_url: config.api_base_url.clone() })
    }
}
