//! Activity list state for the activities page.
//!
//! DESIGN
//! ======
//! The list is never patched locally. Every fetch result replaces the whole
//! state, so the rendering always mirrors the most recent server response.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use crate::net::api::ApiError;
use crate::net::types::ActivityCollection;

/// Text shown in place of the list when the fetch fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load activities. Please try again later.";

/// Placeholder shown before the first fetch resolves.
pub const LOADING_MESSAGE: &str = "Loading activities...";

/// Last known activity list plus fetch status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivitiesState {
    pub collection: ActivityCollection,
    /// `true` until the first fetch resolves.
    pub loading: bool,
    pub error: Option<String>,
}

impl ActivitiesState {
    /// State for a page that has not fetched yet.
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Replace the state with the outcome of a list fetch.
    ///
    /// A failure clears the previous list; the page shows the failure message
    /// instead of stale cards.
    pub fn apply_fetch(&mut self, result: Result<ActivityCollection, ApiError>) {
        self.loading = false;
        match result {
            Ok(collection) => {
                self.collection = collection;
                self.error = None;
            }
            Err(e) => {
                log::error!("Error fetching activities: {e}");
                self.collection = ActivityCollection::default();
                self.error = Some(LOAD_FAILED_MESSAGE.to_owned());
            }
        }
    }

    /// Activity names for the signup select, in list order.
    #[must_use]
    pub fn option_names(&self) -> Vec<String> {
        self.collection.names()
    }
}
