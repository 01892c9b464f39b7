//! Signup and unregister flows for the activities page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both flows issue one mutating request and turn the reply into a
//! [`FlowOutcome`]: which message to show, whether to clear the form and
//! whether to re-fetch the list. The page component applies the outcome to
//! its signals; everything here is plain async code over [`ActivitiesApi`].

#![cfg_attr(not(feature = "hydrate"), allow(dead_code))]

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::net::api::{ActivitiesApi, ApiError, Registration};
use crate::net::types::MutationReply;
use crate::state::activities::ActivitiesState;
use crate::state::status::StatusMessage;

/// Shown when the server rejects a mutation without a usable `detail`.
pub(crate) const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// What the page should do after a mutation settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FlowOutcome {
    pub status: StatusMessage,
    pub reset_form: bool,
    pub refresh: bool,
}

/// Fixed message for a request that never completed.
pub(crate) fn transport_failure_message(kind: Registration) -> &'static str {
    match kind {
        Registration::Signup => "Failed to sign up. Please try again.",
        Registration::Unregister => "Failed to remove participant. Please try again.",
    }
}

/// Confirmation prompt shown before removing a participant.
pub(crate) fn removal_prompt(activity: &str, email: &str) -> String {
    format!("Remove {email} from {activity}?")
}

/// Map a mutation result to the page reaction.
///
/// Only a 2xx reply refreshes the list; signup additionally clears the form.
pub(crate) fn resolve_outcome(kind: Registration, result: Result<MutationReply, ApiError>) -> FlowOutcome {
    match result {
        Ok(reply) if reply.is_success() => FlowOutcome {
            status: StatusMessage::success(reply.body.message.unwrap_or_default()),
            reset_form: kind == Registration::Signup,
            refresh: true,
        },
        Ok(reply) => FlowOutcome {
            status: StatusMessage::error(reply.body.detail_text().unwrap_or(GENERIC_ERROR_MESSAGE)),
            reset_form: false,
            refresh: false,
        },
        Err(e) => {
            match kind {
                Registration::Signup => log::error!("Error signing up: {e}"),
                Registration::Unregister => log::error!("Error removing participant: {e}"),
            }
            FlowOutcome {
                status: StatusMessage::error(transport_failure_message(kind)),
                reset_form: false,
                refresh: false,
            }
        }
    }
}

/// Fetch the list and fold the result into a fresh state.
pub(crate) async fn load_activities<A: ActivitiesApi>(api: &A) -> ActivitiesState {
    let mut state = ActivitiesState::default();
    state.apply_fetch(api.fetch_activities().await);
    state
}

/// Submit the signup form values.
pub(crate) async fn submit_signup<A: ActivitiesApi>(api: &A, activity: &str, email: &str) -> FlowOutcome {
    let result = api.register(Registration::Signup, activity, email).await;
    resolve_outcome(Registration::Signup, result)
}

/// Remove `email` from `activity` after `confirm` accepts the prompt.
///
/// Returns `None` when the user declines; no request is sent.
pub(crate) async fn remove_participant<A, C>(api: &A, confirm: C, activity: &str, email: &str) -> Option<FlowOutcome>
where
    A: ActivitiesApi,
    C: FnOnce(&str) -> bool,
{
    if !confirm(&removal_prompt(activity, email)) {
        return None;
    }
    let result = api.register(Registration::Unregister, activity, email).await;
    Some(resolve_outcome(Registration::Unregister, result))
}
