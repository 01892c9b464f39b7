//! Card component for a single activity.
//!
//! DESIGN
//! ======
//! Cards never bind their own removal handlers. The list container hands every
//! card the same `on_remove` callback, so freshly rendered cards work without
//! rebinding and the container alone decides what a removal does.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;

use crate::net::types::Activity;

/// Shared stylesheet for cards and participant lists, injected once per page.
pub const ACTIVITY_CARD_STYLES: &str = r"
.participants-section {
  margin-top: 1em;
  padding: 0.5em 0.8em;
  background: #f6f8fa;
  border-radius: 6px;
  border: 1px solid #e3e6ea;
}
.participants-section strong {
  display: block;
  margin-bottom: 0.3em;
  color: #1a237e;
}
.participants-list {
  margin: 0.5em 0 0 0;
  padding: 0;
  list-style-type: none;
}
.participant-item {
  display: flex;
  align-items: center;
  margin-bottom: 0.2em;
  color: #2d4a6a;
  font-size: 0.97em;
}
.delete-participant {
  margin-left: 8px;
  cursor: pointer;
  color: #d32f2f;
  transition: color 0.2s;
}
.delete-participant:hover {
  color: #b71c1c;
}
.no-participants {
  color: #888;
  font-style: italic;
}
";

/// Placeholder for an empty roster.
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet.";

/// The (activity, participant) pair a removal control targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovalTarget {
    pub activity: String,
    pub email: String,
}

/// Participants section contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParticipantsView {
    Empty,
    Listed(Vec<RemovalTarget>),
}

impl ParticipantsView {
    #[must_use]
    pub fn of(activity: &Activity) -> Self {
        if activity.details.participants.is_empty() {
            return Self::Empty;
        }
        Self::Listed(
            activity
                .details
                .participants
                .iter()
                .map(|email| RemovalTarget { activity: activity.name.clone(), email: email.clone() })
                .collect(),
        )
    }
}

/// Availability line, e.g. `"9 spots left"`.
#[must_use]
pub fn spots_left_label(activity: &Activity) -> String {
    format!("{} spots left", activity.spots_left())
}

/// A card with description, schedule, availability and roster.
#[component]
pub fn ActivityCard(activity: Activity, on_remove: Callback<RemovalTarget>) -> impl IntoView {
    let availability = spots_left_label(&activity);
    let participants = match ParticipantsView::of(&activity) {
        ParticipantsView::Empty => view! { <span class="no-participants">{NO_PARTICIPANTS_TEXT}</span> }.into_any(),
        ParticipantsView::Listed(targets) => view! {
            <ul class="participants-list">
                {targets
                    .into_iter()
                    .map(|target| view! { <ParticipantRow target=target on_remove=on_remove/> })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
    };
    let Activity { name, details } = activity;

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{details.description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {details.schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
            <div class="participants-section">
                <strong>"Participants:"</strong>
                {participants}
            </div>
        </div>
    }
}

#[component]
fn ParticipantRow(target: RemovalTarget, on_remove: Callback<RemovalTarget>) -> impl IntoView {
    let email = target.email.clone();
    let activity = target.activity.clone();
    let data_email = target.email.clone();

    view! {
        <li class="participant-item">
            <span>{email}</span>
            <span
                class="delete-participant"
                title="Remove participant"
                data-activity=activity
                data-email=data_email
                on:click=move |_| on_remove.run(target.clone())
            >
                "🗑"
            </span>
        </li>
    }
}
