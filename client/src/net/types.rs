//! Wire DTOs for the activities REST API.
//!
//! DESIGN
//! ======
//! The list endpoint returns a JSON object keyed by activity name. It is
//! decoded into an ordered `Vec` so cards and select options follow the
//! server's key order instead of a hash or sort order.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Per-activity payload from `GET /activities`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    /// Participant emails in sign-up order.
    pub participants: Vec<String>,
}

/// A named activity as rendered on a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    /// Display name, also the key used in mutation paths.
    pub name: String,
    pub details: ActivityDetails,
}

impl Activity {
    /// Remaining capacity. Negative only if the server reports more
    /// participants than seats.
    #[must_use]
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.details.participants.len()).unwrap_or(i64::MAX);
        self.details.max_participants.saturating_sub(taken)
    }
}

/// Whole activity list, in server key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityCollection(pub Vec<Activity>);

impl ActivityCollection {
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|a| a.name.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut activities: Vec<Activity> = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    // Repeated key: first position, last value.
                    if let Some(existing) = activities.iter_mut().find(|a| a.name == name) {
                        existing.details = details;
                    } else {
                        activities.push(Activity { name, details });
                    }
                }
                Ok(ActivityCollection(activities))
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}

/// Body of a signup/unregister response.
///
/// Success bodies carry `message`; error bodies carry `detail`, which is a
/// string for application errors but may be structured for validation errors.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MutationBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl MutationBody {
    /// The `detail` field when it is a non-empty string.
    #[must_use]
    pub fn detail_text(&self) -> Option<&str> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

/// HTTP status plus decoded body of a mutation response.
#[derive(Clone, Debug, PartialEq)]
pub struct MutationReply {
    pub status: u16,
    pub body: MutationBody,
}

impl MutationReply {
    /// Whether the server answered with a 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
