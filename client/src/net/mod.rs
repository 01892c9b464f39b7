//! Networking modules for the activities REST API.
//!
//! ARCHITECTURE
//! ============
//! `types` defines the wire DTOs and `api` issues the requests. Pages depend on
//! the `ActivitiesApi` trait so flow logic can run against an in-memory double.

pub mod api;
pub mod types;
