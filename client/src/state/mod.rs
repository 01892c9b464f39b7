//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `activities` holds the last fetched list and
//! `status` holds the transient feedback banner.

pub mod activities;
pub mod status;
