//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the activity list, the signup form and the status
//! banner. They hold no state of their own; the activities page passes in
//! signals and callbacks.

pub mod activity_card;
pub mod signup_form;
pub mod status_banner;
