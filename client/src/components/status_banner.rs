//! Status banner for signup/unregister feedback.

use leptos::prelude::*;

use crate::state::status::StatusState;

/// Renders the current status message; the `hidden` class hides it.
#[component]
pub fn StatusBanner(status: RwSignal<StatusState>) -> impl IntoView {
    view! {
        <div id="message" class=move || status.get().class_name()>
            {move || status.get().text()}
        </div>
    }
}
