//! Signup form with email input and activity select.

use leptos::prelude::*;

/// Label of the empty leading option in the activity select.
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Form fields are owned by the page so it can clear them after a
/// successful signup.
#[component]
pub fn SignupForm(
    email: RwSignal<String>,
    activity: RwSignal<String>,
    #[prop(into)] options: Signal<Vec<String>>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            id="signup-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required=true
                    prop:value=move || activity.get()
                    on:change=move |ev| activity.set(event_target_value(&ev))
                >
                    <option value="">{SELECT_PLACEHOLDER}</option>
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|name| {
                                let label = name.clone();
                                view! { <option value=name>{label}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
