//! Activities page: list, signup form and status banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On mount it fetches the list; signup and removal
//! each run one request through `registration` and then apply the outcome to
//! the page signals (banner, form fields, list refresh). Requests are never
//! cancelled or serialized; overlapping refreshes land in completion order.

use leptos::prelude::*;

use crate::components::activity_card::{ActivityCard, RemovalTarget};
use crate::components::signup_form::SignupForm;
use crate::components::status_banner::StatusBanner;
use crate::state::activities::{ActivitiesState, LOADING_MESSAGE};
use crate::state::status::StatusState;

/// Activities page — cards for every activity plus the signup form.
#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let activities = RwSignal::new(ActivitiesState::loading());
    let status = RwSignal::new(StatusState::default());
    let email = RwSignal::new(String::new());
    let selected = RwSignal::new(String::new());

    // Initial fetch on mount.
    #[cfg(feature = "hydrate")]
    refresh(activities);

    let on_submit = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let activity_name = selected.get_untracked();
            let email_value = email.get_untracked();
            leptos::task::spawn_local(async move {
                let outcome =
                    super::registration::submit_signup(&crate::net::api::HttpApi, &activity_name, &email_value).await;
                if outcome.reset_form {
                    email.set(String::new());
                    selected.set(String::new());
                }
                apply_outcome(outcome, activities, status);
            });
        }
    });

    let on_remove = Callback::new(move |target: RemovalTarget| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let outcome = super::registration::remove_participant(
                    &crate::net::api::HttpApi,
                    crate::util::confirm::ask,
                    &target.activity,
                    &target.email,
                )
                .await;
                if let Some(outcome) = outcome {
                    apply_outcome(outcome, activities, status);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    });

    let options = Signal::derive(move || activities.with(ActivitiesState::option_names));

    view! {
        <div class="activities-page">
            <header>
                <h1>"Extracurricular Activities"</h1>
            </header>
            <main>
                <section id="activities-container">
                    <h3>"Available Activities"</h3>
                    <div id="activities-list">
                        {move || {
                            let state = activities.get();
                            if state.loading {
                                return view! { <p>{LOADING_MESSAGE}</p> }.into_any();
                            }
                            if let Some(error) = state.error {
                                return view! { <p>{error}</p> }.into_any();
                            }
                            state
                                .collection
                                .0
                                .into_iter()
                                .map(|activity| view! { <ActivityCard activity=activity on_remove=on_remove/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </div>
                </section>
                <section id="signup-container">
                    <h3>"Sign Up for an Activity"</h3>
                    <SignupForm email=email activity=selected options=options on_submit=on_submit/>
                    <StatusBanner status=status/>
                </section>
            </main>
        </div>
    }
}

/// Re-fetch the whole list and replace the current state.
#[cfg(feature = "hydrate")]
fn refresh(activities: RwSignal<ActivitiesState>) {
    leptos::task::spawn_local(async move {
        let state = super::registration::load_activities(&crate::net::api::HttpApi).await;
        activities.set(state);
    });
}

/// Show the outcome banner, arm its hide timer and refresh if asked to.
#[cfg(feature = "hydrate")]
fn apply_outcome(
    outcome: super::registration::FlowOutcome,
    activities: RwSignal<ActivitiesState>,
    status: RwSignal<StatusState>,
) {
    let seq = status
        .try_update(|s| s.show(outcome.status))
        .unwrap_or_default();
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::status::STATUS_HIDE_DELAY_MS).await;
        status.update(|s| {
            s.hide(seq);
        });
    });
    if outcome.refresh {
        refresh(activities);
    }
}
