//! Activity Card Component
//!
//! One card per activity: description, schedule, spots left, and a
//! removable row per participant.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::{AppContext, REMOVE_MESSAGE_MS};
use crate::models::Activity;

/// Flip the per-row pending flag, refusing if a removal is already in
/// flight so a second confirm can't fire a duplicate DELETE.
fn try_begin_removal(removing: ReadSignal<bool>, set_removing: WriteSignal<bool>) -> bool {
    if removing.get_untracked() {
        return false;
    }
    set_removing.set(true);
    true
}

#[component]
pub fn ActivityCard(name: String, activity: Activity) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let spots_left = activity.spots_left();
    let has_participants = !activity.participants.is_empty();

    let participant_rows = activity
        .participants
        .iter()
        .map(|email| {
            let shown_email = email.clone();
            let activity_name = name.clone();
            let email = email.clone();
            let (removing, set_removing) = signal(false);

            let remove = Callback::new(move |_| {
                if !try_begin_removal(removing, set_removing) {
                    return;
                }
                let activity_name = activity_name.clone();
                let email = email.clone();
                spawn_local(async move {
                    let outcome = api::remove_participant(&activity_name, &email).await;
                    // The row may already be gone after a re-fetch
                    let _ = set_removing.try_set(false);
                    ctx.apply_outcome(
                        "[REMOVE]",
                        outcome,
                        "Failed to remove participant. Please try again.",
                        REMOVE_MESSAGE_MS,
                    );
                });
            });

            view! {
                <li class="participant-row">
                    <span class="participant-email">{shown_email}</span>
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        disabled=removing
                        on_confirm=remove
                    />
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="activity-card">
            <h3>{name.clone()}</h3>
            <p class="activity-description">{activity.description.clone()}</p>
            <p class="activity-schedule">
                <strong>"Schedule: "</strong>
                {activity.schedule.clone()}
            </p>
            <p class="activity-availability">
                <strong>"Availability: "</strong>
                {spots_left} " spots left"
            </p>

            <div class="participants-section">
                <h4>"Participants"</h4>
                {if has_participants {
                    view! {
                        <ul class="participants-list">{participant_rows}</ul>
                    }.into_any()
                } else {
                    view! {
                        <p class="no-participants">"No participants yet"</p>
                    }.into_any()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_cannot_start_twice_while_pending() {
        let owner = Owner::new();
        owner.set();

        let (removing, set_removing) = signal(false);

        assert!(try_begin_removal(removing, set_removing));
        // Still in flight: a second confirm is refused
        assert!(!try_begin_removal(removing, set_removing));

        set_removing.set(false);
        assert!(try_begin_removal(removing, set_removing));
    }
}
