//! Activity List Component
//!
//! Renders every fetched activity as a card. Each re-fetch fully
//! replaces the rendered cards.

use leptos::prelude::*;

use crate::components::ActivityCard;
use crate::models::ActivityMap;

#[component]
pub fn ActivityList(
    activities: ReadSignal<ActivityMap>,
    load_failed: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <section class="activity-list">
            <h2>"Activities"</h2>

            {move || if load_failed.get() {
                view! {
                    <p class="error">"Failed to load activities. Please try again later."</p>
                }.into_any()
            } else {
                activities.get().into_iter().map(|(name, activity)| {
                    view! {
                        <ActivityCard name=name activity=activity />
                    }
                }).collect_view().into_any()
            }}
        </section>
    }
}
