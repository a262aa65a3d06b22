//! Activity Sign-Up App
//!
//! Root component: owns the fetched activity map and the
//! load-on-mount / reload-on-trigger effect.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ActivityList, MessageArea, SignupForm};
use crate::context::{AppContext, StatusMessage};
use crate::models::ActivityMap;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (activities, set_activities) = signal(ActivityMap::new());
    let (load_failed, set_load_failed) = signal(false);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (status, set_status) = signal::<Option<StatusMessage>>(None);

    // Provide context to all children
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (status, set_status),
    ));

    // Load activities on mount and after every successful mutation
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        spawn_local(async move {
            match api::fetch_activities().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} activities, trigger={}", loaded.len(), trigger)
                            .into(),
                    );
                    set_activities.set(loaded);
                    set_load_failed.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[APP] Failed to load activities: {}", e).into(),
                    );
                    set_load_failed.set(true);
                }
            }
        });
    });

    view! {
        <header class="app-header">
            <h1>"Mergington High School"</h1>
            <p>"Extracurricular Activities"</p>
        </header>

        <main class="app-layout">
            <ActivityList activities=activities load_failed=load_failed />

            <section class="signup-column">
                <h2>"Sign Up for an Activity"</h2>
                <SignupForm activities=activities />
                <MessageArea />
            </section>
        </main>
    }
}
