//! Signup Form Component
//!
//! Email input plus activity selector; submits a sign-up request and
//! reloads the list on success.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::{AppContext, SIGNUP_MESSAGE_MS};
use crate::models::ActivityMap;

#[component]
pub fn SignupForm(activities: ReadSignal<ActivityMap>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (email, set_email) = signal(String::new());
    let (selected, set_selected) = signal(String::new());

    let sign_up = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let activity = selected.get();
        let address = email.get();
        if activity.is_empty() || address.is_empty() {
            return;
        }

        spawn_local(async move {
            let outcome = api::sign_up(&activity, &address).await;
            // A failed sign-up leaves the form contents untouched
            if outcome.is_ok() {
                set_email.set(String::new());
                set_selected.set(String::new());
            }
            ctx.apply_outcome(
                "[SIGNUP]",
                outcome,
                "Failed to sign up. Please try again.",
                SIGNUP_MESSAGE_MS,
            );
        });
    };

    view! {
        <form class="signup-form" on:submit=sign_up>
            <label for="email">"Student Email"</label>
            <input
                id="email"
                type="email"
                placeholder="your-email@example.com"
                required
                prop:value=move || email.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_email.set(input.value());
                }
            />

            <label for="activity">"Select Activity"</label>
            <select
                id="activity"
                required
                prop:value=move || selected.get()
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    set_selected.set(select.value());
                }
            >
                <option value="">"-- Select an activity --"</option>
                {move || activities.get().keys().map(|name| {
                    view! {
                        <option value=name.clone()>{name.clone()}</option>
                    }
                }).collect_view()}
            </select>

            <button type="submit">"Sign Up"</button>
        </form>
    }
}
