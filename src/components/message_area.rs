//! Message Area Component
//!
//! Shared transient message area fed through the app context.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn MessageArea() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.status.get().map(|msg| view! {
            <div class=format!("message {}", msg.kind.css_class())>
                {msg.text.clone()}
            </div>
        })}
    }
}
