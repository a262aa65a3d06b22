//! Application Context
//!
//! Shared state provided via Leptos Context API: the reload trigger and
//! the transient status message channel.

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use leptos::task::spawn_local;

use crate::api::ApiError;

/// Sign-up outcomes stay visible this long
pub const SIGNUP_MESSAGE_MS: u32 = 5_000;
/// Removal outcomes stay visible this long
pub const REMOVE_MESSAGE_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// A transient message shown in the shared message area
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
    /// Sequence id, so an auto-hide timer only clears the message it
    /// was installed for.
    id: u32,
}

fn log_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{message}");
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload activities from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload activities from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current transient message, if any - read
    pub status: ReadSignal<Option<StatusMessage>>,
    /// Current transient message - write
    set_status: WriteSignal<Option<StatusMessage>>,
    next_message_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        status: (
            ReadSignal<Option<StatusMessage>>,
            WriteSignal<Option<StatusMessage>>,
        ),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            status: status.0,
            set_status: status.1,
            next_message_id: StoredValue::new(0),
        }
    }

    /// Trigger a re-fetch of activities
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Apply a mutating-request outcome to the shared UI state.
    ///
    /// Success shows the server message and triggers a re-fetch.
    /// Failure shows the server detail (or `fallback` for transport
    /// errors) and leaves the list alone - consistency comes from the
    /// re-fetch, and only successful mutations earn one.
    pub fn apply_outcome(
        &self,
        tag: &str,
        outcome: Result<String, ApiError>,
        fallback: &str,
        hide_after_ms: u32,
    ) {
        match outcome {
            Ok(message) => {
                self.show_message(message, MessageKind::Success, Some(hide_after_ms));
                self.reload();
            }
            Err(ApiError::Server(detail)) => {
                self.show_message(detail, MessageKind::Error, Some(hide_after_ms));
            }
            Err(ApiError::Network(e)) => {
                log_error(&format!("{tag} request failed: {e}"));
                self.show_message(fallback, MessageKind::Error, Some(hide_after_ms));
            }
        }
    }

    /// Show a transient message, optionally auto-hidden after
    /// `hide_after_ms` milliseconds
    pub fn show_message(
        &self,
        text: impl Into<String>,
        kind: MessageKind,
        hide_after_ms: Option<u32>,
    ) {
        let id = self
            .next_message_id
            .try_update_value(|n| {
                *n += 1;
                *n
            })
            .unwrap_or_default();

        self.set_status.set(Some(StatusMessage {
            text: text.into(),
            kind,
            id,
        }));

        // The auto-hide timer only exists in the browser
        #[cfg(target_arch = "wasm32")]
        if let Some(delay) = hide_after_ms {
            let status = self.status;
            let set_status = self.set_status;
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                // A newer message may have replaced this one; leave it alone
                if status.get_untracked().map(|m| m.id) == Some(id) {
                    set_status.set(None);
                }
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = hide_after_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context() -> AppContext {
        let reload_trigger = signal(0u32);
        let status = signal::<Option<StatusMessage>>(None);
        AppContext::new(reload_trigger, status)
    }

    #[test]
    fn reload_increments_trigger() {
        let owner = Owner::new();
        owner.set();

        let ctx = test_context();
        assert_eq!(ctx.reload_trigger.get_untracked(), 0);
        ctx.reload();
        ctx.reload();
        assert_eq!(ctx.reload_trigger.get_untracked(), 2);
    }

    #[test]
    fn success_outcome_shows_message_and_reloads() {
        let owner = Owner::new();
        owner.set();

        let ctx = test_context();
        ctx.apply_outcome(
            "[SIGNUP]",
            Ok("Signed up a@x.com for Chess Club".to_string()),
            "Failed to sign up. Please try again.",
            SIGNUP_MESSAGE_MS,
        );

        assert_eq!(ctx.reload_trigger.get_untracked(), 1);
        let msg = ctx.status.get_untracked().unwrap();
        assert_eq!(msg.text, "Signed up a@x.com for Chess Club");
        assert_eq!(msg.kind, MessageKind::Success);
    }

    #[test]
    fn server_error_shows_detail_and_skips_reload() {
        let owner = Owner::new();
        owner.set();

        let ctx = test_context();
        ctx.apply_outcome(
            "[SIGNUP]",
            Err(ApiError::Server("Already signed up".to_string())),
            "Failed to sign up. Please try again.",
            SIGNUP_MESSAGE_MS,
        );

        assert_eq!(ctx.reload_trigger.get_untracked(), 0);
        let msg = ctx.status.get_untracked().unwrap();
        assert_eq!(msg.text, "Already signed up");
        assert_eq!(msg.kind, MessageKind::Error);
    }

    #[test]
    fn network_error_shows_fallback_and_skips_reload() {
        let owner = Owner::new();
        owner.set();

        let ctx = test_context();
        ctx.apply_outcome(
            "[REMOVE]",
            Err(ApiError::Network("fetch failed".to_string())),
            "Failed to remove participant. Please try again.",
            REMOVE_MESSAGE_MS,
        );

        assert_eq!(ctx.reload_trigger.get_untracked(), 0);
        let msg = ctx.status.get_untracked().unwrap();
        assert_eq!(msg.text, "Failed to remove participant. Please try again.");
        assert_eq!(msg.kind, MessageKind::Error);
    }

    #[test]
    fn newer_message_replaces_older_one() {
        let owner = Owner::new();
        owner.set();

        let ctx = test_context();
        ctx.show_message("first", MessageKind::Success, None);
        let first_id = ctx.status.get_untracked().unwrap().id;
        ctx.show_message("second", MessageKind::Error, None);
        let second = ctx.status.get_untracked().unwrap();

        assert_eq!(second.text, "second");
        assert!(second.id > first_id);
    }
}
