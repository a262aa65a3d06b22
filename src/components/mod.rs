//! UI Components
//!
//! Reusable Leptos components.

mod activity_card;
mod activity_list;
mod delete_confirm_button;
mod message_area;
mod signup_form;

pub use activity_card::ActivityCard;
pub use activity_list::ActivityList;
pub use delete_confirm_button::DeleteConfirmButton;
pub use message_area::MessageArea;
pub use signup_form::SignupForm;
