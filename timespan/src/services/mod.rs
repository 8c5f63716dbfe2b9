//! Service layer on top of the schedule model.
//!
//! - [`availability`]: aggregate activity queries over a collection
//! - [`selector`]: the locked value holder a widget binds to

pub mod availability;
pub mod selector;

pub use availability::{
    is_any_active, minutes_until_any_active, remaining_minutes_of_current_active_window,
};
pub use selector::ScheduleSelector;
