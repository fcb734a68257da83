//! Input handling
//!
//! Provides an action-based input layer over the keyboard. The keyboard is
//! read once per frame into an `InputSnapshot`, and the simulation only
//! ever sees the snapshot, so one tick cannot observe two different
//! answers for the same action.

mod actions;
mod state;

pub use actions::Action;
pub use state::{sample, InputSnapshot};
