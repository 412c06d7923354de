//! Catalog domain module.
//!
//! Read-only activity records loaded once and shared across sessions.

mod activity;

pub use activity::{ActivityLocation, ActivityRecord, Catalog};
