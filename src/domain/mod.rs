//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, state machine trait)
//! - `profile` - Caregiver profile and child records
//! - `catalog` - Read-only activity records
//! - `dialog` - Conversation states, reply extraction and the turn engine
//! - `matching` - Catalog matching, formatting and bookmark interaction

pub mod catalog;
pub mod dialog;
pub mod foundation;
pub mod matching;
pub mod profile;
