//! Activity Advisor - Guided activity recommendations for families
//!
//! This crate runs a short chat with a caregiver to collect their location and
//! each child's details, then matches the children's interests against a
//! scraped catalog of local activities.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
