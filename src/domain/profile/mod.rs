//! Profile domain module.
//!
//! The caregiver profile and the child records collected through the dialog.

mod child;
#[allow(clippy::module_inception)]
mod profile;

pub use child::{Child, BIRTHDATE_FORMAT};
pub use profile::Profile;
