//! Working Holiday Visa onboarding wizard.
//!
//! This crate owns step 2 of 5, "Account Set Up": date of birth,
//! nationality, visa type, visa expiry and phone number. The other wizard
//! steps are rendered as placeholders.

pub mod config;
pub mod logging;
pub mod model;
pub mod tui;
