//! TUI screen implementations.

pub mod help;
pub mod profile_setup;

pub use help::{HelpState, draw_help};
pub use profile_setup::{Phase, ProfileSetupState, draw_profile_setup};
