//! Reusable TUI widgets.

pub mod form;
pub mod select;
pub mod step_header;

pub use form::{Form, FormControl, FormEvent, FormField, draw_form};
pub use select::SelectBox;
pub use step_header::{StepHeaderContext, draw_step_header};
