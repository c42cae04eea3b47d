mod nationality;
mod profile;
mod validation;
mod visa_type;
mod wizard;

pub use nationality::Nationality;
pub use profile::{FieldUpdate, ProfileField, ProfileSetup, SelectField, TextField};
pub use validation::{
    ValidationError, check_formats, validate_date, validate_expiry_after_birth, validate_phone,
};
pub use visa_type::VisaType;
pub use wizard::{WIZARD_STEPS, WizardStep};
