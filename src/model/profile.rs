use serde::{Deserialize, Serialize};

use super::nationality::Nationality;
use super::validation::ValidationError;
use super::visa_type::VisaType;

/// Any field of the account set up step, in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    DateOfBirth,
    Nationality,
    VisaType,
    VisaExpiryDate,
    PhoneNumber,
}

static ALL_FIELDS: &[ProfileField] = &[
    ProfileField::DateOfBirth,
    ProfileField::Nationality,
    ProfileField::VisaType,
    ProfileField::VisaExpiryDate,
    ProfileField::PhoneNumber,
];

impl ProfileField {
    /// Returns all fields in on-screen order.
    pub fn all() -> &'static [ProfileField] {
        ALL_FIELDS
    }

    /// Label shown above the control.
    pub fn label(self) -> &'static str {
        match self {
            Self::DateOfBirth => "Date of Birth (DD/MM/YYYY)",
            Self::Nationality => "Nationality (Country of Passport)",
            Self::VisaType => "Visa Type",
            Self::VisaExpiryDate => "Visa Expiry Date (DD/MM/YYYY)",
            Self::PhoneNumber => "Phone Number",
        }
    }

    /// Key used in the serialized record.
    pub fn key(self) -> &'static str {
        match self {
            Self::DateOfBirth => "dateOfBirth",
            Self::Nationality => "nationality",
            Self::VisaType => "visaType",
            Self::VisaExpiryDate => "visaExpiryDate",
            Self::PhoneNumber => "phoneNumber",
        }
    }

    /// Hint shown while the control is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::DateOfBirth => "01/01/1990",
            Self::Nationality => "Argentina",
            Self::VisaType => "462",
            Self::VisaExpiryDate => "01/01/2026",
            Self::PhoneNumber => "+61 492 333 444",
        }
    }

    /// Whether the input widget refuses to submit while this field is empty.
    pub fn required(self) -> bool {
        matches!(self, Self::VisaExpiryDate | Self::PhoneNumber)
    }

    /// Narrows to a [`TextField`], if this field is free text.
    pub fn as_text(self) -> Option<TextField> {
        match self {
            Self::DateOfBirth => Some(TextField::DateOfBirth),
            Self::VisaExpiryDate => Some(TextField::VisaExpiryDate),
            Self::PhoneNumber => Some(TextField::PhoneNumber),
            Self::Nationality | Self::VisaType => None,
        }
    }

    /// Narrows to a [`SelectField`], if this field is a closed-set choice.
    pub fn as_select(self) -> Option<SelectField> {
        match self {
            Self::Nationality => Some(SelectField::Nationality),
            Self::VisaType => Some(SelectField::VisaType),
            _ => None,
        }
    }
}

/// Fields edited as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    DateOfBirth,
    VisaExpiryDate,
    PhoneNumber,
}

/// Fields chosen from a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectField {
    Nationality,
    VisaType,
}

impl SelectField {
    /// Labels the selection widget offers for this field.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::Nationality => Nationality::labels(),
            Self::VisaType => VisaType::labels(),
        }
    }
}

impl From<TextField> for ProfileField {
    fn from(field: TextField) -> Self {
        match field {
            TextField::DateOfBirth => Self::DateOfBirth,
            TextField::VisaExpiryDate => Self::VisaExpiryDate,
            TextField::PhoneNumber => Self::PhoneNumber,
        }
    }
}

impl From<SelectField> for ProfileField {
    fn from(field: SelectField) -> Self {
        match field {
            SelectField::Nationality => Self::Nationality,
            SelectField::VisaType => Self::VisaType,
        }
    }
}

/// A single named-field replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Text(TextField, String),
    Nationality(Nationality),
    VisaType(VisaType),
}

/// Values collected by the account set up step.
///
/// Every field is always present; an untouched field is the empty string.
/// Nothing here checks formats or cross-field consistency, see
/// [`check_formats`](super::check_formats) for the opt-in checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSetup {
    pub date_of_birth: String,
    pub nationality: String,
    pub visa_type: String,
    pub visa_expiry_date: String,
    pub phone_number: String,
}

impl ProfileSetup {
    /// Replaces one text field, leaving the others untouched.
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let slot = match field {
            TextField::DateOfBirth => &mut self.date_of_birth,
            TextField::VisaExpiryDate => &mut self.visa_expiry_date,
            TextField::PhoneNumber => &mut self.phone_number,
        };
        *slot = value.into();
    }

    /// Records the chosen nationality by its label.
    pub fn select_nationality(&mut self, nationality: Nationality) {
        self.nationality = nationality.label().to_string();
    }

    /// Records the chosen visa type by its label.
    pub fn select_visa_type(&mut self, visa_type: VisaType) {
        self.visa_type = visa_type.label().to_string();
    }

    /// Records a selection given as a raw label.
    ///
    /// Labels outside the field's closed set are rejected and the record is
    /// left unchanged.
    pub fn apply_selection(&mut self, field: SelectField, label: &str) -> Result<(), ValidationError> {
        match field {
            SelectField::Nationality => self.select_nationality(label.parse()?),
            SelectField::VisaType => self.select_visa_type(label.parse()?),
        }
        Ok(())
    }

    /// Applies one update in place.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Text(field, value) => self.set_text(field, value),
            FieldUpdate::Nationality(n) => self.select_nationality(n),
            FieldUpdate::VisaType(v) => self.select_visa_type(v),
        }
    }

    /// Returns a copy of `self` with one update applied.
    #[must_use]
    pub fn with_update(mut self, update: FieldUpdate) -> Self {
        self.apply(update);
        self
    }

    /// Returns the current value of any field.
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::DateOfBirth => &self.date_of_birth,
            ProfileField::Nationality => &self.nationality,
            ProfileField::VisaType => &self.visa_type,
            ProfileField::VisaExpiryDate => &self.visa_expiry_date,
            ProfileField::PhoneNumber => &self.phone_number,
        }
    }

    /// Serializes the record as a single-line JSON object with camelCase keys.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
