use std::fmt;
use std::str::FromStr;

use super::validation::ValidationError;

/// Working Holiday Maker visa category, by subclass and year of stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisaType {
    /// Subclass 417, first year.
    WorkingHoliday417,
    /// Subclass 462, first year.
    WorkAndHoliday462,
    Second417,
    Second462,
    Third417,
    Third462,
}

static ALL_VISA_TYPES: &[VisaType] = &[
    VisaType::WorkingHoliday417,
    VisaType::WorkAndHoliday462,
    VisaType::Second417,
    VisaType::Second462,
    VisaType::Third417,
    VisaType::Third462,
];

static VISA_TYPE_LABELS: &[&str] = &[
    "417 (Working Holiday Visa)",
    "462 (Work and Holiday Visa)",
    "417 Second Year Extension",
    "462 Second Year Extension",
    "417 Third Year Extension",
    "462 Third Year Extension",
];

impl VisaType {
    /// Returns the label exactly as presented in the selection list.
    pub fn label(&self) -> &'static str {
        VISA_TYPE_LABELS[*self as usize]
    }

    /// Returns all visa types in presentation order.
    pub fn all() -> &'static [VisaType] {
        ALL_VISA_TYPES
    }

    /// Returns the labels of [`all`](Self::all), index-aligned.
    pub fn labels() -> &'static [&'static str] {
        VISA_TYPE_LABELS
    }

    /// Looks up a visa type by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        VISA_TYPE_LABELS
            .iter()
            .position(|l| *l == label)
            .map(|i| ALL_VISA_TYPES[i])
    }

    /// Visa subclass number (417 or 462).
    pub fn subclass(&self) -> u16 {
        match self {
            Self::WorkingHoliday417 | Self::Second417 | Self::Third417 => 417,
            Self::WorkAndHoliday462 | Self::Second462 | Self::Third462 => 462,
        }
    }

    /// Year of stay the visa grants (1, 2 or 3).
    pub fn visa_year(&self) -> u8 {
        match self {
            Self::WorkingHoliday417 | Self::WorkAndHoliday462 => 1,
            Self::Second417 | Self::Second462 => 2,
            Self::Third417 | Self::Third462 => 3,
        }
    }
}

#[mutants::skip]
impl fmt::Display for VisaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VisaType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ValidationError::UnknownVisaType(s.to_string()))
    }
}
