use std::fmt;
use std::str::FromStr;

use super::validation::ValidationError;

/// Country of passport eligible for a Working Holiday Visa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nationality {
    Argentina,
    Austria,
    Belgium,
    Canada,
    Chile,
    CzechRepublic,
    Denmark,
    Estonia,
    Finland,
    France,
    Germany,
    HongKong,
    Hungary,
    Ireland,
    Israel,
    Italy,
    Japan,
    Latvia,
    Lithuania,
    Luxembourg,
    Malta,
    Netherlands,
    Norway,
    Poland,
    Portugal,
    Slovakia,
    Slovenia,
    SouthKorea,
    Spain,
    Sweden,
    Taiwan,
    Turkey,
    UnitedKingdom,
    UnitedStates,
    Uruguay,
}

static ALL_NATIONALITIES: &[Nationality] = &[
    Nationality::Argentina,
    Nationality::Austria,
    Nationality::Belgium,
    Nationality::Canada,
    Nationality::Chile,
    Nationality::CzechRepublic,
    Nationality::Denmark,
    Nationality::Estonia,
    Nationality::Finland,
    Nationality::France,
    Nationality::Germany,
    Nationality::HongKong,
    Nationality::Hungary,
    Nationality::Ireland,
    Nationality::Israel,
    Nationality::Italy,
    Nationality::Japan,
    Nationality::Latvia,
    Nationality::Lithuania,
    Nationality::Luxembourg,
    Nationality::Malta,
    Nationality::Netherlands,
    Nationality::Norway,
    Nationality::Poland,
    Nationality::Portugal,
    Nationality::Slovakia,
    Nationality::Slovenia,
    Nationality::SouthKorea,
    Nationality::Spain,
    Nationality::Sweden,
    Nationality::Taiwan,
    Nationality::Turkey,
    Nationality::UnitedKingdom,
    Nationality::UnitedStates,
    Nationality::Uruguay,
];

static NATIONALITY_LABELS: &[&str] = &[
    "Argentina",
    "Austria",
    "Belgium",
    "Canada",
    "Chile",
    "Czech Republic",
    "Denmark",
    "Estonia",
    "Finland",
    "France",
    "Germany",
    "Hong Kong",
    "Hungary",
    "Ireland",
    "Israel",
    "Italy",
    "Japan",
    "Latvia",
    "Lithuania",
    "Luxembourg",
    "Malta",
    "Netherlands",
    "Norway",
    "Poland",
    "Portugal",
    "Slovakia",
    "Slovenia",
    "South Korea",
    "Spain",
    "Sweden",
    "Taiwan",
    "Turkey",
    "United Kingdom",
    "United States",
    "Uruguay",
];

impl Nationality {
    /// Returns the country name exactly as presented in the selection list.
    pub fn label(&self) -> &'static str {
        NATIONALITY_LABELS[*self as usize]
    }

    /// Returns all eligible nationalities in presentation order.
    pub fn all() -> &'static [Nationality] {
        ALL_NATIONALITIES
    }

    /// Returns the labels of [`all`](Self::all), index-aligned.
    pub fn labels() -> &'static [&'static str] {
        NATIONALITY_LABELS
    }

    /// Looks up a nationality by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        NATIONALITY_LABELS
            .iter()
            .position(|l| *l == label)
            .map(|i| ALL_NATIONALITIES[i])
    }
}

#[mutants::skip]
impl fmt::Display for Nationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Nationality {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ValidationError::UnknownNationality(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_35_countries() {
        assert_eq!(Nationality::all().len(), 35);
        assert_eq!(Nationality::labels().len(), Nationality::all().len());
    }

    #[test]
    fn order_starts_with_argentina_ends_with_uruguay() {
        assert_eq!(Nationality::all().first(), Some(&Nationality::Argentina));
        assert_eq!(Nationality::all().last(), Some(&Nationality::Uruguay));
    }

    #[test]
    fn labels_align_with_variants() {
        for (i, n) in Nationality::all().iter().enumerate() {
            assert_eq!(n.label(), Nationality::labels()[i], "{n:?} label mismatch");
        }
    }

    #[test]
    fn multi_word_labels_keep_spacing() {
        assert_eq!(Nationality::CzechRepublic.label(), "Czech Republic");
        assert_eq!(Nationality::HongKong.label(), "Hong Kong");
        assert_eq!(Nationality::SouthKorea.label(), "South Korea");
        assert_eq!(Nationality::UnitedKingdom.label(), "United Kingdom");
        assert_eq!(Nationality::UnitedStates.label(), "United States");
    }

    #[test]
    fn from_label_round_trips_every_country() {
        for n in Nationality::all() {
            assert_eq!(Nationality::from_label(n.label()), Some(*n));
        }
    }

    #[test]
    fn from_label_is_case_sensitive() {
        assert_eq!(Nationality::from_label("japan"), None);
        assert_eq!(Nationality::from_label("Japan"), Some(Nationality::Japan));
    }

    #[test]
    fn parse_unknown_country_fails() {
        assert_eq!(
            "Australia".parse::<Nationality>(),
            Err(ValidationError::UnknownNationality("Australia".to_string()))
        );
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Nationality::SouthKorea.to_string(), "South Korea");
    }
}
