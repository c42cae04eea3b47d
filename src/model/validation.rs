use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use super::profile::{ProfileField, ProfileSetup};

/// Validation errors for profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill out this field.")]
    Required,
    #[error("expected DD/MM/YYYY, got {0:?}")]
    DateFormat(String),
    #[error("not a calendar date: {0}")]
    InvalidDate(String),
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),
    #[error("visa expiry {expiry} is not after date of birth {birth}")]
    ExpiryBeforeBirth { birth: NaiveDate, expiry: NaiveDate },
    #[error("not an eligible nationality: {0}")]
    UnknownNationality(String),
    #[error("not a working holiday visa type: {0}")]
    UnknownVisaType(String),
}

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("valid hardcoded regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 \-]{5,18}[0-9]$").expect("valid hardcoded regex"));

/// Parses a `DD/MM/YYYY` date, rejecting impossible days such as `31/02/2000`.
pub fn validate_date(date: &str) -> Result<NaiveDate, ValidationError> {
    if !DATE_RE.is_match(date) {
        return Err(ValidationError::DateFormat(date.to_string()));
    }
    NaiveDate::parse_from_str(date, "%d/%m/%Y")
        .map_err(|_| ValidationError::InvalidDate(date.to_string()))
}

/// Validates a phone number: optional leading `+`, digits separated by spaces or dashes.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(phone.to_string()))
    }
}

/// Checks that the visa expires strictly after the holder was born.
pub fn validate_expiry_after_birth(birth: NaiveDate, expiry: NaiveDate) -> Result<(), ValidationError> {
    if expiry > birth {
        Ok(())
    } else {
        Err(ValidationError::ExpiryBeforeBirth { birth, expiry })
    }
}

/// Runs the opt-in format checks over a record.
///
/// Empty fields are skipped; required-ness is the input widget's concern.
/// The cross-field check only runs when both dates parse.
pub fn check_formats(profile: &ProfileSetup) -> Vec<(ProfileField, ValidationError)> {
    let mut errors = Vec::new();

    let birth = non_empty(&profile.date_of_birth).map(validate_date);
    let expiry = non_empty(&profile.visa_expiry_date).map(validate_date);

    if let Some(Err(e)) = &birth {
        errors.push((ProfileField::DateOfBirth, e.clone()));
    }
    if let Some(Err(e)) = &expiry {
        errors.push((ProfileField::VisaExpiryDate, e.clone()));
    }
    if let (Some(Ok(b)), Some(Ok(x))) = (birth, expiry)
        && let Err(e) = validate_expiry_after_birth(b, x)
    {
        errors.push((ProfileField::VisaExpiryDate, e));
    }
    if let Some(Err(e)) = non_empty(&profile.phone_number).map(validate_phone) {
        errors.push((ProfileField::PhoneNumber, e));
    }

    errors
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // --- validate_date ---

    #[test]
    fn date_valid() {
        assert_eq!(validate_date("15/03/1995"), Ok(ymd(1995, 3, 15)));
    }

    #[test]
    fn date_leap_day() {
        assert_eq!(validate_date("29/02/2000"), Ok(ymd(2000, 2, 29)));
    }

    #[test]
    fn date_impossible_day() {
        assert_eq!(
            validate_date("31/02/2000"),
            Err(ValidationError::InvalidDate("31/02/2000".to_string()))
        );
    }

    #[test]
    fn date_month_out_of_range() {
        assert_eq!(
            validate_date("01/13/2000"),
            Err(ValidationError::InvalidDate("01/13/2000".to_string()))
        );
    }

    #[test]
    fn date_single_digit_day_rejected() {
        assert_eq!(
            validate_date("1/03/1995"),
            Err(ValidationError::DateFormat("1/03/1995".to_string()))
        );
    }

    #[test]
    fn date_iso_format_rejected() {
        assert_eq!(
            validate_date("1995-03-15"),
            Err(ValidationError::DateFormat("1995-03-15".to_string()))
        );
    }

    #[test]
    fn date_non_ascii_digits_are_format_errors() {
        let arabic_indic = "\u{0661}\u{0665}/\u{0660}\u{0663}/\u{0661}\u{0669}\u{0669}\u{0665}";
        assert_eq!(
            validate_date(arabic_indic),
            Err(ValidationError::DateFormat(arabic_indic.to_string()))
        );
    }

    #[quickcheck]
    fn date_any_real_day_accepted(year: u16, ordinal: u16) -> bool {
        let year = 1900 + i32::from(year % 200);
        let ordinal = u32::from(ordinal % 365) + 1;
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        validate_date(&date.format("%d/%m/%Y").to_string()) == Ok(date)
    }

    // --- validate_phone ---

    #[test]
    fn phone_international() {
        assert_eq!(validate_phone("+61 400 111 222"), Ok(()));
    }

    #[test]
    fn phone_local_with_dashes() {
        assert_eq!(validate_phone("0400-111-222"), Ok(()));
    }

    #[test]
    fn phone_letters_rejected() {
        assert_eq!(
            validate_phone("call me"),
            Err(ValidationError::InvalidPhone("call me".to_string()))
        );
    }

    #[test]
    fn phone_too_short() {
        assert_eq!(
            validate_phone("12345"),
            Err(ValidationError::InvalidPhone("12345".to_string()))
        );
    }

    #[test]
    fn phone_trailing_separator_rejected() {
        assert!(validate_phone("0400 111 222 ").is_err());
    }

    // --- validate_expiry_after_birth ---

    #[test]
    fn expiry_after_birth_ok() {
        assert_eq!(
            validate_expiry_after_birth(ymd(1995, 3, 15), ymd(2026, 3, 15)),
            Ok(())
        );
    }

    #[test]
    fn expiry_same_day_rejected() {
        let day = ymd(2000, 1, 1);
        assert_eq!(
            validate_expiry_after_birth(day, day),
            Err(ValidationError::ExpiryBeforeBirth {
                birth: day,
                expiry: day
            })
        );
    }

    // --- check_formats ---

    #[test]
    fn empty_record_has_no_format_errors() {
        assert!(check_formats(&ProfileSetup::default()).is_empty());
    }

    #[test]
    fn well_formed_record_passes() {
        let profile = ProfileSetup {
            date_of_birth: "15/03/1995".into(),
            visa_expiry_date: "15/03/2026".into(),
            phone_number: "+61 400 111 222".into(),
            ..ProfileSetup::default()
        };
        assert!(check_formats(&profile).is_empty());
    }

    #[test]
    fn reports_each_bad_field() {
        let profile = ProfileSetup {
            date_of_birth: "yesterday".into(),
            visa_expiry_date: "31/02/2026".into(),
            phone_number: "n/a".into(),
            ..ProfileSetup::default()
        };
        let fields: Vec<ProfileField> = check_formats(&profile).into_iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![
                ProfileField::DateOfBirth,
                ProfileField::VisaExpiryDate,
                ProfileField::PhoneNumber
            ]
        );
    }

    #[test]
    fn expiry_before_birth_reported_on_expiry() {
        let profile = ProfileSetup {
            date_of_birth: "15/03/1995".into(),
            visa_expiry_date: "15/03/1990".into(),
            ..ProfileSetup::default()
        };
        let errors = check_formats(&profile);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, ProfileField::VisaExpiryDate);
        assert!(matches!(errors[0].1, ValidationError::ExpiryBeforeBirth { .. }));
    }

    #[test]
    fn required_message_matches_native_prompt() {
        assert_eq!(ValidationError::Required.to_string(), "Please fill out this field.");
    }
}
