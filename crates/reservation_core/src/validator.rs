//! Field-level validation of a reservation draft.
//!
//! Every rule looks at exactly one field, so the resulting error set does not
//! depend on evaluation order.

use std::sync::OnceLock;

use regex::Regex;
use shared::{
    domain::{Field, ReservationDraft},
    error::FieldErrors,
};

pub const DATE_REQUIRED: &str = "Please select a date";
pub const TIME_REQUIRED: &str = "Please select a time";
pub const PARTY_SIZE_REQUIRED: &str = "Please select party size";
pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const PHONE_REQUIRED: &str = "Phone number is required";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

pub fn is_plausible_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

pub fn validate(draft: &ReservationDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    // Picker-backed fields only need a selection.
    if draft.date.is_empty() {
        errors.insert(Field::Date, DATE_REQUIRED);
    }
    if draft.time.is_empty() {
        errors.insert(Field::Time, TIME_REQUIRED);
    }
    if draft.party_size.is_empty() {
        errors.insert(Field::PartySize, PARTY_SIZE_REQUIRED);
    }

    if draft.first_name.trim().is_empty() {
        errors.insert(Field::FirstName, FIRST_NAME_REQUIRED);
    }
    if draft.last_name.trim().is_empty() {
        errors.insert(Field::LastName, LAST_NAME_REQUIRED);
    }

    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_plausible_email(&draft.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if draft.phone.trim().is_empty() {
        errors.insert(Field::Phone, PHONE_REQUIRED);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ReservationDraft {
        ReservationDraft {
            date: "Fri, Oct 17".into(),
            time: "7:00 PM".into(),
            party_size: "2".into(),
            special_requests: String::new(),
            first_name: "Ana".into(),
            last_name: "Lee".into(),
            email: "a@b.com".into(),
            phone: "555".into(),
        }
    }

    #[test]
    fn complete_draft_has_no_errors() {
        assert!(validate(&complete_draft()).is_empty());
    }

    #[test]
    fn blank_draft_flags_every_required_field() {
        let errors = validate(&ReservationDraft::default());
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                Field::Date,
                Field::Time,
                Field::PartySize,
                Field::FirstName,
                Field::LastName,
                Field::Email,
                Field::Phone,
            ]
        );
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert!(!errors.contains(Field::SpecialRequests));
    }

    #[test]
    fn missing_date_and_bad_email_are_reported_together() {
        let draft = ReservationDraft {
            date: String::new(),
            email: "bad-email".into(),
            ..complete_draft()
        };

        let mut expected = FieldErrors::default();
        expected.insert(Field::Date, "Please select a date");
        expected.insert(Field::Email, "Please enter a valid email");
        assert_eq!(validate(&draft), expected);
    }

    #[test]
    fn each_missing_field_is_reported_alone() {
        let required = [
            Field::Date,
            Field::Time,
            Field::PartySize,
            Field::FirstName,
            Field::LastName,
            Field::Email,
            Field::Phone,
        ];
        for field in required {
            let mut draft = complete_draft();
            draft.set(field, String::new());
            let errors = validate(&draft);
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field], "{field}");
        }
    }

    #[test]
    fn whitespace_only_names_are_missing() {
        let draft = ReservationDraft {
            first_name: "   ".into(),
            phone: "\t".into(),
            ..complete_draft()
        };
        let errors = validate(&draft);
        assert_eq!(errors.get(Field::FirstName), Some(FIRST_NAME_REQUIRED));
        assert_eq!(errors.get(Field::Phone), Some(PHONE_REQUIRED));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn whitespace_only_email_is_missing_rather_than_invalid() {
        let draft = ReservationDraft {
            email: "  ".into(),
            ..complete_draft()
        };
        assert_eq!(validate(&draft).get(Field::Email), Some(EMAIL_REQUIRED));
    }

    #[test]
    fn email_needs_at_sign_and_dotted_domain() {
        assert!(is_plausible_email("a@b.com"));
        assert!(is_plausible_email("guest.name@mail.example.org"));
        assert!(!is_plausible_email("a@bcom"));
        assert!(!is_plausible_email("ab.com"));
        assert!(!is_plausible_email("@b.com"));
        assert!(!is_plausible_email("a@ b.com"));
    }

    #[test]
    fn special_requests_never_fail() {
        let draft = ReservationDraft {
            special_requests: "   ".into(),
            ..complete_draft()
        };
        assert!(validate(&draft).is_empty());
    }
}
