//! Mutable draft plus the errors currently shown next to each field.

use shared::{
    domain::{Field, PartySize, ReservationDraft, TimeSlot},
    error::FieldErrors,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    draft: ReservationDraft,
    errors: FieldErrors,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Stores `value` without checking it and drops any message for `field`.
    /// Returns whether a message was dropped.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        self.draft.set(field, value.into());
        self.errors.clear(field)
    }

    pub fn set_time(&mut self, slot: TimeSlot) -> bool {
        self.set_field(Field::Time, slot.label())
    }

    pub fn set_party_size(&mut self, size: PartySize) -> bool {
        self.set_field(Field::PartySize, size.value().to_string())
    }

    /// Replaces the whole error set with the result of a fresh validation pass.
    pub fn publish_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = FormState::new();
        let mut errors = FieldErrors::default();
        errors.insert(Field::Date, "Please select a date");
        errors.insert(Field::Email, "Please enter a valid email");
        form.publish_errors(errors);

        assert!(form.set_field(Field::Email, "a@b.com"));
        assert_eq!(form.draft().email, "a@b.com");
        assert!(!form.errors().contains(Field::Email));
        assert_eq!(form.errors().get(Field::Date), Some("Please select a date"));
    }

    #[test]
    fn set_accepts_values_that_would_fail_validation() {
        let mut form = FormState::new();
        assert!(!form.set_field(Field::Email, "not-an-email"));
        assert_eq!(form.draft().email, "not-an-email");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn typed_setters_store_form_values() {
        let mut form = FormState::new();
        let slot = TimeSlot::parse("8:30 PM").expect("slot");
        form.set_time(slot);
        form.set_party_size(PartySize::new(8).expect("size"));

        assert_eq!(form.draft().time, "8:30 PM");
        assert_eq!(form.draft().party_size, "8");
    }

    #[test]
    fn clear_returns_to_blank_draft() {
        let mut form = FormState::new();
        form.set_field(Field::FirstName, "Ana");
        let mut errors = FieldErrors::default();
        errors.insert(Field::Phone, "Phone number is required");
        form.publish_errors(errors);

        form.clear();
        assert!(form.draft().is_blank());
        assert!(form.errors().is_empty());
    }
}
