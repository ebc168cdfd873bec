//! Draft well-formedness rules

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::age::calculate_age;
use crate::draft::DraftResponse;
use crate::fields::{FieldId, RatingKey};

/// Youngest derived age a date of birth may map to, inclusive.
pub const MIN_AGE: i32 = 5;
/// Oldest derived age a date of birth may map to, inclusive.
pub const MAX_AGE: i32 = 120;

/// Field-keyed messages for one validation attempt.
///
/// Rebuilt fresh on every call to [`validate`]; nothing accumulates across
/// attempts. An empty set is the acceptance signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors(BTreeMap<FieldId, String>);

impl ValidationErrors {
    /// True when the draft passed every rule
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with problems
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for one field, if it has a problem
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Iterate problems in field order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: FieldId, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Validate a draft against today's date.
///
/// Pure: the draft is not mutated and there are no side effects, so calling
/// twice on the same draft yields the same result. Acceptance is exactly an
/// empty return value; there is no error path.
pub fn validate(draft: &DraftResponse, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.full_name.trim().is_empty() {
        errors.insert(FieldId::FullName, "Full name is required");
    }
    if draft.email.trim().is_empty() {
        errors.insert(FieldId::Email, "Email is required");
    }
    match draft.date_of_birth {
        None => errors.insert(FieldId::DateOfBirth, "Date of birth is required"),
        Some(date_of_birth) => {
            // A present date is never "required"; an out-of-range age is the
            // only message this field can carry then.
            let age = calculate_age(date_of_birth, today);
            if !(MIN_AGE..=MAX_AGE).contains(&age) {
                errors.insert(FieldId::DateOfBirth, "Age must be between 5 and 120");
            }
        }
    }
    if draft.contact_number.trim().is_empty() {
        errors.insert(FieldId::ContactNumber, "Contact number is required");
    }

    // Selected ratings are trusted: the Rating type cannot hold anything
    // off the 1..=5 scale. Only absence is a problem.
    for key in RatingKey::ALL {
        if draft.ratings.get(key).is_none() {
            errors.insert(key.field_id(), "Please select a rating");
        }
    }

    // Favorite foods are never validated; any combination is acceptable.
    errors
}
