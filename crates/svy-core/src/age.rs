//! Age derivation from date of birth

use chrono::{Datelike, NaiveDate};

/// Whole years between `date_of_birth` and `as_of`: the year difference,
/// minus one when the birthday has not yet occurred in `as_of`'s year.
///
/// Negative for dates in the future; the validator's range check screens
/// those out.
pub fn calculate_age(date_of_birth: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - date_of_birth.year();
    if (as_of.month(), as_of.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}
