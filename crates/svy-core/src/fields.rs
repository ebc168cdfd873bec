//! Fixed field enumerations shared by the form, the validator, and the
//! aggregator.
//!
//! The survey's shape is static: four personal fields, four food options,
//! four rated statements on a five-point scale. Everything that used to be
//! a naming convention in the form layer is an enum here.

use serde::{Serialize, Serializer};

use crate::error::Error;

/// Identifier a validation error is keyed by, in the exact spelling the
/// presentation layer matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FullName,
    Email,
    DateOfBirth,
    ContactNumber,
    Rating(RatingKey),
}

impl FieldId {
    /// Get the wire identifier for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::DateOfBirth => "dateOfBirth",
            FieldId::ContactNumber => "contactNumber",
            FieldId::Rating(RatingKey::WatchMovies) => "rating-watchMovies",
            FieldId::Rating(RatingKey::ListenToRadio) => "rating-listenToRadio",
            FieldId::Rating(RatingKey::EatOut) => "rating-eatOut",
            FieldId::Rating(RatingKey::WatchTV) => "rating-watchTV",
        }
    }
}

impl Serialize for FieldId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// The plain text fields of the personal-details section.
///
/// Date of birth is not one of these; it carries a parsed calendar date and
/// has its own [`FieldInput`](crate::FieldInput) variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    FullName,
    Email,
    ContactNumber,
}

impl TextField {
    /// Get the validation-error identifier for this field
    pub fn field_id(&self) -> FieldId {
        match self {
            TextField::FullName => FieldId::FullName,
            TextField::Email => FieldId::Email,
            TextField::ContactNumber => FieldId::ContactNumber,
        }
    }
}

/// FoodOption value object - one checkbox in the favorite-food section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FoodOption {
    Pizza,
    Pasta,
    PapAndWors,
    Other,
}

impl FoodOption {
    /// Every option, in form order.
    pub const ALL: [FoodOption; 4] = [
        FoodOption::Pizza,
        FoodOption::Pasta,
        FoodOption::PapAndWors,
        FoodOption::Other,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FoodOption::Pizza => "Pizza",
            FoodOption::Pasta => "Pasta",
            FoodOption::PapAndWors => "Pap and Wors",
            FoodOption::Other => "Other",
        }
    }
}

/// RatingKey value object - one rated statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RatingKey {
    WatchMovies,
    ListenToRadio,
    EatOut,
    WatchTV,
}

impl RatingKey {
    /// Every statement, in form order.
    pub const ALL: [RatingKey; 4] = [
        RatingKey::WatchMovies,
        RatingKey::ListenToRadio,
        RatingKey::EatOut,
        RatingKey::WatchTV,
    ];

    /// The statement shown next to the rating scale
    pub fn label(&self) -> &'static str {
        match self {
            RatingKey::WatchMovies => "I like to watch movies",
            RatingKey::ListenToRadio => "I like to listen to radio",
            RatingKey::EatOut => "I like to eat out",
            RatingKey::WatchTV => "I like to watch TV",
        }
    }

    /// Get the validation-error identifier for this statement
    pub fn field_id(&self) -> FieldId {
        FieldId::Rating(*self)
    }
}

/// One selection on the five-point agreement scale. The scale is inverted:
/// 1 means strongly agree, 5 means strongly disagree, so lower averages
/// indicate stronger agreement.
///
/// Out-of-range values are unrepresentable; the collection layer converts
/// raw digits through [`TryFrom<u8>`] and the validator trusts whatever is
/// already here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rating {
    StronglyAgree = 1,
    Agree = 2,
    Neutral = 3,
    Disagree = 4,
    StronglyDisagree = 5,
}

impl Rating {
    /// The integer value used in aggregate averages
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Rating {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::StronglyAgree),
            2 => Ok(Rating::Agree),
            3 => Ok(Rating::Neutral),
            4 => Ok(Rating::Disagree),
            5 => Ok(Rating::StronglyDisagree),
            other => Err(Error::InvalidInput(format!(
                "rating must be between 1 and 5, got {other}"
            ))),
        }
    }
}

impl Serialize for Rating {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.value())
    }
}
