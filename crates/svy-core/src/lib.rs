//! Core survey domain for SVY
//!
//! This crate owns everything with behavior: the draft data model and the
//! tagged input events that mutate it, the validator, the append-only
//! response store, the aggregator, and the session state that ties them
//! together. It has no terminal or network surface; the presentation layer
//! drives it through plain synchronous calls.

pub mod age;
pub mod draft;
pub mod error;
pub mod fields;
pub mod response;
pub mod session;
pub mod summary;
pub mod validate;

#[cfg(test)]
mod tests;

pub use age::calculate_age;
pub use draft::{DraftRatings, DraftResponse, FavoriteFoods, FieldInput};
pub use error::{Error, Result};
pub use fields::{FieldId, FoodOption, Rating, RatingKey, TextField};
pub use response::{AcceptedResponse, RatingSet, SurveyStore, commit};
pub use session::{Session, SubmitOutcome};
pub use summary::{SurveySummary, summarize};
pub use validate::{MAX_AGE, MIN_AGE, ValidationErrors, validate};
