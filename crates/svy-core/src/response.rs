//! Accepted responses and the append-only store

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use serde::Serialize;
use uuid::Uuid;

use crate::age::calculate_age;
use crate::draft::{DraftRatings, DraftResponse, FavoriteFoods};
use crate::error::{Error, Result};
use crate::fields::{Rating, RatingKey};

/// Ratings with every statement answered, as frozen at acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingSet {
    pub watch_movies: Rating,
    pub listen_to_radio: Rating,
    pub eat_out: Rating,
    pub watch_tv: Rating,
}

impl RatingSet {
    /// Complete set from a draft, if every statement has an answer
    pub fn from_draft(draft: &DraftRatings) -> Option<Self> {
        Some(Self {
            watch_movies: draft.watch_movies?,
            listen_to_radio: draft.listen_to_radio?,
            eat_out: draft.eat_out?,
            watch_tv: draft.watch_tv?,
        })
    }

    /// Value for one statement
    pub fn get(&self, key: RatingKey) -> Rating {
        match key {
            RatingKey::WatchMovies => self.watch_movies,
            RatingKey::ListenToRadio => self.listen_to_radio,
            RatingKey::EatOut => self.eat_out,
            RatingKey::WatchTV => self.watch_tv,
        }
    }
}

/// One immutable survey response, normalized at acceptance time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub contact_number: String,
    pub favorite_foods: FavoriteFoods,
    pub ratings: RatingSet,
    /// Age in whole years at submission time. Frozen here; the report
    /// never recomputes it.
    pub age: i32,
    pub submitted_at: DateTime<Utc>,
}

/// Freeze a validated draft into an accepted response.
///
/// Callers run [`validate`](crate::validate) first and only commit on an
/// empty error set. A draft that still has gaps here is a programming
/// error in the caller, surfaced as [`Error::IncompleteDraft`].
pub fn commit(draft: &DraftResponse, now: DateTime<Utc>) -> Result<AcceptedResponse> {
    let date_of_birth = draft
        .date_of_birth
        .ok_or(Error::IncompleteDraft("dateOfBirth"))?;
    let ratings =
        RatingSet::from_draft(&draft.ratings).ok_or(Error::IncompleteDraft("ratings"))?;

    Ok(AcceptedResponse {
        id: Uuid::new_v4(),
        full_name: draft.full_name.trim().to_string(),
        email: draft.email.trim().to_string(),
        date_of_birth,
        contact_number: draft.contact_number.trim().to_string(),
        favorite_foods: draft.favorite_foods,
        ratings,
        age: calculate_age(date_of_birth, now.date_naive()),
        submitted_at: now,
    })
}

/// Append-only, insertion-ordered collection of accepted responses.
///
/// Lives in memory for the session only. There is no update or removal
/// API; [`push`](SurveyStore::push) is the single way in.
#[derive(Debug, Default)]
pub struct SurveyStore {
    responses: Vec<AcceptedResponse>,
}

impl SurveyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one accepted response
    pub fn push(&mut self, response: AcceptedResponse) {
        debug!(
            "stored response {} (total {})",
            response.id,
            self.responses.len() + 1
        );
        self.responses.push(response);
    }

    /// Number of stored responses
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// True when nothing has been submitted yet
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// All responses, in insertion order
    pub fn responses(&self) -> &[AcceptedResponse] {
        &self.responses
    }

    /// Iterate responses in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, AcceptedResponse> {
        self.responses.iter()
    }

    /// The most recently accepted response
    pub fn latest(&self) -> Option<&AcceptedResponse> {
        self.responses.last()
    }
}
