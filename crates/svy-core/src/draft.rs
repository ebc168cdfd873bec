//! Draft response state and the input events that mutate it

use chrono::NaiveDate;
use serde::Serialize;

use crate::fields::{FoodOption, Rating, RatingKey, TextField};

/// One survey response under construction.
///
/// Owned by the [`Session`](crate::Session); the presentation layer mutates
/// it through [`FieldInput`] events and the validator borrows it read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DraftResponse {
    pub full_name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub contact_number: String,
    pub favorite_foods: FavoriteFoods,
    pub ratings: DraftRatings,
}

impl DraftResponse {
    /// The canonical blank draft, used at session start and again after
    /// every successful submission.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Route one committed input event into the draft
    pub fn apply(&mut self, input: FieldInput) {
        match input {
            FieldInput::Text(TextField::FullName, value) => self.full_name = value,
            FieldInput::Text(TextField::Email, value) => self.email = value,
            FieldInput::Text(TextField::ContactNumber, value) => self.contact_number = value,
            FieldInput::DateOfBirth(date) => self.date_of_birth = date,
            FieldInput::Food(option, selected) => self.favorite_foods.set(option, selected),
            FieldInput::Rating(key, rating) => self.ratings.set(key, rating),
        }
    }
}

/// The four independently toggled food checkboxes. Any combination,
/// including none at all, is acceptable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FavoriteFoods {
    pub pizza: bool,
    pub pasta: bool,
    pub pap_and_wors: bool,
    pub other: bool,
}

impl FavoriteFoods {
    /// Toggle one option
    pub fn set(&mut self, option: FoodOption, selected: bool) {
        match option {
            FoodOption::Pizza => self.pizza = selected,
            FoodOption::Pasta => self.pasta = selected,
            FoodOption::PapAndWors => self.pap_and_wors = selected,
            FoodOption::Other => self.other = selected,
        }
    }

    /// Check whether one option is selected
    pub fn is_selected(&self, option: FoodOption) -> bool {
        match option {
            FoodOption::Pizza => self.pizza,
            FoodOption::Pasta => self.pasta,
            FoodOption::PapAndWors => self.pap_and_wors,
            FoodOption::Other => self.other,
        }
    }
}

/// Rating selections while the form is open. Radio semantics: a statement
/// starts unanswered and a selection can be replaced but not cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DraftRatings {
    pub watch_movies: Option<Rating>,
    pub listen_to_radio: Option<Rating>,
    pub eat_out: Option<Rating>,
    pub watch_tv: Option<Rating>,
}

impl DraftRatings {
    /// Current selection for one statement
    pub fn get(&self, key: RatingKey) -> Option<Rating> {
        match key {
            RatingKey::WatchMovies => self.watch_movies,
            RatingKey::ListenToRadio => self.listen_to_radio,
            RatingKey::EatOut => self.eat_out,
            RatingKey::WatchTV => self.watch_tv,
        }
    }

    /// Select a rating for one statement
    pub fn set(&mut self, key: RatingKey, rating: Rating) {
        match key {
            RatingKey::WatchMovies => self.watch_movies = Some(rating),
            RatingKey::ListenToRadio => self.listen_to_radio = Some(rating),
            RatingKey::EatOut => self.eat_out = Some(rating),
            RatingKey::WatchTV => self.watch_tv = Some(rating),
        }
    }
}

/// A committed value from one input widget, tagged with the field it
/// belongs to. The presentation layer constructs these explicitly; nothing
/// in the core infers a field's kind from its identifier string.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Text(TextField, String),
    DateOfBirth(Option<NaiveDate>),
    Food(FoodOption, bool),
    Rating(RatingKey, Rating),
}
