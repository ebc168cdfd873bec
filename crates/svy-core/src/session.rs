//! Session state: the response store plus the in-progress draft

use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

use crate::draft::{DraftResponse, FieldInput};
use crate::error::Result;
use crate::response::{SurveyStore, commit};
use crate::summary::{SurveySummary, summarize};
use crate::validate::{ValidationErrors, validate};

/// Outcome of a submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The response was accepted and appended to the store; the draft has
    /// been reset to the blank form.
    Accepted(Uuid),
    /// Validation failed; the draft is untouched so the user can edit it
    /// and try again.
    Rejected(ValidationErrors),
}

/// All mutable state for one survey session: the append-only store and the
/// single in-progress draft.
///
/// Owned by the composition root and handed to the views by reference;
/// nothing here is global. Discarded at session end, taking the responses
/// with it.
#[derive(Debug)]
pub struct Session {
    store: SurveyStore,
    draft: DraftResponse,
}

impl Session {
    /// Fresh session: empty store, blank draft
    pub fn new() -> Self {
        debug!("session started");
        Self {
            store: SurveyStore::new(),
            draft: DraftResponse::empty(),
        }
    }

    /// The in-progress draft
    pub fn draft(&self) -> &DraftResponse {
        &self.draft
    }

    /// Route one committed input event into the draft
    pub fn apply(&mut self, input: FieldInput) {
        self.draft.apply(input);
    }

    /// Validate the current draft against today's date
    pub fn validate_draft(&self) -> ValidationErrors {
        validate(&self.draft, Utc::now().date_naive())
    }

    /// Validate and, on success, freeze the draft into the store and reset
    /// the form.
    ///
    /// A response enters the store only when every field passed in the
    /// same attempt; there is no partial acceptance.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let errors = self.validate_draft();
        if !errors.is_empty() {
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let response = commit(&self.draft, Utc::now())?;
        let id = response.id;
        info!("accepted response {id}");
        self.store.push(response);
        self.draft = DraftResponse::empty();
        Ok(SubmitOutcome::Accepted(id))
    }

    /// Everything accepted so far
    pub fn store(&self) -> &SurveyStore {
        &self.store
    }

    /// Aggregate statistics over everything accepted so far
    pub fn summary(&self) -> Option<SurveySummary> {
        summarize(self.store.responses())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
