use std::sync::Arc;

use quiz_core::model::Assessment;
use quiz_core::scoring::{AnswerSheet, Response, ScoreRecord};
use services::AssessmentService;

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Saving,
    Saved,
    Failed(ViewError),
}

/// Answers entered so far plus the outcome of the last check/submit.
#[derive(Clone)]
pub struct AssessmentVm {
    service: Arc<AssessmentService>,
    sheet: AnswerSheet,
    feedback: String,
    submit_state: SubmitState,
}

impl AssessmentVm {
    #[must_use]
    pub fn new(service: Arc<AssessmentService>) -> Self {
        let sheet = AnswerSheet::blank_for(&service.assessment());
        Self {
            service,
            sheet,
            feedback: String::new(),
            submit_state: SubmitState::Idle,
        }
    }

    #[must_use]
    pub fn assessment(&self) -> Arc<Assessment> {
        self.service.assessment()
    }

    #[must_use]
    pub fn service(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.service)
    }

    pub fn select(&mut self, question: usize, choice: usize) {
        self.sheet.set(question, Response::Choice(Some(choice)));
    }

    pub fn set_text(&mut self, question: usize, value: String) {
        self.sheet.set(question, Response::Text(value));
    }

    #[must_use]
    pub fn selected(&self, question: usize) -> Option<usize> {
        match self.sheet.get(question) {
            Some(Response::Choice(selected)) => *selected,
            _ => None,
        }
    }

    #[must_use]
    pub fn text(&self, question: usize) -> &str {
        match self.sheet.get(question) {
            Some(Response::Text(value)) => value,
            _ => "",
        }
    }

    #[must_use]
    pub fn sheet(&self) -> &AnswerSheet {
        &self.sheet
    }

    /// Non-submitting check: recomputes the score and replaces the feedback.
    pub fn check(&mut self) -> ScoreRecord {
        let outcome = self.service.check(&self.sheet);
        self.feedback = outcome.feedback;
        outcome.record
    }

    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// A saved assessment stays saved; only a failed save may be retried.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self.submit_state, SubmitState::Idle | SubmitState::Failed(_))
    }

    /// Returns `false` without changing state when a save is pending or done.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.submit_state = SubmitState::Saving;
        true
    }

    pub fn finish_submit(&mut self, result: Result<(), ViewError>) {
        self.submit_state = match result {
            Ok(()) => SubmitState::Saved,
            Err(err) => SubmitState::Failed(err),
        };
    }

    #[must_use]
    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }
}

/// Post the sheet once.
///
/// # Errors
///
/// Returns `ViewError::SubmissionFailed` if the submission is rejected.
pub async fn submit_answers(
    service: Arc<AssessmentService>,
    sheet: AnswerSheet,
) -> Result<ScoreRecord, ViewError> {
    service
        .submit(&sheet)
        .await
        .map_err(|_| ViewError::SubmissionFailed)
}
