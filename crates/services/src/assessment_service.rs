use std::sync::Arc;

use quiz_core::model::Assessment;
use quiz_core::scoring::{AnswerSheet, ScoreRecord};

use crate::error::SubmissionError;
use crate::submission::SubmissionSink;

/// Result of the non-submitting check action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub record: ScoreRecord,
    pub feedback: String,
}

/// Scores an assessment and hands the submitted form to a sink.
#[derive(Clone)]
pub struct AssessmentService {
    assessment: Arc<Assessment>,
    sink: Arc<dyn SubmissionSink>,
}

impl AssessmentService {
    #[must_use]
    pub fn new(assessment: Arc<Assessment>, sink: Arc<dyn SubmissionSink>) -> Self {
        Self { assessment, sink }
    }

    #[must_use]
    pub fn assessment(&self) -> Arc<Assessment> {
        Arc::clone(&self.assessment)
    }

    /// Score without contacting the backend.
    #[must_use]
    pub fn check(&self, sheet: &AnswerSheet) -> CheckOutcome {
        let record = self.assessment.score(sheet);
        let feedback = record.check_feedback();
        CheckOutcome { record, feedback }
    }

    /// Score and post exactly one submission.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError` if the sink rejects the submission.
    pub async fn submit(&self, sheet: &AnswerSheet) -> Result<ScoreRecord, SubmissionError> {
        let record = self.assessment.score(sheet);
        let submission = self.assessment.submission(&record);
        tracing::info!(
            assessment = %self.assessment.assessment_name,
            action = %submission.action,
            score = %record.score(),
            "submitting assessment"
        );
        if let Err(err) = self.sink.submit(&submission).await {
            tracing::error!(error = %err, "assessment submission failed");
            return Err(err);
        }
        Ok(record)
    }
}
