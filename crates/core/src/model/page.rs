use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::activity::Activity;
use crate::model::assessment::{Assessment, AssessmentDraft, AssessmentError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PageError {
    #[error("page content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("page defines both `activity` and `assessment`")]
    Ambiguous,

    #[error("page defines neither `activity` nor `assessment`")]
    Missing,

    #[error(transparent)]
    Assessment(#[from] AssessmentError),
}

#[derive(Debug, Default, Deserialize)]
struct PageDraft {
    activity: Option<Vec<Value>>,
    assessment: Option<AssessmentDraft>,
}

/// The page-level declarative structure: an activity or an assessment.
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent {
    Activity(Activity),
    Assessment(Assessment),
}

impl PageContent {
    /// # Errors
    ///
    /// Returns `PageError` when the JSON is invalid, when it does not define
    /// exactly one of `activity`/`assessment`, or when the assessment has no
    /// questions. Invalid activity items and assessment questions are kept in
    /// place instead.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let draft: PageDraft = serde_json::from_str(json)?;
        match (draft.activity, draft.assessment) {
            (Some(items), None) => Ok(Self::Activity(Activity::from_items(items))),
            (None, Some(assessment)) => Ok(Self::Assessment(assessment.validate()?)),
            (Some(_), Some(_)) => Err(PageError::Ambiguous),
            (None, None) => Err(PageError::Missing),
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            PageContent::Activity(_) => "activity",
            PageContent::Assessment(_) => "assessment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_page_parses() {
        let page = PageContent::from_json(r#"{"activity": ["<p>hi</p>"]}"#).unwrap();
        assert_eq!(page.kind(), "activity");
    }

    #[test]
    fn assessment_page_parses() {
        let page = PageContent::from_json(
            r#"{"assessment": {"questionsList": [{"correctAnswerNumeric": 2}]}}"#,
        )
        .unwrap();
        let PageContent::Assessment(assessment) = page else {
            panic!("expected assessment");
        };
        assert_eq!(assessment.questions.len(), 1);
    }

    #[test]
    fn page_must_pick_exactly_one_kind() {
        assert!(matches!(
            PageContent::from_json(r#"{"activity": [], "assessment": {}}"#),
            Err(PageError::Ambiguous)
        ));
        assert!(matches!(PageContent::from_json("{}"), Err(PageError::Missing)));
    }

    #[test]
    fn empty_assessment_surfaces_its_error() {
        let err = PageContent::from_json(r#"{"assessment": {"questionsList": []}}"#)
            .unwrap_err();
        assert!(matches!(err, PageError::Assessment(AssessmentError::Empty)));
    }

    #[test]
    fn misconfigured_question_still_loads_the_page() {
        let page = PageContent::from_json(
            r#"{"assessment": {"questionsList": [
                {"correctAnswerString": "a"}, {"questionHTML": "?"}, {"correctAnswerNumeric": 1}
            ]}}"#,
        )
        .unwrap();
        let PageContent::Assessment(assessment) = page else {
            panic!("expected assessment");
        };
        assert_eq!(assessment.questions.len(), 3);
        assert_eq!(assessment.errors().count(), 1);
    }

    #[test]
    fn broken_json_is_reported() {
        assert!(matches!(PageContent::from_json("{"), Err(PageError::Json(_))));
    }
}
