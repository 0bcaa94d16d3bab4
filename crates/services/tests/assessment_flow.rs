use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::{Assessment, AssessmentDraft, PageContent};
use quiz_core::scoring::{AnswerSheet, AssessmentSubmission, Response};
use services::{
    AppServices, AssessmentService, RecordingSubmissionSink, SubmissionError, SubmissionSink,
};

const ASSESSMENT: &str = r#"{
    "preamble": "<p>Unit 1 review</p>",
    "assessmentName": "unit1",
    "formScript": "grade",
    "checkAnswers": true,
    "questionsList": [
        {"questionHTML": "Capital of France?", "choices": ["Lyon", ["correct", "Paris"]], "lesson": "1.1"},
        {"questionHTML": "Greeting", "correctAnswerString": "Hello", "lesson": "1.2"},
        {"questionHTML": "The answer", "correctAnswerRegex": "/^42$/"},
        {"questionHTML": "Pi to two places", "correctAnswerNumeric": 3.14, "lesson": "1.4"}
    ]
}"#;

fn assessment() -> Arc<Assessment> {
    let draft: AssessmentDraft = serde_json::from_str(ASSESSMENT).unwrap();
    Arc::new(draft.validate().unwrap())
}

fn answers(numeric: &str) -> AnswerSheet {
    AnswerSheet::new(vec![
        Response::Choice(Some(1)),
        Response::Text("hello".into()),
        Response::Text(" 42 ".into()),
        Response::Text(numeric.into()),
    ])
}

#[tokio::test]
async fn check_never_contacts_the_sink() {
    let sink = RecordingSubmissionSink::new();
    let service = AssessmentService::new(assessment(), Arc::new(sink.clone()));

    let outcome = service.check(&answers("3.15"));

    assert_eq!(outcome.record.num_correct(), 3);
    assert_eq!(outcome.record.score().to_string(), "75.00");
    assert!(outcome.feedback.contains("75.00% (3/4)"));
    assert!(outcome.feedback.contains("review to improve your score: 1.4"));
    assert!(sink.submissions().is_empty());
}

#[tokio::test]
async fn submit_posts_exactly_one_form() {
    let sink = RecordingSubmissionSink::new();
    let service = AssessmentService::new(assessment(), Arc::new(sink.clone()));

    let record = service.submit(&answers("3.1405")).await.unwrap();
    assert!(record.is_perfect());

    let submissions = sink.submissions();
    assert_eq!(submissions.len(), 1);
    let form = &submissions[0];
    assert_eq!(form.action, "grade");
    assert_eq!(form.fields.len(), 1 + 4 + 3);
    assert_eq!(form.field("assessment_type"), Some("unit1"));
    assert_eq!(form.field("3"), Some("true"));
    assert_eq!(form.field("score"), Some("100.00"));
}

struct RejectingSink;

#[async_trait]
impl SubmissionSink for RejectingSink {
    async fn submit(&self, _submission: &AssessmentSubmission) -> Result<(), SubmissionError> {
        Err(SubmissionError::HttpStatus(reqwest::StatusCode::BAD_GATEWAY))
    }
}

#[tokio::test]
async fn submit_surfaces_sink_failures() {
    let service = AssessmentService::new(assessment(), Arc::new(RejectingSink));
    let err = service.submit(&answers("3.14")).await.unwrap_err();
    assert!(matches!(err, SubmissionError::HttpStatus(status) if status.as_u16() == 502));
}

#[tokio::test]
async fn app_services_only_build_assessment_service_for_assessments() {
    let sink: Arc<dyn SubmissionSink> = Arc::new(RecordingSubmissionSink::new());

    let activity = PageContent::from_json(r#"{"activity": ["<p>Read this.</p>"]}"#).unwrap();
    let services = AppServices::with_sink(activity, Arc::clone(&sink));
    assert!(services.assessment_service().is_none());

    let page = PageContent::from_json(&format!(r#"{{"assessment": {ASSESSMENT}}}"#)).unwrap();
    let services = AppServices::with_sink(page, sink);
    let service = services.assessment_service().expect("assessment service");
    assert_eq!(service.assessment().questions.len(), 4);
    assert_eq!(services.tags().next_tag().value(), 1);
}
