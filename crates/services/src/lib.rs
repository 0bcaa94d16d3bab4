#![forbid(unsafe_code)]

pub mod app_services;
pub mod assessment_service;
pub mod error;
pub mod submission;

pub use app_services::AppServices;
pub use assessment_service::{AssessmentService, CheckOutcome};
pub use error::{SubmissionConfigError, SubmissionError};
pub use submission::{
    DEFAULT_BASE_URL, HttpSubmissionSink, RecordingSubmissionSink, SubmissionConfig,
    SubmissionSink, parse_base_url,
};
