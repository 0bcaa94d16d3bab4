use std::env;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use quiz_core::scoring::AssessmentSubmission;
use reqwest::Client;
use url::Url;

use crate::error::{SubmissionConfigError, SubmissionError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Where submissions go. Read once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionConfig {
    /// The page address; `formScript` is resolved against it like a form
    /// `action`.
    pub base_url: Url,
    /// Keep submissions in memory instead of posting them.
    pub offline: bool,
}

impl SubmissionConfig {
    /// Read `QUIZ_BASE_URL` and `QUIZ_OFFLINE`.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionConfigError::InvalidBaseUrl` if `QUIZ_BASE_URL` is not a URL.
    pub fn from_env() -> Result<Self, SubmissionConfigError> {
        let raw = env::var("QUIZ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let offline = env::var("QUIZ_OFFLINE")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Ok(Self {
            base_url: parse_base_url(&raw)?,
            offline,
        })
    }
}

/// # Errors
///
/// Returns `SubmissionConfigError::InvalidBaseUrl` if `raw` is not an absolute URL.
pub fn parse_base_url(raw: &str) -> Result<Url, SubmissionConfigError> {
    Url::parse(raw.trim()).map_err(|source| SubmissionConfigError::InvalidBaseUrl {
        raw: raw.to_string(),
        source,
    })
}

/// Destination of a submitted assessment form.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, submission: &AssessmentSubmission) -> Result<(), SubmissionError>;
}

/// Posts the form as `application/x-www-form-urlencoded`. The response body
/// is not read.
#[derive(Clone)]
pub struct HttpSubmissionSink {
    client: Client,
    base_url: Url,
}

impl HttpSubmissionSink {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Absolute endpoint for a form `action`.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::InvalidEndpoint` if the action cannot be
    /// joined onto the base URL.
    pub fn endpoint(&self, action: &str) -> Result<Url, SubmissionError> {
        self.base_url
            .join(action)
            .map_err(|source| SubmissionError::InvalidEndpoint {
                action: action.to_string(),
                source,
            })
    }

    /// Build the POST without sending it.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError` if the endpoint is invalid or the request
    /// cannot be built.
    pub fn build_request(
        &self,
        submission: &AssessmentSubmission,
    ) -> Result<reqwest::Request, SubmissionError> {
        let url = self.endpoint(&submission.action)?;
        let request = self.client.post(url).form(&submission.fields).build()?;
        Ok(request)
    }
}

#[async_trait]
impl SubmissionSink for HttpSubmissionSink {
    async fn submit(&self, submission: &AssessmentSubmission) -> Result<(), SubmissionError> {
        let request = self.build_request(submission)?;
        tracing::debug!(url = %request.url(), fields = submission.fields.len(), "posting assessment");
        let response = self.client.execute(request).await?;
        if !response.status().is_success() {
            return Err(SubmissionError::HttpStatus(response.status()));
        }
        Ok(())
    }
}

/// Keeps submissions in memory, for tests and offline runs.
#[derive(Clone, Default)]
pub struct RecordingSubmissionSink {
    submissions: Arc<Mutex<Vec<AssessmentSubmission>>>,
}

impl RecordingSubmissionSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn submissions(&self) -> Vec<AssessmentSubmission> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl SubmissionSink for RecordingSubmissionSink {
    async fn submit(&self, submission: &AssessmentSubmission) -> Result<(), SubmissionError> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(submission.clone());
        Ok(())
    }
}
