use std::sync::Arc;

use quiz_core::TagAllocator;
use quiz_core::model::PageContent;

use crate::assessment_service::AssessmentService;
use crate::submission::{
    HttpSubmissionSink, RecordingSubmissionSink, SubmissionConfig, SubmissionSink,
};

/// Assembles the services one rendered page needs.
#[derive(Clone)]
pub struct AppServices {
    page: Arc<PageContent>,
    tags: Arc<TagAllocator>,
    assessment_service: Option<Arc<AssessmentService>>,
}

impl AppServices {
    /// Build services for `page`, posting submissions as `config` says.
    #[must_use]
    pub fn new(page: PageContent, config: &SubmissionConfig) -> Self {
        let sink: Arc<dyn SubmissionSink> = if config.offline {
            Arc::new(RecordingSubmissionSink::new())
        } else {
            Arc::new(HttpSubmissionSink::new(config.base_url.clone()))
        };
        Self::with_sink(page, sink)
    }

    #[must_use]
    pub fn with_sink(page: PageContent, sink: Arc<dyn SubmissionSink>) -> Self {
        let assessment_service = match &page {
            PageContent::Assessment(assessment) => Some(Arc::new(AssessmentService::new(
                Arc::new(assessment.clone()),
                sink,
            ))),
            PageContent::Activity(_) => None,
        };
        Self {
            page: Arc::new(page),
            tags: Arc::new(TagAllocator::new()),
            assessment_service,
        }
    }

    #[must_use]
    pub fn page(&self) -> Arc<PageContent> {
        Arc::clone(&self.page)
    }

    #[must_use]
    pub fn tags(&self) -> Arc<TagAllocator> {
        Arc::clone(&self.tags)
    }

    /// Present only when the page is an assessment.
    #[must_use]
    pub fn assessment_service(&self) -> Option<Arc<AssessmentService>> {
        self.assessment_service.as_ref().map(Arc::clone)
    }
}
