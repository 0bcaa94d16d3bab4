use std::sync::Arc;

use quiz_core::TagAllocator;
use quiz_core::model::{PageContent, Tag};
use services::AssessmentService;

pub trait UiApp: Send + Sync {
    fn page(&self) -> Arc<PageContent>;
    fn tags(&self) -> Arc<TagAllocator>;
    fn assessment_service(&self) -> Option<Arc<AssessmentService>>;
}

#[derive(Clone)]
pub struct AppContext {
    page: Arc<PageContent>,
    tags: Arc<TagAllocator>,
    assessment_service: Option<Arc<AssessmentService>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            page: app.page(),
            tags: app.tags(),
            assessment_service: app.assessment_service(),
        }
    }

    #[must_use]
    pub fn page(&self) -> Arc<PageContent> {
        Arc::clone(&self.page)
    }

    /// Draw a fresh tag for a widget instance.
    #[must_use]
    pub fn next_tag(&self) -> Tag {
        self.tags.next_tag()
    }

    #[must_use]
    pub fn assessment_service(&self) -> Option<Arc<AssessmentService>> {
        self.assessment_service.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
