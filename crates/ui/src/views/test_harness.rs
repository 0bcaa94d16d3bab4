use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::TagAllocator;
use quiz_core::model::PageContent;
use services::{AppServices, AssessmentService, RecordingSubmissionSink};

use crate::context::{UiApp, build_app_context};
use crate::views::PageView;

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn page(&self) -> Arc<PageContent> {
        self.services.page()
    }

    fn tags(&self) -> Arc<TagAllocator> {
        self.services.tags()
    }

    fn assessment_service(&self) -> Option<Arc<AssessmentService>> {
        self.services.assessment_service()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { PageView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub sink: RecordingSubmissionSink,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness over a page declaration; submissions go to a recording sink.
pub fn setup_view_harness(page_json: &str) -> ViewHarness {
    let page = PageContent::from_json(page_json).expect("valid page");
    let sink = RecordingSubmissionSink::new();
    let services = AppServices::with_sink(page, Arc::new(sink.clone()));
    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app });
    ViewHarness { dom, sink }
}
