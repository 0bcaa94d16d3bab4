use dioxus::prelude::*;
use quiz_core::model::PageContent;

use crate::context::AppContext;

use super::{ActivityView, AssessmentView};

/// Whatever the loaded page declares.
#[component]
pub fn PageView() -> Element {
    let page = use_context::<AppContext>().page();
    match page.as_ref() {
        PageContent::Activity(activity) => rsx! {
            ActivityView { activity: activity.clone() }
        },
        PageContent::Assessment(_) => rsx! { AssessmentView {} },
    }
}

#[component]
pub fn ActivityPage() -> Element {
    let page = use_context::<AppContext>().page();
    match page.as_ref() {
        PageContent::Activity(activity) => rsx! {
            ActivityView { activity: activity.clone() }
        },
        PageContent::Assessment(_) => rsx! {
            p { class: "empty-state", "This page has no activity." }
        },
    }
}

#[component]
pub fn AssessmentPage() -> Element {
    rsx! { AssessmentView {} }
}
