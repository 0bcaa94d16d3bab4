use dioxus::prelude::*;
use dioxus_router::Router;
use quiz_core::model::PageContent;

use crate::context::AppContext;
use crate::routes::Route;

fn window_title(page: &PageContent) -> String {
    match page {
        PageContent::Activity(_) => "Quiz: activity".to_string(),
        PageContent::Assessment(assessment) => format!("Quiz: {}", assessment.assessment_name),
    }
}

fn misconfigured_count(page: &PageContent) -> usize {
    match page {
        PageContent::Activity(activity) => activity.errors().count(),
        PageContent::Assessment(assessment) => assessment.errors().count(),
    }
}

#[component]
pub fn App() -> Element {
    let page = use_context::<AppContext>().page();
    let title = window_title(&page);
    let misconfigured = misconfigured_count(&page);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }

        div { class: "app-root",
            if misconfigured > 0 {
                p { class: "config-banner",
                    "{misconfigured} item(s) on this page are misconfigured and were skipped. See the log for details."
                }
            }
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "This page could not be displayed" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_error_count_follow_the_page() {
        let activity = PageContent::from_json(
            r#"{"activity": ["<p>hi</p>", {"questionType": "essay"}, {"questionType": "poll"}]}"#,
        )
        .unwrap();
        assert_eq!(window_title(&activity), "Quiz: activity");
        assert_eq!(misconfigured_count(&activity), 2);

        let assessment = PageContent::from_json(
            r#"{"assessment": {"assessmentName": "midterm", "questionsList": [
                {"correctAnswerString": "a"}, {"questionHTML": "?"}
            ]}}"#,
        )
        .unwrap();
        assert_eq!(window_title(&assessment), "Quiz: midterm");
        assert_eq!(misconfigured_count(&assessment), 1);
    }
}
