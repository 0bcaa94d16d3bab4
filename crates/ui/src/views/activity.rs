use dioxus::prelude::*;
use quiz_core::model::{Activity, ActivityEntry, Question};

use crate::vm::sanitize_markup;

use super::questions::{ChoiceGroupQuestion, FreetextQuestion, MultipleChoiceQuestion};

/// Renders markup fragments and question widgets in order.
#[component]
pub fn ActivityView(activity: Activity) -> Element {
    use_hook(|| {
        for (index, err) in activity.errors() {
            tracing::warn!(entry = index, error = %err, "activity entry is not renderable");
        }
    });

    let entries = activity
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            ActivityEntry::Markup(html) => {
                let html = sanitize_markup(html);
                rsx! {
                    div { key: "{index}", class: "activity-markup", dangerous_inner_html: "{html}" }
                }
            }
            ActivityEntry::Question(question) => {
                let widget = match question {
                    Question::MultipleChoice(question) => rsx! {
                        MultipleChoiceQuestion { question: question.clone() }
                    },
                    Question::ChoiceGroup(group) => rsx! {
                        ChoiceGroupQuestion { group: group.clone() }
                    },
                    Question::Freetext(question) => rsx! {
                        FreetextQuestion { question: question.clone() }
                    },
                };
                rsx! {
                    div { key: "{index}", class: "activity-question", {widget} }
                }
            }
            ActivityEntry::Invalid(err) => {
                let position = index + 1;
                rsx! {
                    p { key: "{index}", class: "config-error",
                        "Configuration error in activity item {position}: {err}"
                    }
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "activity", {entries.into_iter()} }
    }
}
