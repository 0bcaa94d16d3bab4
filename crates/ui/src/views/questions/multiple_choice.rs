use dioxus::prelude::*;
use quiz_core::model::{MultipleChoice, Tag};

use crate::context::AppContext;
use crate::vm::{CHECK_ANSWER_TEXT, HIGHLIGHT_STYLE, MultipleChoiceVm};

use super::{focus_feedback, is_enter};

#[derive(Clone, PartialEq)]
struct ChoiceRow {
    index: usize,
    radio_id: String,
    label: String,
    class: String,
    style: &'static str,
    checked: bool,
}

#[component]
pub fn MultipleChoiceQuestion(question: MultipleChoice) -> Element {
    let ctx = use_context::<AppContext>();
    let tag = use_hook(|| ctx.next_tag());
    let vm = use_signal(|| MultipleChoiceVm::new(question.clone()));
    rsx! { MultipleChoiceBody { tag, vm } }
}

/// Renders a widget whose state lives in `vm`.
#[component]
pub(crate) fn MultipleChoiceBody(tag: Tag, vm: Signal<MultipleChoiceVm>) -> Element {
    let mut vm = vm;
    let group_name = tag.group_name();
    let submit_id = tag.element_id("submit");
    let output_id = tag.element_id("output");
    let correct_class = tag.correct_class();

    let state = vm.read().clone();
    let correct_index = state.question().correct_index();
    let rows = state
        .question()
        .choices()
        .iter()
        .enumerate()
        .map(|(index, choice)| {
            let is_correct = index == correct_index;
            ChoiceRow {
                index,
                radio_id: format!("{group_name}_{index}"),
                label: choice.label.clone(),
                class: if is_correct {
                    format!("choice {correct_class}")
                } else {
                    "choice".to_string()
                },
                style: if is_correct && state.is_highlighted() {
                    HIGHLIGHT_STYLE
                } else {
                    ""
                },
                checked: state.selected() == Some(index),
            }
        })
        .collect::<Vec<_>>();
    let feedback = state.feedback().to_string();

    let output_for_click = output_id.clone();
    let output_for_key = output_id.clone();

    rsx! {
        div { class: "question multiple-choice",
            div { class: "choices",
                for row in rows {
                    div {
                        key: "{row.index}",
                        class: "{row.class}",
                        style: "{row.style}",
                        input {
                            r#type: "radio",
                            id: "{row.radio_id}",
                            name: "{group_name}",
                            value: "{row.index}",
                            checked: row.checked,
                            onchange: move |_| vm.write().select(row.index),
                        }
                        label { r#for: "{row.radio_id}", "{row.label}" }
                    }
                }
            }
            button {
                id: "{submit_id}",
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| {
                    vm.write().check();
                    focus_feedback(output_for_click.clone());
                },
                onkeydown: move |evt: KeyboardEvent| {
                    if is_enter(&evt) {
                        evt.prevent_default();
                        vm.write().check();
                        focus_feedback(output_for_key.clone());
                    }
                },
                "{CHECK_ANSWER_TEXT}"
            }
            textarea {
                id: "{output_id}",
                class: "feedback",
                readonly: true,
                rows: "3",
                value: "{feedback}",
            }
        }
    }
}
