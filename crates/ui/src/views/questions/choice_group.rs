use dioxus::prelude::*;
use quiz_core::model::ChoiceGroup;

use crate::context::AppContext;
use crate::vm::{CHECK_ANSWERS_TEXT, ChoiceGroupVm, HIGHLIGHT_STYLE, sanitize_markup};

use super::{focus_feedback, is_enter};

#[derive(Clone, PartialEq)]
struct ItemRow {
    item: usize,
    group_name: String,
    question_html: String,
    choices: Vec<ChoiceRow>,
}

#[derive(Clone, PartialEq)]
struct ChoiceRow {
    index: usize,
    radio_id: String,
    label: String,
    class: String,
    style: &'static str,
    checked: bool,
}

/// Several sub-questions sharing one check button and one feedback area.
#[component]
pub fn ChoiceGroupQuestion(group: ChoiceGroup) -> Element {
    let ctx = use_context::<AppContext>();
    let (tag, item_tags) = use_hook(|| {
        let tag = ctx.next_tag();
        let item_tags = group
            .items
            .iter()
            .map(|_| ctx.next_tag())
            .collect::<Vec<_>>();
        (tag, item_tags)
    });
    let mut vm = use_signal(|| ChoiceGroupVm::new(group.clone()));

    let submit_id = tag.element_id("submit");
    let output_id = tag.element_id("output");

    let state = vm.read().clone();
    let items = state
        .group()
        .items
        .iter()
        .zip(&item_tags)
        .enumerate()
        .map(|(item, (group_item, item_tag))| {
            let group_name = item_tag.group_name();
            let correct_class = item_tag.correct_class();
            let choices = group_item
                .choices
                .iter()
                .enumerate()
                .map(|(index, label)| {
                    let is_correct = index == group_item.correct_index;
                    ChoiceRow {
                        index,
                        radio_id: format!("{group_name}_{index}"),
                        label: label.clone(),
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
                        checked: state.selected(item) == Some(index),
                    }
                })
                .collect();
            ItemRow {
                item,
                group_name,
                question_html: sanitize_markup(&group_item.question_html),
                choices,
            }
        })
        .collect::<Vec<_>>();
    let feedback = state.feedback().to_string();

    let output_for_click = output_id.clone();
    let output_for_key = output_id.clone();

    rsx! {
        div { class: "question choice-group",
            for row in items {
                div { key: "{row.item}", class: "group-item",
                    div { class: "question-text", dangerous_inner_html: "{row.question_html}" }
                    div { class: "choices",
                        for choice in row.choices {
                            div {
                                key: "{choice.index}",
                                class: "{choice.class}",
                                style: "{choice.style}",
                                input {
                                    r#type: "radio",
                                    id: "{choice.radio_id}",
                                    name: "{row.group_name}",
                                    value: "{choice.index}",
                                    checked: choice.checked,
                                    onchange: move |_| vm.write().select(row.item, choice.index),
                                }
                                label { r#for: "{choice.radio_id}", "{choice.label}" }
                            }
                        }
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
                "{CHECK_ANSWERS_TEXT}"
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
