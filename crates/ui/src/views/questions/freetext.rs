use dioxus::prelude::*;
use quiz_core::model::Freetext;

use crate::context::AppContext;
use crate::vm::{CHECK_ANSWER_TEXT, FreetextVm};

use super::{focus_feedback, is_enter};

#[component]
pub fn FreetextQuestion(question: Freetext) -> Element {
    let ctx = use_context::<AppContext>();
    let tag = use_hook(|| ctx.next_tag());
    let mut vm = use_signal(|| FreetextVm::new(question.clone()));

    let input_id = tag.element_id("input");
    let submit_id = tag.element_id("submit");
    let skip_id = tag.element_id("skip");
    let output_id = tag.element_id("output");

    let state = vm.read().clone();
    let has_check = state.has_check();
    let show_answer_prompt = state.show_answer_prompt().map(str::to_string);
    let has_show_answer = show_answer_prompt.is_some();
    let show_answer_prompt = show_answer_prompt.unwrap_or_default();
    let output_style = format!("height: {};", state.output_height());
    let input = state.input().to_string();
    let feedback = state.feedback().to_string();

    let output_for_click = output_id.clone();
    let output_for_key = output_id.clone();
    let output_for_reveal = output_id.clone();

    rsx! {
        div { class: "question freetext",
            input {
                r#type: "text",
                id: "{input_id}",
                class: "freetext-input",
                value: "{input}",
                oninput: move |evt| vm.write().set_input(evt.value()),
                onfocus: move |_| vm.write().clear_feedback(),
            }
            if has_check {
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
            }
            if has_show_answer {
                button {
                    id: "{skip_id}",
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        vm.write().reveal();
                        focus_feedback(output_for_reveal.clone());
                    },
                    "{show_answer_prompt}"
                }
            }
            textarea {
                id: "{output_id}",
                class: "feedback",
                style: "{output_style}",
                readonly: true,
                value: "{feedback}",
            }
        }
    }
}
