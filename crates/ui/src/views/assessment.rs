use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::AnswerStrategy;
use services::AssessmentService;

use crate::context::AppContext;
use crate::vm::{
    AssessmentVm, CHECK_ANSWERS_TEXT, SAVE_ANSWERS_TEXT, SAVED_TEXT, SAVING_TEXT, SubmitState,
    sanitize_markup, submit_answers,
};

use super::questions::{focus_feedback, is_enter};

const OUTPUT_ID: &str = "answerOutput";

#[derive(Clone)]
pub struct ServiceHandle(pub Arc<AssessmentService>);

impl PartialEq for ServiceHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, PartialEq)]
enum AnswerInput {
    Choices(Vec<(usize, String, bool)>),
    Text(String),
    Invalid(String),
}

#[derive(Clone, PartialEq)]
struct QuestionRow {
    index: usize,
    group_name: String,
    question_html: String,
    input: AnswerInput,
}

#[component]
pub fn AssessmentView() -> Element {
    let ctx = use_context::<AppContext>();
    match ctx.assessment_service() {
        Some(service) => rsx! {
            AssessmentForm { service: ServiceHandle(service) }
        },
        None => rsx! {
            p { class: "config-error", "No assessment is configured for this page." }
        },
    }
}

#[component]
fn AssessmentForm(service: ServiceHandle) -> Element {
    let mut vm = use_signal(|| AssessmentVm::new(Arc::clone(&service.0)));
    use_hook(|| {
        for (index, err) in service.0.assessment().errors() {
            tracing::warn!(question = index, error = %err, "assessment question is not renderable");
        }
    });

    let state = vm.read().clone();
    let assessment = state.assessment();
    let preamble = assessment
        .preamble
        .as_deref()
        .map(sanitize_markup)
        .unwrap_or_default();
    let rows = assessment
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let input = match &question.strategy {
                AnswerStrategy::Choices { labels, .. } => AnswerInput::Choices(
                    labels
                        .iter()
                        .enumerate()
                        .map(|(choice, label)| {
                            (choice, label.clone(), state.selected(index) == Some(choice))
                        })
                        .collect(),
                ),
                AnswerStrategy::Invalid(err) => AnswerInput::Invalid(err.to_string()),
                _ => AnswerInput::Text(state.text(index).to_string()),
            };
            QuestionRow {
                index,
                group_name: format!("q{index}"),
                question_html: sanitize_markup(&question.question_html),
                input,
            }
        })
        .collect::<Vec<_>>();
    let check_answers = assessment.check_answers;
    let feedback = state.feedback().to_string();
    let submit_state = state.submit_state();
    let can_submit = state.can_submit();
    let status = match submit_state {
        SubmitState::Idle => "",
        SubmitState::Saving => SAVING_TEXT,
        SubmitState::Saved => SAVED_TEXT,
        SubmitState::Failed(err) => err.message(),
    };

    let question_rows = rows.into_iter().map(move |row| {
        let index = row.index;
        let control = match row.input {
            AnswerInput::Choices(choices) => rsx! {
                div { class: "choices",
                    for (choice, label, checked) in choices {
                        div { key: "{choice}", class: "choice",
                            input {
                                r#type: "radio",
                                id: "{row.group_name}_{choice}",
                                name: "{row.group_name}",
                                value: "{choice}",
                                checked,
                                onchange: move |_| vm.write().select(index, choice),
                            }
                            label { r#for: "{row.group_name}_{choice}", "{label}" }
                        }
                    }
                }
            },
            AnswerInput::Text(value) => rsx! {
                input {
                    r#type: "text",
                    id: "{row.group_name}",
                    name: "{row.group_name}",
                    class: "assessment-input",
                    value: "{value}",
                    oninput: move |evt| vm.write().set_text(index, evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if is_enter(&evt) {
                            evt.prevent_default();
                        }
                    },
                }
            },
            AnswerInput::Invalid(message) => {
                let position = index + 1;
                rsx! {
                    p { class: "config-error",
                        "Configuration error in question {position}: {message}"
                    }
                }
            }
        };
        rsx! {
            li { key: "{index}", class: "assessment-question",
                div { class: "question-text", dangerous_inner_html: "{row.question_html}" }
                {control}
            }
        }
    });

    rsx! {
        form {
            id: "assessmentForm",
            class: "assessment",
            onsubmit: move |evt: FormEvent| evt.prevent_default(),
            if !preamble.is_empty() {
                div { class: "preamble", dangerous_inner_html: "{preamble}" }
            }
            ol { class: "assessment-questions", {question_rows} }
            if check_answers {
                button {
                    id: "checkAnswersBtn",
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        vm.write().check();
                        focus_feedback(OUTPUT_ID.to_string());
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        if is_enter(&evt) {
                            evt.prevent_default();
                            vm.write().check();
                            focus_feedback(OUTPUT_ID.to_string());
                        }
                    },
                    "{CHECK_ANSWERS_TEXT}"
                }
                textarea {
                    id: "{OUTPUT_ID}",
                    class: "feedback",
                    readonly: true,
                    rows: "6",
                    value: "{feedback}",
                }
            }
            button {
                id: "submitAnswersBtn",
                class: "btn btn-primary",
                r#type: "button",
                disabled: !can_submit,
                onclick: move |_| {
                    let pending = {
                        let mut state = vm.write();
                        state
                            .begin_submit()
                            .then(|| (state.service(), state.sheet().clone()))
                    };
                    let Some((service, sheet)) = pending else {
                        return;
                    };
                    spawn(async move {
                        let mut vm = vm;
                        let result = submit_answers(service, sheet).await.map(|_| ());
                        vm.write().finish_submit(result);
                    });
                },
                "{SAVE_ANSWERS_TEXT}"
            }
            p { class: "submit-status", "{status}" }
        }
    }
}
