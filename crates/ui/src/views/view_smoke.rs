use dioxus::prelude::*;
use quiz_core::model::{Choice, MultipleChoice, Tag};

use super::questions::MultipleChoiceBody;
use super::test_harness::setup_view_harness;
use crate::vm::{HIGHLIGHT_STYLE, MultipleChoiceVm};

const ACTIVITY: &str = r#"{"activity": [
    "<p>Capitals <script>alert(1)</script></p>",
    {"questionType": "multiple choice", "choices": [
        ["Lyon", false, "Lyon is in the south."],
        ["Paris", true, "Yes."]
    ]},
    {"questionType": "freetext", "correctAnswerRegex": "^paris$",
     "correctAnswerOutput": "Right.", "incorrectAnswerOutput": "Try again.",
     "showAnswerOutput": "Paris.", "outputHeight": "80px"}
]}"#;

#[tokio::test(flavor = "current_thread")]
async fn activity_smoke_renders_widgets_in_order() {
    let mut harness = setup_view_harness(ACTIVITY);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("<p>Capitals </p>"), "unsanitized markup in {html}");
    assert!(!html.contains("<script>"), "script leaked into {html}");
    assert!(html.contains(r#"id="submit_1""#), "missing submit_1 in {html}");
    assert!(html.contains(r#"id="output_1""#), "missing output_1 in {html}");
    assert!(html.contains(r#"name="q1""#), "missing radio group in {html}");
    assert!(html.contains("choice correct_1"), "missing correct class in {html}");
    assert!(html.contains("Check Answer"), "missing check button in {html}");
    assert!(html.contains(r#"id="input_2""#), "missing freetext input in {html}");
    assert!(html.contains("Skip and Show Answer"), "missing skip button in {html}");
    assert!(html.contains("height: 80px;"), "missing output height in {html}");

    let mc = html.find("submit_1").unwrap_or(usize::MAX);
    let freetext = html.find("input_2").unwrap_or(0);
    assert!(mc < freetext, "widgets out of order in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn choice_group_smoke_tags_each_item() {
    let mut harness = setup_view_harness(
        r#"{"activity": [{"questionType": "multiple choice group",
            "questionsList": [
                {"questionHTML": "<b>One?</b>", "choices": ["a", "b"], "correctIndex": 1},
                {"questionHTML": "Two?", "choices": ["c", "d"], "correctIndex": 0}
            ],
            "allCorrectOutput": "Great.", "someIncorrectOutput": "Keep going."}]}"#,
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains(r#"id="submit_1""#), "missing shared submit in {html}");
    assert!(html.contains(r#"name="q2""#), "missing first item group in {html}");
    assert!(html.contains(r#"name="q3""#), "missing second item group in {html}");
    assert!(html.contains("choice correct_2"), "missing first correct class in {html}");
    assert!(html.contains("choice correct_3"), "missing second correct class in {html}");
    assert!(html.contains("<b>One?</b>"), "missing item markup in {html}");
    assert!(html.contains("Check Answers"), "missing check button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn activity_smoke_reports_config_errors_inline() {
    let mut harness = setup_view_harness(
        r#"{"activity": [
            {"questionType": "essay"},
            {"questionType": "multiple choice", "choices": [["Yes", true, "Right."]]}
        ]}"#,
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("config-error"), "missing error note in {html}");
    assert!(html.contains("activity item 1"), "missing error position in {html}");
    assert!(html.contains(r#"id="submit_1""#), "valid widget not rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_smoke_renders_form_controls() {
    let mut harness = setup_view_harness(
        r#"{"assessment": {
            "preamble": "<p>Final quiz</p>",
            "checkAnswers": true,
            "questionsList": [
                {"questionHTML": "Pick one", "choices": [["correct", "yes"], "no"]},
                {"questionHTML": "Spell it", "correctAnswerString": "two"}
            ]
        }}"#,
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("<p>Final quiz</p>"), "missing preamble in {html}");
    assert!(html.contains(r#"name="q0""#), "missing choice group in {html}");
    assert!(html.contains(r#"id="q1""#), "missing text input in {html}");
    assert!(html.contains(r#"id="checkAnswersBtn""#), "missing check button in {html}");
    assert!(html.contains(r#"id="answerOutput""#), "missing output in {html}");
    assert!(html.contains(r#"id="submitAnswersBtn""#), "missing submit in {html}");
    assert!(html.contains("Save Answers"), "missing save text in {html}");
    assert!(!html.contains("correct_"), "choice marker leaked into {html}");
    assert!(harness.sink.submissions().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_smoke_hides_check_without_check_answers() {
    let mut harness = setup_view_harness(
        r#"{"assessment": {"questionsList": [
            {"questionHTML": "How many?", "correctAnswerNumeric": 4}
        ]}}"#,
    );
    harness.rebuild();
    let html = harness.render();

    assert!(!html.contains("checkAnswersBtn"), "unexpected check button in {html}");
    assert!(html.contains(r#"id="submitAnswersBtn""#), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assessment_smoke_keeps_valid_questions_around_a_bad_one() {
    let mut harness = setup_view_harness(
        r#"{"assessment": {"questionsList": [
            {"questionHTML": "First", "correctAnswerString": "a"},
            {"questionHTML": "Second"},
            {"questionHTML": "Third", "correctAnswerNumeric": 3}
        ]}}"#,
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains(r#"id="q0""#), "missing first question in {html}");
    assert!(html.contains(r#"id="q2""#), "missing third question in {html}");
    assert!(!html.contains(r#"id="q1""#), "bad question got an input in {html}");
    assert!(html.contains("config-error"), "missing error note in {html}");
    assert!(html.contains("question 2"), "missing error position in {html}");
    assert!(html.contains("Second"), "missing bad question markup in {html}");
}

fn capitals() -> MultipleChoice {
    let choices = [("Lyon", false), ("Paris", true)]
        .into_iter()
        .map(|(label, is_correct)| Choice {
            label: label.to_string(),
            is_correct,
            feedback: format!("{label} picked."),
        })
        .collect();
    MultipleChoice::new(choices).unwrap()
}

#[component]
fn CheckedChoice(selected: usize) -> Element {
    let vm = use_signal(|| {
        let mut vm = MultipleChoiceVm::new(capitals());
        vm.select(selected);
        vm.check();
        vm
    });
    rsx! { MultipleChoiceBody { tag: Tag::new(7), vm } }
}

#[tokio::test(flavor = "current_thread")]
async fn correct_check_highlights_the_correct_container() {
    let mut dom = VirtualDom::new_with_props(CheckedChoice, CheckedChoiceProps { selected: 1 });
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    let highlighted = format!(r#"class="choice correct_7" style="{HIGHLIGHT_STYLE}""#);
    assert!(html.contains(&highlighted), "missing highlight in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_check_leaves_containers_plain() {
    let mut dom = VirtualDom::new_with_props(CheckedChoice, CheckedChoiceProps { selected: 0 });
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("choice correct_7"), "missing correct class in {html}");
    assert!(!html.contains(HIGHLIGHT_STYLE), "unexpected highlight in {html}");
}
