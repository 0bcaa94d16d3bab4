//! Assessment scoring, check feedback and the submitted form.

use std::fmt;

use crate::model::{AnswerStrategy, Assessment};

pub const YOUR_SCORE_TEXT: &str = "You received a score on this assessment of";
pub const LESSONS_TO_REVIEW_TEXT: &str = "Here are lessons you could review to improve your score";
pub const PERFECT_SCORE_SAVE_TEXT: &str =
    "Congratulations! Press the 'Save Answers' button to submit your grade.";
pub const GENERIC_SAVE_TEXT: &str = "Press the 'Save Answers' button below to save your scores. \
     You can also edit your answers above before clicking 'Save Answers'.";

/// What the user entered for one assessment question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Choice(Option<usize>),
    Text(String),
}

impl Response {
    fn is_correct(&self, strategy: &AnswerStrategy) -> bool {
        match self {
            Response::Choice(selected) => strategy.accepts_choice(*selected),
            Response::Text(input) => strategy.accepts_text(input),
        }
    }
}

/// Responses in question order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    responses: Vec<Response>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new(responses: Vec<Response>) -> Self {
        Self { responses }
    }

    /// An unanswered sheet shaped after the assessment's questions.
    #[must_use]
    pub fn blank_for(assessment: &Assessment) -> Self {
        let responses = assessment
            .questions
            .iter()
            .map(|question| {
                if question.strategy.is_choice() {
                    Response::Choice(None)
                } else {
                    Response::Text(String::new())
                }
            })
            .collect();
        Self { responses }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Response> {
        self.responses.get(index)
    }

    /// Replaces the response at `index`, growing the sheet if needed.
    pub fn set(&mut self, index: usize, response: Response) {
        if index >= self.responses.len() {
            self.responses.resize(index + 1, Response::Choice(None));
        }
        self.responses[index] = response;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

/// Percentage rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    #[must_use]
    pub fn from_counts(num_correct: usize, num_questions: usize) -> Self {
        if num_questions == 0 {
            return Self(0.0);
        }
        #[allow(clippy::cast_precision_loss)]
        let percent = num_correct as f64 / num_questions as f64 * 100.0;
        Self((percent * 100.0).round() / 100.0)
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Per-question correctness for one check or submit action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreRecord {
    results: Vec<bool>,
    lessons_to_review: Vec<String>,
}

impl ScoreRecord {
    #[must_use]
    pub fn results(&self) -> &[bool] {
        &self.results
    }

    #[must_use]
    pub fn lessons_to_review(&self) -> &[String] {
        &self.lessons_to_review
    }

    #[must_use]
    pub fn num_correct(&self) -> usize {
        self.results.iter().filter(|ok| **ok).count()
    }

    #[must_use]
    pub fn num_questions(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn score(&self) -> Score {
        Score::from_counts(self.num_correct(), self.num_questions())
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score().value() >= 100.0
    }

    /// Text shown by the non-submitting check action.
    #[must_use]
    pub fn check_feedback(&self) -> String {
        let mut text = format!(
            "{YOUR_SCORE_TEXT} {}% ({}/{}).\n\n",
            self.score(),
            self.num_correct(),
            self.num_questions()
        );
        if !self.lessons_to_review.is_empty() {
            text.push_str(&format!(
                "{LESSONS_TO_REVIEW_TEXT}: {}\n\n",
                self.lessons_to_review.join(", ")
            ));
        }
        text.push_str(if self.is_perfect() {
            PERFECT_SCORE_SAVE_TEXT
        } else {
            GENERIC_SAVE_TEXT
        });
        text
    }
}

/// The hidden form posted by the submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentSubmission {
    pub action: String,
    pub fields: Vec<(String, String)>,
}

impl AssessmentSubmission {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl Assessment {
    /// Score every question in order. Missing responses count as incorrect.
    #[must_use]
    pub fn score(&self, sheet: &AnswerSheet) -> ScoreRecord {
        let mut record = ScoreRecord::default();
        for (index, question) in self.questions.iter().enumerate() {
            let is_correct = sheet
                .get(index)
                .is_some_and(|response| response.is_correct(&question.strategy));
            record.results.push(is_correct);
            if !is_correct && let Some(lesson) = &question.lesson {
                record.lessons_to_review.push(lesson.clone());
            }
        }
        record
    }

    /// Build the submitted form: `assessment_type`, one field per question
    /// keyed by position, then `num_correct`, `num_questions` and `score`.
    #[must_use]
    pub fn submission(&self, record: &ScoreRecord) -> AssessmentSubmission {
        let mut fields = Vec::with_capacity(record.num_questions() + 4);
        fields.push(("assessment_type".to_string(), self.assessment_name.clone()));
        for (index, ok) in record.results().iter().enumerate() {
            fields.push((index.to_string(), ok.to_string()));
        }
        fields.push(("num_correct".to_string(), record.num_correct().to_string()));
        fields.push(("num_questions".to_string(), record.num_questions().to_string()));
        fields.push(("score".to_string(), record.score().to_string()));
        AssessmentSubmission {
            action: self.form_script.clone(),
            fields,
        }
    }
}
