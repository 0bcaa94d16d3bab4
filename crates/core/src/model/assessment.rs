use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::ConfigError;
use crate::matcher::{self, AnswerPattern};
use crate::model::choice::single_correct_index;

pub const DEFAULT_FORM_SCRIPT: &str = "answer";
pub const DEFAULT_ASSESSMENT_NAME: &str = "unnamed assessment";

/// Marker wrapping the correct choice, as in `["correct", "Paris"]`.
pub const CORRECT_MARKER: &str = "correct";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("assessment has no questions")]
    Empty,
}

//
// ─── DRAFTS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDraft {
    pub preamble: Option<String>,
    /// Kept untyped so one malformed question cannot reject the others.
    #[serde(default)]
    pub questions_list: Vec<Value>,
    pub form_script: Option<String>,
    pub assessment_name: Option<String>,
    #[serde(default)]
    pub check_answers: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentQuestionDraft {
    #[serde(rename = "questionHTML", default)]
    pub question_html: String,
    pub choices: Option<Vec<AssessmentChoiceDraft>>,
    pub correct_answer_string: Option<String>,
    pub correct_answer_regex: Option<String>,
    pub correct_answer_numeric: Option<f64>,
    pub lesson: Option<LessonRef>,
}

/// A plain label is an incorrect choice; `["correct", label]` is the correct
/// one. Anything else is kept so it can be reported.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AssessmentChoiceDraft {
    Plain(String),
    Wrapped(Vec<Value>),
    Other(Value),
}

/// Lesson identifiers show up both as `"2.3"` and as `4`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LessonRef {
    Text(String),
    Number(serde_json::Number),
}

impl std::fmt::Display for LessonRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LessonRef::Text(text) => write!(f, "{text}"),
            LessonRef::Number(number) => write!(f, "{number}"),
        }
    }
}

impl AssessmentDraft {
    /// Resolve every question. A question that does not resolve keeps its
    /// slot as `AnswerStrategy::Invalid` so the total stays the same.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::Empty` for an assessment without questions.
    pub fn validate(self) -> Result<Assessment, AssessmentError> {
        if self.questions_list.is_empty() {
            return Err(AssessmentError::Empty);
        }
        let questions = self
            .questions_list
            .into_iter()
            .map(resolve_question)
            .collect();
        Ok(Assessment {
            preamble: self.preamble.filter(|p| !p.trim().is_empty()),
            questions,
            form_script: self
                .form_script
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FORM_SCRIPT.to_string()),
            assessment_name: self
                .assessment_name
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ASSESSMENT_NAME.to_string()),
            check_answers: self.check_answers,
        })
    }
}

fn resolve_question(item: Value) -> AssessmentQuestion {
    let question_html = item
        .get("questionHTML")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let draft = match serde_json::from_value::<AssessmentQuestionDraft>(item) {
        Ok(draft) => draft,
        Err(err) => {
            return AssessmentQuestion {
                question_html,
                strategy: AnswerStrategy::Invalid(ConfigError::Malformed(err.to_string())),
                lesson: None,
            };
        }
    };
    let lesson = draft.lesson.as_ref().map(ToString::to_string);
    draft.validate().unwrap_or_else(|err| AssessmentQuestion {
        question_html,
        strategy: AnswerStrategy::Invalid(err),
        lesson,
    })
}

impl AssessmentQuestionDraft {
    /// # Errors
    ///
    /// Returns `ConfigError::NoStrategy` or `ConfigError::ConflictingStrategies`
    /// unless exactly one strategy is set, plus any error from that strategy.
    pub fn validate(self) -> Result<AssessmentQuestion, ConfigError> {
        let set = [
            ("choices", self.choices.is_some()),
            ("correctAnswerString", self.correct_answer_string.is_some()),
            ("correctAnswerRegex", self.correct_answer_regex.is_some()),
            ("correctAnswerNumeric", self.correct_answer_numeric.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect::<Vec<_>>();
        if set.len() > 1 {
            return Err(ConfigError::ConflictingStrategies(set.join(", ")));
        }

        let strategy = if let Some(choices) = self.choices {
            resolve_choices(choices)?
        } else if let Some(target) = self.correct_answer_string {
            AnswerStrategy::Text(target)
        } else if let Some(source) = self.correct_answer_regex {
            AnswerStrategy::Pattern(AnswerPattern::parse(&source)?)
        } else if let Some(target) = self.correct_answer_numeric {
            AnswerStrategy::Numeric(target)
        } else {
            return Err(ConfigError::NoStrategy);
        };

        Ok(AssessmentQuestion {
            question_html: self.question_html,
            strategy,
            lesson: self.lesson.map(|lesson| lesson.to_string()),
        })
    }
}

fn resolve_choices(drafts: Vec<AssessmentChoiceDraft>) -> Result<AnswerStrategy, ConfigError> {
    let mut labels = Vec::with_capacity(drafts.len());
    let mut flags = Vec::with_capacity(drafts.len());
    for (position, draft) in drafts.into_iter().enumerate() {
        match draft {
            AssessmentChoiceDraft::Plain(label) => {
                labels.push(label);
                flags.push(false);
            }
            AssessmentChoiceDraft::Wrapped(parts) => match parts.as_slice() {
                [Value::String(marker), Value::String(label)] if marker == CORRECT_MARKER => {
                    labels.push(label.clone());
                    flags.push(true);
                }
                _ => return Err(ConfigError::MalformedChoice(position)),
            },
            AssessmentChoiceDraft::Other(_) => return Err(ConfigError::MalformedChoice(position)),
        }
    }
    let correct_index = single_correct_index(flags)?;
    Ok(AnswerStrategy::Choices {
        labels,
        correct_index,
    })
}

//
// ─── VALIDATED ASSESSMENT ──────────────────────────────────────────────────────
//

/// How a single assessment question decides correctness.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerStrategy {
    Choices {
        labels: Vec<String>,
        correct_index: usize,
    },
    /// Trimmed, case-insensitive equality.
    Text(String),
    Pattern(AnswerPattern),
    /// Within `NUMERIC_TOLERANCE` of the target.
    Numeric(f64),
    /// Misconfigured question; never correct but still counted.
    Invalid(ConfigError),
}

impl AnswerStrategy {
    #[must_use]
    pub fn is_choice(&self) -> bool {
        matches!(self, AnswerStrategy::Choices { .. })
    }

    #[must_use]
    pub fn accepts_choice(&self, selected: Option<usize>) -> bool {
        match self {
            AnswerStrategy::Choices { correct_index, .. } => {
                matcher::matches_choice(selected, *correct_index)
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn accepts_text(&self, input: &str) -> bool {
        match self {
            AnswerStrategy::Choices { .. } | AnswerStrategy::Invalid(_) => false,
            AnswerStrategy::Text(target) => matcher::matches_text(input, target),
            AnswerStrategy::Pattern(pattern) => pattern.matches(input),
            AnswerStrategy::Numeric(target) => matcher::matches_numeric(input, *target),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentQuestion {
    pub question_html: String,
    pub strategy: AnswerStrategy,
    pub lesson: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub preamble: Option<String>,
    pub questions: Vec<AssessmentQuestion>,
    pub form_script: String,
    pub assessment_name: String,
    pub check_answers: bool,
}

impl AssessmentQuestion {
    #[must_use]
    pub fn error(&self) -> Option<&ConfigError> {
        match &self.strategy {
            AnswerStrategy::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl Assessment {
    /// Misconfigured questions with their position.
    pub fn errors(&self) -> impl Iterator<Item = (usize, &ConfigError)> {
        self.questions
            .iter()
            .enumerate()
            .filter_map(|(index, question)| question.error().map(|err| (index, err)))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
