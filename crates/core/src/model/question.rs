use serde::Deserialize;

use crate::error::ConfigError;
use crate::matcher::AnswerPattern;
use crate::model::choice::{Choice, ChoiceDraft, check_correct_index, single_correct_index};

pub const MULTIPLE_CHOICE: &str = "multiple choice";
pub const MULTIPLE_CHOICE_GROUP: &str = "multiple choice group";
pub const FREETEXT: &str = "freetext";

pub const DEFAULT_SHOW_ANSWER_PROMPT: &str = "Skip and Show Answer";
pub const DEFAULT_OUTPUT_HEIGHT: &str = "50px";

//
// ─── DRAFTS ────────────────────────────────────────────────────────────────────
//

/// A question object as it appears in an activity, before its
/// `questionType` has been resolved.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub question_type: Option<String>,
    pub choices: Option<Vec<ChoiceDraft>>,
    pub questions_list: Option<Vec<GroupItemDraft>>,
    pub all_correct_output: Option<String>,
    pub some_incorrect_output: Option<String>,
    pub correct_answer_regex: Option<String>,
    pub correct_answer_output: Option<String>,
    pub incorrect_answer_output: Option<String>,
    pub show_answer_output: Option<String>,
    pub show_answer_prompt: Option<String>,
    pub output_height: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupItemDraft {
    #[serde(rename = "questionHTML", default)]
    pub question_html: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
}

impl QuestionDraft {
    /// Resolve the discriminator and validate the fields of that variant.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown `questionType`, a missing required
    /// field, an invalid choice list or an invalid regular expression.
    pub fn validate(self) -> Result<Question, ConfigError> {
        let question_type = self
            .question_type
            .clone()
            .ok_or(ConfigError::MissingField("questionType"))?;
        match question_type.as_str() {
            MULTIPLE_CHOICE => self.into_multiple_choice().map(Question::MultipleChoice),
            MULTIPLE_CHOICE_GROUP => self.into_choice_group().map(Question::ChoiceGroup),
            FREETEXT => self.into_freetext().map(Question::Freetext),
            _ => Err(ConfigError::UnknownQuestionType(question_type)),
        }
    }

    fn into_multiple_choice(self) -> Result<MultipleChoice, ConfigError> {
        let choices = self
            .choices
            .ok_or(ConfigError::MissingField("choices"))?
            .into_iter()
            .map(Choice::from)
            .collect::<Vec<_>>();
        let correct_index = single_correct_index(choices.iter().map(|c| c.is_correct))?;
        Ok(MultipleChoice {
            choices,
            correct_index,
        })
    }

    fn into_choice_group(self) -> Result<ChoiceGroup, ConfigError> {
        let drafts = self
            .questions_list
            .ok_or(ConfigError::MissingField("questionsList"))?;
        if drafts.is_empty() {
            return Err(ConfigError::Malformed(
                "`questionsList` cannot be empty".to_string(),
            ));
        }
        let items = drafts
            .into_iter()
            .map(|item| -> Result<GroupItem, ConfigError> {
                let correct_index = check_correct_index(item.correct_index, item.choices.len())?;
                Ok(GroupItem {
                    question_html: item.question_html,
                    choices: item.choices,
                    correct_index,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(ChoiceGroup {
            items,
            all_correct_output: self.all_correct_output.unwrap_or_default(),
            some_incorrect_output: self.some_incorrect_output.unwrap_or_default(),
        })
    }

    fn into_freetext(self) -> Result<Freetext, ConfigError> {
        let check = match (self.correct_answer_output, self.incorrect_answer_output) {
            (Some(correct_output), Some(incorrect_output)) => {
                let source = self
                    .correct_answer_regex
                    .ok_or(ConfigError::MissingField("correctAnswerRegex"))?;
                Some(FreetextCheck {
                    pattern: AnswerPattern::parse(&source)?,
                    correct_output,
                    incorrect_output,
                })
            }
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteFeedback),
        };
        let show_answer = self.show_answer_output.map(|output| ShowAnswer {
            output,
            prompt: self
                .show_answer_prompt
                .unwrap_or_else(|| DEFAULT_SHOW_ANSWER_PROMPT.to_string()),
        });
        Ok(Freetext {
            check,
            show_answer,
            output_height: self
                .output_height
                .unwrap_or_else(|| DEFAULT_OUTPUT_HEIGHT.to_string()),
        })
    }
}

//
// ─── VALIDATED QUESTIONS ───────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum Question {
    MultipleChoice(MultipleChoice),
    ChoiceGroup(ChoiceGroup),
    Freetext(Freetext),
}

impl Question {
    #[must_use]
    pub fn question_type(&self) -> &'static str {
        match self {
            Question::MultipleChoice(_) => MULTIPLE_CHOICE,
            Question::ChoiceGroup(_) => MULTIPLE_CHOICE_GROUP,
            Question::Freetext(_) => FREETEXT,
        }
    }
}

/// One selector group with exactly one correct choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleChoice {
    choices: Vec<Choice>,
    correct_index: usize,
}

impl MultipleChoice {
    /// # Errors
    ///
    /// Returns `ConfigError::Choices` unless exactly one choice is correct.
    pub fn new(choices: Vec<Choice>) -> Result<Self, ConfigError> {
        let correct_index = single_correct_index(choices.iter().map(|c| c.is_correct))?;
        Ok(Self {
            choices,
            correct_index,
        })
    }

    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }
}

/// Several sub-questions sharing one check action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceGroup {
    pub items: Vec<GroupItem>,
    pub all_correct_output: String,
    pub some_incorrect_output: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupItem {
    pub question_html: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Freetext {
    /// `None` when no check action is offered.
    pub check: Option<FreetextCheck>,
    /// `None` when no skip action is offered.
    pub show_answer: Option<ShowAnswer>,
    pub output_height: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FreetextCheck {
    pub pattern: AnswerPattern,
    pub correct_output: String,
    pub incorrect_output: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowAnswer {
    pub output: String,
    pub prompt: String,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
