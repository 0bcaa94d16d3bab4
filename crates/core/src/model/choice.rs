use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChoiceError {
    #[error("choice list cannot be empty")]
    Empty,

    #[error("no choice is marked correct")]
    NoCorrectChoice,

    #[error("{count} choices are marked correct; exactly one is allowed")]
    MultipleCorrectChoices { count: usize },

    #[error("correct index {index} is out of range for {len} choices")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

/// `[label, isCorrect, feedback]` as written in an activity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChoiceDraft(pub String, pub bool, pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub is_correct: bool,
    pub feedback: String,
}

impl From<ChoiceDraft> for Choice {
    fn from(ChoiceDraft(label, is_correct, feedback): ChoiceDraft) -> Self {
        Self {
            label,
            is_correct,
            feedback,
        }
    }
}

/// Returns the position of the single correct flag.
///
/// # Errors
///
/// Returns `ChoiceError` unless `flags` is non-empty with exactly one `true`.
pub fn single_correct_index(
    flags: impl IntoIterator<Item = bool>,
) -> Result<usize, ChoiceError> {
    let mut len = 0;
    let mut correct = Vec::new();
    for (index, flag) in flags.into_iter().enumerate() {
        len += 1;
        if flag {
            correct.push(index);
        }
    }
    match (len, correct.as_slice()) {
        (0, _) => Err(ChoiceError::Empty),
        (_, []) => Err(ChoiceError::NoCorrectChoice),
        (_, [index]) => Ok(*index),
        (_, many) => Err(ChoiceError::MultipleCorrectChoices { count: many.len() }),
    }
}

/// Checks a declared correct index against the number of choices.
///
/// # Errors
///
/// Returns `ChoiceError::Empty` or `ChoiceError::CorrectIndexOutOfRange`.
pub fn check_correct_index(index: usize, len: usize) -> Result<usize, ChoiceError> {
    if len == 0 {
        return Err(ChoiceError::Empty);
    }
    if index >= len {
        return Err(ChoiceError::CorrectIndexOutOfRange { index, len });
    }
    Ok(index)
}
