use thiserror::Error;

use crate::matcher::PatternError;
use crate::model::ChoiceError;

/// A declarative entry that cannot be turned into a working question.
///
/// Raised while resolving drafts; the renderer abandons that entry and keeps
/// going with the rest of the page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error(
        "unknown question type {0:?}; expected 'multiple choice', 'multiple choice group' or 'freetext'"
    )]
    UnknownQuestionType(String),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("malformed question: {0}")]
    Malformed(String),

    #[error("activity item is a {0}, expected markup or a question object")]
    NotAQuestion(&'static str),

    #[error("malformed choice at position {0}; expected a label or [\"correct\", label]")]
    MalformedChoice(usize),

    #[error("`correctAnswerOutput` and `incorrectAnswerOutput` must be given together")]
    IncompleteFeedback,

    #[error("question has no correctness strategy")]
    NoStrategy,

    #[error("question sets more than one correctness strategy: {0}")]
    ConflictingStrategies(String),

    #[error(transparent)]
    Choices(#[from] ChoiceError),

    #[error(transparent)]
    Pattern(#[from] PatternError),
}
