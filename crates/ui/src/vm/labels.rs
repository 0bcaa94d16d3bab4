pub const CHECK_ANSWER_TEXT: &str = "Check Answer";
pub const CHECK_ANSWERS_TEXT: &str = "Check Answers";
pub const SAVE_ANSWERS_TEXT: &str = "Save Answers";

pub const SELECT_ANSWER_PROMPT: &str = "Please click one of the buttons for your answer.";
pub const ALL_CORRECT_TEXT: &str = "All your answers are correct!";
pub const NUM_CORRECT_TEXT: &str = "Number of questions you answered correctly";

pub const SAVING_TEXT: &str = "Saving...";
pub const SAVED_TEXT: &str = "Your answers have been saved.";

/// Inline style applied to a highlighted correct-choice container.
pub const HIGHLIGHT_STYLE: &str = "background-color: #3BB9FF;";
