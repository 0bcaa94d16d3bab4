use quiz_core::model::MultipleChoice;

use super::labels::SELECT_ANSWER_PROMPT;

/// State of one single-answer multiple-choice widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipleChoiceVm {
    question: MultipleChoice,
    selected: Option<usize>,
    feedback: String,
    highlighted: bool,
}

impl MultipleChoiceVm {
    #[must_use]
    pub fn new(question: MultipleChoice) -> Self {
        Self {
            question,
            selected: None,
            feedback: String::new(),
            highlighted: false,
        }
    }

    /// Selecting any option clears highlighting and feedback.
    pub fn select(&mut self, index: usize) {
        if index < self.question.choices().len() {
            self.selected = Some(index);
        }
        self.highlighted = false;
        self.feedback.clear();
    }

    pub fn check(&mut self) {
        match self.selected {
            None => self.feedback = SELECT_ANSWER_PROMPT.to_string(),
            Some(index) => {
                let choice = &self.question.choices()[index];
                self.feedback = choice.feedback.clone();
                if index == self.question.correct_index() {
                    self.highlighted = true;
                }
            }
        }
    }

    #[must_use]
    pub fn question(&self) -> &MultipleChoice {
        &self.question
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}
