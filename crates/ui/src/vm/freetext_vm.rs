use quiz_core::model::Freetext;

/// State of a freetext widget.
#[derive(Clone, Debug, PartialEq)]
pub struct FreetextVm {
    question: Freetext,
    input: String,
    feedback: String,
}

impl FreetextVm {
    #[must_use]
    pub fn new(question: Freetext) -> Self {
        Self {
            question,
            input: String::new(),
            feedback: String::new(),
        }
    }

    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    /// Focusing the text input clears feedback.
    pub fn clear_feedback(&mut self) {
        self.feedback.clear();
    }

    /// No-op when the question offers no check action.
    pub fn check(&mut self) {
        if let Some(check) = &self.question.check {
            self.feedback = if check.pattern.matches(&self.input) {
                check.correct_output.clone()
            } else {
                check.incorrect_output.clone()
            };
        }
    }

    /// Shows the answer whatever was typed.
    pub fn reveal(&mut self) {
        if let Some(show) = &self.question.show_answer {
            self.feedback = show.output.clone();
        }
    }

    #[must_use]
    pub fn has_check(&self) -> bool {
        self.question.check.is_some()
    }

    #[must_use]
    pub fn show_answer_prompt(&self) -> Option<&str> {
        self.question.show_answer.as_ref().map(|show| show.prompt.as_str())
    }

    #[must_use]
    pub fn output_height(&self) -> &str {
        &self.question.output_height
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}
