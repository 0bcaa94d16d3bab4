use quiz_core::matcher::matches_choice;
use quiz_core::model::ChoiceGroup;

use super::labels::{ALL_CORRECT_TEXT, NUM_CORRECT_TEXT};

/// State of a group of sub-questions sharing one check action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceGroupVm {
    group: ChoiceGroup,
    selections: Vec<Option<usize>>,
    feedback: String,
    highlighted: bool,
}

impl ChoiceGroupVm {
    #[must_use]
    pub fn new(group: ChoiceGroup) -> Self {
        let selections = vec![None; group.items.len()];
        Self {
            group,
            selections,
            feedback: String::new(),
            highlighted: false,
        }
    }

    /// Any selection clears the highlighting of every sub-question and the
    /// shared feedback.
    pub fn select(&mut self, item: usize, choice: usize) {
        if let Some(slot) = self.selections.get_mut(item) {
            *slot = Some(choice);
        }
        self.highlighted = false;
        self.feedback.clear();
    }

    #[must_use]
    pub fn num_correct(&self) -> usize {
        self.group
            .items
            .iter()
            .zip(&self.selections)
            .filter(|(item, selected)| matches_choice(**selected, item.correct_index))
            .count()
    }

    pub fn check(&mut self) {
        let num_correct = self.num_correct();
        let total = self.group.items.len();
        if num_correct == total {
            self.highlighted = true;
            self.feedback = format!("{ALL_CORRECT_TEXT} {}", self.group.all_correct_output);
        } else {
            self.feedback = format!(
                "{NUM_CORRECT_TEXT}: {num_correct}/{total}.\n\n{}",
                self.group.some_incorrect_output
            );
        }
    }

    #[must_use]
    pub fn group(&self) -> &ChoiceGroup {
        &self.group
    }

    #[must_use]
    pub fn selected(&self, item: usize) -> Option<usize> {
        self.selections.get(item).copied().flatten()
    }

    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Highlighting only ever covers the correct choices, and only when all
    /// sub-questions are right.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}
