mod choice_group;
mod freetext;
mod multiple_choice;

pub use choice_group::ChoiceGroupQuestion;
pub use freetext::FreetextQuestion;
pub use multiple_choice::MultipleChoiceQuestion;
#[cfg(test)]
pub(crate) use multiple_choice::MultipleChoiceBody;

use dioxus::prelude::*;

use super::scripts::focus_element;

/// Move focus to a feedback area once the current event has been handled.
pub(crate) fn focus_feedback(output_id: String) {
    spawn(async move {
        focus_element(&output_id).await;
    });
}

pub(crate) fn is_enter(evt: &KeyboardEvent) -> bool {
    evt.data.key() == Key::Enter
}
