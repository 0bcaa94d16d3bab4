mod assessment_vm;
mod choice_group_vm;
mod freetext_vm;
mod labels;
mod markup_vm;
mod multiple_choice_vm;

pub use assessment_vm::{AssessmentVm, SubmitState, submit_answers};
pub use choice_group_vm::ChoiceGroupVm;
pub use freetext_vm::FreetextVm;
pub use labels::*;
pub use markup_vm::sanitize_markup;
pub use multiple_choice_vm::MultipleChoiceVm;
