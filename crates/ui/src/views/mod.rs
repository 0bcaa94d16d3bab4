mod activity;
mod assessment;
mod page;
mod questions;
mod scripts;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use activity::ActivityView;
pub use assessment::AssessmentView;
pub use page::{ActivityPage, AssessmentPage, PageView};
pub use questions::{ChoiceGroupQuestion, FreetextQuestion, MultipleChoiceQuestion};
pub use state::ViewError;
