mod activity;
mod assessment;
mod choice;
mod ids;
mod page;
pub mod question;

pub use ids::Tag;

pub use activity::{Activity, ActivityEntry};
pub use assessment::{
    AnswerStrategy, Assessment, AssessmentChoiceDraft, AssessmentDraft, AssessmentError,
    AssessmentQuestion, AssessmentQuestionDraft, CORRECT_MARKER, DEFAULT_ASSESSMENT_NAME,
    DEFAULT_FORM_SCRIPT, LessonRef,
};
pub use choice::{Choice, ChoiceDraft, ChoiceError, check_correct_index, single_correct_index};
pub use page::{PageContent, PageError};
pub use question::{
    ChoiceGroup, Freetext, FreetextCheck, GroupItem, GroupItemDraft, MultipleChoice, Question,
    QuestionDraft, ShowAnswer,
};
