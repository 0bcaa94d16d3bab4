#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    SubmissionFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::SubmissionFailed => {
                "Your answers could not be saved. Please try again."
            }
        }
    }
}
