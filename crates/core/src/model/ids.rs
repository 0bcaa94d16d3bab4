use std::fmt;

/// Unique suffix namespacing the generated element identifiers of one
/// question instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(u64);

impl Tag {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Element id for a role inside this question, e.g. `submit_7`.
    #[must_use]
    pub fn element_id(&self, role: &str) -> String {
        format!("{role}_{}", self.0)
    }

    /// Name shared by the mutually-exclusive inputs of one selector group.
    #[must_use]
    pub fn group_name(&self) -> String {
        format!("q{}", self.0)
    }

    /// Class carried by the container of the correct choice.
    #[must_use]
    pub fn correct_class(&self) -> String {
        format!("correct_{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", self.0)
    }
}
