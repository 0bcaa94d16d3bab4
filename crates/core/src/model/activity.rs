use serde_json::Value;

use crate::error::ConfigError;
use crate::model::question::{Question, QuestionDraft};

/// One resolved element of an activity.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityEntry {
    /// A fully formed markup fragment, inserted as-is.
    Markup(String),
    Question(Question),
    /// An element that could not be resolved. The rest of the activity is
    /// unaffected.
    Invalid(ConfigError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activity {
    entries: Vec<ActivityEntry>,
}

impl Activity {
    /// Resolve raw activity items one by one.
    #[must_use]
    pub fn from_items(items: Vec<Value>) -> Self {
        Self {
            entries: items.into_iter().map(resolve_item).collect(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, ActivityEntry::Question(_)))
            .count()
    }

    /// Entries that failed to resolve, with their position in the activity.
    pub fn errors(&self) -> impl Iterator<Item = (usize, &ConfigError)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| match entry {
                ActivityEntry::Invalid(err) => Some((index, err)),
                _ => None,
            })
    }
}

fn resolve_item(item: Value) -> ActivityEntry {
    match item {
        Value::String(markup) => ActivityEntry::Markup(markup),
        Value::Object(_) => match serde_json::from_value::<QuestionDraft>(item) {
            Ok(draft) => draft
                .validate()
                .map_or_else(ActivityEntry::Invalid, ActivityEntry::Question),
            Err(err) => ActivityEntry::Invalid(ConfigError::Malformed(err.to_string())),
        },
        Value::Null => ActivityEntry::Invalid(ConfigError::NotAQuestion("null")),
        Value::Bool(_) => ActivityEntry::Invalid(ConfigError::NotAQuestion("boolean")),
        Value::Number(_) => ActivityEntry::Invalid(ConfigError::NotAQuestion("number")),
        Value::Array(_) => ActivityEntry::Invalid(ConfigError::NotAQuestion("array")),
    }
}
