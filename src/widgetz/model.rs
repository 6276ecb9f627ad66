use serde::{Deserialize, Serialize};

pub type WidgetId = u64;
pub type Version = u64;

/// A stored widget.
///
/// `id` and `version` are `None` only on values that have not been through the
/// store yet; everything a [`crate::store::DataStore`] hands back has both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    pub id: Option<WidgetId>,
    pub name: String,
    pub description: String,
    pub version: Option<Version>,
}

impl Widget {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            version: None,
        }
    }

    pub fn from_draft(draft: WidgetDraft) -> Self {
        Self::new(draft.name, draft.description)
    }
}

/// The client-supplied part of a widget.
///
/// Any `id` or `version` present in the request body is dropped on
/// deserialization: identity belongs to the store and versions to the
/// versioning policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl WidgetDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Result of a single-record lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Widget),
    Absent,
}

impl Lookup {
    pub fn found(self) -> Option<Widget> {
        match self {
            Lookup::Found(widget) => Some(widget),
            Lookup::Absent => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}
