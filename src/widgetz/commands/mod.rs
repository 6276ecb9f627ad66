use crate::error::{Result, WidgetzError};
use crate::model::{Version, Widget, WidgetId};
use axum::http::Uri;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

/// Builds the location references handed back to clients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetPaths {
    base: String,
}

impl WidgetPaths {
    /// `base` is normalized: trailing slashes are dropped and a leading slash
    /// is added when missing. An empty base mounts at the root.
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        let base = if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn widget(&self, id: WidgetId) -> Result<String> {
        validated(format!("{}/widget/{}", self.base, id))
    }

    pub fn collection(&self) -> Result<String> {
        validated(format!("{}/widgets", self.base))
    }
}

fn validated(location: String) -> Result<String> {
    match location.parse::<Uri>() {
        Ok(_) => Ok(location),
        Err(e) => Err(WidgetzError::InvalidLocation(format!("{}: {}", location, e))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What kind of success a command produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Ok,
    Created,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Body {
    #[default]
    Empty,
    One(Widget),
    Many(Vec<Widget>),
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub outcome: Outcome,
    pub body: Body,
    pub location: Option<String>,
    pub version: Option<Version>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn created() -> Self {
        Self {
            outcome: Outcome::Created,
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Sets the body and the version token from a stored widget.
    pub fn with_widget(mut self, widget: Widget) -> Self {
        self.version = widget.version;
        self.body = Body::One(widget);
        self
    }

    pub fn with_widgets(mut self, widgets: Vec<Widget>) -> Self {
        self.body = Body::Many(widgets);
        self
    }

    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    pub fn widget(&self) -> Option<&Widget> {
        match &self.body {
            Body::One(widget) => Some(widget),
            _ => None,
        }
    }

    pub fn widgets(&self) -> &[Widget] {
        match &self.body {
            Body::Many(widgets) => widgets,
            Body::One(widget) => std::slice::from_ref(widget),
            Body::Empty => &[],
        }
    }
}

/// Stored widgets always carry an id; a missing one means the store broke its contract.
pub(crate) fn stored_id(widget: &Widget) -> Result<WidgetId> {
    widget
        .id
        .ok_or_else(|| WidgetzError::Store("Store returned a widget without an id".to_string()))
}
