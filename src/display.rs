//! Renderer-agnostic output of the view engine
//!
//! A [`DisplayDescription`] is plain data. The GUI, the text printer and the
//! JSON/CSV exporters all consume the same value.

use serde::Serialize;

pub const EMPTY_STATE_MESSAGE: &str = "No data available";
pub const NO_GROUP: &str = "No Group";
pub const NO_TITLE: &str = "No Title";
pub const LINK_LABEL: &str = "View";

/// How a field value should be presented
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ValueKind {
    Plain,
    /// Status indicator; `key` is the normalized style key, e.g. `in-progress`
    Status { key: String },
    Priority { key: String },
    /// Clickable reference shown as [`LINK_LABEL`]
    Link,
    Mailto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub label: String,
    pub value: String,
    pub kind: ValueKind,
}

impl Field {
    pub fn plain(label: impl Into<String>, value: impl Into<String>) -> Self {
        Field {
            label: label.into(),
            value: value.into(),
            kind: ValueKind::Plain,
        }
    }

    pub fn status(label: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Field {
            label: label.into(),
            kind: ValueKind::Status { key: status_key(&value) },
            value,
        }
    }

    pub fn priority(label: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Field {
            label: label.into(),
            kind: ValueKind::Priority { key: value.to_lowercase() },
            value,
        }
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Field {
            label: label.into(),
            value: url.into(),
            kind: ValueKind::Link,
        }
    }

    pub fn mailto(label: impl Into<String>, address: impl Into<String>) -> Self {
        Field {
            label: label.into(),
            value: address.into(),
            kind: ValueKind::Mailto,
        }
    }

    /// Text a renderer shows for the value
    pub fn display_text(&self) -> &str {
        match self.kind {
            ValueKind::Link => LINK_LABEL,
            _ => &self.value,
        }
    }

    /// Link target for link and mailto values
    pub fn target(&self) -> Option<String> {
        match self.kind {
            ValueKind::Link => Some(self.value.clone()),
            ValueKind::Mailto => Some(format!("mailto:{}", self.value)),
            _ => None,
        }
    }
}

/// `In Progress` -> `in-progress`
pub fn status_key(value: &str) -> String {
    value.to_lowercase().replace(' ', "-")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardGroup {
    pub key: String,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryCard {
    pub title: String,
    /// Value of the gallery's group-by field, or [`NO_GROUP`]
    pub group: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    pub date: String,
    pub event: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardItem {
    pub title: String,
    pub detail: String,
    pub badge: Option<Field>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DashboardStats {
    pub total_announcements: usize,
    pub pending_tasks: usize,
    pub total_interns: usize,
    pub upcoming_meetings: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardPanel {
    pub title: String,
    pub items: Vec<DashboardItem>,
    /// Shown instead of the items when there are none
    pub empty_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub recent_announcements: DashboardPanel,
    pub open_tasks: DashboardPanel,
    pub upcoming_meetings: DashboardPanel,
    pub stats: DashboardStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum DisplayDescription {
    Empty {
        message: String,
    },
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<Field>>,
    },
    Board {
        group_by: String,
        groups: Vec<BoardGroup>,
    },
    Gallery {
        group_by: String,
        cards: Vec<GalleryCard>,
    },
    Calendar {
        date_field: String,
        entries: Vec<CalendarEntry>,
    },
    Dashboard(DashboardSummary),
}

impl DisplayDescription {
    pub fn empty() -> Self {
        DisplayDescription::Empty {
            message: EMPTY_STATE_MESSAGE.to_string(),
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, DisplayDescription::Empty { .. })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            DisplayDescription::Empty { .. } => "empty",
            DisplayDescription::Table { .. } => "table",
            DisplayDescription::Board { .. } => "board",
            DisplayDescription::Gallery { .. } => "gallery",
            DisplayDescription::Calendar { .. } => "calendar",
            DisplayDescription::Dashboard(_) => "dashboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_key_hyphenates_every_space() {
        assert_eq!(status_key("Not Started"), "not-started");
        assert_eq!(status_key("Waiting On Review"), "waiting-on-review");
        assert_eq!(status_key("Done"), "done");
    }

    #[test]
    fn link_fields_display_as_view() {
        let field = Field::link("Link", "https://example.com");
        assert_eq!(field.display_text(), "View");
        assert_eq!(field.target().as_deref(), Some("https://example.com"));
    }

    #[test]
    fn mailto_target_is_prefixed() {
        let field = Field::mailto("Email", "lisa@freefuse.com");
        assert_eq!(field.display_text(), "lisa@freefuse.com");
        assert_eq!(field.target().as_deref(), Some("mailto:lisa@freefuse.com"));
    }

    #[test]
    fn serializes_with_view_discriminator() {
        let json = serde_json::to_value(DisplayDescription::empty()).unwrap();
        assert_eq!(json["view"], "empty");
        assert_eq!(json["message"], "No data available");
    }
}
