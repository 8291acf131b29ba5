//! Sections, view modes and the user's current selection

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data_types::ResourceKind;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Table,
    Board,
    Gallery,
    Calendar,
}

impl ViewMode {
    pub fn name(self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Board => "board",
            ViewMode::Gallery => "gallery",
            ViewMode::Calendar => "calendar",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewMode::Table => "Table",
            ViewMode::Board => "Board",
            ViewMode::Gallery => "Gallery",
            ViewMode::Calendar => "Calendar",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "board" => Ok(ViewMode::Board),
            "gallery" => Ok(ViewMode::Gallery),
            "calendar" => Ok(ViewMode::Calendar),
            _ => Err(Error::UnknownViewMode(s.to_string())),
        }
    }
}

/// How a view mode turns records into a display description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Table {
        columns: &'static [&'static str],
    },
    Board {
        group_by: &'static str,
        columns: &'static [&'static str],
    },
    Gallery {
        group_by: &'static str,
        columns: &'static [&'static str],
    },
    Calendar {
        date_field: &'static str,
        columns: &'static [&'static str],
    },
}

impl Projection {
    pub fn mode(&self) -> ViewMode {
        match self {
            Projection::Table { .. } => ViewMode::Table,
            Projection::Board { .. } => ViewMode::Board,
            Projection::Gallery { .. } => ViewMode::Gallery,
            Projection::Calendar { .. } => ViewMode::Calendar,
        }
    }
}

/// Static description of one resource section
#[derive(Debug)]
pub struct SectionLayout {
    pub kind: ResourceKind,
    pub default_mode: ViewMode,
    pub projections: &'static [Projection],
    pub filter_fields: &'static [&'static str],
}

impl SectionLayout {
    pub fn modes(&self) -> impl Iterator<Item = ViewMode> + '_ {
        self.projections.iter().map(Projection::mode)
    }

    pub fn projection(&self, mode: ViewMode) -> Option<&Projection> {
        self.projections.iter().find(|p| p.mode() == mode)
    }

    pub fn supports(&self, mode: ViewMode) -> bool {
        self.projection(mode).is_some()
    }
}

static LAYOUTS: [SectionLayout; 6] = [
    SectionLayout {
        kind: ResourceKind::Announcements,
        default_mode: ViewMode::Table,
        projections: &[
            Projection::Table {
                columns: &["Title", "Publish Date", "Expires", "Status", "Priority", "Summary", "Author"],
            },
            Projection::Board {
                group_by: "Priority",
                columns: &["Title", "Publish Date", "Summary", "Author"],
            },
        ],
        filter_fields: &["Status", "Priority"],
    },
    SectionLayout {
        kind: ResourceKind::Tasks,
        default_mode: ViewMode::Board,
        projections: &[
            Projection::Table {
                columns: &["Task", "Status", "Assignee", "Due", "Category/Tags", "Notes", "Intern"],
            },
            Projection::Board {
                group_by: "Status",
                columns: &["Task", "Due", "Assignee", "Intern"],
            },
            Projection::Calendar {
                date_field: "Due",
                columns: &["Task", "Status", "Assignee"],
            },
        ],
        filter_fields: &["Status", "Assignee"],
    },
    SectionLayout {
        kind: ResourceKind::Resources,
        default_mode: ViewMode::Table,
        projections: &[
            Projection::Table {
                columns: &["Title", "Type", "Summary", "Link", "Owner"],
            },
            Projection::Gallery {
                group_by: "Type",
                columns: &["Title", "Summary", "Link", "Owner"],
            },
        ],
        filter_fields: &["Type"],
    },
    SectionLayout {
        kind: ResourceKind::Meetings,
        default_mode: ViewMode::Calendar,
        projections: &[
            Projection::Table {
                columns: &["Title", "Date", "Attendees", "Decisions", "Action Items"],
            },
            Projection::Calendar {
                date_field: "Date",
                columns: &["Title", "Attendees", "Decisions"],
            },
        ],
        filter_fields: &["Date", "Decisions"],
    },
    SectionLayout {
        kind: ResourceKind::Contacts,
        default_mode: ViewMode::Table,
        projections: &[
            Projection::Table {
                columns: &["Name", "Role", "Area", "Email", "Handle", "Notes"],
            },
            Projection::Gallery {
                group_by: "Area",
                columns: &["Name", "Role", "Email", "Handle"],
            },
        ],
        filter_fields: &["Area"],
    },
    SectionLayout {
        kind: ResourceKind::Interns,
        default_mode: ViewMode::Gallery,
        projections: &[
            Projection::Table {
                columns: &["Name", "Cohort", "Track", "Manager", "Email"],
            },
            Projection::Gallery {
                group_by: "Cohort",
                columns: &["Name", "Track", "Manager", "Email"],
            },
        ],
        filter_fields: &["Cohort", "Track"],
    },
];

pub fn layout(kind: ResourceKind) -> &'static SectionLayout {
    match kind {
        ResourceKind::Announcements => &LAYOUTS[0],
        ResourceKind::Tasks => &LAYOUTS[1],
        ResourceKind::Resources => &LAYOUTS[2],
        ResourceKind::Meetings => &LAYOUTS[3],
        ResourceKind::Contacts => &LAYOUTS[4],
        ResourceKind::Interns => &LAYOUTS[5],
    }
}

/// What the main area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Resource(ResourceKind),
}

impl Section {
    pub fn all() -> impl Iterator<Item = Section> {
        std::iter::once(Section::Dashboard).chain(ResourceKind::ALL.into_iter().map(Section::Resource))
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Resource(kind) => kind.title(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Dashboard => f.write_str("dashboard"),
            Section::Resource(kind) => fmt::Display::fmt(kind, f),
        }
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("dashboard") {
            Ok(Section::Dashboard)
        } else {
            s.parse().map(Section::Resource)
        }
    }
}

/// A single active filter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterValue {
    /// Case-insensitive substring match
    Contains(String),
    /// Exact, case-sensitive equality
    Exact(String),
}

impl FilterValue {
    pub fn as_str(&self) -> &str {
        match self {
            FilterValue::Contains(v) | FilterValue::Exact(v) => v,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            FilterValue::Contains(needle) => value.to_lowercase().contains(&needle.to_lowercase()),
            FilterValue::Exact(expected) => value == expected,
        }
    }
}

pub type Filters = BTreeMap<String, FilterValue>;

/// Parse `Field=value` into its parts
pub fn parse_filter_arg(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(Error::InvalidFilter(arg.to_string())),
    }
}

/// Current section, view mode per section and filters per section.
///
/// Values are never mutated in place: every change returns a new state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    section: Section,
    views: HashMap<ResourceKind, ViewMode>,
    filters: HashMap<ResourceKind, Filters>,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState::default()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Current view mode of `kind`, falling back to the section default
    pub fn view(&self, kind: ResourceKind) -> ViewMode {
        self.views
            .get(&kind)
            .copied()
            .unwrap_or(layout(kind).default_mode)
    }

    pub fn filters(&self, kind: ResourceKind) -> Filters {
        self.filters.get(&kind).cloned().unwrap_or_default()
    }

    pub fn filter(&self, kind: ResourceKind, field: &str) -> Option<&FilterValue> {
        self.filters.get(&kind).and_then(|f| f.get(field))
    }

    pub fn with_section(&self, section: Section) -> Self {
        debug!(%section, "Section selected");
        SelectionState {
            section,
            ..self.clone()
        }
    }

    /// Switch `kind` to `mode`; rejects modes the section doesn't offer
    pub fn with_view(&self, kind: ResourceKind, mode: ViewMode) -> Result<Self> {
        if !layout(kind).supports(mode) {
            return Err(Error::InvalidView { section: kind, mode });
        }
        debug!(section = %kind, %mode, "View selected");
        let mut next = self.clone();
        next.views.insert(kind, mode);
        Ok(next)
    }

    /// Set a filter; an empty value removes it
    pub fn with_filter(&self, kind: ResourceKind, field: impl Into<String>, value: FilterValue) -> Self {
        let field = field.into();
        let mut next = self.clone();
        let filters = next.filters.entry(kind).or_default();
        if value.is_empty() {
            filters.remove(&field);
        } else {
            filters.insert(field, value);
        }
        next
    }

    pub fn without_filters(&self, kind: ResourceKind) -> Self {
        let mut next = self.clone();
        next.filters.remove(&kind);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_section_layouts() {
        let state = SelectionState::new();
        assert_eq!(state.section(), Section::Dashboard);
        assert_eq!(state.view(ResourceKind::Announcements), ViewMode::Table);
        assert_eq!(state.view(ResourceKind::Tasks), ViewMode::Board);
        assert_eq!(state.view(ResourceKind::Resources), ViewMode::Table);
        assert_eq!(state.view(ResourceKind::Meetings), ViewMode::Calendar);
        assert_eq!(state.view(ResourceKind::Contacts), ViewMode::Table);
        assert_eq!(state.view(ResourceKind::Interns), ViewMode::Gallery);
    }

    #[test]
    fn every_default_mode_is_offered() {
        for kind in ResourceKind::ALL {
            let layout = layout(kind);
            assert_eq!(layout.kind, kind);
            assert!(layout.supports(layout.default_mode), "{}", kind);
            assert!(layout.supports(ViewMode::Table), "{}", kind);
        }
    }

    #[test]
    fn unsupported_view_is_rejected() {
        let state = SelectionState::new();
        let err = state
            .with_view(ResourceKind::Contacts, ViewMode::Calendar)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidView { .. }));

        let next = state.with_view(ResourceKind::Tasks, ViewMode::Calendar).unwrap();
        assert_eq!(next.view(ResourceKind::Tasks), ViewMode::Calendar);
        assert_eq!(state.view(ResourceKind::Tasks), ViewMode::Board);
    }

    #[test]
    fn empty_filter_value_clears_the_field() {
        let state = SelectionState::new()
            .with_filter(ResourceKind::Tasks, "Status", FilterValue::Contains("done".into()));
        assert_eq!(state.filters(ResourceKind::Tasks).len(), 1);

        let cleared = state.with_filter(ResourceKind::Tasks, "Status", FilterValue::Contains(String::new()));
        assert!(cleared.filters(ResourceKind::Tasks).is_empty());
    }

    #[test]
    fn section_parses_dashboard_and_resources() {
        assert_eq!("dashboard".parse::<Section>().unwrap(), Section::Dashboard);
        assert_eq!(
            "meetings".parse::<Section>().unwrap(),
            Section::Resource(ResourceKind::Meetings)
        );
        assert_eq!(Section::all().count(), 7);
    }

    #[test]
    fn filter_arguments_split_on_first_equals() {
        assert_eq!(
            parse_filter_arg("Notes=a=b").unwrap(),
            ("Notes".to_string(), "a=b".to_string())
        );
        assert!(parse_filter_arg("=x").is_err());
        assert!(parse_filter_arg("Status").is_err());
    }
}
