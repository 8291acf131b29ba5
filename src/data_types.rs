// src/data_types.rs
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The six record collections the dashboard knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Announcements,
    Tasks,
    Resources,
    Meetings,
    Contacts,
    Interns,
}

impl ResourceKind {
    /// Navigation order
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Announcements,
        ResourceKind::Tasks,
        ResourceKind::Resources,
        ResourceKind::Meetings,
        ResourceKind::Contacts,
        ResourceKind::Interns,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Announcements => "announcements",
            ResourceKind::Tasks => "tasks",
            ResourceKind::Resources => "resources",
            ResourceKind::Meetings => "meetings",
            ResourceKind::Contacts => "contacts",
            ResourceKind::Interns => "interns",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::Announcements => "Announcements",
            ResourceKind::Tasks => "Tasks",
            ResourceKind::Resources => "Resources",
            ResourceKind::Meetings => "Meetings",
            ResourceKind::Contacts => "Contacts",
            ResourceKind::Interns => "Interns",
        }
    }

    /// File name under the data directory when no override is configured
    pub fn default_file_name(self) -> &'static str {
        match self {
            ResourceKind::Announcements => "announcements.csv",
            ResourceKind::Tasks => "onboarding_checklist.csv",
            ResourceKind::Resources => "resources_library.csv",
            ResourceKind::Meetings => "meeting_notes.csv",
            ResourceKind::Contacts => "contacts_stakeholders.csv",
            ResourceKind::Interns => "intern_directory.csv",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

/// One row of a resource. Lookups of absent fields yield an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Record {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of `field`, or `""` when the record has no such column
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    /// Value of `field` distinguishing absence from an empty value
    pub fn value(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Non-empty value of `field`
    pub fn non_empty(&self, field: &str) -> Option<&str> {
        self.value(field).filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Where one resource is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSource {
    pub path: PathBuf,
    pub kind: ResourceKind,
}

impl ResourceSource {
    pub fn new(path: impl Into<PathBuf>, kind: ResourceKind) -> Self {
        ResourceSource {
            path: path.into(),
            kind,
        }
    }
}

/// The records of every loaded resource. Built once per load.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    collections: HashMap<ResourceKind, Vec<Record>>,
}

impl Dataset {
    pub fn empty() -> Self {
        Dataset::default()
    }

    pub fn insert(&mut self, kind: ResourceKind, records: Vec<Record>) {
        self.collections.insert(kind, records);
    }

    /// Records of `kind` in source order; empty if it was never loaded
    pub fn records(&self, kind: ResourceKind) -> &[Record] {
        self.collections
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, kind: ResourceKind) -> bool {
        self.collections.contains_key(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_reads_as_empty_string() {
        let record = Record::from_pairs([("Title", "Welcome")]);
        assert_eq!(record.get("Title"), "Welcome");
        assert_eq!(record.get("Summary"), "");
        assert_eq!(record.value("Summary"), None);
    }

    #[test]
    fn non_empty_skips_blank_values() {
        let record = Record::from_pairs([("Link", ""), ("Email", "a@b.c")]);
        assert_eq!(record.non_empty("Link"), None);
        assert_eq!(record.non_empty("Email"), Some("a@b.c"));
    }

    #[test]
    fn resource_kind_parses_case_insensitively() {
        assert_eq!("Tasks".parse::<ResourceKind>().unwrap(), ResourceKind::Tasks);
        assert!(matches!(
            "payroll".parse::<ResourceKind>(),
            Err(Error::UnknownSection(_))
        ));
    }

    #[test]
    fn unloaded_resource_is_empty_slice() {
        let dataset = Dataset::empty();
        assert!(dataset.records(ResourceKind::Interns).is_empty());
        assert!(!dataset.contains(ResourceKind::Interns));
    }
}
