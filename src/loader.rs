//! Loads every configured resource into a [`Dataset`]

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::csv_handler::CSVHandler;
use crate::data_types::{Dataset, Record, ResourceKind, ResourceSource};
use crate::error::Result;
use crate::sample_data::sample_records;

/// How a resource slot was filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Parsed,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct DataLoader {
    sources: Vec<ResourceSource>,
    handler: CSVHandler,
}

impl DataLoader {
    pub fn new(sources: Vec<ResourceSource>) -> Self {
        DataLoader {
            sources,
            handler: CSVHandler::new(),
        }
    }

    pub fn with_handler(mut self, handler: CSVHandler) -> Self {
        self.handler = handler;
        self
    }

    /// Read all sources concurrently. Never fails: a resource that can't be
    /// read is replaced by its sample rows. Returns once every source has
    /// resolved.
    pub async fn load(&self) -> Dataset {
        self.load_with_outcomes().await.0
    }

    pub async fn load_with_outcomes(&self) -> (Dataset, Vec<(ResourceKind, LoadOutcome)>) {
        let handles: Vec<(ResourceKind, JoinHandle<(Vec<Record>, LoadOutcome)>)> = self
            .sources
            .iter()
            .cloned()
            .map(|source| {
                let handler = self.handler;
                let kind = source.kind;
                (kind, tokio::spawn(load_one(handler, source)))
            })
            .collect();

        let mut dataset = Dataset::empty();
        let mut outcomes = Vec::with_capacity(handles.len());

        for (kind, handle) in handles {
            let (records, outcome) = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    warn!(resource = %kind, "Load task failed, using sample data: {}", e);
                    (sample_records(kind), LoadOutcome::Fallback)
                }
            };
            dataset.insert(kind, records);
            outcomes.push((kind, outcome));
        }

        let counts: Vec<String> = ResourceKind::ALL
            .iter()
            .filter(|kind| dataset.contains(**kind))
            .map(|kind| format!("{}={}", kind, dataset.records(*kind).len()))
            .collect();
        info!("All data loaded: {}", counts.join(" "));

        (dataset, outcomes)
    }
}

async fn load_one(handler: CSVHandler, source: ResourceSource) -> (Vec<Record>, LoadOutcome) {
    let kind = source.kind;
    let path = source.path.clone();
    match handler.read_resource(source.path).await {
        Ok(table) => (table.records, LoadOutcome::Parsed),
        Err(e) => {
            warn!(resource = %kind, path = %path.display(), "Could not load, using sample data: {}", e);
            (sample_records(kind), LoadOutcome::Fallback)
        }
    }
}

/// Run the whole load on its own task. Faults outside per-resource handling
/// surface as [`crate::Error::Initialization`].
pub async fn bootstrap(loader: DataLoader) -> Result<Dataset> {
    tokio::spawn(async move { loader.load().await })
        .await
        .map_err(|e| crate::Error::Initialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[tokio::test]
    async fn missing_file_falls_back_to_samples() {
        let dir = tempfile::tempdir().unwrap();
        let loader = DataLoader::new(vec![ResourceSource::new(
            dir.path().join("meeting_notes.csv"),
            ResourceKind::Meetings,
        )]);

        let (dataset, outcomes) = loader.load_with_outcomes().await;

        assert_eq!(outcomes, vec![(ResourceKind::Meetings, LoadOutcome::Fallback)]);
        assert_eq!(
            dataset.records(ResourceKind::Meetings),
            sample_records(ResourceKind::Meetings).as_slice()
        );
    }

    #[tokio::test]
    async fn each_resource_resolves_independently() {
        let dir = tempfile::tempdir().unwrap();
        let tasks_path = dir.path().join("tasks.csv");
        fs::write(&tasks_path, "Task,Status\nWrite docs,Done\n").unwrap();

        let loader = DataLoader::new(vec![
            ResourceSource::new(&tasks_path, ResourceKind::Tasks),
            ResourceSource::new(dir.path().join("missing.csv"), ResourceKind::Interns),
        ]);

        let (dataset, outcomes) = loader.load_with_outcomes().await;

        assert_eq!(
            outcomes,
            vec![
                (ResourceKind::Tasks, LoadOutcome::Parsed),
                (ResourceKind::Interns, LoadOutcome::Fallback),
            ]
        );
        assert_eq!(dataset.records(ResourceKind::Tasks).len(), 1);
        assert_eq!(dataset.records(ResourceKind::Tasks)[0].get("Task"), "Write docs");
        assert_eq!(dataset.records(ResourceKind::Interns).len(), 3);
    }

    #[tokio::test]
    async fn empty_file_is_parsed_not_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.csv");
        fs::write(&path, "").unwrap();

        let loader = DataLoader::new(vec![ResourceSource::new(&path, ResourceKind::Contacts)]);
        let dataset = bootstrap(loader).await.unwrap();

        assert!(dataset.contains(ResourceKind::Contacts));
        assert!(dataset.records(ResourceKind::Contacts).is_empty());
    }
}
