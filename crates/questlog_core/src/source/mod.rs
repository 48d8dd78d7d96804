//! Input boundary: record snapshots and their sources.
//!
//! # Responsibility
//! - Define the snapshot shape the derivation engine consumes.
//! - Decode the store's wire format (record id -> envelope objects) into
//!   typed collections.
//! - Provide a file-backed source for tests and the CLI probe.
//!
//! # Invariants
//! - A snapshot is all-or-nothing: the first failed fetch aborts the batch.
//! - Decoding preserves the document order of each collection.
//! - The HTTP transport to the real store lives outside this crate.

use crate::model::record::{
    Category, JournalEntry, Record, RecordId, Task, TaskDefinition, XpEvent,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type SourceResult<T> = Result<T, SourceError>;

/// Error for snapshot loading and wire decoding.
#[derive(Debug)]
pub enum SourceError {
    /// Reading the snapshot document failed.
    Io { path: PathBuf, source: std::io::Error },
    /// The document is not valid snapshot JSON.
    Decode(serde_json::Error),
    /// A collection value is not the expected id->record object.
    InvalidShape { collection: &'static str },
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read snapshot `{}`: {source}", path.display())
            }
            Self::Decode(err) => write!(f, "invalid snapshot document: {err}"),
            Self::InvalidShape { collection } => {
                write!(f, "collection `{collection}` is not an id->record object")
            }
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode(err) => Some(err),
            Self::InvalidShape { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// One consistent snapshot of the five input collections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub task_definitions: Vec<TaskDefinition>,
    pub categories: Vec<Category>,
    pub xp_events: Vec<XpEvent>,
    pub journal_entries: Vec<JournalEntry>,
}

/// Data source returning full current collections of typed records.
///
/// Implementations fetch whole collections; no pagination, filtering or
/// incremental sync is exposed to the core.
pub trait RecordSource {
    fn fetch_tasks(&self) -> SourceResult<Vec<Task>>;
    fn fetch_task_definitions(&self) -> SourceResult<Vec<TaskDefinition>>;
    fn fetch_categories(&self) -> SourceResult<Vec<Category>>;
    fn fetch_xp_events(&self) -> SourceResult<Vec<XpEvent>>;
    fn fetch_journal_entries(&self) -> SourceResult<Vec<JournalEntry>>;
}

/// Fetches all five collections as one all-or-nothing snapshot.
///
/// The first failing fetch aborts the whole batch; a partially fetched
/// snapshot is never handed to the derivation engine.
pub fn load_snapshot<S: RecordSource>(source: &S) -> SourceResult<Snapshot> {
    Ok(Snapshot {
        tasks: source.fetch_tasks()?,
        task_definitions: source.fetch_task_definitions()?,
        categories: source.fetch_categories()?,
        xp_events: source.fetch_xp_events()?,
        journal_entries: source.fetch_journal_entries()?,
    })
}

// The store's GET-all response omits the record id inside the envelope;
// it arrives as the surrounding object key instead.
#[derive(Deserialize)]
struct WireEnvelope<F> {
    #[serde(rename = "createdat", default)]
    created_at: String,
    #[serde(rename = "updatedat", default)]
    updated_at: Option<String>,
    fields: F,
}

/// Decodes one wire collection (`{ "<id>": { ... } }`) into typed records.
///
/// Document order is preserved.
pub fn decode_collection<F: DeserializeOwned>(json: &str) -> SourceResult<Vec<Record<F>>> {
    let object: Map<String, Value> = serde_json::from_str(json)?;
    decode_entries(object)
}

fn decode_entries<F: DeserializeOwned>(object: Map<String, Value>) -> SourceResult<Vec<Record<F>>> {
    object
        .into_iter()
        .map(|(id, value)| {
            let envelope: WireEnvelope<F> = serde_json::from_value(value)?;
            Ok(Record {
                record_id: RecordId::new(id),
                created_at: envelope.created_at,
                updated_at: envelope.updated_at,
                fields: envelope.fields,
            })
        })
        .collect()
}

/// Snapshot source backed by a single JSON document on disk.
///
/// The document holds the five collections under the keys `tasks`,
/// `task_definitions`, `categories`, `xp_events` and `journal_entries`;
/// a missing key reads as an empty collection.
pub struct FileSnapshotSource {
    document: Map<String, Value>,
}

impl FileSnapshotSource {
    /// Reads and parses the snapshot document once, up front.
    pub fn open(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: Map<String, Value> = serde_json::from_str(&text)?;
        Ok(Self { document })
    }

    fn collection<F: DeserializeOwned>(&self, key: &'static str) -> SourceResult<Vec<Record<F>>> {
        match self.document.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Object(object)) => decode_entries(object.clone()),
            Some(_) => Err(SourceError::InvalidShape { collection: key }),
        }
    }
}

impl RecordSource for FileSnapshotSource {
    fn fetch_tasks(&self) -> SourceResult<Vec<Task>> {
        self.collection("tasks")
    }

    fn fetch_task_definitions(&self) -> SourceResult<Vec<TaskDefinition>> {
        self.collection("task_definitions")
    }

    fn fetch_categories(&self) -> SourceResult<Vec<Category>> {
        self.collection("categories")
    }

    fn fetch_xp_events(&self) -> SourceResult<Vec<XpEvent>> {
        self.collection("xp_events")
    }

    fn fetch_journal_entries(&self) -> SourceResult<Vec<JournalEntry>> {
        self.collection("journal_entries")
    }
}
