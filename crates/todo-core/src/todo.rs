use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a todo by its storage backend.
pub type TodoId = i64;

/// Seconds between the Unix epoch and `0001-01-01T00:00:00Z`.
const UNSET_TIMESTAMP_SECS: i64 = -62_135_596_800;

/// Represents a single todo item.
///
/// Field names on disk are `ID`, `Title`, `Done` and `CreatedTime`, so files
/// written by earlier versions of the tool load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Assigned by storage on create; zero until then
    #[serde(rename = "ID")]
    pub id: TodoId,
    /// Short description, fixed at creation
    #[serde(rename = "Title")]
    pub title: String,
    /// Completion flag. Nothing sets this yet.
    #[serde(rename = "Done", default)]
    pub done: bool,
    /// Creation time. Left unset by the add path.
    #[serde(rename = "CreatedTime", default = "unset_created_time")]
    pub created_time: DateTime<Utc>,
}

impl Todo {
    /// Creates an unsaved todo with the given title.
    ///
    /// The id stays `0` until a storage backend assigns one, `done` is false
    /// and `created_time` is the unset instant.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            done: false,
            created_time: unset_created_time(),
        }
    }

    /// Returns true if `created_time` holds a real timestamp.
    pub fn has_created_time(&self) -> bool {
        self.created_time != unset_created_time()
    }

    /// Human-readable completion status used in listings.
    pub fn status_label(&self) -> &'static str {
        if self.done {
            "Done"
        } else {
            "Not Done"
        }
    }
}

/// The zero instant, `0001-01-01T00:00:00Z`, stored when no creation time was
/// recorded.
pub fn unset_created_time() -> DateTime<Utc> {
    DateTime::from_timestamp(UNSET_TIMESTAMP_SECS, 0).unwrap_or_default()
}
