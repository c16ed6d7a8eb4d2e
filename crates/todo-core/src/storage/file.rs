use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::todo::{Todo, TodoId};

use super::collection::TodoCollection;
use super::error::StorageError;
use super::Storage;

/// File-backed storage.
///
/// Keeps the collection in memory and rewrites the whole backing file after
/// every create or delete:
/// ```text
/// todos.json
/// [
///   {
///     "ID": 1,
///     "Title": "buy milk",
///     "Done": false,
///     "CreatedTime": "0001-01-01T00:00:00Z"
///   }
/// ]
/// ```
/// The next id is not persisted; it is recomputed from the highest id in the
/// file when the store is opened.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    inner: Mutex<TodoCollection>,
}

impl FileStorage {
    /// Opens a store backed by `path`, loading any existing todos.
    ///
    /// A missing file starts an empty store; the file is created on the first
    /// write. Any other read or decode failure is returned.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let collection = match Self::load(&path)? {
            Some(todos) => TodoCollection::from_todos(todos),
            None => {
                debug!(path = %path.display(), "todo file does not exist yet, starting empty");
                TodoCollection::default()
            }
        };

        info!(
            path = %path.display(),
            count = collection.len(),
            last_id = collection.last_id(),
            "opened todo file"
        );

        Ok(Self {
            path,
            inner: Mutex::new(collection),
        })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the backing file. `Ok(None)` means it does not exist.
    fn load(path: &Path) -> Result<Option<Vec<Todo>>, StorageError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(path, e)),
        };

        // A `null` document is an empty list.
        let todos: Option<Vec<Todo>> = serde_json::from_str(&json)?;
        Ok(Some(todos.unwrap_or_default()))
    }

    /// Overwrites the backing file with the full collection.
    fn save(&self, collection: &TodoCollection) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
            }
        }

        let mut json = serde_json::to_string_pretty(collection.todos())?;
        json.push('\n');
        fs::write(&self.path, json).map_err(|e| StorageError::io(&self.path, e))?;

        debug!(path = %self.path.display(), count = collection.len(), "wrote todo file");
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, TodoCollection>, StorageError> {
        self.inner.lock().map_err(|_| StorageError::LockPoisoned)
    }
}

impl Storage for FileStorage {
    fn create(&self, todo: Todo) -> Result<Todo, StorageError> {
        let mut collection = self.lock()?;
        let stored = collection.insert(todo)?;

        // The record stays in memory even if the write fails.
        if let Err(e) = self.save(&collection) {
            warn!(id = stored.id, error = %e, "failed to persist created todo");
            return Err(e);
        }

        debug!(id = stored.id, "created todo");
        Ok(stored)
    }

    fn list(&self) -> Result<Vec<Todo>, StorageError> {
        let collection = self.lock()?;
        Ok(collection.todos().to_vec())
    }

    fn delete(&self, id: TodoId) -> Result<(), StorageError> {
        let mut collection = self.lock()?;
        collection.remove(id)?;

        if let Err(e) = self.save(&collection) {
            warn!(id, error = %e, "failed to persist todo deletion");
            return Err(e);
        }

        debug!(id, "deleted todo");
        Ok(())
    }
}
