//! # Todo Store
//!
//! Durable CRUD over todo records in a single-file redb database at
//! `~/.todoer/todoer.db`.
//!
//! ```text
//! todoer.db
//! ├── todos       "1" → {"ID":1,...}, "2" → {...}, ...
//! └── sequences   "todos" → last assigned ID
//! ```
//!
//! Every public method is exactly one transaction. Write transactions that
//! return early with an error are dropped uncommitted, so nothing partial is
//! ever visible.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use redb::{Database, ReadableTable, TableDefinition};
use thiserror::Error;

use crate::core::todo::{Todo, key_for};

/// Directory under the user's home holding the database, config and log.
pub const DATA_DIR: &str = ".todoer";
pub const DB_NAME: &str = "todoer.db";

const TODOS: TableDefinition<&str, &str> = TableDefinition::new("todos");
const SEQUENCES: TableDefinition<&str, u64> = TableDefinition::new("sequences");
const TODOS_SEQUENCE: &str = "todos";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not get home dir")]
    NoHomeDir,
    #[error("could not create db dir {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("could not restrict permissions on {}: {source}", path.display())]
    Permissions { path: PathBuf, source: io::Error },
    #[error("could not open db: {0}")]
    Open(#[from] redb::DatabaseError),
    #[error("transaction failed: {0}")]
    Transaction(#[from] redb::TransactionError),
    #[error("could not open table: {0}")]
    Table(#[from] redb::TableError),
    #[error("storage error: {0}")]
    Storage(#[from] redb::StorageError),
    #[error("commit failed: {0}")]
    Commit(#[from] redb::CommitError),
    #[error("todo {0} not found")]
    NotFound(u64),
    #[error("could not encode todo: {0}")]
    Encode(serde_json::Error),
    /// `partial` holds the records decoded before the bad one (only filled
    /// by `list_all`).
    #[error("could not decode todo {key}: {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
        partial: Vec<Todo>,
    },
}

/// Returns `~/.todoer/`, creating it if needed.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    let dir = home.join(DATA_DIR);
    fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

pub struct Store {
    db: Database,
    path: PathBuf,
}

impl Store {
    /// Open (or create) the database at `path` and make sure both tables exist.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        restrict_permissions(path)?;
        let db = Database::create(path)?;

        let txn = db.begin_write()?;
        {
            let _todos = txn.open_table(TODOS)?;
            let _sequences = txn.open_table(SEQUENCES)?;
        }
        txn.commit()?;

        info!("Opened todo store at {}", path.display());
        Ok(Self {
            db,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a new, incomplete todo. Returns the ID it was stored under.
    pub fn add(&self, text: &str) -> Result<u64, StoreError> {
        let txn = self.db.begin_write()?;
        let id = {
            let mut sequences = txn.open_table(SEQUENCES)?;
            let id = sequences
                .get(TODOS_SEQUENCE)?
                .map(|last| last.value())
                .unwrap_or(0)
                + 1;
            sequences.insert(TODOS_SEQUENCE, id)?;

            let todo = Todo::new(id, text);
            let json = serde_json::to_string(&todo).map_err(StoreError::Encode)?;
            let mut todos = txn.open_table(TODOS)?;
            todos.insert(todo.key().as_str(), json.as_str())?;
            id
        };
        txn.commit()?;

        debug!("Added todo {}", id);
        Ok(id)
    }

    /// All todos, in creation order.
    ///
    /// Keys iterate lexicographically ("1", "10", "2"), so the result is
    /// re-sorted by numeric ID. The first record that fails to decode aborts
    /// the scan; the records read before it come back in `Decode::partial`.
    pub fn list_all(&self) -> Result<Vec<Todo>, StoreError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(TODOS)?;

        let mut todos = Vec::new();
        for entry in table.iter()? {
            let (key, value) = entry?;
            match decode(key.value(), value.value()) {
                Ok(todo) => todos.push(todo),
                Err(StoreError::Decode {
                    key: bad_key,
                    source,
                    ..
                }) => {
                    todos.sort_by_key(|todo| todo.id);
                    return Err(StoreError::Decode {
                        key: bad_key,
                        source,
                        partial: todos,
                    });
                }
                Err(e) => return Err(e),
            }
        }
        todos.sort_by_key(|todo| todo.id);

        debug!("Listed {} todos", todos.len());
        Ok(todos)
    }

    /// Flip a todo to completed. Already-completed todos stay completed.
    pub fn mark_completed(&self, id: u64) -> Result<(), StoreError> {
        self.mark_completed_many(&[id])
    }

    /// Flip several todos to completed in one transaction. If any ID is
    /// missing, none of them change.
    pub fn mark_completed_many(&self, ids: &[u64]) -> Result<(), StoreError> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(TODOS)?;
            for &id in ids {
                let key = key_for(id);
                let mut todo = match table.get(key.as_str())? {
                    Some(value) => decode(&key, value.value())?,
                    None => return Err(StoreError::NotFound(id)),
                };
                todo.completed = true;
                let json = serde_json::to_string(&todo).map_err(StoreError::Encode)?;
                table.insert(key.as_str(), json.as_str())?;
            }
        }
        txn.commit()?;

        debug!("Marked todos {:?} completed", ids);
        Ok(())
    }

    /// Remove every completed todo. Returns how many were removed.
    pub fn delete_completed(&self) -> Result<usize, StoreError> {
        let txn = self.db.begin_write()?;
        let count = {
            let mut table = txn.open_table(TODOS)?;

            // Collect first, then remove: never mutate the table mid-iteration.
            let mut completed = Vec::new();
            for entry in table.iter()? {
                let (key, value) = entry?;
                if decode(key.value(), value.value())?.completed {
                    completed.push(key.value().to_string());
                }
            }
            for key in &completed {
                table.remove(key.as_str())?;
            }
            completed.len()
        };
        txn.commit()?;

        debug!("Deleted {} completed todos", count);
        Ok(count)
    }
}

fn decode(key: &str, value: &str) -> Result<Todo, StoreError> {
    serde_json::from_str(value).map_err(|source| StoreError::Decode {
        key: key.to_string(),
        source,
        partial: Vec::new(),
    })
}

/// Create the file owner-only before redb touches it, and tighten an
/// existing file that was created with looser permissions.
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let permissions_error = |source: io::Error| StoreError::Permissions {
        path: path.to_path_buf(),
        source,
    };

    fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .mode(0o600)
        .open(path)
        .map_err(permissions_error)?;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(permissions_error)
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}
