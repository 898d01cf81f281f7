//! Storage layer for hrms.
//!
//! A single-writer key-value store of JSON documents backed by `SQLite`.
//! Every collection lives under one key as a whole JSON array and is
//! rewritten in full on each mutation. There is no locking and no version
//! check on the documents: two processes writing the same key concurrently
//! will silently overwrite each other, last write wins.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Storage keys used by the application.
pub mod keys {
    /// Employee collection.
    pub const EMPLOYEES: &str = "employees";
    /// Leave request collection.
    pub const LEAVE_REQUESTS: &str = "leaveRequests";
    /// Leave balance collection.
    pub const LEAVE_BALANCES: &str = "leaveBalances";
    /// Performance review collection.
    pub const PERFORMANCE_REVIEWS: &str = "performanceReviews";
    /// Feedback collection.
    pub const FEEDBACK: &str = "feedback";
    /// The signed-in session user.
    pub const CURRENT_USER: &str = "currentUser";
    /// Prefix of the per-user onboarding state keys.
    pub const ONBOARDING_PREFIX: &str = "hrms_onboarding_state_";

    /// All record collection keys.
    pub const COLLECTIONS: &[&str] = &[
        EMPLOYEES,
        LEAVE_REQUESTS,
        LEAVE_BALANCES,
        PERFORMANCE_REVIEWS,
        FEEDBACK,
    ];
}

/// Persistent document store.
#[derive(Debug)]
pub struct Store {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Store {
    /// Open or create a store at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        migrations::initialize_schema(&conn)?;

        info!("Database opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory store for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw JSON text stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM documents WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Store raw text under `key`, replacing any previous document.
    ///
    /// No JSON validation happens here; a later [`Store::load`] will report
    /// malformed content.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        let updated_at = Utc::now().to_rfc3339();
        self.conn.execute(
            r"
            INSERT INTO documents (key, value, updated_at) VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            ",
            params![key, value, updated_at],
        )?;
        debug!("Wrote {} bytes under '{}'", value.len(), key);
        Ok(())
    }

    /// Load and decode the document under `key`.
    ///
    /// Returns `None` if nothing has been stored there.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails or the stored JSON
    /// does not decode as `T`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| Error::malformed_document(key, source)),
        }
    }

    /// Encode `value` and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database operation fails.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw)
    }

    /// Remove the document under `key`.
    ///
    /// Returns `true` if a document was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM documents WHERE key = ?1", [key])?;
        Ok(affected > 0)
    }

    /// Check whether a document exists under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn contains(&self, key: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM documents WHERE key = ?1",
            [key],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// List stored keys in alphabetical order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM documents ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(keys)
    }

    /// Get store statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn stats(&self) -> Result<StoreStats> {
        let total_documents: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;

        let last_write: Option<String> = self
            .conn
            .query_row(
                "SELECT updated_at FROM documents ORDER BY updated_at DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;
        let last_write = last_write
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        let db_size_bytes = if self.path.to_string_lossy() == ":memory:" {
            0
        } else {
            std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
        };

        Ok(StoreStats {
            total_documents,
            last_write,
            db_size_bytes,
        })
    }
}

/// Statistics about the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of stored documents.
    pub total_documents: i64,
    /// Time of the most recent write.
    pub last_write: Option<DateTime<Utc>>,
    /// Size of the database file in bytes.
    pub db_size_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> Store {
        Store::open_in_memory().expect("failed to create test store")
    }

    #[test]
    fn test_load_missing_key() {
        let store = create_test_store();
        let value: Option<Vec<String>> = store.load("nothing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let store = create_test_store();
        store.save("names", &vec!["a", "b"]).unwrap();

        let value: Option<Vec<String>> = store.load("names").unwrap();
        assert_eq!(value, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_save_overwrites() {
        let store = create_test_store();
        store.save("n", &1).unwrap();
        store.save("n", &2).unwrap();

        assert_eq!(store.load::<i32>("n").unwrap(), Some(2));
        assert_eq!(store.keys().unwrap(), vec!["n".to_string()]);
    }

    #[test]
    fn test_malformed_document_propagates() {
        let store = create_test_store();
        store.put_raw(keys::EMPLOYEES, "{not json").unwrap();

        let err = store.load::<Vec<String>>(keys::EMPLOYEES).unwrap_err();
        assert!(err.is_malformed_document());
        assert!(err.to_string().contains("employees"));
    }

    #[test]
    fn test_remove() {
        let store = create_test_store();
        store.save("k", &true).unwrap();

        assert!(store.contains("k").unwrap());
        assert!(store.remove("k").unwrap());
        assert!(!store.contains("k").unwrap());
        assert!(!store.remove("k").unwrap());
    }

    #[test]
    fn test_stats() {
        let store = create_test_store();
        let stats = store.stats().unwrap();
        assert_eq!(stats.total_documents, 0);
        assert!(stats.last_write.is_none());

        store.save("a", &1).unwrap();
        store.save("b", &2).unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.total_documents, 2);
        assert!(stats.last_write.is_some());
        assert_eq!(stats.db_size_bytes, 0);
    }

    #[test]
    fn test_open_file_based() {
        let db_path = std::env::temp_dir().join(format!("hrms_store_test_{}.db", std::process::id()));

        {
            let store = Store::open(&db_path).unwrap();
            store.save(keys::FEEDBACK, &Vec::<String>::new()).unwrap();
            assert_eq!(store.path(), db_path);
        }

        // Reopening sees the earlier write
        let store = Store::open(&db_path).unwrap();
        assert!(store.contains(keys::FEEDBACK).unwrap());
        assert!(store.stats().unwrap().db_size_bytes > 0);

        drop(store);
        let _ = std::fs::remove_file(&db_path);
        let _ = std::fs::remove_file(db_path.with_extension("db-wal"));
        let _ = std::fs::remove_file(db_path.with_extension("db-shm"));
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let root = std::env::temp_dir().join(format!("hrms_store_dirs_{}", std::process::id()));
        let nested_path = root.join("nested/hrms.db");
        let _ = std::fs::remove_dir_all(&root);

        let store = Store::open(&nested_path).unwrap();
        assert!(nested_path.exists());

        drop(store);
        let _ = std::fs::remove_dir_all(&root);
    }
}
