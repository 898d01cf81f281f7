//! `SQLite` schema definitions for the document store.

/// SQL statement to create the metadata table for the store's own bookkeeping.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// SQL statement to create the documents table.
///
/// One row per storage key; `value` holds a whole JSON document.
pub const CREATE_DOCUMENTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS documents (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
)
";

/// SQL statement to index documents by last write.
pub const CREATE_DOCUMENTS_UPDATED_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_documents_updated_at ON documents(updated_at DESC)
";
