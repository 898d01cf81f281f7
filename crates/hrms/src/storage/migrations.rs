//! Versioned schema setup for the document store.
//!
//! The version tracked here covers the SQL table layout only. The JSON
//! documents stored inside carry no version of their own.

use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_DOCUMENTS_TABLE, CREATE_DOCUMENTS_UPDATED_INDEX, CREATE_METADATA_TABLE,
};

/// Statements for each schema version, in order. Version N is `MIGRATIONS[N - 1]`.
const MIGRATIONS: &[&[&str]] = &[&[CREATE_DOCUMENTS_TABLE, CREATE_DOCUMENTS_UPDATED_INDEX]];

/// The current schema version.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const CURRENT_VERSION: i32 = MIGRATIONS.len() as i32;

/// Key used to store the schema version in the metadata table.
const VERSION_KEY: &str = "schema_version";

/// Bring the schema up to [`CURRENT_VERSION`].
///
/// Each pending version is applied in its own transaction.
///
/// # Errors
///
/// Returns an error if a statement fails or the database was written by a
/// newer schema than this build knows about.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;

    let version = schema_version(conn)?;
    if version > CURRENT_VERSION {
        return Err(Error::DatabaseMigration {
            message: format!(
                "database schema version {version} is newer than supported version {CURRENT_VERSION}"
            ),
        });
    }

    let applied = usize::try_from(version).unwrap_or(0);
    for (index, statements) in MIGRATIONS.iter().enumerate().skip(applied) {
        let target = i32::try_from(index + 1).map_err(|_| Error::DatabaseMigration {
            message: format!("migration index {index} out of range"),
        })?;
        let tx = conn.unchecked_transaction()?;
        for statement in *statements {
            tx.execute(statement, [])?;
        }
        set_schema_version(&tx, target)?;
        tx.commit()?;
        debug!("Applied schema migration {}", target);
    }

    Ok(())
}

/// Read the schema version. A fresh database reports 0.
fn schema_version(conn: &Connection) -> Result<i32> {
    let value: Option<String> = conn
        .query_row(
            "SELECT value FROM metadata WHERE key = ?1",
            [VERSION_KEY],
            |row| row.get(0),
        )
        .optional()?;

    match value {
        None => Ok(0),
        Some(value) => value.parse().map_err(|_| Error::DatabaseMigration {
            message: format!("invalid schema version: {value}"),
        }),
    }
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
        (VERSION_KEY, version.to_string()),
    )?;
    Ok(())
}
