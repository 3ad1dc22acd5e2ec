/*!
 * Repository layer for database operations.
 *
 * This module provides a high-level API for the event table,
 * abstracting away the SQL details and providing type-safe access.
 */

use anyhow::{Context, Result};
use log::{debug, info, trace};
use rusqlite::{params, OptionalExtension, Row};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::connection::DatabaseConnection;
use super::models::EventRecord;
use crate::errors::StorageError;
use crate::localization_store::{DEFAULT_LANGUAGE_ID, LocalizationStore};

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    /// Database connection
    db: DatabaseConnection,
}

fn parse_event_row(row: &Row) -> rusqlite::Result<EventRecord> {
    Ok(EventRecord {
        uid: row.get(0)?,
        sys_language_uid: row.get(1)?,
        l10n_parent: row.get(2)?,
        title: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl Repository {
    /// Create a new repository with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a repository with the default database location
    pub fn new_default() -> Result<Self> {
        let db = DatabaseConnection::new_default()?;
        Ok(Self::new(db))
    }

    /// Create a repository with an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let db = DatabaseConnection::new_in_memory()?;
        Ok(Self::new(db))
    }

    /// The underlying connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    // =========================================================================
    // Event Operations
    // =========================================================================

    /// Insert a single event row
    pub fn insert_event(&self, event: &EventRecord) -> Result<()> {
        self.db.execute(|conn| {
            conn.execute(
                r#"
                INSERT INTO events (uid, sys_language_uid, l10n_parent, title, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![
                    event.uid,
                    event.sys_language_uid,
                    event.l10n_parent,
                    event.title,
                    event.created_at,
                ],
            )
            .with_context(|| format!("Failed to insert event {}", event.uid))?;
            Ok(())
        })
    }

    /// Insert event rows (batch insert, all or nothing)
    pub fn insert_events(&self, events: &[EventRecord]) -> Result<usize> {
        debug!("Inserting {} event rows", events.len());

        self.db.transaction(|tx| {
            for event in events {
                tx.execute(
                    r#"
                    INSERT INTO events (uid, sys_language_uid, l10n_parent, title, created_at)
                    VALUES (?1, ?2, ?3, ?4, ?5)
                    "#,
                    params![
                        event.uid,
                        event.sys_language_uid,
                        event.l10n_parent,
                        event.title,
                        event.created_at,
                    ],
                )
                .with_context(|| format!("Failed to insert event {}", event.uid))?;
            }
            Ok(events.len())
        })
    }

    /// Import event rows from a JSON array file
    pub fn import_from_json<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open event file: {:?}", path))?;

        let events: Vec<EventRecord> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse event file: {:?}", path))?;

        let imported = self.insert_events(&events)?;
        info!("Imported {} event rows from {:?}", imported, path);
        Ok(imported)
    }

    /// Get an event row by uid
    pub fn get_event(&self, uid: i64) -> Result<Option<EventRecord>> {
        self.db.execute(|conn| {
            let result = conn
                .query_row(
                    r#"
                    SELECT uid, sys_language_uid, l10n_parent, title, created_at
                    FROM events WHERE uid = ?1
                    "#,
                    [uid],
                    parse_event_row,
                )
                .optional()?;

            Ok(result)
        })
    }

    /// List all event rows ordered by uid
    pub fn list_events(&self) -> Result<Vec<EventRecord>> {
        self.db.execute(|conn| {
            let mut stmt = conn.prepare(
                r#"
                SELECT uid, sys_language_uid, l10n_parent, title, created_at
                FROM events
                ORDER BY uid
                "#,
            )?;

            let events = stmt
                .query_map([], parse_event_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(events)
        })
    }

    /// Count rows that make `event_uid` available under `language_id`
    pub fn count_matching(&self, event_uid: i64, language_id: i64) -> Result<i64> {
        self.db.execute(|conn| {
            let count: i64 = if language_id == DEFAULT_LANGUAGE_ID {
                conn.query_row(
                    r#"
                    SELECT COUNT(uid) FROM events
                    WHERE (sys_language_uid = ?2 OR sys_language_uid = -1)
                      AND uid = ?1
                    "#,
                    params![event_uid, language_id],
                    |row| row.get(0),
                )?
            } else {
                conn.query_row(
                    r#"
                    SELECT COUNT(uid) FROM events
                    WHERE (sys_language_uid = -1 AND uid = ?1)
                       OR (l10n_parent = ?1 AND sys_language_uid = ?2)
                       OR (uid = ?1 AND l10n_parent = 0 AND sys_language_uid = ?2)
                    "#,
                    params![event_uid, language_id],
                    |row| row.get(0),
                )?
            };

            Ok(count)
        })
    }
}

impl LocalizationStore for Repository {
    fn is_available(&self, event_uid: i64, language_id: i64) -> Result<bool, StorageError> {
        let count = self.count_matching(event_uid, language_id)?;

        trace!(
            "Found {} row(s) for event {} in language {}",
            count, event_uid, language_id
        );
        Ok(count > 0)
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.db.path())
            .finish()
    }
}
