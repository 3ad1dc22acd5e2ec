/*!
 * Localization store contract.
 *
 * A localization store answers one question: does an event have a row that
 * may be shown under a given language? The row predicate lives here so every
 * store implementation (in-memory, SQLite) answers it identically.
 */

use log::trace;

use crate::database::models::EventRecord;
use crate::errors::StorageError;

/// Language id of the default (source) language
pub const DEFAULT_LANGUAGE_ID: i64 = 0;

/// Language id marking a row as valid for all languages
pub const ALL_LANGUAGES_ID: i64 = -1;

/// `l10n_parent` value of a row that is its own source
pub const NO_L10N_PARENT: i64 = 0;

/// Existence lookup for localized event rows
pub trait LocalizationStore {
    /// Whether a row of `event_uid` may be shown under `language_id`
    ///
    /// A nonexistent event is simply not available; only infrastructure
    /// failures produce an error.
    fn is_available(&self, event_uid: i64, language_id: i64) -> Result<bool, StorageError>;
}

impl<S: LocalizationStore + ?Sized> LocalizationStore for &S {
    fn is_available(&self, event_uid: i64, language_id: i64) -> Result<bool, StorageError> {
        (**self).is_available(event_uid, language_id)
    }
}

/// Whether a single row makes `event_uid` available under `language_id`
pub fn row_satisfies(row: &EventRecord, event_uid: i64, language_id: i64) -> bool {
    if language_id == DEFAULT_LANGUAGE_ID {
        return row.uid == event_uid
            && (row.sys_language_uid == DEFAULT_LANGUAGE_ID
                || row.sys_language_uid == ALL_LANGUAGES_ID);
    }

    let all_languages_row = row.uid == event_uid && row.sys_language_uid == ALL_LANGUAGES_ID;
    let localized_child = row.l10n_parent == event_uid && row.sys_language_uid == language_id;
    // Legacy shape: a source row already tagged with the target language
    let self_sourced_row = row.uid == event_uid
        && row.l10n_parent == NO_L10N_PARENT
        && row.sys_language_uid == language_id;

    all_languages_row || localized_child || self_sourced_row
}

/// Localization store backed by a plain list of rows
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocalizationStore {
    rows: Vec<EventRecord>,
}

impl InMemoryLocalizationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given rows
    pub fn with_rows(rows: Vec<EventRecord>) -> Self {
        Self { rows }
    }

    /// Add a row
    pub fn insert(&mut self, row: EventRecord) {
        self.rows.push(row);
    }

    /// All stored rows
    pub fn rows(&self) -> &[EventRecord] {
        &self.rows
    }
}

impl LocalizationStore for InMemoryLocalizationStore {
    fn is_available(&self, event_uid: i64, language_id: i64) -> Result<bool, StorageError> {
        let found = self
            .rows
            .iter()
            .any(|row| row_satisfies(row, event_uid, language_id));

        trace!(
            "In-memory lookup for event {} in language {}: {}",
            event_uid, language_id, found
        );
        Ok(found)
    }
}
