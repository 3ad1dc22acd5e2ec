/*!
 * Database entity models.
 *
 * These structures map directly to database tables and provide
 * type-safe access to persisted data.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::localization_store::{ALL_LANGUAGES_ID, NO_L10N_PARENT};

/// Role of an event row within its localization family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Row valid for every language
    AllLanguages,
    /// Default-language or self-sourced row
    Source,
    /// Translation of another row
    Translation,
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKind::AllLanguages => write!(f, "all_languages"),
            RowKind::Source => write!(f, "source"),
            RowKind::Translation => write!(f, "translation"),
        }
    }
}

/// Event row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique row id
    pub uid: i64,
    /// Language of the row, -1 for all languages
    pub sys_language_uid: i64,
    /// Uid of the source row, 0 if the row is its own source
    #[serde(default)]
    pub l10n_parent: i64,
    /// Event title
    #[serde(default)]
    pub title: String,
    /// Creation timestamp (RFC 3339)
    #[serde(default = "now_rfc3339")]
    pub created_at: String,
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

impl EventRecord {
    /// Create a source row in the given language
    pub fn source(uid: i64, sys_language_uid: i64, title: &str) -> Self {
        Self {
            uid,
            sys_language_uid,
            l10n_parent: NO_L10N_PARENT,
            title: title.to_string(),
            created_at: now_rfc3339(),
        }
    }

    /// Create a translation of `l10n_parent`
    pub fn translation(uid: i64, l10n_parent: i64, sys_language_uid: i64, title: &str) -> Self {
        Self {
            uid,
            sys_language_uid,
            l10n_parent,
            title: title.to_string(),
            created_at: now_rfc3339(),
        }
    }

    /// Classify the row
    pub fn kind(&self) -> RowKind {
        if self.sys_language_uid == ALL_LANGUAGES_ID {
            RowKind::AllLanguages
        } else if self.l10n_parent == NO_L10N_PARENT {
            RowKind::Source
        } else {
            RowKind::Translation
        }
    }
}
