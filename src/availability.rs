/*!
 * Event availability under a requested language.
 *
 * A site language with the `strict` fallback type never substitutes the
 * default-language version of an event, so an event without a matching
 * localized (or all-languages) row must be hidden. Looser fallback types are
 * left to the content system's own rendering fallback and never hide an event.
 */

use log::debug;

use crate::app_config::SiteLanguage;
use crate::errors::{AvailabilityError, ConfigurationError};
use crate::localization_store::LocalizationStore;

/// Checks if an event record is available in a language
#[derive(Debug, Clone)]
pub struct EventAvailability<S> {
    store: S,
}

impl<S: LocalizationStore> EventAvailability<S> {
    /// Create a checker backed by the given localization store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Check if an event must be shown under `language_id`
    ///
    /// # Arguments
    /// * `language_id` - Requested language id
    /// * `event_uid` - Uid of the event's source row
    /// * `available_languages` - All languages configured for the current site
    ///
    /// # Returns
    /// * `Ok(true)` if the event is visible, `Ok(false)` if it must be hidden
    /// * `Err(AvailabilityError::Configuration)` if the language is not configured
    pub fn check(
        &self,
        language_id: i64,
        event_uid: i64,
        available_languages: &[SiteLanguage],
    ) -> Result<bool, AvailabilityError> {
        let target_language = find_language(available_languages, language_id)
            .ok_or(ConfigurationError::TargetLanguageNotFound { language_id })?;

        self.must_be_included(event_uid, target_language)
    }

    fn must_be_included(
        &self,
        event_uid: i64,
        language: &SiteLanguage,
    ) -> Result<bool, AvailabilityError> {
        if language.is_strict() && !self.store.is_available(event_uid, language.language_id)? {
            debug!(
                "Event {} has no row for strict language {}, hiding it",
                event_uid, language.language_id
            );
            return Ok(false);
        }

        debug!(
            "Event {} is available in language {}",
            event_uid, language.language_id
        );
        Ok(true)
    }
}

/// Find the configured language with the given id
pub fn find_language(languages: &[SiteLanguage], language_id: i64) -> Option<&SiteLanguage> {
    languages.iter().find(|l| l.language_id == language_id)
}
