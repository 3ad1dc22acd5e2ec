use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;

use crate::app_config::{AppConfig, SiteLanguage};
use crate::availability::EventAvailability;
use crate::database::{DatabaseConnection, DatabaseStats, EventRecord, Repository};
use crate::errors::{AppError, ConfigurationError};
use crate::site::{self, SiteLanguageProvider};

// @module: Application controller wiring configuration, storage and checks

/// Main application controller for availability checks
pub struct Controller {
    // @field: App configuration
    config: AppConfig,
    // @field: Event storage
    repository: Repository,
}

impl Controller {
    /// Create a controller with an in-memory database
    pub fn new_for_test(config: AppConfig) -> Result<Self> {
        Ok(Self::with_repository(config, Repository::new_in_memory()?))
    }

    // @method: Create a controller opening the configured database
    pub fn with_config(config: AppConfig) -> Result<Self> {
        let db = match &config.database_path {
            Some(path) => DatabaseConnection::new(path)?,
            None => DatabaseConnection::new_default()?,
        };

        Ok(Self::with_repository(config, Repository::new(db)))
    }

    // @method: Create a controller over an existing repository
    pub fn with_repository(config: AppConfig, repository: Repository) -> Self {
        Self { config, repository }
    }

    /// The active configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The event repository
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Languages configured for a site
    pub fn languages(&self, site_identifier: &str) -> Result<&[SiteLanguage], AppError> {
        Ok(self.config.site_languages(site_identifier)?)
    }

    /// Check if an event is visible on a site under a language
    ///
    /// `language` is either a numeric language id or an ISO code configured
    /// on one of the site's languages.
    pub fn check_availability(
        &self,
        site_identifier: &str,
        language: &str,
        event_uid: i64,
    ) -> Result<bool, AppError> {
        let languages = self.config.site_languages(site_identifier)?;

        let language_id = site::resolve_language_id(languages, language).ok_or_else(|| {
            ConfigurationError::InvalidLanguageCode {
                site: site_identifier.to_string(),
                code: language.to_string(),
            }
        })?;

        debug!(
            "Checking event {} on site '{}' in language {}",
            event_uid, site_identifier, language_id
        );

        let availability = EventAvailability::new(&self.repository);
        Ok(availability.check(language_id, event_uid, languages)?)
    }

    /// Import event rows from a JSON file
    pub fn import_events(&self, path: &Path) -> Result<usize> {
        let imported = self
            .repository
            .import_from_json(path)
            .with_context(|| format!("Failed to import events from {:?}", path))?;

        info!("Database now holds: {}", self.stats()?);
        Ok(imported)
    }

    /// All stored event rows
    pub fn events(&self) -> Result<Vec<EventRecord>> {
        self.repository.list_events()
    }

    /// Database statistics
    pub fn stats(&self) -> Result<DatabaseStats> {
        self.repository.connection().stats()
    }
}
