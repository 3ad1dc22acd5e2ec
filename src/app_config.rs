use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::errors::ConfigurationError;
use crate::language_utils;

/// Application configuration module
/// This module handles the configuration of sites, their languages and the
/// registration spam checks, including loading, validating and saving.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Path of the SQLite event database (defaults to the user data directory)
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Configured sites
    #[serde(default)]
    pub sites: Vec<SiteConfig>,

    /// Registration spam check settings
    #[serde(default)]
    pub spam_check: SpamCheckSettings,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// A site and the languages it serves
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    /// Unique site identifier
    pub identifier: String,

    /// Languages in configuration order
    #[serde(default)]
    pub languages: Vec<SiteLanguage>,
}

/// Fallback policy of a site language
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FallbackType {
    // @policy: Never substitute the default language silently
    Strict,
    // @policy: Substitute along the configured fallback chain
    Fallback,
    // @policy: Show whatever exists, mixed languages allowed
    Free,
}

impl FallbackType {
    // @returns: Lowercase policy identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Fallback => "fallback",
            Self::Free => "free",
        }
    }
}

impl std::fmt::Display for FallbackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FallbackType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "strict" => Ok(Self::Strict),
            "fallback" => Ok(Self::Fallback),
            "free" => Ok(Self::Free),
            _ => Err(anyhow!("Invalid fallback type: {}", s)),
        }
    }
}

/// A language configured for a site
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SiteLanguage {
    /// Language id as stored in `sys_language_uid`
    pub language_id: i64,

    /// Human readable title
    #[serde(default = "String::new")]
    pub title: String,

    /// ISO 639-1 or ISO 639-2 code
    #[serde(default)]
    pub iso_code: Option<String>,

    /// Fallback policy, unset when the site does not declare one
    #[serde(default)]
    pub fallback_type: Option<FallbackType>,
}

impl SiteLanguage {
    // @param language_id: Language id
    // @param fallback_type: Fallback policy
    // @returns: Language without title or ISO code
    pub fn new(language_id: i64, fallback_type: Option<FallbackType>) -> Self {
        Self {
            language_id,
            title: String::new(),
            iso_code: None,
            fallback_type,
        }
    }

    /// Whether the language forbids silent default-language substitution
    pub fn is_strict(&self) -> bool {
        self.fallback_type == Some(FallbackType::Strict)
    }

    /// Display name: the title, else the ISO language name, else the id
    pub fn display_name(&self) -> String {
        if !self.title.is_empty() {
            return self.title.clone();
        }

        self.iso_code
            .as_deref()
            .and_then(|code| language_utils::get_language_name(code).ok())
            .unwrap_or_else(|| format!("language {}", self.language_id))
    }
}

/// Registration spam check settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpamCheckSettings {
    /// Whether spam checks run at all
    #[serde(default)]
    pub enabled: bool,

    /// Score at which a registration counts as spam
    #[serde(default = "default_max_spam_score")]
    pub max_spam_score: u32,

    /// Configured checks, evaluated in order
    #[serde(default)]
    pub checks: Vec<SpamCheckEntry>,
}

impl Default for SpamCheckSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            max_spam_score: default_max_spam_score(),
            checks: Vec::new(),
        }
    }
}

/// A single configured spam check
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpamCheckEntry {
    // @field: Registered check name
    pub name: String,

    // @field: Whether the check runs
    #[serde(default = "default_true")]
    pub enabled: bool,

    // @field: Score added when the check fails
    #[serde(default = "default_increase_score")]
    pub increase_score: u32,

    // @field: Check specific options
    #[serde(default)]
    pub configuration: Map<String, Value>,
}

impl SpamCheckEntry {
    // @param name: Registered check name
    // @param increase_score: Score added on failure
    // @returns: Enabled entry without options
    pub fn new(name: &str, increase_score: u32) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
            increase_score,
            configuration: Map::new(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_max_spam_score() -> u32 {
    10
}

fn default_increase_score() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

fn default_site_languages() -> Vec<SiteLanguage> {
    vec![SiteLanguage {
        language_id: 0,
        title: "English".to_string(),
        iso_code: Some("en".to_string()),
        fallback_type: Some(FallbackType::Strict),
    }]
}

impl AppConfig {
    /// Load the configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        let config: AppConfig = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Save the configuration as pretty printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json =
            serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {:?}", path))?;

        Ok(())
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut identifiers = HashSet::new();

        for site in &self.sites {
            if !identifiers.insert(site.identifier.as_str()) {
                return Err(ConfigurationError::DuplicateSite(site.identifier.clone()));
            }

            let mut language_ids = HashSet::new();
            for language in &site.languages {
                if !language_ids.insert(language.language_id) {
                    return Err(ConfigurationError::DuplicateLanguage {
                        site: site.identifier.clone(),
                        language_id: language.language_id,
                    });
                }

                if let Some(code) = &language.iso_code {
                    if language_utils::validate_language_code(code).is_err() {
                        return Err(ConfigurationError::InvalidLanguageCode {
                            site: site.identifier.clone(),
                            code: code.clone(),
                        });
                    }
                }
            }
        }

        if let Some(index) = self
            .spam_check
            .checks
            .iter()
            .position(|entry| entry.name.trim().is_empty())
        {
            return Err(ConfigurationError::EmptySpamCheckName { index });
        }

        Ok(())
    }

    /// Get a site configuration by identifier
    pub fn get_site(&self, identifier: &str) -> Option<&SiteConfig> {
        self.sites.iter().find(|s| s.identifier == identifier)
    }
}

/// Default implementation for AppConfig
impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: None,
            sites: vec![SiteConfig {
                identifier: "main".to_string(),
                languages: default_site_languages(),
            }],
            spam_check: SpamCheckSettings::default(),
            log_level: LogLevel::default(),
        }
    }
}
