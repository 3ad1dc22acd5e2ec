/*!
 * # event-availability
 *
 * A Rust library deciding whether event records are visible under a
 * requested site language, plus the contract for registration spam checks.
 *
 * ## Features
 *
 * - Language fallback aware availability checks:
 *   - `strict` languages hide events without a matching localized row
 *   - `fallback`, `free` and unset languages never hide an event
 * - Localization lookups against SQLite or an in-memory row list
 * - JSON site configuration with ISO 639-1 and ISO 639-2 code validation
 * - Pluggable, scored registration spam checks
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Site, language and spam check configuration
 * - `availability`: The availability check itself
 * - `localization_store`: Row existence contract and in-memory store
 * - `site`: Site language lookup
 * - `database`: SQLite persistence of event rows
 * - `spam_checks`: Spam check trait, registry and scoring service
 * - `app_controller`: Wiring used by the command line tool
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod availability;
pub mod database;
pub mod errors;
pub mod language_utils;
pub mod localization_store;
pub mod site;
pub mod spam_checks;

// Re-export main types for easier usage
pub use app_config::{AppConfig, FallbackType, SiteConfig, SiteLanguage};
pub use availability::EventAvailability;
pub use database::{EventRecord, Repository};
pub use errors::{AppError, AvailabilityError, ConfigurationError, SpamCheckError, StorageError};
pub use localization_store::{InMemoryLocalizationStore, LocalizationStore};
pub use site::SiteLanguageProvider;
pub use spam_checks::{SpamCheck, SpamCheckContext, SpamCheckRegistry, SpamCheckService};
