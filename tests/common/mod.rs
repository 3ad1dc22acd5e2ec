/*!
 * Common test utilities for the event-availability test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use event_availability::app_config::{FallbackType, SiteLanguage};
use event_availability::localization_store::LocalizationStore;
use event_availability::StorageError;

// Re-export the recording store module
pub mod recording_store;

/// Route library logs through env_logger when RUST_LOG is set
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Shorthand for a site language
pub fn language(language_id: i64, fallback_type: Option<FallbackType>) -> SiteLanguage {
    SiteLanguage::new(language_id, fallback_type)
}

/// Shorthand for a strict site language
pub fn strict(language_id: i64) -> SiteLanguage {
    language(language_id, Some(FallbackType::Strict))
}

/// Store whose lookups always fail
#[derive(Debug, Default)]
pub struct FailingStore;

impl LocalizationStore for FailingStore {
    fn is_available(&self, _event_uid: i64, _language_id: i64) -> Result<bool, StorageError> {
        Err(StorageError::Other("connection refused".to_string()))
    }
}
