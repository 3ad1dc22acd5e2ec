/*!
 * Database module for persistent storage of event rows.
 *
 * This module provides SQLite-based persistence for:
 * - Event rows in every language variant
 * - The localization lookup used by the availability check
 */

pub mod schema;
pub mod connection;
pub mod repository;
pub mod models;

// Re-export main types
pub use connection::{DatabaseConnection, DatabaseStats};
pub use models::{EventRecord, RowKind};
pub use repository::Repository;
