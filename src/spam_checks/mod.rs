/*!
 * Registration spam checks.
 *
 * This module contains the contract every spam check implements:
 * - `SpamCheck`: a single yes/no verdict on one registration
 * - `SpamCheckRegistry`: named factories selected by configuration
 * - `SpamCheckService`: runs the configured checks and sums their scores
 *
 * No concrete checks ship with the library; the embedding application
 * registers its own.
 */

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod registry;
pub mod service;

pub use registry::{SpamCheckFactory, SpamCheckRegistry};
pub use service::{SpamCheckOutcome, SpamCheckService};

/// Snapshot of the registration being checked
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Registration {
    /// Registration uid, 0 while not yet persisted
    #[serde(default)]
    pub uid: i64,
    /// Uid of the event registered for
    pub event_uid: i64,
    /// Submitted form fields
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// Everything a spam check is constructed from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpamCheckContext {
    /// The registration under test
    pub registration: Registration,
    /// Plugin settings
    pub settings: Map<String, Value>,
    /// Raw request arguments
    pub arguments: Map<String, Value>,
    /// Options of this particular check
    pub configuration: Map<String, Value>,
}

impl SpamCheckContext {
    /// Build a context without check specific options
    pub fn new(
        registration: Registration,
        settings: Map<String, Value>,
        arguments: Map<String, Value>,
    ) -> Self {
        Self {
            registration,
            settings,
            arguments,
            configuration: Map::new(),
        }
    }

    /// Same context with the given check options
    pub fn with_configuration(mut self, configuration: Map<String, Value>) -> Self {
        self.configuration = configuration;
        self
    }
}

/// Common trait for all spam checks
///
/// An implementation is constructed fresh from a `SpamCheckContext` for every
/// evaluation and discarded afterwards.
pub trait SpamCheck {
    /// Whether the registration failed this check
    fn is_failed(&self) -> bool;
}
