use log::{debug, info};
use serde_json::{Map, Value};

use super::{Registration, SpamCheckContext, SpamCheckRegistry};
use crate::app_config::SpamCheckSettings;
use crate::errors::SpamCheckError;

/// Result of running the configured spam checks on one registration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpamCheckOutcome {
    /// Sum of the scores of all failed checks
    pub score: u32,
    /// Threshold from the settings
    pub max_spam_score: u32,
    /// Names of the checks that failed, in evaluation order
    pub failed_checks: Vec<String>,
    /// Whether any check ran
    pub evaluated: bool,
}

impl SpamCheckOutcome {
    /// Whether the registration counts as spam
    pub fn is_spam(&self) -> bool {
        self.evaluated && self.score >= self.max_spam_score
    }
}

/// Runs the configured spam checks against registrations
pub struct SpamCheckService<'a> {
    settings: &'a SpamCheckSettings,
    registry: &'a SpamCheckRegistry,
}

impl<'a> SpamCheckService<'a> {
    /// Create a service for the given settings and registry
    pub fn new(settings: &'a SpamCheckSettings, registry: &'a SpamCheckRegistry) -> Self {
        Self { settings, registry }
    }

    /// Run every enabled check against the registration
    ///
    /// Each check gets its own instance built from a fresh context. With spam
    /// checks disabled nothing is constructed and the outcome is never spam.
    pub fn evaluate(
        &self,
        registration: &Registration,
        settings: &Map<String, Value>,
        arguments: &Map<String, Value>,
    ) -> Result<SpamCheckOutcome, SpamCheckError> {
        let mut outcome = SpamCheckOutcome {
            max_spam_score: self.settings.max_spam_score,
            ..SpamCheckOutcome::default()
        };

        if !self.settings.enabled {
            debug!("Spam checks disabled, skipping registration {}", registration.uid);
            return Ok(outcome);
        }

        for entry in self.settings.checks.iter().filter(|c| c.enabled) {
            let context =
                SpamCheckContext::new(registration.clone(), settings.clone(), arguments.clone())
                    .with_configuration(entry.configuration.clone());

            let check = self.registry.create(&entry.name, context)?;
            outcome.evaluated = true;

            if check.is_failed() {
                debug!(
                    "Spam check '{}' failed, adding {} to the score",
                    entry.name, entry.increase_score
                );
                outcome.score = outcome.score.saturating_add(entry.increase_score);
                outcome.failed_checks.push(entry.name.clone());
            }
        }

        if outcome.is_spam() {
            info!(
                "Registration for event {} rejected as spam (score {} of {}, failed: {})",
                registration.event_uid,
                outcome.score,
                outcome.max_spam_score,
                outcome.failed_checks.join(", ")
            );
        }

        Ok(outcome)
    }

    /// Shorthand for `evaluate(..)?.is_spam()`
    pub fn is_spam_check_failed(
        &self,
        registration: &Registration,
        settings: &Map<String, Value>,
        arguments: &Map<String, Value>,
    ) -> Result<bool, SpamCheckError> {
        Ok(self.evaluate(registration, settings, arguments)?.is_spam())
    }
}
