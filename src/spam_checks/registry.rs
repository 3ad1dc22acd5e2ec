use std::collections::HashMap;

use super::{SpamCheck, SpamCheckContext};
use crate::errors::SpamCheckError;

/// Builds a spam check from its context
pub type SpamCheckFactory =
    Box<dyn Fn(SpamCheckContext) -> Result<Box<dyn SpamCheck>, SpamCheckError> + Send + Sync>;

/// Spam check factories keyed by the name used in configuration
#[derive(Default)]
pub struct SpamCheckRegistry {
    factories: HashMap<String, SpamCheckFactory>,
}

impl SpamCheckRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory, replacing any previous one with the same name
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(SpamCheckContext) -> Result<Box<dyn SpamCheck>, SpamCheckError> + Send + Sync + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    /// Whether a factory is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Construct the check registered under `name`
    pub fn create(
        &self,
        name: &str,
        context: SpamCheckContext,
    ) -> Result<Box<dyn SpamCheck>, SpamCheckError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| SpamCheckError::UnknownCheck(name.to_string()))?;

        factory(context)
    }
}

impl std::fmt::Debug for SpamCheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpamCheckRegistry")
            .field("checks", &self.names())
            .finish()
    }
}
