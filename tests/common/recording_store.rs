/*!
 * Localization store that records every lookup
 *
 * Used to assert whether the availability check consulted the store at all.
 */

use std::cell::RefCell;

use event_availability::localization_store::LocalizationStore;
use event_availability::StorageError;

/// Store answering a fixed value and remembering each query
#[derive(Debug)]
pub struct RecordingStore {
    /// Answer returned for every lookup
    pub answer: bool,
    /// (event_uid, language_id) of each lookup
    pub calls: RefCell<Vec<(i64, i64)>>,
}

impl RecordingStore {
    /// Create a store answering `answer`
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Number of lookups so far
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl LocalizationStore for RecordingStore {
    fn is_available(&self, event_uid: i64, language_id: i64) -> Result<bool, StorageError> {
        self.calls.borrow_mut().push((event_uid, language_id));
        Ok(self.answer)
    }
}
