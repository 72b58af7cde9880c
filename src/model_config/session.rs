// src/model_config/session.rs
// The single live form record of a running editor.

use super::form_state::{FieldUpdate, FormState};
use parking_lot::RwLock;
use std::sync::Arc;

/// Holds the current [`FormState`]. Every edit swaps in a new record, so a
/// reader never sees a partially-updated one. Concurrent edits resolve as
/// last write wins.
pub struct EditorSession {
    current: RwLock<Arc<FormState>>,
}

impl EditorSession {
    /// Start a session from the default form
    pub fn new() -> Self {
        Self::with_state(FormState::default())
    }

    pub fn with_state(state: FormState) -> Self {
        Self {
            current: RwLock::new(Arc::new(state)),
        }
    }

    pub fn snapshot(&self) -> Arc<FormState> {
        Arc::clone(&self.current.read())
    }

    /// Apply one field edit and return the record that replaced the old one.
    pub fn apply(&self, update: FieldUpdate) -> Arc<FormState> {
        let mut current = self.current.write();
        let next = Arc::new(current.with_update(update));
        *current = Arc::clone(&next);
        next
    }

    pub fn replace(&self, state: FormState) -> Arc<FormState> {
        let next = Arc::new(state);
        *self.current.write() = Arc::clone(&next);
        next
    }

    pub fn reset(&self) -> Arc<FormState> {
        tracing::debug!("Editor session reset to defaults");
        self.replace(FormState::default())
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
