//! Editor session - the `state()` / `dispatch(action)` surface.
//!
//! Owns the current [`EditorState`] and the storage it came from. Each
//! dispatch runs the pure reducer and, when anything changed, saves the new
//! state. Saving is fire-and-forget: failures are logged, never returned.

use std::sync::Arc;

use flamescore_domain::{reduce, EditorAction, EditorState};

use super::persistence::{load_state, save_state, PersistenceError};
use crate::ports::outbound::StoragePort;

#[derive(Clone)]
pub struct EditorSession {
    state: EditorState,
    storage: Arc<dyn StoragePort>,
}

impl EditorSession {
    /// Start a session from whatever `storage` holds.
    ///
    /// A corrupt stored state is returned as an error; there is no recovery.
    pub fn load(storage: Arc<dyn StoragePort>) -> Result<Self, PersistenceError> {
        let state = load_state(storage.as_ref())?;
        Ok(Self { state, storage })
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Apply `action` and persist the result if it differs.
    pub fn dispatch(&mut self, action: EditorAction) {
        tracing::trace!(?action, "Dispatching editor action");

        let next = reduce(&self.state, action);
        if next == self.state {
            return;
        }
        self.state = next;

        if let Err(e) = save_state(self.storage.as_ref(), &self.state) {
            tracing::error!("Failed to save editor state: {}", e);
        }
    }

    /// Select character `index` if it exists.
    ///
    /// Returns `false` and dispatches nothing for an out-of-range index.
    pub fn switch_character(&mut self, index: usize) -> bool {
        if !self.state.can_switch_to(index) {
            tracing::warn!(
                index,
                characters = self.state.characters().len(),
                "Ignoring switch to a character that does not exist"
            );
            return false;
        }

        self.dispatch(EditorAction::SwitchCharacter { index });
        true
    }
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
