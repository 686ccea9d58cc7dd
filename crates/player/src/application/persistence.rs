//! Persistence bridge - editor state to and from the `"state"` storage key.
//!
//! The stored text is the serde_json form of [`EditorState`]. There is no
//! version field and no migration: a value that does not parse, or parses
//! into a state that breaks the roster invariants, is reported as an error
//! and the caller treats it as fatal.

use flamescore_domain::{DomainError, EditorState};
use thiserror::Error;

use crate::ports::outbound::{storage_keys, StoragePort};

#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Stored text is not a serialized editor state
    #[error("Stored editor state is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// Stored state parsed but breaks an invariant (empty roster, bad index)
    #[error("Stored editor state is invalid: {0}")]
    InvariantViolated(#[from] DomainError),

    /// State could not be encoded
    #[error("Failed to serialize editor state: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Read the editor state, or the default state if nothing is stored yet.
pub fn load_state(storage: &dyn StoragePort) -> Result<EditorState, PersistenceError> {
    let Some(text) = storage.load(storage_keys::STATE) else {
        tracing::info!("No stored editor state; starting with one empty character");
        return Ok(EditorState::default());
    };

    let state: EditorState = serde_json::from_str(&text).map_err(PersistenceError::Corrupt)?;
    let state = state.validate()?;

    tracing::debug!(
        characters = state.characters().len(),
        index = state.index(),
        "Loaded editor state"
    );
    Ok(state)
}

/// Write the full editor state, replacing whatever was stored.
pub fn save_state(storage: &dyn StoragePort, state: &EditorState) -> Result<(), PersistenceError> {
    let text = serde_json::to_string(state).map_err(PersistenceError::Serialize)?;
    storage.save(storage_keys::STATE, &text);
    Ok(())
}
