//! Editor state - the roster, the selected character, and its input buffer.

use serde::{Deserialize, Serialize};

use super::input_values::InputValues;
use crate::entities::Character;
use crate::error::DomainError;

/// Everything the editor knows.
///
/// # Invariants
///
/// - `characters` is never empty
/// - `index < characters.len()`
/// - `input_values` is the buffer of `characters[index]` as of the last
///   add/delete/switch, plus any leaf edits since
///
/// Serializes with the field names `index`, `inputValues`, `characters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    index: usize,
    input_values: InputValues,
    characters: Vec<Character>,
}

impl EditorState {
    /// Assemble a state from parts, checking the index invariants.
    ///
    /// The buffer is taken as-is so a restored state keeps in-progress text.
    pub fn from_parts(
        index: usize,
        input_values: InputValues,
        characters: Vec<Character>,
    ) -> Result<Self, DomainError> {
        if characters.is_empty() {
            return Err(DomainError::constraint("editor state has no characters"));
        }
        if index >= characters.len() {
            return Err(DomainError::constraint(format!(
                "selected index {} is out of range for {} characters",
                index,
                characters.len()
            )));
        }

        Ok(Self {
            index,
            input_values,
            characters,
        })
    }

    /// Re-check the invariants, e.g. after deserializing.
    pub fn validate(self) -> Result<Self, DomainError> {
        Self::from_parts(self.index, self.input_values, self.characters)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn input_values(&self) -> &InputValues {
        &self.input_values
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// The selected character.
    pub fn current(&self) -> &Character {
        &self.characters[self.index]
    }

    /// Whether `index` is a valid `switchCharacter` target.
    ///
    /// Callers check this before dispatching a switch.
    pub fn can_switch_to(&self, index: usize) -> bool {
        index < self.characters.len()
    }

    // =========================================================================
    // Transitions used by the reducer
    // =========================================================================

    pub(super) fn current_mut(&mut self) -> &mut Character {
        &mut self.characters[self.index]
    }

    pub(super) fn input_values_mut(&mut self) -> &mut InputValues {
        &mut self.input_values
    }

    pub(super) fn push_empty(&mut self) {
        self.characters.push(Character::empty());
        self.select(self.characters.len() - 1);
    }

    /// Remove the selected character unless it is the only one, then rebuild
    /// the buffer from whichever character ends up selected.
    pub(super) fn remove_current(&mut self) {
        if self.characters.len() > 1 {
            self.characters.remove(self.index);
        }
        self.select(self.index.min(self.characters.len() - 1));
    }

    /// Select `index` and rebuild the buffer from it. `index` must be in range.
    pub(super) fn select(&mut self, index: usize) {
        self.index = index;
        self.input_values = InputValues::from_character(&self.characters[index]);
    }
}

impl Default for EditorState {
    /// One empty character, selected, with its all-`"0"` buffer.
    fn default() -> Self {
        let character = Character::empty();
        Self {
            index: 0,
            input_values: InputValues::from_character(&character),
            characters: vec![character],
        }
    }
}
