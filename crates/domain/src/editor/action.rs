//! Editor actions - every user edit the reducer understands.

use serde::{Deserialize, Serialize};

use crate::value_objects::{EquipmentSlot, StatusKind};

/// A single edit dispatched to [`reduce`](super::reduce).
///
/// Serializes as `{"type": "setFlame", "slot": "weapon", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditorAction {
    /// Append an empty character and select it
    AddCharacter,
    /// Remove the selected character (never the last one)
    DeleteCharacter,
    /// Select another character; `index` must be in range
    SwitchCharacter { index: usize },
    /// Rename the selected character
    SetName { value: String },
    /// Edit the text of one multiplier
    SetMultiplier { status: StatusKind, value: String },
    /// Edit the text of one flame
    SetFlame {
        slot: EquipmentSlot,
        status: StatusKind,
        value: String,
    },
}
