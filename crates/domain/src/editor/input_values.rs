//! Input values - the all-strings shadow of a character's numeric fields.
//!
//! Text fields hold whatever the user is typing ("-", "1.", "") without
//! corrupting the numeric model. Conversion goes two ways:
//!
//! - [`InputValues::from_character`] is total: every number has a text form.
//! - [`InputValues::to_numeric`] is partial: one unparsable leaf aborts the
//!   whole conversion with [`SkipUpdate`], never a half-converted character.

use serde::{Deserialize, Serialize};

use crate::entities::Character;
use crate::value_objects::{
    format_number, parse_leaf, EquipmentSlot, SkipUpdate, SlotTable, StatusKind, StatusTable,
};

/// Text for one flame set.
pub type FlameInputValues = StatusTable<String>;

/// Text for the multiplier row.
pub type MultiplierInputValues = StatusTable<String>;

/// Text for every slot's flame set.
pub type EquipmentInputValues = SlotTable<FlameInputValues>;

/// Buffer mirroring the numeric leaves of a [`Character`].
///
/// The name has no numeric form, so it has no leaf here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputValues {
    multipliers: MultiplierInputValues,
    equipments: EquipmentInputValues,
}

impl InputValues {
    /// Text view of every numeric leaf of `character`.
    pub fn from_character(character: &Character) -> Self {
        Self {
            multipliers: character.multipliers().map(|value| format_number(*value)),
            equipments: character
                .equipments()
                .map(|flames| flames.map(|value| format_number(*value))),
        }
    }

    /// Convert the whole buffer back to numbers, giving the result `name`.
    ///
    /// Fails with the first leaf (multipliers first, then slots in display
    /// order) that does not parse.
    pub fn to_numeric(&self, name: impl Into<String>) -> Result<Character, SkipUpdate> {
        let multipliers = self.multipliers.try_map(|text| parse_leaf(text))?;
        let equipments = self
            .equipments
            .try_map(|flames| flames.try_map(|text| parse_leaf(text)))?;

        Ok(Character::new(name, equipments, multipliers))
    }

    pub fn multipliers(&self) -> &MultiplierInputValues {
        &self.multipliers
    }

    pub fn equipments(&self) -> &EquipmentInputValues {
        &self.equipments
    }

    pub fn multiplier(&self, status: StatusKind) -> &str {
        &self.multipliers[status]
    }

    pub fn flame(&self, slot: EquipmentSlot, status: StatusKind) -> &str {
        &self.equipments[slot][status]
    }

    /// Replace one multiplier leaf. Any text is accepted.
    pub fn set_multiplier(&mut self, status: StatusKind, text: impl Into<String>) {
        self.multipliers[status] = text.into();
    }

    /// Replace one flame leaf. Any text is accepted.
    pub fn set_flame(&mut self, slot: EquipmentSlot, status: StatusKind, text: impl Into<String>) {
        self.equipments[slot][status] = text.into();
    }
}

impl Default for InputValues {
    /// Buffer of an empty character: every leaf is `"0"`.
    fn default() -> Self {
        Self::from_character(&Character::empty())
    }
}
