//! Character entity - a named set of equipment flames and score multipliers.

use serde::{Deserialize, Serialize};

use crate::value_objects::{EquipmentSlot, SlotTable, StatusKind, StatusTable};

/// Bonus stats flamed onto one piece of equipment, one value per status.
pub type FlameSet = StatusTable<f64>;

/// Character-wide weight of each status in the score.
pub type MultiplierSet = StatusTable<f64>;

/// One flame set per equipment slot.
pub type EquipmentSet = SlotTable<FlameSet>;

/// A character on the roster.
///
/// # Invariants
///
/// - Every slot has a flame set and every flame set has every status
///   (enforced by [`SlotTable`] and [`StatusTable`])
/// - There is no "unset" value, only zero
///
/// # Example
///
/// ```
/// use flamescore_domain::{Character, EquipmentSlot, StatusKind};
///
/// let mut character = Character::empty();
/// character.set_multiplier(StatusKind::Str, 2.0);
/// character.set_flame(EquipmentSlot::Weapon, StatusKind::Str, 10.0);
///
/// assert_eq!(character.score(EquipmentSlot::Weapon), 20.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Character {
    name: String,
    equipments: EquipmentSet,
    multipliers: MultiplierSet,
}

impl Character {
    /// A fresh, unnamed character with every flame and multiplier at zero.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(
        name: impl Into<String>,
        equipments: EquipmentSet,
        multipliers: MultiplierSet,
    ) -> Self {
        Self {
            name: name.into(),
            equipments,
            multipliers,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn equipments(&self) -> &EquipmentSet {
        &self.equipments
    }

    pub fn multipliers(&self) -> &MultiplierSet {
        &self.multipliers
    }

    pub fn flame(&self, slot: EquipmentSlot, status: StatusKind) -> f64 {
        self.equipments[slot][status]
    }

    pub fn multiplier(&self, status: StatusKind) -> f64 {
        self.multipliers[status]
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_multiplier(&mut self, status: StatusKind, value: f64) {
        self.multipliers[status] = value;
    }

    pub fn set_flame(&mut self, slot: EquipmentSlot, status: StatusKind, value: f64) {
        self.equipments[slot][status] = value;
    }

    // =========================================================================
    // Score
    // =========================================================================

    /// Weighted sum of a slot's flames by this character's multipliers.
    ///
    /// No guards: a NaN flame or multiplier yields a NaN score.
    pub fn score(&self, slot: EquipmentSlot) -> f64 {
        let flames = &self.equipments[slot];
        StatusKind::ALL
            .iter()
            .map(|&status| flames[status] * self.multipliers[status])
            .sum()
    }

    /// `(slot, score)` for every slot, in display order.
    pub fn scores(&self) -> impl Iterator<Item = (EquipmentSlot, f64)> + '_ {
        EquipmentSlot::ALL
            .into_iter()
            .map(move |slot| (slot, self.score(slot)))
    }
}
