//! Equipment slots and per-slot tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::DomainError;

/// Gear positions a character can carry flames on.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    Weapon,
    Pendant1,
    Pendant2,
    Earring,
    Hat,
    Face,
    Eye,
    Belt,
    Top,
    Bottom,
    Overalls,
    Shoes,
    Gloves,
    Cape,
}

impl EquipmentSlot {
    /// Every slot, in display order.
    pub const ALL: [EquipmentSlot; 14] = [
        Self::Weapon,
        Self::Pendant1,
        Self::Pendant2,
        Self::Earring,
        Self::Hat,
        Self::Face,
        Self::Eye,
        Self::Belt,
        Self::Top,
        Self::Bottom,
        Self::Overalls,
        Self::Shoes,
        Self::Gloves,
        Self::Cape,
    ];

    /// Returns the serialized tag (e.g., "weapon", "pendant1").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Pendant1 => "pendant1",
            Self::Pendant2 => "pendant2",
            Self::Earring => "earring",
            Self::Hat => "hat",
            Self::Face => "face",
            Self::Eye => "eye",
            Self::Belt => "belt",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Overalls => "overalls",
            Self::Shoes => "shoes",
            Self::Gloves => "gloves",
            Self::Cape => "cape",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EquipmentSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown equipment slot: {}", s)))
    }
}

/// One value per [`EquipmentSlot`], held as named fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SlotTable<T> {
    weapon: T,
    pendant1: T,
    pendant2: T,
    earring: T,
    hat: T,
    face: T,
    eye: T,
    belt: T,
    top: T,
    bottom: T,
    overalls: T,
    shoes: T,
    gloves: T,
    cape: T,
}

impl<T> SlotTable<T> {
    /// Build a table by evaluating `f` once per slot, in display order.
    ///
    /// Each slot gets its own value; nothing is shared between slots.
    pub fn from_fn(mut f: impl FnMut(EquipmentSlot) -> T) -> Self {
        Self {
            weapon: f(EquipmentSlot::Weapon),
            pendant1: f(EquipmentSlot::Pendant1),
            pendant2: f(EquipmentSlot::Pendant2),
            earring: f(EquipmentSlot::Earring),
            hat: f(EquipmentSlot::Hat),
            face: f(EquipmentSlot::Face),
            eye: f(EquipmentSlot::Eye),
            belt: f(EquipmentSlot::Belt),
            top: f(EquipmentSlot::Top),
            bottom: f(EquipmentSlot::Bottom),
            overalls: f(EquipmentSlot::Overalls),
            shoes: f(EquipmentSlot::Shoes),
            gloves: f(EquipmentSlot::Gloves),
            cape: f(EquipmentSlot::Cape),
        }
    }

    pub fn get(&self, slot: EquipmentSlot) -> &T {
        match slot {
            EquipmentSlot::Weapon => &self.weapon,
            EquipmentSlot::Pendant1 => &self.pendant1,
            EquipmentSlot::Pendant2 => &self.pendant2,
            EquipmentSlot::Earring => &self.earring,
            EquipmentSlot::Hat => &self.hat,
            EquipmentSlot::Face => &self.face,
            EquipmentSlot::Eye => &self.eye,
            EquipmentSlot::Belt => &self.belt,
            EquipmentSlot::Top => &self.top,
            EquipmentSlot::Bottom => &self.bottom,
            EquipmentSlot::Overalls => &self.overalls,
            EquipmentSlot::Shoes => &self.shoes,
            EquipmentSlot::Gloves => &self.gloves,
            EquipmentSlot::Cape => &self.cape,
        }
    }

    pub fn get_mut(&mut self, slot: EquipmentSlot) -> &mut T {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Pendant1 => &mut self.pendant1,
            EquipmentSlot::Pendant2 => &mut self.pendant2,
            EquipmentSlot::Earring => &mut self.earring,
            EquipmentSlot::Hat => &mut self.hat,
            EquipmentSlot::Face => &mut self.face,
            EquipmentSlot::Eye => &mut self.eye,
            EquipmentSlot::Belt => &mut self.belt,
            EquipmentSlot::Top => &mut self.top,
            EquipmentSlot::Bottom => &mut self.bottom,
            EquipmentSlot::Overalls => &mut self.overalls,
            EquipmentSlot::Shoes => &mut self.shoes,
            EquipmentSlot::Gloves => &mut self.gloves,
            EquipmentSlot::Cape => &mut self.cape,
        }
    }

    /// Iterate `(slot, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &T)> + '_ {
        EquipmentSlot::ALL
            .into_iter()
            .map(move |slot| (slot, self.get(slot)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> SlotTable<U> {
        SlotTable::from_fn(|slot| f(self.get(slot)))
    }

    /// Like [`map`](Self::map), but stops at the first error.
    pub fn try_map<U, E>(&self, mut f: impl FnMut(&T) -> Result<U, E>) -> Result<SlotTable<U>, E> {
        Ok(SlotTable {
            weapon: f(&self.weapon)?,
            pendant1: f(&self.pendant1)?,
            pendant2: f(&self.pendant2)?,
            earring: f(&self.earring)?,
            hat: f(&self.hat)?,
            face: f(&self.face)?,
            eye: f(&self.eye)?,
            belt: f(&self.belt)?,
            top: f(&self.top)?,
            bottom: f(&self.bottom)?,
            overalls: f(&self.overalls)?,
            shoes: f(&self.shoes)?,
            gloves: f(&self.gloves)?,
            cape: f(&self.cape)?,
        })
    }
}

impl<T> Index<EquipmentSlot> for SlotTable<T> {
    type Output = T;

    fn index(&self, slot: EquipmentSlot) -> &T {
        self.get(slot)
    }
}

impl<T> IndexMut<EquipmentSlot> for SlotTable<T> {
    fn index_mut(&mut self, slot: EquipmentSlot) -> &mut T {
        self.get_mut(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_from_str_roundtrips_every_tag() {
        for slot in EquipmentSlot::ALL {
            assert_eq!(EquipmentSlot::from_str(slot.as_str()), Ok(slot));
        }
    }

    #[test]
    fn test_slot_from_str_unknown() {
        let err = EquipmentSlot::from_str("ring").unwrap_err();
        assert_eq!(err.to_string(), "Parse error: Unknown equipment slot: ring");
    }

    #[test]
    fn test_slot_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&EquipmentSlot::Pendant2).unwrap();
        assert_eq!(json, "\"pendant2\"");
        let parsed: EquipmentSlot = serde_json::from_str("\"overalls\"").unwrap();
        assert_eq!(parsed, EquipmentSlot::Overalls);
    }

    #[test]
    fn test_table_slots_are_independent() {
        let mut table = SlotTable::from_fn(|_| vec![0u8]);
        table[EquipmentSlot::Pendant1].push(1);

        assert_eq!(table[EquipmentSlot::Pendant1], vec![0, 1]);
        assert_eq!(table[EquipmentSlot::Pendant2], vec![0]);
    }

    #[test]
    fn test_table_serializes_all_fourteen_slots() {
        let table = SlotTable::<u8>::default();
        let value = serde_json::to_value(&table).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 14);
        for slot in EquipmentSlot::ALL {
            assert!(object.contains_key(slot.as_str()), "missing {}", slot);
        }
    }
}
