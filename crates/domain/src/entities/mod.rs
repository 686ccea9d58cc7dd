//! Domain entities - Core business objects

mod character;

pub use character::{Character, EquipmentSet, FlameSet, MultiplierSet};
