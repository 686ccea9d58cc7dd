//! Value objects - Immutable objects defined by their attributes

mod number;
mod slot;
mod status;

pub use number::{format_number, parse_leaf, parse_number, SkipUpdate};
pub use slot::{EquipmentSlot, SlotTable};
pub use status::{StatusKind, StatusTable};
