//! User-facing labels for the fixed vocabularies.
//!
//! The domain only knows tags like `wat` and `pendant1`; these are what the
//! table headers and the character picker show.

use flamescore_domain::{EquipmentSlot, StatusKind};

pub const SLOT_COLUMN: &str = "装備部位";
pub const SCORE_COLUMN: &str = "転生スコア";
pub const MULTIPLIER_ROW: &str = "係数";
pub const NAME_PLACEHOLDER: &str = "名前";
pub const ADD_BUTTON: &str = "追加";
pub const DELETE_BUTTON: &str = "削除";

pub fn status_label(status: StatusKind) -> &'static str {
    match status {
        StatusKind::Str => "STR",
        StatusKind::Dex => "DEX",
        StatusKind::Int => "INT",
        StatusKind::Luk => "LUK",
        StatusKind::All => "All%",
        StatusKind::Wat => "攻撃力",
        StatusKind::Mat => "魔力",
    }
}

/// Both pendant slots share one label.
pub fn slot_label(slot: EquipmentSlot) -> &'static str {
    match slot {
        EquipmentSlot::Weapon => "武器",
        EquipmentSlot::Pendant1 | EquipmentSlot::Pendant2 => "ペンダント",
        EquipmentSlot::Earring => "イヤリング",
        EquipmentSlot::Hat => "帽子",
        EquipmentSlot::Face => "顔",
        EquipmentSlot::Eye => "目",
        EquipmentSlot::Belt => "ベルト",
        EquipmentSlot::Top => "服（上）",
        EquipmentSlot::Bottom => "服（下）",
        EquipmentSlot::Overalls => "全身服",
        EquipmentSlot::Shoes => "靴",
        EquipmentSlot::Gloves => "手袋",
        EquipmentSlot::Cape => "マント",
    }
}

/// Picker entry for the character at `index`; unnamed characters get a
/// 1-based placeholder.
pub fn character_label(index: usize, name: &str) -> String {
    if name.is_empty() {
        format!("キャラクター{}", index + 1)
    } else {
        name.to_string()
    }
}
