//! The editor reducer.
//!
//! `reduce` is the only way an [`EditorState`] changes. It is pure: it never
//! touches its input, performs no I/O, and returns a new state.
//!
//! Numeric setters write the raw text into the buffer unconditionally and
//! advance the numeric model only when that text parses. A failed parse is
//! not an error here; it just leaves the last valid number in place, which is
//! how half-typed input like `"-"` survives.

use super::action::EditorAction;
use super::state::EditorState;
use crate::value_objects::parse_leaf;

/// Apply `action` to `state`, returning the next state.
///
/// Callers range-check `SwitchCharacter` before dispatching it; an
/// out-of-range index that slips through returns the state unchanged.
pub fn reduce(state: &EditorState, action: EditorAction) -> EditorState {
    let mut next = state.clone();

    match action {
        EditorAction::AddCharacter => next.push_empty(),
        EditorAction::DeleteCharacter => next.remove_current(),
        EditorAction::SwitchCharacter { index } => {
            if state.can_switch_to(index) {
                next.select(index);
            }
        }
        EditorAction::SetName { value } => next.current_mut().set_name(value),
        EditorAction::SetMultiplier { status, value } => {
            if let Ok(number) = parse_leaf(&value) {
                next.current_mut().set_multiplier(status, number);
            }
            next.input_values_mut().set_multiplier(status, value);
        }
        EditorAction::SetFlame {
            slot,
            status,
            value,
        } => {
            if let Ok(number) = parse_leaf(&value) {
                next.current_mut().set_flame(slot, status, number);
            }
            next.input_values_mut().set_flame(slot, status, value);
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::InputValues;
    use crate::entities::Character;
    use crate::value_objects::{EquipmentSlot, StatusKind};
    use proptest::prelude::*;

    fn set_flame(slot: EquipmentSlot, status: StatusKind, value: &str) -> EditorAction {
        EditorAction::SetFlame {
            slot,
            status,
            value: value.to_string(),
        }
    }

    fn set_multiplier(status: StatusKind, value: &str) -> EditorAction {
        EditorAction::SetMultiplier {
            status,
            value: value.to_string(),
        }
    }

    fn set_name(value: &str) -> EditorAction {
        EditorAction::SetName {
            value: value.to_string(),
        }
    }

    fn apply_all(actions: impl IntoIterator<Item = EditorAction>) -> EditorState {
        actions
            .into_iter()
            .fold(EditorState::default(), |state, action| reduce(&state, action))
    }

    mod add_character {
        use super::*;

        #[test]
        fn selects_the_new_character_with_an_empty_buffer() {
            let state = apply_all([
                set_name("Mercedes"),
                set_flame(EquipmentSlot::Weapon, StatusKind::Dex, "120"),
                EditorAction::AddCharacter,
            ]);

            assert_eq!(state.index(), 1);
            assert_eq!(state.characters().len(), 2);
            assert_eq!(state.input_values(), &InputValues::default());
            assert_eq!(state.current(), &Character::empty());
            assert_eq!(state.characters()[0].name(), "Mercedes");
        }

        #[test]
        fn appends_at_the_end() {
            let state = apply_all([
                EditorAction::AddCharacter,
                EditorAction::AddCharacter,
                EditorAction::SwitchCharacter { index: 0 },
                EditorAction::AddCharacter,
            ]);

            assert_eq!(state.characters().len(), 4);
            assert_eq!(state.index(), 3);
        }
    }

    mod delete_character {
        use super::*;

        #[test]
        fn removes_the_selected_character() {
            let state = apply_all([
                set_name("first"),
                EditorAction::AddCharacter,
                set_name("second"),
                EditorAction::AddCharacter,
                set_name("third"),
                EditorAction::SwitchCharacter { index: 1 },
                EditorAction::DeleteCharacter,
            ]);

            let names: Vec<_> = state.characters().iter().map(Character::name).collect();
            assert_eq!(names, vec!["first", "third"]);
            assert_eq!(state.index(), 1);
            assert_eq!(state.current().name(), "third");
        }

        #[test]
        fn deleting_the_last_element_selects_the_new_last() {
            let state = apply_all([
                set_flame(EquipmentSlot::Hat, StatusKind::Str, "7"),
                EditorAction::AddCharacter,
                EditorAction::DeleteCharacter,
            ]);

            assert_eq!(state.characters().len(), 1);
            assert_eq!(state.index(), 0);
            assert_eq!(state.input_values().flame(EquipmentSlot::Hat, StatusKind::Str), "7");
        }

        #[test]
        fn the_sole_character_is_kept_unchanged() {
            let before = apply_all([
                set_name("only"),
                set_multiplier(StatusKind::Luk, "3"),
            ]);

            let after = reduce(&before, EditorAction::DeleteCharacter);

            assert_eq!(after.characters().len(), 1);
            assert_eq!(after.index(), 0);
            assert_eq!(after.current(), before.current());
            assert_eq!(after.current().name(), "only");
        }

        #[test]
        fn rebuilds_the_buffer_from_the_surviving_character() {
            let state = apply_all([
                set_multiplier(StatusKind::Str, "-"),
                EditorAction::DeleteCharacter,
            ]);

            assert_eq!(state.input_values().multiplier(StatusKind::Str), "0");
        }
    }

    mod switch_character {
        use super::*;

        #[test]
        fn rebuilds_the_buffer_from_the_model() {
            let state = apply_all([
                set_multiplier(StatusKind::Wat, "2"),
                set_multiplier(StatusKind::Wat, "2-"),
                EditorAction::AddCharacter,
                set_flame(EquipmentSlot::Cape, StatusKind::Int, "abc"),
                EditorAction::SwitchCharacter { index: 0 },
            ]);

            assert_eq!(state.index(), 0);
            assert_eq!(state.input_values().multiplier(StatusKind::Wat), "2");
            assert_eq!(
                state.input_values(),
                &InputValues::from_character(&state.characters()[0])
            );
        }

        #[test]
        fn switching_back_drops_transient_text() {
            let state = apply_all([
                EditorAction::AddCharacter,
                set_flame(EquipmentSlot::Top, StatusKind::Luk, "1e"),
                EditorAction::SwitchCharacter { index: 0 },
                EditorAction::SwitchCharacter { index: 1 },
            ]);

            assert_eq!(state.input_values().flame(EquipmentSlot::Top, StatusKind::Luk), "0");
        }

        #[test]
        fn out_of_range_leaves_state_unchanged() {
            let state = EditorState::default();
            let next = reduce(&state, EditorAction::SwitchCharacter { index: 3 });
            assert_eq!(next, state);

            let two = apply_all([
                EditorAction::AddCharacter,
                set_flame(EquipmentSlot::Cape, StatusKind::Dex, "4."),
            ]);
            let next = reduce(&two, EditorAction::SwitchCharacter { index: 2 });
            assert_eq!(next, two);
            assert_eq!(next.input_values().flame(EquipmentSlot::Cape, StatusKind::Dex), "4.");
        }
    }

    mod set_name {
        use super::*;

        #[test]
        fn renames_only_the_selected_character() {
            let state = apply_all([
                EditorAction::AddCharacter,
                set_name("Luminous"),
            ]);

            assert_eq!(state.characters()[0].name(), "");
            assert_eq!(state.characters()[1].name(), "Luminous");
        }

        #[test]
        fn leaves_the_buffer_alone() {
            let before = apply_all([set_flame(EquipmentSlot::Face, StatusKind::Dex, "4.")]);
            let after = reduce(&before, set_name("Phantom"));

            assert_eq!(after.input_values(), before.input_values());
        }
    }

    mod set_multiplier {
        use super::*;

        #[test]
        fn numeric_text_updates_buffer_and_model() {
            let state = apply_all([set_multiplier(StatusKind::Str, "1.5")]);

            assert_eq!(state.input_values().multiplier(StatusKind::Str), "1.5");
            assert_eq!(state.current().multiplier(StatusKind::Str), 1.5);
        }

        #[test]
        fn unparsable_text_keeps_last_valid_number() {
            let state = apply_all([
                set_multiplier(StatusKind::Dex, "12"),
                set_multiplier(StatusKind::Dex, "12x"),
            ]);

            assert_eq!(state.input_values().multiplier(StatusKind::Dex), "12x");
            assert_eq!(state.current().multiplier(StatusKind::Dex), 12.0);
        }

        #[test]
        fn touches_only_the_addressed_status() {
            let state = apply_all([set_multiplier(StatusKind::All, "9")]);

            for status in StatusKind::ALL {
                let expected = if status == StatusKind::All { 9.0 } else { 0.0 };
                assert_eq!(state.current().multiplier(status), expected);
            }
        }
    }

    mod set_flame {
        use super::*;

        #[test]
        fn typing_a_negative_number_keystroke_by_keystroke() {
            let mut state = apply_all([set_flame(EquipmentSlot::Shoes, StatusKind::Luk, "5")]);
            let mut observed = Vec::new();

            for text in ["", "-", "-1", "-12"] {
                state = reduce(&state, set_flame(EquipmentSlot::Shoes, StatusKind::Luk, text));
                observed.push((
                    state
                        .input_values()
                        .flame(EquipmentSlot::Shoes, StatusKind::Luk)
                        .to_string(),
                    state.current().flame(EquipmentSlot::Shoes, StatusKind::Luk),
                ));
            }

            assert_eq!(
                observed,
                vec![
                    ("".to_string(), 0.0),
                    ("-".to_string(), 0.0),
                    ("-1".to_string(), -1.0),
                    ("-12".to_string(), -12.0),
                ]
            );
        }

        #[test]
        fn non_finite_text_keeps_last_valid_number() {
            let state = apply_all([
                set_flame(EquipmentSlot::Hat, StatusKind::Int, "7"),
                set_flame(EquipmentSlot::Hat, StatusKind::Int, "Infinity"),
            ]);
            assert_eq!(state.input_values().flame(EquipmentSlot::Hat, StatusKind::Int), "Infinity");
            assert_eq!(state.current().flame(EquipmentSlot::Hat, StatusKind::Int), 7.0);

            let state = reduce(&state, set_flame(EquipmentSlot::Hat, StatusKind::Int, "1e400"));
            assert_eq!(state.input_values().flame(EquipmentSlot::Hat, StatusKind::Int), "1e400");
            assert_eq!(state.current().flame(EquipmentSlot::Hat, StatusKind::Int), 7.0);
        }

        #[test]
        fn pendant_slots_are_independent() {
            let state = apply_all([set_flame(EquipmentSlot::Pendant1, StatusKind::Int, "33")]);

            assert_eq!(state.current().flame(EquipmentSlot::Pendant1, StatusKind::Int), 33.0);
            assert_eq!(state.current().flame(EquipmentSlot::Pendant2, StatusKind::Int), 0.0);
            assert_eq!(
                state.input_values().flame(EquipmentSlot::Pendant2, StatusKind::Int),
                "0"
            );
        }

        #[test]
        fn edits_feed_the_score() {
            let state = apply_all([
                set_multiplier(StatusKind::Str, "2"),
                set_flame(EquipmentSlot::Weapon, StatusKind::Str, "10"),
                set_flame(EquipmentSlot::Weapon, StatusKind::Dex, "5"),
            ]);

            assert_eq!(state.current().score(EquipmentSlot::Weapon), 20.0);
        }
    }

    #[test]
    fn reduce_does_not_modify_its_input() {
        let before = EditorState::default();
        let snapshot = before.clone();

        let _ = reduce(&before, set_flame(EquipmentSlot::Belt, StatusKind::Mat, "8"));
        let _ = reduce(&before, EditorAction::AddCharacter);

        assert_eq!(before, snapshot);
    }

    // =========================================================================
    // Invariants over arbitrary edit sequences
    // =========================================================================

    fn arb_status() -> impl Strategy<Value = StatusKind> {
        proptest::sample::select(StatusKind::ALL.to_vec())
    }

    fn arb_slot() -> impl Strategy<Value = EquipmentSlot> {
        proptest::sample::select(EquipmentSlot::ALL.to_vec())
    }

    fn arb_text() -> impl Strategy<Value = String> {
        prop_oneof![
            "-?[0-9]{0,4}(\\.[0-9]{0,2})?",
            "[-.e a-z]{0,3}",
        ]
    }

    /// Switch targets are drawn wide on purpose; the driver range-checks them
    /// the way a caller must.
    fn arb_action() -> impl Strategy<Value = EditorAction> {
        prop_oneof![
            Just(EditorAction::AddCharacter),
            Just(EditorAction::DeleteCharacter),
            (0usize..8).prop_map(|index| EditorAction::SwitchCharacter { index }),
            "[a-z]{0,6}".prop_map(|value| EditorAction::SetName { value }),
            (arb_status(), arb_text())
                .prop_map(|(status, value)| EditorAction::SetMultiplier { status, value }),
            (arb_slot(), arb_status(), arb_text())
                .prop_map(|(slot, status, value)| EditorAction::SetFlame { slot, status, value }),
        ]
    }

    proptest! {
        #[test]
        fn index_stays_in_bounds_and_roster_never_empties(
            actions in proptest::collection::vec(arb_action(), 0..60)
        ) {
            let mut state = EditorState::default();
            for action in actions {
                if let EditorAction::SwitchCharacter { index } = action {
                    if !state.can_switch_to(index) {
                        continue;
                    }
                }
                state = reduce(&state, action);

                prop_assert!(!state.characters().is_empty());
                prop_assert!(state.index() < state.characters().len());
            }
        }

        #[test]
        fn flame_buffer_always_takes_text_and_model_follows_parse(
            prefix in proptest::collection::vec(arb_action(), 0..20),
            slot in arb_slot(),
            status in arb_status(),
            value in arb_text(),
        ) {
            let mut state = EditorState::default();
            for action in prefix {
                if let EditorAction::SwitchCharacter { index } = action {
                    if !state.can_switch_to(index) {
                        continue;
                    }
                }
                state = reduce(&state, action);
            }
            let previous = state.current().flame(slot, status);

            let next = reduce(&state, EditorAction::SetFlame { slot, status, value: value.clone() });

            prop_assert_eq!(next.input_values().flame(slot, status), value.as_str());
            let expected = crate::value_objects::parse_number(&value).unwrap_or(previous);
            prop_assert_eq!(next.current().flame(slot, status), expected);
        }
    }
}
