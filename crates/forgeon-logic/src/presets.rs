//! Dungeon preset catalog and preset application.
//!
//! A preset is a named bundle of generation parameters: the room types it
//! requires, a floor on the room count, a room-size ceiling, and default
//! dimensions. Selecting one seeds the form; the user can keep editing
//! afterwards and nothing reconciles their edits against the preset.
//!
//! Extending the catalog is a data change: add a record to `PRESETS`.

use crate::form::FormState;
use crate::rooms::{RoomSet, RoomType};

/// A named, predefined bundle of generation parameters.
#[derive(Debug, Clone)]
pub struct PresetConfig {
    /// Unique key the form's preset controls carry as their value.
    pub name: &'static str,
    /// Room types enabled when this preset is chosen; everything else is
    /// turned off.
    pub required_rooms: &'static [RoomType],
    /// Floor on the room count. Application never lowers a larger user value.
    pub min_rooms: u32,
    pub max_room_size: u32,
    /// Width and height applied on selection, when the preset carries them.
    pub default_dimensions: Option<(u32, u32)>,
}

const PRESETS: &[PresetConfig] = &[
    PresetConfig {
        name: "Tomb",
        required_rooms: &[RoomType::Treasure, RoomType::Trap, RoomType::Secret],
        min_rooms: 5,
        max_room_size: 10,
        default_dimensions: Some((30, 30)),
    },
    PresetConfig {
        name: "Labyrinth",
        required_rooms: &[
            RoomType::Treasure,
            RoomType::Trap,
            RoomType::MonsterLair,
            RoomType::Library,
            RoomType::Puzzle,
        ],
        min_rooms: 5,
        max_room_size: 10,
        default_dimensions: Some((30, 30)),
    },
    PresetConfig {
        name: "Trick-Or-Treat",
        required_rooms: &[RoomType::Treasure, RoomType::Trap],
        min_rooms: 2,
        max_room_size: 10,
        default_dimensions: Some((30, 30)),
    },
    PresetConfig {
        name: "Wizard Tower",
        required_rooms: &[
            RoomType::Treasure,
            RoomType::Secret,
            RoomType::Library,
            RoomType::AlchemyLab,
            RoomType::MagicChamber,
        ],
        min_rooms: 5,
        max_room_size: 10,
        default_dimensions: Some((30, 30)),
    },
    PresetConfig {
        name: "Stronghold",
        required_rooms: &[
            RoomType::Treasure,
            RoomType::Armory,
            RoomType::Prison,
            RoomType::Secret,
        ],
        min_rooms: 5,
        max_room_size: 10,
        default_dimensions: Some((30, 30)),
    },
];

/// All shipped presets.
pub fn presets() -> &'static [PresetConfig] {
    PRESETS
}

/// Look up a preset by name. Exact match; unknown names yield `None` and
/// callers no-op rather than fail.
pub fn lookup(name: &str) -> Option<&'static PresetConfig> {
    PRESETS.iter().find(|p| p.name == name)
}

/// Apply a preset to the current form state.
///
/// An empty or unknown name leaves the form untouched. Otherwise:
/// the room count is raised to the preset's floor (never lowered), the
/// room-size ceiling and any default dimensions override the current values,
/// and the enabled room types are replaced wholesale by the preset's
/// required set — selecting preset B after preset A clears A's selections
/// that B does not also require.
pub fn apply_preset(name: &str, form: &mut FormState) {
    let preset = match lookup(name) {
        Some(preset) => preset,
        None => return,
    };

    form.room_count = preset.min_rooms.max(form.room_count);
    form.max_room_size = preset.max_room_size;
    if let Some((width, height)) = preset.default_dimensions {
        form.width = width;
        form.height = height;
    }
    form.enabled_rooms = RoomSet::from_rooms(preset.required_rooms);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_presets() {
        assert_eq!(presets().len(), 5);
    }

    #[test]
    fn lookup_known_names() {
        for preset in presets() {
            let found = lookup(preset.name);
            assert!(found.is_some(), "{} must be in the catalog", preset.name);
        }
    }

    #[test]
    fn lookup_unknown_is_none() {
        assert!(lookup("Crypt").is_none());
        assert!(lookup("tomb").is_none(), "names are exact-match");
        assert!(lookup("").is_none());
    }

    #[test]
    fn preset_names_are_unique() {
        let names: std::collections::HashSet<&str> =
            presets().iter().map(|p| p.name).collect();
        assert_eq!(names.len(), presets().len());
    }

    #[test]
    fn every_preset_requires_at_least_one_room() {
        for preset in presets() {
            assert!(
                !preset.required_rooms.is_empty(),
                "{} requires no rooms",
                preset.name
            );
            assert!(preset.max_room_size > 0);
        }
    }

    #[test]
    fn apply_unknown_name_is_noop() {
        let mut form = FormState {
            width: 12,
            room_count: 3,
            ..FormState::default()
        };
        let before = form.clone();
        apply_preset("Crypt", &mut form);
        assert_eq!(form, before);
        apply_preset("", &mut form);
        assert_eq!(form, before);
    }

    #[test]
    fn trick_or_treat_on_blank_form() {
        let mut form = FormState::default();
        apply_preset("Trick-Or-Treat", &mut form);
        assert_eq!(form.room_count, 2);
        assert_eq!(form.max_room_size, 10);
        assert_eq!(form.width, 30);
        assert_eq!(form.height, 30);
        let enabled: Vec<RoomType> = form.enabled_rooms.iter().collect();
        assert_eq!(enabled, vec![RoomType::Treasure, RoomType::Trap]);
    }

    #[test]
    fn room_count_floor_never_lowers() {
        let mut form = FormState {
            room_count: 9,
            ..FormState::default()
        };
        apply_preset("Tomb", &mut form);
        assert_eq!(form.room_count, 9, "preset floor of 5 must not lower 9");

        let mut form = FormState {
            room_count: 1,
            ..FormState::default()
        };
        apply_preset("Tomb", &mut form);
        assert_eq!(form.room_count, 5, "preset floor of 5 must raise 1");
    }

    #[test]
    fn room_count_never_decreases_for_any_preset() {
        for preset in presets() {
            for current in [0u32, 1, 4, 8, 50] {
                let mut form = FormState {
                    room_count: current,
                    ..FormState::default()
                };
                apply_preset(preset.name, &mut form);
                assert!(
                    form.room_count >= current,
                    "{} lowered room count {} -> {}",
                    preset.name,
                    current,
                    form.room_count
                );
            }
        }
    }

    #[test]
    fn max_room_size_always_overridden() {
        let mut form = FormState {
            max_room_size: 99,
            ..FormState::default()
        };
        apply_preset("Labyrinth", &mut form);
        assert_eq!(form.max_room_size, 10, "last preset wins over manual edits");
    }

    #[test]
    fn apply_is_idempotent() {
        for preset in presets() {
            let mut once = FormState::default();
            apply_preset(preset.name, &mut once);
            let mut twice = once.clone();
            apply_preset(preset.name, &mut twice);
            assert_eq!(once, twice, "{} must be idempotent", preset.name);
        }
    }

    #[test]
    fn second_preset_resets_first_selection() {
        let mut form = FormState::default();
        apply_preset("Stronghold", &mut form);
        assert!(form.enabled_rooms.contains(RoomType::Armory));
        assert!(form.enabled_rooms.contains(RoomType::Prison));

        apply_preset("Trick-Or-Treat", &mut form);
        let expected = RoomSet::from_rooms(&[RoomType::Treasure, RoomType::Trap]);
        assert_eq!(
            form.enabled_rooms, expected,
            "none of Stronghold's extra selections survive"
        );
    }

    #[test]
    fn manual_room_toggle_survives_until_next_preset() {
        let mut form = FormState::default();
        apply_preset("Tomb", &mut form);
        form.enabled_rooms.insert(RoomType::MagicChamber);
        assert!(form.enabled_rooms.contains(RoomType::MagicChamber));

        // Re-applying performs the full reset again.
        apply_preset("Tomb", &mut form);
        assert!(!form.enabled_rooms.contains(RoomType::MagicChamber));
    }

    #[test]
    fn floor_reapplies_after_manual_lowering() {
        let mut form = FormState::default();
        apply_preset("Tomb", &mut form);
        assert_eq!(form.room_count, 5);
        form.room_count = 1;
        apply_preset("Tomb", &mut form);
        assert_eq!(form.room_count, 5, "re-selection re-applies the floor");
    }
}
