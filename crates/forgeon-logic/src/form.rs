//! Generation form state — the one mutable record in the request builder.
//!
//! The web page owns live copies of these fields; this module models them as
//! an explicit struct handed to plain functions, so preset application and
//! route encoding stay testable without a DOM. Numeric fields read `0` when
//! the source control is empty or unparsable — absent input is "unspecified",
//! never an error, and the backend decides what to make of a zero.

use serde::{Deserialize, Serialize};

use crate::rooms::RoomSet;

/// Current values of the generation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub width: u32,
    pub height: u32,
    pub room_count: u32,
    pub max_room_size: u32,
    /// Room-type controls currently checked.
    pub enabled_rooms: RoomSet,
}

/// Raw field text as read from the form controls, before normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormInputs<'a> {
    pub width: &'a str,
    pub height: &'a str,
    pub room_count: &'a str,
    pub max_room_size: &'a str,
    pub enabled_rooms: RoomSet,
}

/// Normalize a numeric field: empty or unparsable input reads as zero.
pub fn int_or_zero(field: &str) -> u32 {
    field.trim().parse().unwrap_or(0)
}

impl FormState {
    /// Build a form state from raw field text.
    pub fn from_inputs(inputs: &FormInputs) -> Self {
        FormState {
            width: int_or_zero(inputs.width),
            height: int_or_zero(inputs.height),
            room_count: int_or_zero(inputs.room_count),
            max_room_size: int_or_zero(inputs.max_room_size),
            enabled_rooms: inputs.enabled_rooms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rooms::{RoomSet, RoomType};

    #[test]
    fn int_or_zero_parses_digits() {
        assert_eq!(int_or_zero("20"), 20);
        assert_eq!(int_or_zero("0"), 0);
        assert_eq!(int_or_zero(" 7 "), 7);
    }

    #[test]
    fn int_or_zero_empty_is_zero() {
        assert_eq!(int_or_zero(""), 0);
        assert_eq!(int_or_zero("   "), 0);
    }

    #[test]
    fn int_or_zero_garbage_is_zero() {
        assert_eq!(int_or_zero("abc"), 0);
        assert_eq!(int_or_zero("12abc"), 0);
        assert_eq!(int_or_zero("-5"), 0);
        assert_eq!(int_or_zero("3.5"), 0);
    }

    #[test]
    fn from_inputs_normalizes_every_field() {
        let inputs = FormInputs {
            width: "20",
            height: "15",
            room_count: "",
            max_room_size: "8",
            enabled_rooms: RoomSet::from_rooms(&[RoomType::Treasure]),
        };
        let form = FormState::from_inputs(&inputs);
        assert_eq!(form.width, 20);
        assert_eq!(form.height, 15);
        assert_eq!(form.room_count, 0, "empty field reads as zero");
        assert_eq!(form.max_room_size, 8);
        assert!(form.enabled_rooms.contains(RoomType::Treasure));
    }

    #[test]
    fn default_form_is_blank() {
        let form = FormState::default();
        assert_eq!(form.width, 0);
        assert_eq!(form.height, 0);
        assert_eq!(form.room_count, 0);
        assert_eq!(form.max_room_size, 0);
        assert!(form.enabled_rooms.is_empty());
    }
}
