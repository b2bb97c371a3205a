//! Room-type catalog — the closed set of room categories a dungeon may contain.
//!
//! Every room type carries a stable bit index into the room filter mask. The
//! index is assigned here and shared with the maze backend's route schema; it
//! is never derived from the order form controls happen to be registered in,
//! so rearranging the page cannot silently change the wire format.

use serde::{Deserialize, Serialize};

/// A room category that may appear in a generated dungeon.
///
/// The discriminant is the room type's bit position in the filter mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum RoomType {
    Prison = 0,
    Treasure = 1,
    Trap = 2,
    MonsterLair = 3,
    Secret = 4,
    Armory = 5,
    Library = 6,
    AlchemyLab = 7,
    Puzzle = 8,
    MagicChamber = 9,
}

/// Display metadata for a room type.
#[derive(Debug, Clone)]
pub struct RoomTypeInfo {
    /// Label shown next to the room-type control; also the key preset
    /// definitions use to name required rooms.
    pub label: &'static str,
    /// Single-character marker used in textual map renderings.
    pub symbol: char,
    /// Color the backend paints this room category with.
    pub color: &'static str,
}

impl RoomType {
    pub fn info(&self) -> RoomTypeInfo {
        match self {
            Self::Prison => RoomTypeInfo {
                label: "Prison Room",
                symbol: 'E',
                color: "Dark Grey",
            },
            Self::Treasure => RoomTypeInfo {
                label: "Treasure Room",
                symbol: 'T',
                color: "Gold",
            },
            Self::Trap => RoomTypeInfo {
                label: "Trap Room",
                symbol: 'X',
                color: "Orange",
            },
            Self::MonsterLair => RoomTypeInfo {
                label: "Monster Lair",
                symbol: 'M',
                color: "Blue",
            },
            Self::Secret => RoomTypeInfo {
                label: "Secret Room",
                symbol: 'S',
                color: "Pink",
            },
            Self::Armory => RoomTypeInfo {
                label: "Armory",
                symbol: 'A',
                color: "Silver",
            },
            Self::Library => RoomTypeInfo {
                label: "Library",
                symbol: 'B',
                color: "Brown",
            },
            Self::AlchemyLab => RoomTypeInfo {
                label: "Alchemy Lab",
                symbol: 'L',
                color: "Dark Green",
            },
            Self::Puzzle => RoomTypeInfo {
                label: "Puzzle Room",
                symbol: 'Z',
                color: "Cyan",
            },
            Self::MagicChamber => RoomTypeInfo {
                label: "Magic Chamber",
                symbol: 'C',
                color: "Purple",
            },
        }
    }

    /// Bit position of this room type in the room filter mask.
    pub fn bit(self) -> u8 {
        self as u8
    }

    pub fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Self::Prison),
            1 => Some(Self::Treasure),
            2 => Some(Self::Trap),
            3 => Some(Self::MonsterLair),
            4 => Some(Self::Secret),
            5 => Some(Self::Armory),
            6 => Some(Self::Library),
            7 => Some(Self::AlchemyLab),
            8 => Some(Self::Puzzle),
            9 => Some(Self::MagicChamber),
            _ => None,
        }
    }

    /// Look up a room type by its control label. Unknown labels yield `None`
    /// rather than an error; preset entries naming a room the form does not
    /// know are simply never matched.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.info().label == label)
    }

    /// All room types in bit order.
    pub fn all() -> &'static [RoomType] {
        &[
            RoomType::Prison,
            RoomType::Treasure,
            RoomType::Trap,
            RoomType::MonsterLair,
            RoomType::Secret,
            RoomType::Armory,
            RoomType::Library,
            RoomType::AlchemyLab,
            RoomType::Puzzle,
            RoomType::MagicChamber,
        ]
    }
}

/// Set of enabled room types, stored as the wire-format bitmask.
///
/// Bit `i` corresponds to [`RoomType::from_bit`]`(i)`, so `bits()` is exactly
/// the `rf` value the backend route expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSet(u32);

impl RoomSet {
    pub const fn empty() -> Self {
        RoomSet(0)
    }

    /// Set with every known room type enabled.
    pub fn full() -> Self {
        RoomSet((1 << RoomType::all().len()) - 1)
    }

    /// Build a set from raw mask bits, discarding bits with no corresponding
    /// room type.
    pub fn from_bits(bits: u32) -> Self {
        RoomSet(bits & Self::full().0)
    }

    pub fn from_rooms(rooms: &[RoomType]) -> Self {
        let mut set = Self::empty();
        for room in rooms {
            set.insert(*room);
        }
        set
    }

    pub fn insert(&mut self, room: RoomType) {
        self.0 |= 1 << room.bit();
    }

    pub fn remove(&mut self, room: RoomType) {
        self.0 &= !(1 << room.bit());
    }

    pub fn set(&mut self, room: RoomType, enabled: bool) {
        if enabled {
            self.insert(room);
        } else {
            self.remove(room);
        }
    }

    pub fn contains(self, room: RoomType) -> bool {
        self.0 & (1 << room.bit()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// The wire-format `rf` mask.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Enabled room types in bit order.
    pub fn iter(self) -> impl Iterator<Item = RoomType> {
        RoomType::all().iter().copied().filter(move |r| self.contains(*r))
    }
}
