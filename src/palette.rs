//! Display colours for raster classifications.

use rgb::RGBA8;

use crate::cell::ROOM_MIN;

const fn rgba(r: u8, g: u8, b: u8, a: u8) -> RGBA8 {
    RGBA8 { r, g, b, a }
}

/// Colours for the fixed (non-room) raster codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorTable {
    pub outside: RGBA8,
    pub wall: RGBA8,
    pub scan: RGBA8,
    pub new_discovered_area: RGBA8,
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            outside: rgba(0, 0, 0, 0),
            wall: rgba(93, 109, 126, 255),
            scan: rgba(0xDF, 0xDF, 0xDF, 255),
            new_discovered_area: rgba(0xFF, 0xFF, 0xFF, 255),
        }
    }
}

/// Everything the raster decoder paints that is not a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub table: ColorTable,
    /// Cells with an unrecognized byte.
    pub unknown: RGBA8,
    /// Overlay colour for cells of cleaned rooms.
    pub cleaned_area: RGBA8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            table: ColorTable::default(),
            unknown: rgba(0, 0, 0, 255),
            cleaned_area: rgba(127, 127, 127, 127),
        }
    }
}

/// Maps a room id to its fill colour.
pub trait RoomPalette {
    fn room_color(&self, room: u8) -> RGBA8;
}

impl<F: Fn(u8) -> RGBA8> RoomPalette for F {
    fn room_color(&self, room: u8) -> RGBA8 {
        self(room)
    }
}

const ROOM_COLORS: [RGBA8; 16] = [
    rgba(240, 178, 122, 255),
    rgba(133, 193, 233, 255),
    rgba(217, 136, 128, 255),
    rgba(52, 152, 219, 255),
    rgba(205, 97, 85, 255),
    rgba(243, 156, 18, 255),
    rgba(88, 214, 141, 255),
    rgba(245, 176, 65, 255),
    rgba(252, 212, 81, 255),
    rgba(72, 201, 176, 255),
    rgba(84, 153, 199, 255),
    rgba(133, 193, 233, 255),
    rgba(245, 176, 65, 255),
    rgba(82, 190, 128, 255),
    rgba(72, 201, 176, 255),
    rgba(165, 105, 189, 255),
];

/// Cycles a fixed 16-colour table by room id.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultRoomPalette;

impl RoomPalette for DefaultRoomPalette {
    fn room_color(&self, room: u8) -> RGBA8 {
        ROOM_COLORS[usize::from(room.wrapping_sub(ROOM_MIN)) % ROOM_COLORS.len()]
    }
}
