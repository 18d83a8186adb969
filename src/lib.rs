//! # vacmap
//!
//! Decoder for the raster map robot vacuums of the ijai/Viomi family report.
//!
//! The map is a row-major grid with one classification byte per cell. This
//! crate turns it into:
//!
//! - an RGBA bitmap (trimmed, flipped upright, optionally scaled),
//! - per-room bounding boxes in raster pixel coordinates,
//! - the set of rooms marked cleaned in the current run,
//! - an optional cleaned-area overlay,
//!
//! and resolves the robot's position to the room it is standing in.
//!
//! ## Raster codes
//!
//! | Byte | Meaning |
//! |---|---|
//! | `0x00` | outside the explored map |
//! | `0x01` | scanned floor |
//! | `0x02` | newly discovered floor |
//! | `0xFF` | wall |
//! | `10..=59` | room, id = byte |
//! | `60..=109` | cleaned room, id = byte − 50 |
//!
//! Anything else is drawn in the palette's `unknown` colour and reported in
//! [`DecodedMap::unknown_values`]; it never fails the decode.
//!
//! ## Non-Goals
//!
//! - Decrypting or decompressing the transport envelope (see [`Unpacker`])
//! - Decoding pose, path or zone metadata
//! - Drawing zones, walls, labels or icons on top of the bitmap
//!
//! ## Usage
//!
//! ```no_run
//! use vacmap::{DecodeRequest, ImageConfig, MapPoint, Trim, Unstoppable};
//!
//! let raster: &[u8] = &[]; // decrypted map bytes
//! let config = ImageConfig {
//!     trim: Trim { left: 10.0, right: 10.0, top: 5.0, bottom: 5.0 },
//!     scale: 2.0,
//! };
//! let decoded = DecodeRequest::new(raster, 800, 800)
//!     .with_config(config)
//!     .with_cleaned_area_layer(true)
//!     .decode(Unstoppable)?;
//!
//! let rooms = vacmap::rooms_in_map_space(&decoded.rooms);
//! let here = vacmap::current_room(raster, &decoded.rooms, MapPoint::new(1.5, -2.0));
//! if let Some(room) = here.and_then(|id| rooms.get(&id)) {
//!     println!("robot is in room {} at {:?}", room.id, room.rect);
//! }
//! # Ok::<(), vacmap::MapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod cell;
mod config;
mod cursor;
mod error;
mod limits;
mod locate;
mod palette;
mod raster;
mod resize;
mod rooms;
mod transform;
mod unpack;

// Re-exports
pub use cell::CellClass;
pub use config::{ImageConfig, Trim, TrimPixels};
pub use cursor::{Cursor, RasterRegion};
pub use enough::{Stop, Unstoppable};
pub use error::MapError;
pub use limits::Limits;
pub use locate::{LOCATOR_GRID, current_room, vacuum_room};
pub use palette::{ColorTable, DefaultRoomPalette, Palette, RoomPalette};
pub use raster::{DecodeRequest, DecodedMap};
pub use rgb::RGBA8;
pub use rooms::{MapRect, Room, RoomBounds, RoomLabel, RoomTable, apply_room_labels, rooms_in_map_space};
pub use transform::{MapPoint, ORIGIN_OFFSET, PIXELS_PER_UNIT, PixelPoint, map_to_pixel, pixel_to_map};
pub use unpack::{Unpacker, unpack_map};

/// Raw classification bytes.
pub mod codes {
    pub use crate::cell::{
        NEW_DISCOVERED_AREA, OUTSIDE, ROOM_MAX, ROOM_MIN, SCAN, SELECTED_ROOM_MAX,
        SELECTED_ROOM_MIN, WALL,
    };
}
