//! Room bounding boxes collected from the raster, and their map-space form.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::cell::{ROOM_COUNT, ROOM_MAX, ROOM_MIN};
use crate::transform::{MapPoint, pixel_to_map};

/// Axis-aligned bounds of one room, in raster pixel coordinates (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoomBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl RoomBounds {
    pub const fn point(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// Grow to cover `(x, y)`.
    #[inline]
    pub fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// The same corners in map coordinates.
    pub fn to_map_rect(&self) -> MapRect {
        MapRect {
            x0: pixel_to_map(self.min_x as f32),
            y0: pixel_to_map(self.min_y as f32),
            x1: pixel_to_map(self.max_x as f32),
            y1: pixel_to_map(self.max_y as f32),
        }
    }
}

/// A rectangle in map coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapRect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

/// Bounds per room id, stored in a fixed slot per possible id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomTable {
    slots: [Option<RoomBounds>; ROOM_COUNT],
}

impl Default for RoomTable {
    fn default() -> Self {
        Self {
            slots: [None; ROOM_COUNT],
        }
    }
}

impl RoomTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(id: u8) -> Option<usize> {
        (ROOM_MIN..=ROOM_MAX)
            .contains(&id)
            .then(|| usize::from(id - ROOM_MIN))
    }

    /// Record a cell of room `id`. Ids outside 10..=59 are ignored.
    #[inline]
    pub fn include(&mut self, id: u8, x: u32, y: u32) {
        let Some(slot) = Self::slot(id) else {
            return;
        };
        match &mut self.slots[slot] {
            Some(bounds) => bounds.include(x, y),
            empty => *empty = Some(RoomBounds::point(x, y)),
        }
    }

    pub fn get(&self, id: u8) -> Option<&RoomBounds> {
        Self::slot(id).and_then(|slot| self.slots[slot].as_ref())
    }

    pub fn contains(&self, id: u8) -> bool {
        self.get(id).is_some()
    }

    /// Rooms in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &RoomBounds)> + '_ {
        self.slots
            .iter()
            .zip(ROOM_MIN..=ROOM_MAX)
            .filter_map(|(slot, id)| slot.as_ref().map(|b| (id, b)))
    }

    pub fn ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.iter().map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// A room as handed to the compositor.
#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    pub id: u8,
    pub rect: MapRect,
    pub name: Option<String>,
    /// Where the room's name is drawn.
    pub label_position: Option<MapPoint>,
}

/// Room name metadata from the structured map message.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomLabel {
    pub id: u8,
    pub name: String,
    pub position: MapPoint,
}

/// Convert every room's raster bounds into map coordinates.
pub fn rooms_in_map_space(table: &RoomTable) -> BTreeMap<u8, Room> {
    table
        .iter()
        .map(|(id, bounds)| {
            let room = Room {
                id,
                rect: bounds.to_map_rect(),
                name: None,
                label_position: None,
            };
            (id, room)
        })
        .collect()
}

/// Attach names and label positions. Labels for rooms not on the raster
/// are skipped.
pub fn apply_room_labels(rooms: &mut BTreeMap<u8, Room>, labels: &[RoomLabel]) {
    for label in labels {
        match rooms.get_mut(&label.id) {
            Some(room) => {
                room.name = Some(label.name.clone());
                room.label_position = Some(label.position);
            }
            None => log::debug!("room#{}: {} not present on raster", label.id, label.name),
        }
    }
}
