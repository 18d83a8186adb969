//! Which room the robot is in.

use crate::cell::CellClass;
use crate::cursor::{Cursor, RasterRegion};
use crate::rooms::RoomTable;
use crate::transform::{MapPoint, PixelPoint};

/// Side length of the raster the robot position is resolved against.
pub const LOCATOR_GRID: usize = 800;

/// Room id of the cell under `position` in an untrimmed 800x800 raster.
///
/// Returns `None` for non-room cells and for positions off the raster; a
/// docked robot or one standing in a doorway is usually in neither room.
pub fn vacuum_room(raster: &[u8], position: PixelPoint) -> Option<u8> {
    log::debug!("pos on image: {position:?}");
    if position.x.is_nan() || position.y.is_nan() {
        return None;
    }
    // Truncate toward zero, so -0.5 is still column 0.
    let (x, y) = (position.x as i64, position.y as i64);
    let grid = LOCATOR_GRID as i64;
    if !(0..grid).contains(&x) || !(0..grid).contains(&y) {
        return None;
    }
    let (x, y) = (x as usize, y as usize);

    let len = raster.len().min(LOCATOR_GRID * LOCATOR_GRID);
    let mut buf = Cursor::new("MapImage", RasterRegion::whole(&raster[..len]));
    buf.mark_image_start();
    let byte = match buf.byte_at_image("vacuum_position", y * LOCATOR_GRID + x) {
        Ok(byte) => byte,
        Err(err) => {
            log::debug!("{err}");
            return None;
        }
    };
    CellClass::classify(byte).room_id()
}

/// Resolve the robot's map-space position to a room known from the raster.
///
/// Returns `None` without looking at the raster when no rooms were decoded.
pub fn current_room(raster: &[u8], rooms: &RoomTable, vacuum: MapPoint) -> Option<u8> {
    if rooms.is_empty() {
        return None;
    }
    let room = vacuum_room(raster, PixelPoint::from(vacuum));
    log::debug!("current vacuum room: {room:?}");
    room
}
