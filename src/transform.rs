//! Conversion between real-world map coordinates and raster pixels.
//!
//! The firmware places the map origin at pixel (400, 400) with 20 pixels per
//! map unit on both axes.

/// Raster pixels per map unit.
pub const PIXELS_PER_UNIT: f32 = 20.0;
/// Pixel coordinate of the map origin on each axis.
pub const ORIGIN_OFFSET: f32 = 400.0;

/// A point in real-world map coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

impl MapPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A point in raster pixel coordinates (row 0 = first raster row).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[inline]
pub fn map_to_pixel(v: f32) -> f32 {
    v * PIXELS_PER_UNIT + ORIGIN_OFFSET
}

#[inline]
pub fn pixel_to_map(p: f32) -> f32 {
    (p - ORIGIN_OFFSET) / PIXELS_PER_UNIT
}

impl From<MapPoint> for PixelPoint {
    fn from(p: MapPoint) -> Self {
        PixelPoint::new(map_to_pixel(p.x), map_to_pixel(p.y))
    }
}

impl From<PixelPoint> for MapPoint {
    fn from(p: PixelPoint) -> Self {
        MapPoint::new(pixel_to_map(p.x), pixel_to_map(p.y))
    }
}
