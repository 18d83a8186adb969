//! Raster map decoder.
//!
//! The firmware stores the map bottom row first, so the decoder consumes
//! trims in storage order (bottom rows, then left/right per row, then top
//! rows) and writes each row into the output from the bottom up.

use alloc::collections::BTreeSet;
use alloc::vec;

use enough::Stop;
use imgref::ImgVec;
use rgb::RGBA8;

use crate::cell::CellClass;
use crate::config::{ImageConfig, TrimPixels};
use crate::cursor::{Cursor, RasterRegion};
use crate::error::MapError;
use crate::limits::Limits;
use crate::palette::{DefaultRoomPalette, Palette, RoomPalette};
use crate::resize::resize_nearest;
use crate::rooms::RoomTable;

/// Result of decoding one raster.
#[derive(Clone, Debug, Default)]
pub struct DecodedMap {
    /// Rendered map, or `None` when trimming leaves nothing to draw.
    pub image: Option<ImgVec<RGBA8>>,
    /// Per-room bounds in raster pixel coordinates (before trim and flip).
    pub rooms: RoomTable,
    /// Rooms with at least one cell marked cleaned.
    pub cleaned_rooms: BTreeSet<u8>,
    /// Cleaned-area overlay, same size as `image`, if requested.
    pub cleaned_area_layer: Option<ImgVec<RGBA8>>,
    /// Raster bytes that matched no known classification.
    pub unknown_values: BTreeSet<u8>,
    /// Cells removed from each edge.
    pub trim: TrimPixels,
}

impl DecodedMap {
    /// The "nothing to draw" result.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none()
    }
}

/// Builder for a raster decode.
///
/// ```no_run
/// use vacmap::{DecodeRequest, ImageConfig, Unstoppable};
///
/// let raster: &[u8] = &[]; // decrypted map bytes, width * height long
/// let decoded = DecodeRequest::new(raster, 800, 800)
///     .with_config(ImageConfig::default())
///     .with_cleaned_area_layer(true)
///     .decode(Unstoppable)?;
/// for (id, bounds) in decoded.rooms.iter() {
///     println!("room {id}: {bounds:?}");
/// }
/// # Ok::<(), vacmap::MapError>(())
/// ```
#[derive(Clone, Copy)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    config: ImageConfig,
    palette: Palette,
    room_palette: &'a dyn RoomPalette,
    cleaned_area_layer: bool,
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    /// Decode `data` as a `width` x `height` raster, one byte per cell.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
            config: ImageConfig::default(),
            palette: Palette::default(),
            room_palette: &DefaultRoomPalette,
            cleaned_area_layer: false,
            limits: None,
        }
    }

    pub fn with_config(mut self, config: ImageConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_room_palette(mut self, room_palette: &'a dyn RoomPalette) -> Self {
        self.room_palette = room_palette;
        self
    }

    /// Also produce an overlay marking cells of cleaned rooms.
    pub fn with_cleaned_area_layer(mut self, enabled: bool) -> Self {
        self.cleaned_area_layer = enabled;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<DecodedMap, MapError> {
        decode_raster(&self, &stop)
    }
}

fn decode_raster(req: &DecodeRequest<'_>, stop: &dyn Stop) -> Result<DecodedMap, MapError> {
    let (width, height) = (req.width, req.height);
    req.config.validate()?;
    let cell_count = (width as usize)
        .checked_mul(height as usize)
        .ok_or(MapError::DimensionsTooLarge { width, height })?;

    let trim = req.config.trim_pixels(width, height);
    log::debug!(
        "trim_bottom = {}, trim_top = {}, trim_left = {}, trim_right = {}",
        trim.bottom,
        trim.top,
        trim.left,
        trim.right
    );
    let Some((tw, th)) = req.config.trimmed_size(width, height) else {
        log::debug!("map of {width}x{height} trimmed to nothing");
        return Ok(DecodedMap::empty());
    };
    let (sw, sh) = req.config.scaled_size(tw, th);

    if let Some(limits) = req.limits {
        let layers = 1 + u64::from(req.cleaned_area_layer);
        limits.check_output(tw, th, layers)?;
        limits.check_output(sw, sh, layers)?;
    }
    stop.check()?;

    let region = RasterRegion::new(req.data, 0, cell_count.min(req.data.len()))?;
    let mut buf = Cursor::new("MapImage", region);

    let (tw, th) = (tw as usize, th as usize);
    if req.data.len() < cell_count {
        check_coverage(buf.clone(), trim, width as usize, tw, th)?;
    }
    let row_skip = |rows: u32| (rows as usize) * (width as usize);
    let mut pixels = vec![RGBA8::default(); tw * th];
    let mut cleaned = req
        .cleaned_area_layer
        .then(|| vec![RGBA8::default(); tw * th]);
    let mut rooms = RoomTable::new();
    let mut cleaned_rooms = BTreeSet::new();
    let mut unknown_values = BTreeSet::new();
    let colors = &req.palette.table;

    buf.skip("trim_bottom", row_skip(trim.bottom))?;
    for img_y in 0..th {
        if img_y % 16 == 0 {
            stop.check()?;
        }
        buf.skip("trim_left", trim.left as usize)?;
        let y = th - 1 - img_y;
        let out_row = y * tw;
        for img_x in 0..tw {
            let byte = buf.read_u8("pixel")?;
            let color = match CellClass::classify(byte) {
                CellClass::Outside => colors.outside,
                CellClass::Wall => colors.wall,
                CellClass::Scan => colors.scan,
                CellClass::NewlyDiscovered => colors.new_discovered_area,
                CellClass::Room { id, selected } => {
                    if selected {
                        cleaned_rooms.insert(id);
                        if let Some(layer) = cleaned.as_mut() {
                            layer[out_row + img_x] = req.palette.cleaned_area;
                        }
                    }
                    let room_x = img_x as u32 + trim.left;
                    let room_y = img_y as u32 + trim.bottom;
                    rooms.include(id, room_x, room_y);
                    req.room_palette.room_color(id)
                }
                CellClass::Unknown(raw) => {
                    unknown_values.insert(raw);
                    log::debug!("unknown pixel [{img_x},{y}] = {raw}");
                    req.palette.unknown
                }
            };
            pixels[out_row + img_x] = color;
        }
        buf.skip("trim_right", trim.right as usize)?;
    }
    buf.skip("trim_top", row_skip(trim.top))?;
    buf.finish();

    let mut image = ImgVec::new(pixels, tw, th);
    let mut cleaned_area_layer = cleaned.map(|layer| ImgVec::new(layer, tw, th));
    if req.config.scale != 1.0 {
        let (sw, sh) = (sw as usize, sh as usize);
        image = resize_nearest(image.as_ref(), sw, sh);
        cleaned_area_layer = cleaned_area_layer.map(|layer| resize_nearest(layer.as_ref(), sw, sh));
    }

    if !unknown_values.is_empty() {
        log::warn!("unknown pixel types: {unknown_values:?}");
    }
    log::debug!("number of rooms: {}", rooms.len());

    Ok(DecodedMap {
        image: Some(image),
        rooms,
        cleaned_rooms,
        cleaned_area_layer,
        unknown_values,
        trim,
    })
}

/// Walks the reads of a decode without painting, so a short buffer fails
/// with the same field and offset before any output is allocated.
fn check_coverage(
    mut buf: Cursor<'_>,
    trim: TrimPixels,
    width: usize,
    tw: usize,
    th: usize,
) -> Result<(), MapError> {
    buf.skip("trim_bottom", trim.bottom as usize * width)?;
    for _ in 0..th {
        buf.skip("trim_left", trim.left as usize)?;
        let available = tw.min(buf.remaining());
        buf.skip("pixel", available)?;
        if available < tw {
            buf.read_u8("pixel")?;
        }
        buf.skip("trim_right", trim.right as usize)?;
    }
    buf.skip("trim_top", trim.top as usize * width)
}
