use crate::error::MapError;

/// Resource limits for map decoding.
///
/// All fields default to `None` (no limit). Limits apply to the final
/// output, after trimming and scaling, so a caller can bound the work a
/// decode does before anything is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum pixel count of one output bitmap.
    pub max_pixels: Option<u64>,
    /// Maximum bytes across all output bitmaps (base image and overlays).
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check an output of `layers` RGBA bitmaps, each `width` x `height`.
    pub(crate) fn check_output(&self, width: u32, height: u32, layers: u64) -> Result<(), MapError> {
        if let Some(max_w) = self.max_width.filter(|&max| width > max) {
            return Err(MapError::LimitExceeded(alloc::format!(
                "width {width} exceeds limit {max_w}"
            )));
        }
        if let Some(max_h) = self.max_height.filter(|&max| height > max) {
            return Err(MapError::LimitExceeded(alloc::format!(
                "height {height} exceeds limit {max_h}"
            )));
        }
        let pixels = u64::from(width) * u64::from(height);
        if let Some(max_px) = self.max_pixels.filter(|&max| pixels > max) {
            return Err(MapError::LimitExceeded(alloc::format!(
                "pixel count {pixels} exceeds limit {max_px}"
            )));
        }
        let bytes = pixels.saturating_mul(4).saturating_mul(layers);
        if let Some(max_mem) = self.max_memory_bytes.filter(|&max| bytes > max) {
            return Err(MapError::LimitExceeded(alloc::format!(
                "allocation {bytes} bytes exceeds memory limit {max_mem}"
            )));
        }
        Ok(())
    }
}
