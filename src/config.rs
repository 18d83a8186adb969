use alloc::format;

use crate::error::MapError;

/// Percentage of the source map removed from each edge, 0–100.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Trim {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// How the raster is cropped and scaled into the output bitmap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageConfig {
    pub trim: Trim,
    /// Output pixels per raster cell. Must be finite and positive.
    pub scale: f64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            trim: Trim::default(),
            scale: 1.0,
        }
    }
}

/// Edge trims resolved to whole raster cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrimPixels {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl ImageConfig {
    pub(crate) fn validate(&self) -> Result<(), MapError> {
        let edges = [
            ("left", self.trim.left),
            ("right", self.trim.right),
            ("top", self.trim.top),
            ("bottom", self.trim.bottom),
        ];
        for (edge, pct) in edges {
            if !(0.0..=100.0).contains(&pct) {
                return Err(MapError::InvalidConfig(format!(
                    "{edge} trim {pct} is outside 0..=100"
                )));
            }
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(MapError::InvalidConfig(format!(
                "scale {} must be finite and positive",
                self.scale
            )));
        }
        Ok(())
    }

    /// Trims in cells for a `width` x `height` raster, truncated toward zero.
    pub fn trim_pixels(&self, width: u32, height: u32) -> TrimPixels {
        let cells = |pct: f64, dim: u32| (pct * f64::from(dim) / 100.0) as u32;
        TrimPixels {
            left: cells(self.trim.left, width),
            right: cells(self.trim.right, width),
            top: cells(self.trim.top, height),
            bottom: cells(self.trim.bottom, height),
        }
    }

    /// Output size before scaling, or `None` if trimming removes everything.
    pub fn trimmed_size(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        let trim = self.trim_pixels(width, height);
        let w = width.checked_sub(trim.left)?.checked_sub(trim.right)?;
        let h = height.checked_sub(trim.top)?.checked_sub(trim.bottom)?;
        (w > 0 && h > 0).then_some((w, h))
    }

    /// Output size after scaling; never collapses below one pixel.
    pub fn scaled_size(&self, width: u32, height: u32) -> (u32, u32) {
        let scale = |dim: u32| ((f64::from(dim) * self.scale) as u32).max(1);
        (scale(width), scale(height))
    }
}
