use alloc::string::String;
use enough::StopReason;

/// Errors from raster map decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MapError {
    /// A read or skip ran past the end of the region.
    ///
    /// `offset` is where the failing operation began. For a multi-byte skip
    /// that is the start of the skip, not the first missing byte.
    #[error("error parsing {section}.{field} at offset {offset:#x}: buffer underrun")]
    Underrun {
        section: &'static str,
        field: &'static str,
        offset: usize,
    },

    #[error("region {offset:#x}+{length} exceeds buffer of {available} bytes")]
    InvalidRegion {
        offset: usize,
        length: usize,
        available: usize,
    },

    #[error("error parsing {section}.{field} at offset {offset:#x}: invalid UTF-8")]
    InvalidString {
        section: &'static str,
        field: &'static str,
        offset: usize,
    },

    #[error("invalid image config: {0}")]
    InvalidConfig(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// The transport envelope could not be decrypted or decompressed.
    #[error("failed to unpack map envelope: {0}")]
    Unpack(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for MapError {
    fn from(r: StopReason) -> Self {
        MapError::Cancelled(r)
    }
}
