//! Bounded little-endian reader over a window of a byte buffer.
//!
//! Every read checks the remaining length first and fails with
//! [`MapError::Underrun`] without moving, so a failed read never leaves the
//! cursor half-advanced.

use alloc::string::String;

use crate::error::MapError;

/// The window of a buffer a parse pass may read.
#[derive(Clone, Copy, Debug)]
pub struct RasterRegion<'a> {
    data: &'a [u8],
    offset: usize,
    length: usize,
}

impl<'a> RasterRegion<'a> {
    /// Window `data[offset..offset + length]`.
    pub fn new(data: &'a [u8], offset: usize, length: usize) -> Result<Self, MapError> {
        match offset.checked_add(length) {
            Some(end) if end <= data.len() => Ok(Self {
                data,
                offset,
                length,
            }),
            _ => Err(MapError::InvalidRegion {
                offset,
                length,
                available: data.len(),
            }),
        }
    }

    /// The whole buffer.
    pub fn whole(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            length: data.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Sequential reader over a [`RasterRegion`].
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    section: &'static str,
    data: &'a [u8],
    offset: usize,
    remaining: usize,
    image_start: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(section: &'static str, region: RasterRegion<'a>) -> Self {
        Self {
            section,
            data: region.data,
            offset: region.offset,
            remaining: region.length,
            image_start: region.offset,
        }
    }

    /// Absolute offset of the next byte in the underlying buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    pub fn section(&self) -> &'static str {
        self.section
    }

    /// Rename the section reported in errors and logs.
    pub fn set_section(&mut self, section: &'static str) {
        self.section = section;
        log::debug!("SECTION {}: offset {:#x}", section, self.offset);
    }

    /// Remember the current position as the origin for [`Self::byte_at_image`].
    pub fn mark_image_start(&mut self) {
        self.image_start = self.offset;
    }

    /// Byte `index` positions past the image start, without moving the cursor.
    pub fn byte_at_image(&self, field: &'static str, index: usize) -> Result<u8, MapError> {
        let end = self.offset + self.remaining;
        self.image_start
            .checked_add(index)
            .filter(|&pos| pos < end)
            .map(|pos| self.data[pos])
            .ok_or(MapError::Underrun {
                section: self.section,
                field,
                offset: self.image_start.saturating_add(index),
            })
    }

    fn take<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], MapError> {
        let bytes = self.peek::<N>(field)?;
        self.offset += N;
        self.remaining -= N;
        Ok(bytes)
    }

    fn peek<const N: usize>(&self, field: &'static str) -> Result<[u8; N], MapError> {
        self.check(field, N)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.offset..self.offset + N]);
        Ok(buf)
    }

    #[inline]
    fn check(&self, field: &'static str, n: usize) -> Result<(), MapError> {
        if self.remaining < n {
            return Err(MapError::Underrun {
                section: self.section,
                field,
                offset: self.offset,
            });
        }
        Ok(())
    }

    pub fn skip(&mut self, field: &'static str, n: usize) -> Result<(), MapError> {
        self.check(field, n)?;
        self.offset += n;
        self.remaining -= n;
        Ok(())
    }

    #[inline]
    pub fn read_u8(&mut self, field: &'static str) -> Result<u8, MapError> {
        self.check(field, 1)?;
        let b = self.data[self.offset];
        self.offset += 1;
        self.remaining -= 1;
        Ok(b)
    }

    pub fn read_u16(&mut self, field: &'static str) -> Result<u16, MapError> {
        self.take(field).map(u16::from_le_bytes)
    }

    /// 16-bit value whose high byte carries a parity bit in bit 0.
    pub fn read_u16_parity_stripped(&mut self, field: &'static str) -> Result<u16, MapError> {
        let [lo, hi] = self.take::<2>(field)?;
        Ok((u16::from(hi ^ 1) << 7) ^ u16::from(lo))
    }

    pub fn read_u32(&mut self, field: &'static str) -> Result<u32, MapError> {
        self.take(field).map(u32::from_le_bytes)
    }

    pub fn peek_u32(&self, field: &'static str) -> Result<u32, MapError> {
        self.peek(field).map(u32::from_le_bytes)
    }

    pub fn read_f32(&mut self, field: &'static str) -> Result<f32, MapError> {
        self.take(field).map(f32::from_le_bytes)
    }

    /// String with a one-byte length prefix.
    pub fn read_string(&mut self, field: &'static str) -> Result<String, MapError> {
        self.check(field, 1)?;
        let len = usize::from(self.data[self.offset]);
        self.check(field, 1 + len)?;
        let start = self.offset + 1;
        let text = core::str::from_utf8(&self.data[start..start + len]).map_err(|_| {
            MapError::InvalidString {
                section: self.section,
                field,
                offset: start,
            }
        })?;
        self.offset = start + len;
        self.remaining -= 1 + len;
        Ok(String::from(text))
    }

    /// Report bytes left over once parsing is done.
    pub fn finish(&self) {
        if self.remaining == 0 {
            log::debug!("{}: all of the data has been processed", self.section);
        } else {
            log::warn!("{}: {} bytes remained in the buffer", self.section, self.remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_rejects_window_past_end() {
        let data = [0u8; 4];
        assert!(RasterRegion::new(&data, 2, 2).is_ok());
        assert!(matches!(
            RasterRegion::new(&data, 3, 2),
            Err(MapError::InvalidRegion { offset: 3, length: 2, available: 4 })
        ));
        assert!(RasterRegion::new(&data, usize::MAX, 2).is_err());
    }

    #[test]
    fn reads_little_endian() {
        let data = [0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12, 0x00, 0x00, 0x80, 0x3f];
        let mut c = Cursor::new("test", RasterRegion::whole(&data));
        assert_eq!(c.read_u8("a").unwrap(), 1);
        assert_eq!(c.read_u16("b").unwrap(), 0x1234);
        assert_eq!(c.peek_u32("c").unwrap(), 0x1234_5678);
        assert_eq!(c.offset(), 3);
        assert_eq!(c.read_u32("c").unwrap(), 0x1234_5678);
        assert_eq!(c.read_f32("d").unwrap(), 1.0);
        assert!(c.is_empty());
    }

    #[test]
    fn underrun_leaves_state_untouched() {
        let data = [1u8, 2, 3];
        let mut c = Cursor::new("sec", RasterRegion::whole(&data));
        c.skip("pad", 1).unwrap();
        let err = c.read_u32("value").unwrap_err();
        match err {
            MapError::Underrun {
                section,
                field,
                offset,
            } => {
                assert_eq!(section, "sec");
                assert_eq!(field, "value");
                assert_eq!(offset, 1);
            }
            other => panic!("expected Underrun, got {other:?}"),
        }
        assert_eq!(c.offset(), 1);
        assert_eq!(c.remaining(), 2);
        assert!(c.skip("pad", 3).is_err());
        assert_eq!(c.read_u16("ok").unwrap(), 0x0302);
    }

    #[test]
    fn region_bounds_reads_not_buffer_bounds() {
        let data = [9u8; 8];
        let mut c = Cursor::new("sec", RasterRegion::new(&data, 2, 3).unwrap());
        assert_eq!(c.offset(), 2);
        c.skip("a", 3).unwrap();
        assert!(c.read_u8("b").is_err());
    }

    #[test]
    fn string_with_length_prefix() {
        let data = [5, b'h', b'a', b'l', b'l', b'e', 4, b'x'];
        let mut c = Cursor::new("rooms", RasterRegion::whole(&data));
        assert_eq!(c.read_string("name").unwrap(), "halle");
        // Truncated payload: the length prefix stays unread.
        assert!(c.read_string("name").is_err());
        assert_eq!(c.offset(), 6);
        assert_eq!(c.remaining(), 2);
    }

    #[test]
    fn string_rejects_invalid_utf8() {
        let data = [2, 0xff, 0xfe];
        let mut c = Cursor::new("rooms", RasterRegion::whole(&data));
        assert!(matches!(
            c.read_string("name"),
            Err(MapError::InvalidString { offset: 1, .. })
        ));
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn parity_stripped_u16() {
        // hi = 0x01 -> parity cleared, value = lo
        let data = [0x2a, 0x01, 0x05, 0x00];
        let mut c = Cursor::new("pose", RasterRegion::whole(&data));
        assert_eq!(c.read_u16_parity_stripped("x").unwrap(), 0x2a);
        assert_eq!(c.read_u16_parity_stripped("y").unwrap(), (1 << 7) ^ 5);
    }

    #[test]
    fn image_lookup_is_random_access() {
        let data = [0u8, 0, 7, 8, 9];
        let mut c = Cursor::new("map", RasterRegion::whole(&data));
        c.skip("header", 2).unwrap();
        c.mark_image_start();
        assert_eq!(c.byte_at_image("pixel", 1).unwrap(), 8);
        assert_eq!(c.offset(), 2);
        assert!(c.byte_at_image("pixel", 3).is_err());
        assert_eq!(c.read_u8("pixel").unwrap(), 7);
    }

    #[test]
    fn section_follows_renames_and_finish_reports_leftovers() {
        let data = [1u8, 2, 3];
        let mut c = Cursor::new("header", RasterRegion::whole(&data));
        assert_eq!(c.section(), "header");
        c.read_u8("version").unwrap();
        c.set_section("rooms");
        assert_eq!(c.section(), "rooms");
        assert_eq!(c.offset(), 1);
        match c.read_u32("count") {
            Err(MapError::Underrun {
                section,
                field,
                offset,
            }) => {
                assert_eq!(section, "rooms");
                assert_eq!(field, "count");
                assert_eq!(offset, 1);
            }
            other => panic!("expected Underrun, got {other:?}"),
        }
        // Leftover bytes are only reported.
        c.finish();
        assert!(!c.is_empty());
        c.skip("rest", 2).unwrap();
        assert!(c.is_empty());
        c.finish();
        assert_eq!(c.remaining(), 0);
    }
}
