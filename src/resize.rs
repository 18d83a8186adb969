use alloc::vec::Vec;

use imgref::{ImgRef, ImgVec};
use rgb::RGBA8;

/// Source index sampled for destination index `d` (pixel-centre mapping).
#[inline]
fn nearest(d: usize, src: usize, dst: usize) -> usize {
    ((2 * d + 1) * src / (2 * dst)).min(src - 1)
}

/// Scale `src` to `width` x `height` by nearest-neighbour sampling.
///
/// Every output pixel is a copy of exactly one source pixel, so
/// classification edges stay hard.
pub(crate) fn resize_nearest(src: ImgRef<'_, RGBA8>, width: usize, height: usize) -> ImgVec<RGBA8> {
    let (sw, sh) = (src.width(), src.height());
    debug_assert!(sw > 0 && sh > 0 && width > 0 && height > 0);
    let columns: Vec<usize> = (0..width).map(|x| nearest(x, sw, width)).collect();
    let buf = src.buf();
    let stride = src.stride();
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        let row = &buf[nearest(y, sh, height) * stride..][..sw];
        out.extend(columns.iter().map(|&sx| row[sx]));
    }
    ImgVec::new(out, width, height)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn px(v: u8) -> RGBA8 {
        RGBA8::new(v, v, v, 255)
    }

    #[test]
    fn doubling_repeats_each_pixel() {
        let src = ImgVec::new(vec![px(1), px(2), px(3), px(4)], 2, 2);
        let out = resize_nearest(src.as_ref(), 4, 4);
        let values: Vec<u8> = out.buf().iter().map(|p| p.r).collect();
        assert_eq!(
            values,
            [1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 4, 4, 3, 3, 4, 4]
        );
    }

    #[test]
    fn shrinking_only_picks_existing_colors() {
        let src = ImgVec::new((0..9).map(px).collect(), 3, 3);
        let out = resize_nearest(src.as_ref(), 2, 1);
        assert_eq!(out.width(), 2);
        assert_eq!(out.height(), 1);
        // Row 1 is sampled; columns 0 and 2.
        assert_eq!(out.buf()[0].r, 3);
        assert_eq!(out.buf()[1].r, 5);
    }
}
