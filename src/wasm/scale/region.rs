//! Sub-region ("box") addressing.

/// A sub-rectangle of source coordinate space.
///
/// `top` is measured from the bottom of the image (bottom-up convention),
/// while destination rasters address top-down; mapping therefore flips the
/// vertical axis. Out-of-range boxes are safe: every read clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    /// Map a destination pixel into this box, flipping the vertical axis.
    ///
    /// With `snap`, the in-box offsets round to whole source pixels before
    /// the flip — the nearest-sampling path, where rounding the offset and
    /// then flipping is not the same as flipping and then rounding at exact
    /// half-pixel ties. Smooth kernels take the offsets un-rounded.
    #[inline(always)]
    pub(crate) fn map_source(
        &self,
        src_height: usize,
        dest_x: usize,
        dest_y: usize,
        dest_width: usize,
        dest_height: usize,
        snap: bool,
    ) -> (f32, f32) {
        let u = dest_x as f32 / dest_width as f32;
        let v = 1.0 - dest_y as f32 / dest_height as f32;

        let mut x = self.width as f32 * u + self.left as f32;
        let mut y_inner = self.height as f32 * v + self.top as f32;
        if snap {
            x = x.round();
            y_inner = y_inner.round();
        }

        (x, src_height as f32 - y_inner)
    }
}
