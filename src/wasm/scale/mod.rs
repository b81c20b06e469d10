//! Raster upscaling engine: nearest, bilinear, and bicubic resampling of
//! RGBA buffers, whole-image or restricted to a source sub-region.
//!
//! Every destination pixel is computed independently: map it into source
//! space, sample with the selected strategy, write four channels. All
//! source reads clamp to the raster edge, so any mapped coordinate is safe
//! and the loops themselves cannot fail; the only failure conditions are
//! caught when the views are constructed.

mod blend;
mod error;
mod pixel;
mod raster;
mod region;
mod sampler;

pub use error::ScaleError;
pub use raster::{RasterMut, RasterView};
pub use region::Region;
pub use sampler::Sampler;

/// Resample `src` to fill the whole of `dst`.
///
/// `dst` is the caller-allocated output raster; its dimensions set the
/// scale. Write order is row-major but unobservable — each pixel depends
/// only on read-only source data.
pub fn upscale(src: &RasterView<'_>, dst: &mut RasterMut<'_>, sampler: Sampler) {
    // One multiply per axis instead of `src * (dest / dest_len)`: the same
    // mapping, but an identity-size rescale gets a scale of exactly 1.0 and
    // therefore maps bit-exactly onto the source grid.
    let x_scale = src.width() as f32 / dst.width() as f32;
    let y_scale = src.height() as f32 / dst.height() as f32;

    drive(src, dst, sampler, |dest_x, dest_y| {
        (dest_x as f32 * x_scale, dest_y as f32 * y_scale)
    });
}

/// Resample `src` into a freshly allocated `out_width` x `out_height`
/// RGBA buffer.
pub fn upscale_rgba(
    input: &[u8],
    src_width: usize,
    src_height: usize,
    out_width: usize,
    out_height: usize,
    sampler: Sampler,
) -> Result<Vec<u8>, ScaleError> {
    let src = RasterView::new(input, src_width, src_height)?;
    let mut data = vec![0u8; raster::buffer_len(out_width, out_height)?];
    let mut dst = RasterMut::new(&mut data, out_width, out_height)?;

    upscale(&src, &mut dst, sampler);
    Ok(data)
}

/// Resample the sub-region `region` of `src` into a freshly allocated
/// `out_width` x `out_height` RGBA buffer.
///
/// `region.top` is measured from the bottom of the image; the mapping
/// flips the vertical axis to meet top-down destination addressing.
pub fn upscale_region_rgba(
    input: &[u8],
    src_width: usize,
    src_height: usize,
    region: &Region,
    out_width: usize,
    out_height: usize,
    sampler: Sampler,
) -> Result<Vec<u8>, ScaleError> {
    let src = RasterView::new(input, src_width, src_height)?;
    let mut data = vec![0u8; raster::buffer_len(out_width, out_height)?];
    let mut dst = RasterMut::new(&mut data, out_width, out_height)?;

    // Nearest snaps the box offsets to whole pixels before the flip; the
    // smooth kernels interpolate the un-rounded coordinate.
    let snap = matches!(sampler, Sampler::Nearest);
    drive(&src, &mut dst, sampler, |dest_x, dest_y| {
        region.map_source(src_height, dest_x, dest_y, out_width, out_height, snap)
    });

    Ok(data)
}

/// Output dimensions for a multiplicative upscale factor, each axis
/// rounded to the nearest pixel.
pub fn scaled_dimensions(width: usize, height: usize, power: f64) -> (usize, usize) {
    let out_w = (width as f64 * power).round() as usize;
    let out_h = (height as f64 * power).round() as usize;
    (out_w, out_h)
}

/// The single per-pixel loop shared by both addressing modes.
fn drive(
    src: &RasterView<'_>,
    dst: &mut RasterMut<'_>,
    sampler: Sampler,
    map: impl Fn(usize, usize) -> (f32, f32),
) {
    for dest_y in 0..dst.height() {
        for dest_x in 0..dst.width() {
            let (x, y) = map(dest_x, dest_y);
            dst.put(dest_x, dest_y, sampler.sample(src, x, y));
        }
    }
}
