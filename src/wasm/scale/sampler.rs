//! Sampling strategies mapping a fractional source coordinate to a color.
//!
//! Coordinates are continuous source pixel units; the driver owns the
//! destination-to-source mapping. Every read goes through the clamped
//! accessor, so neighborhoods may reach past the raster edge.

use super::blend::{cubic_color, lerp_color};
use super::pixel::Color;
use super::raster::RasterView;

/// Interpolation strategy applied per destination pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampler {
    /// Closest source pixel, round half away from zero. Blocky but exact.
    Nearest,
    /// 2x2 floor-anchored neighborhood, linear blends.
    Bilinear,
    /// 4x4 floor-anchored neighborhood, Catmull-Rom cubic blends.
    Bicubic,
}

impl Sampler {
    #[inline(always)]
    pub(crate) fn sample(self, src: &RasterView<'_>, x: f32, y: f32) -> Color {
        match self {
            Sampler::Nearest => sample_nearest(src, x, y),
            Sampler::Bilinear => sample_bilinear(src, x, y),
            Sampler::Bicubic => sample_bicubic(src, x, y),
        }
    }
}

#[inline(always)]
fn sample_nearest(src: &RasterView<'_>, x: f32, y: f32) -> Color {
    src.pick(x.round() as isize, y.round() as isize)
}

/*
  a1 ---c1------ a2
  |     |         |
  |     c3        |
  |     |         |
  a3 ---c2------ a4
*/
fn sample_bilinear(src: &RasterView<'_>, x: f32, y: f32) -> Color {
    let x_factor = x - x.floor();
    let y_factor = y - y.floor();
    let ax = x.floor() as isize;
    let ay = y.floor() as isize;

    let a1 = src.pick(ax, ay);
    let a2 = src.pick(ax + 1, ay);
    let a3 = src.pick(ax, ay + 1);
    let a4 = src.pick(ax + 1, ay + 1);

    let c1 = lerp_color(a1, a2, x_factor);
    let c2 = lerp_color(a3, a4, x_factor);
    lerp_color(c1, c2, y_factor)
}

fn sample_bicubic(src: &RasterView<'_>, x: f32, y: f32) -> Color {
    let x_factor = x - x.floor();
    let y_factor = y - y.floor();
    let ax = x.floor() as isize;
    let ay = y.floor() as isize;

    // Four horizontal passes over the 4x4 neighborhood, then one vertical
    // pass across the intermediates. Invariant: both passes use the same
    // cubic blend — the two-pass form equals the 2-D kernel only because
    // that kernel is separable.
    let mut rows = [[0.0f32; 4]; 4];
    for (i, row) in rows.iter_mut().enumerate() {
        let ry = ay + i as isize - 1;
        *row = cubic_color(
            src.pick(ax - 1, ry),
            src.pick(ax, ry),
            src.pick(ax + 1, ry),
            src.pick(ax + 2, ry),
            x_factor,
        );
    }

    cubic_color(rows[0], rows[1], rows[2], rows[3], y_factor)
}

#[cfg(test)]
mod tests {
    use super::Sampler;
    use crate::scale::raster::RasterView;

    // 3x3 with a distinct red channel per pixel: R = 10 * (x + y * 3).
    fn gradient() -> Vec<u8> {
        let mut data = Vec::with_capacity(3 * 3 * 4);
        for i in 0..9u8 {
            data.extend_from_slice(&[i * 10, 0, 0, 255]);
        }
        data
    }

    fn red_at(src: &RasterView<'_>, x: f32, y: f32, sampler: Sampler) -> f32 {
        sampler.sample(src, x, y)[0]
    }

    #[test]
    fn nearest_at_the_origin_returns_the_first_pixel() {
        let data = gradient();
        let src = RasterView::new(&data, 3, 3).unwrap();
        assert_eq!(red_at(&src, 0.0, 0.0, Sampler::Nearest), 0.0);
    }

    #[test]
    fn nearest_rounds_half_away_from_zero() {
        let data = gradient();
        let src = RasterView::new(&data, 3, 3).unwrap();
        assert_eq!(red_at(&src, 0.5, 0.0, Sampler::Nearest), 10.0);
        assert_eq!(red_at(&src, 0.49, 0.0, Sampler::Nearest), 0.0);
    }

    #[test]
    fn nearest_past_the_last_column_clamps_to_it() {
        let data = gradient();
        let src = RasterView::new(&data, 3, 3).unwrap();
        // A coordinate just shy of the raster width rounds to 3 and clamps.
        assert_eq!(red_at(&src, 2.9, 0.0, Sampler::Nearest), 20.0);
    }

    #[test]
    fn bilinear_is_exact_at_integer_coordinates() {
        let data = gradient();
        let src = RasterView::new(&data, 3, 3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                let expected = (10 * (x + y * 3)) as f32;
                assert_eq!(red_at(&src, x as f32, y as f32, Sampler::Bilinear), expected);
            }
        }
    }

    #[test]
    fn bilinear_blends_the_horizontal_midpoint() {
        let data = gradient();
        let src = RasterView::new(&data, 3, 3).unwrap();
        assert_eq!(red_at(&src, 0.5, 0.0, Sampler::Bilinear), 5.0);
        assert_eq!(red_at(&src, 0.5, 1.0, Sampler::Bilinear), 35.0);
    }

    #[test]
    fn bicubic_is_exact_at_integer_coordinates() {
        let data = gradient();
        let src = RasterView::new(&data, 3, 3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                let expected = (10 * (x + y * 3)) as f32;
                let got = red_at(&src, x as f32, y as f32, Sampler::Bicubic);
                assert!((got - expected).abs() < 1e-4, "({x},{y}): {got}");
            }
        }
    }

    #[test]
    fn bicubic_midpoint_matches_the_separable_closed_form() {
        // With y_factor = 0 the vertical pass returns the anchor row, so
        // the midpoint reduces to the 1-D weights (-1, 9, 9, -1) / 16 with
        // the left tap clamped onto the edge pixel.
        let data = gradient();
        let src = RasterView::new(&data, 3, 3).unwrap();
        let expected = (-0.0 + 9.0 * 0.0 + 9.0 * 10.0 - 20.0) / 16.0;
        assert!((red_at(&src, 0.5, 0.0, Sampler::Bicubic) - expected).abs() < 1e-4);
    }
}
