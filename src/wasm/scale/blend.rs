//! Pure interpolation blends, scalar and lifted channel-wise to colors.

use super::pixel::Color;

/// Linear blend between two samples.
///
/// Exact at the endpoints: `f = 0` returns `s0`, `f = 1` returns `s1`.
/// Factors outside `[0, 1]` extrapolate.
#[inline(always)]
pub fn lerp(s0: f32, s1: f32, f: f32) -> f32 {
    s0 + (s1 - s0) * f
}

/// Catmull-Rom cubic through four samples at relative positions -1, 0, 1, 2.
///
/// Interpolating spline: `f = 0` returns `s1` and `f = 1` returns `s2`.
#[inline(always)]
pub fn cubic(s0: f32, s1: f32, s2: f32, s3: f32, f: f32) -> f32 {
    let a = -s0 / 2.0 + 3.0 * s1 / 2.0 - 3.0 * s2 / 2.0 + s3 / 2.0;
    let b = s0 - 5.0 * s1 / 2.0 + 2.0 * s2 - s3 / 2.0;
    let c = -s0 / 2.0 + s2 / 2.0;
    let d = s1;

    a * f * f * f + b * f * f + c * f + d
}

#[inline(always)]
pub fn lerp_color(c0: Color, c1: Color, f: f32) -> Color {
    [
        lerp(c0[0], c1[0], f),
        lerp(c0[1], c1[1], f),
        lerp(c0[2], c1[2], f),
        lerp(c0[3], c1[3], f),
    ]
}

#[inline(always)]
pub fn cubic_color(c0: Color, c1: Color, c2: Color, c3: Color, f: f32) -> Color {
    [
        cubic(c0[0], c1[0], c2[0], c3[0], f),
        cubic(c0[1], c1[1], c2[1], c3[1], f),
        cubic(c0[2], c1[2], c2[2], c3[2], f),
        cubic(c0[3], c1[3], c2[3], c3[3], f),
    ]
}
