use thiserror::Error;

/// Validation failures surfaced before any pixel work begins.
///
/// There is no out-of-bounds kind: every source read clamps to the raster
/// edge, so sampling itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// Buffer length does not match `width * height * 4`.
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Zero width or height, or dimensions whose byte size overflows.
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}
