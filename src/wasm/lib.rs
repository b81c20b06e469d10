//! PixelZoom WASM Module
//!
//! High-performance raster image upscaling engines for WebAssembly.

use parking_lot::Mutex;
use wasm_bindgen::prelude::*;

use crate::scale::{Region, Sampler};

pub mod scale;

// Single shared output buffer for all upscale calls. JS reads results
// through `get_memory()` using the pointer/length pair in `UpscaleResult`;
// the next call replaces the buffer and invalidates the previous result.
static SHARED_BUFFER: Mutex<Vec<u8>> = Mutex::new(Vec::new());

/// Result of an upscale operation
#[wasm_bindgen]
pub struct UpscaleResult {
    pub ptr: u32,
    pub len: u32,
    pub width: u32,
    pub height: u32,
}

/// Get WASM memory for reading output buffers
#[wasm_bindgen]
pub fn get_memory() -> JsValue {
    wasm_bindgen::memory()
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Parks the finished buffer in the shared slot and hands back its address.
fn update_buffer(output: Vec<u8>, width: u32, height: u32) -> UpscaleResult {
    let mut buffer = SHARED_BUFFER.lock();
    *buffer = output;

    UpscaleResult {
        ptr: buffer.as_ptr() as u32,
        len: buffer.len() as u32,
        width,
        height,
    }
}

fn run_upscale(
    data: &[u8],
    width: u32,
    height: u32,
    out_width: u32,
    out_height: u32,
    sampler: Sampler,
) -> Result<UpscaleResult, JsError> {
    let output = scale::upscale_rgba(
        data,
        width as usize,
        height as usize,
        out_width as usize,
        out_height as usize,
        sampler,
    )?;

    Ok(update_buffer(output, out_width, out_height))
}

#[allow(clippy::too_many_arguments)]
fn run_upscale_region(
    data: &[u8],
    width: u32,
    height: u32,
    top: u32,
    left: u32,
    box_width: u32,
    box_height: u32,
    out_width: u32,
    out_height: u32,
    sampler: Sampler,
) -> Result<UpscaleResult, JsError> {
    let region = Region {
        top: top as usize,
        left: left as usize,
        width: box_width as usize,
        height: box_height as usize,
    };

    let output = scale::upscale_region_rgba(
        data,
        width as usize,
        height as usize,
        &region,
        out_width as usize,
        out_height as usize,
        sampler,
    )?;

    Ok(update_buffer(output, out_width, out_height))
}

fn run_upscale_power(
    data: &[u8],
    width: u32,
    height: u32,
    power: f64,
    sampler: Sampler,
) -> Result<UpscaleResult, JsError> {
    let (out_w, out_h) = scale::scaled_dimensions(width as usize, height as usize, power);
    run_upscale(data, width, height, out_w as u32, out_h as u32, sampler)
}

// ============================================================================
// Whole-image Upscaling
// ============================================================================

/// Nearest-neighbor upscale to an explicit output size
#[wasm_bindgen]
pub fn upscale_nearest(
    data: &[u8],
    width: u32,
    height: u32,
    out_width: u32,
    out_height: u32,
) -> Result<UpscaleResult, JsError> {
    run_upscale(data, width, height, out_width, out_height, Sampler::Nearest)
}

/// Bilinear upscale to an explicit output size
#[wasm_bindgen]
pub fn upscale_linear(
    data: &[u8],
    width: u32,
    height: u32,
    out_width: u32,
    out_height: u32,
) -> Result<UpscaleResult, JsError> {
    run_upscale(data, width, height, out_width, out_height, Sampler::Bilinear)
}

/// Bicubic (Catmull-Rom) upscale to an explicit output size
#[wasm_bindgen]
pub fn upscale_bicubic(
    data: &[u8],
    width: u32,
    height: u32,
    out_width: u32,
    out_height: u32,
) -> Result<UpscaleResult, JsError> {
    run_upscale(data, width, height, out_width, out_height, Sampler::Bicubic)
}

// ============================================================================
// Region ("Box") Upscaling
// ============================================================================

/// Nearest-neighbor upscale of a source sub-region.
/// `top` is measured from the bottom of the image.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn upscale_nearest_region(
    data: &[u8],
    width: u32,
    height: u32,
    top: u32,
    left: u32,
    box_width: u32,
    box_height: u32,
    out_width: u32,
    out_height: u32,
) -> Result<UpscaleResult, JsError> {
    run_upscale_region(
        data, width, height, top, left, box_width, box_height, out_width, out_height,
        Sampler::Nearest,
    )
}

/// Bilinear upscale of a source sub-region.
/// `top` is measured from the bottom of the image.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn upscale_linear_region(
    data: &[u8],
    width: u32,
    height: u32,
    top: u32,
    left: u32,
    box_width: u32,
    box_height: u32,
    out_width: u32,
    out_height: u32,
) -> Result<UpscaleResult, JsError> {
    run_upscale_region(
        data, width, height, top, left, box_width, box_height, out_width, out_height,
        Sampler::Bilinear,
    )
}

/// Bicubic upscale of a source sub-region.
/// `top` is measured from the bottom of the image.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn upscale_bicubic_region(
    data: &[u8],
    width: u32,
    height: u32,
    top: u32,
    left: u32,
    box_width: u32,
    box_height: u32,
    out_width: u32,
    out_height: u32,
) -> Result<UpscaleResult, JsError> {
    run_upscale_region(
        data, width, height, top, left, box_width, box_height, out_width, out_height,
        Sampler::Bicubic,
    )
}

// ============================================================================
// Power-based Upscaling
// ============================================================================

/// Nearest-neighbor upscale by a multiplicative factor
#[wasm_bindgen]
pub fn upscale_nearest_power(
    data: &[u8],
    width: u32,
    height: u32,
    power: f64,
) -> Result<UpscaleResult, JsError> {
    run_upscale_power(data, width, height, power, Sampler::Nearest)
}

/// Bilinear upscale by a multiplicative factor
#[wasm_bindgen]
pub fn upscale_linear_power(
    data: &[u8],
    width: u32,
    height: u32,
    power: f64,
) -> Result<UpscaleResult, JsError> {
    run_upscale_power(data, width, height, power, Sampler::Bilinear)
}

/// Bicubic upscale by a multiplicative factor
#[wasm_bindgen]
pub fn upscale_bicubic_power(
    data: &[u8],
    width: u32,
    height: u32,
    power: f64,
) -> Result<UpscaleResult, JsError> {
    run_upscale_power(data, width, height, power, Sampler::Bicubic)
}

/// Output dimensions for a power-based upscale
#[wasm_bindgen]
pub fn scaled_dimensions(width: u32, height: u32, power: f64) -> Vec<u32> {
    let (out_w, out_h) = scale::scaled_dimensions(width as usize, height as usize, power);
    vec![out_w as u32, out_h as u32]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(w: usize, h: usize) -> Vec<u8> {
        let mut data = vec![0u8; w * h * 4];
        for y in 0..h {
            for x in 0..w {
                let i = (y * w + x) * 4;
                data[i] = (x * 255 / w) as u8; // R
                data[i + 1] = (y * 255 / h) as u8; // G
                data[i + 2] = 128; // B
                data[i + 3] = 255; // A
            }
        }
        data
    }

    #[test]
    fn test_nearest_basic() {
        let img = create_test_image(4, 4);
        let result = upscale_nearest(&img, 4, 4, 8, 8).ok().expect("upscale");
        assert_eq!(result.width, 8);
        assert_eq!(result.height, 8);
        assert_eq!(result.len, 8 * 8 * 4);
    }

    #[test]
    fn test_linear_basic() {
        let img = create_test_image(4, 4);
        let result = upscale_linear(&img, 4, 4, 10, 6).ok().expect("upscale");
        assert_eq!(result.width, 10);
        assert_eq!(result.height, 6);
        assert_eq!(result.len, 10 * 6 * 4);
    }

    #[test]
    fn test_bicubic_basic() {
        let img = create_test_image(4, 4);
        let result = upscale_bicubic(&img, 4, 4, 16, 16).ok().expect("upscale");
        assert_eq!(result.width, 16);
        assert_eq!(result.height, 16);
        assert_eq!(result.len, 16 * 16 * 4);
    }

    #[test]
    fn test_region_basic() {
        let img = create_test_image(8, 8);
        let result = upscale_nearest_region(&img, 8, 8, 0, 0, 4, 4, 16, 16)
            .ok()
            .expect("upscale");
        assert_eq!(result.width, 16);
        assert_eq!(result.height, 16);
        assert_eq!(result.len, 16 * 16 * 4);
    }

    #[test]
    fn test_power_scale_factors() {
        let img = create_test_image(4, 4);

        for power in 2..=6u32 {
            let result = upscale_linear_power(&img, 4, 4, power as f64)
                .ok()
                .expect("upscale");
            assert_eq!(result.width, 4 * power);
            assert_eq!(result.height, 4 * power);
        }
    }

    #[test]
    fn test_scaled_dimensions() {
        assert_eq!(scaled_dimensions(4, 4, 2.5), vec![10, 10]);
        assert_eq!(scaled_dimensions(3, 5, 1.5), vec![5, 8]);
    }
}
