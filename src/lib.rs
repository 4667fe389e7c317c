//! Logo-to-brand-palette extraction.
//!
//! Given an uploaded logo, derives a short list of visually distinct brand
//! colors suitable for pre-populating a color picker:
//!
//! 1. Rasterize the image onto a fixed square canvas (default 150×150 RGBA).
//! 2. Estimate the background color from border samples.
//! 3. Bin foreground pixels into a coarse RGB grid histogram, dropping
//!    transparent and background-similar pixels.
//! 4. Rank bins by saturation-weighted frequency and greedily keep up to six
//!    hue-diverse colors, returned as lowercase `#rrggbb` strings.
//!
//! Extraction is best effort: unreadable images and degenerate inputs yield a
//! short or empty palette, never an error. Callers own the fallback policy
//! (e.g. a preset brand swatch).
//!
//! The crate builds both as a wasm module (the extraction originally ran in
//! the browser against a canvas) and as a plain Rust library with an optional
//! CLI behind the `native-bin` feature.

use image::imageops::FilterType;
use js_sys::Array;
use wasm_bindgen::prelude::*;

mod background;
mod color;
mod config;
mod histogram;
mod select;

pub use background::{BackgroundEstimate, OPAQUE_ALPHA_MIN, detect_background};
pub use color::{Rgb, hue_distance};
pub use config::{ConfigError, ExtractorConfig};
pub use histogram::{ColorHistogram, build_histogram};
pub use select::select_palette;

// ------------------------------------------------------------
// Orchestration
// ------------------------------------------------------------

/// Palette extraction engine with a validated configuration.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Build an extractor, rejecting invalid configuration up front.
    pub fn new(config: ExtractorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Decode encoded image bytes, rasterize onto the square canvas and run
    /// the pipeline. An undecodable image yields an empty palette.
    pub fn extract(&self, image_data: &[u8]) -> Vec<String> {
        let Ok(img) = image::load_from_memory(image_data) else {
            return Vec::new();
        };
        let size = self.config.canvas_size;
        // Stretch onto the square canvas, matching a 2D-canvas drawImage.
        let canvas = image::imageops::resize(&img.to_rgba8(), size, size, FilterType::Triangle);
        self.extract_from_rgba(canvas.as_raw(), size)
    }

    /// Run the pipeline over an already-rasterized square RGBA buffer
    /// (row-major, `size * size * 4` bytes). The buffer is only read.
    ///
    /// A buffer of the wrong length is degenerate input and yields an empty
    /// palette.
    pub fn extract_from_rgba(&self, raw: &[u8], size: u32) -> Vec<String> {
        if size == 0 || raw.len() != size as usize * size as usize * 4 {
            return Vec::new();
        }
        let background = detect_background(raw, size, &self.config);
        let bins = build_histogram(raw, background, &self.config);
        select_palette(&bins, &self.config)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            config: ExtractorConfig::default(),
        }
    }
}

/// Extract a palette from encoded image bytes with the default configuration.
pub fn extract_palette_bytes(input: &[u8]) -> Vec<String> {
    Extractor::default().extract(input)
}

// ------------------------------------------------------------
// Wasm bindings
// ------------------------------------------------------------

/// Browser entry point: decode the uploaded logo bytes and return the
/// extracted palette as a JS array of `#rrggbb` strings. Any failure returns
/// an empty array so the caller can fall back to preset colors.
#[wasm_bindgen]
pub fn extract_palette(input: Vec<u8>) -> Array {
    let palette = Array::new();
    for hex in extract_palette_bytes(&input) {
        palette.push(&JsValue::from_str(&hex));
    }
    palette
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_length_buffer_yields_empty_palette() {
        let extractor = Extractor::default();
        assert!(extractor.extract_from_rgba(&[0u8; 100], 150).is_empty());
        assert!(extractor.extract_from_rgba(&[], 0).is_empty());
    }

    #[test]
    fn undecodable_image_yields_empty_palette() {
        assert!(extract_palette_bytes(b"not an image").is_empty());
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = ExtractorConfig {
            max_colors: 0,
            ..ExtractorConfig::default()
        };
        assert!(Extractor::new(config).is_err());
    }
}
