//! Extraction tuning knobs, validated once at construction.

use thiserror::Error;

/// Tunable parameters for the extraction pipeline.
///
/// The defaults reproduce the canonical behavior: a 150×150 canvas, 16-step
/// channel quantization and up to 6 hue-diverse colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    /// Side length of the square canvas the source image is rasterized onto.
    pub canvas_size: u32,
    /// Border sampling stride for background detection (every Nth pixel).
    pub edge_sample_stride: u32,
    /// Pixels closer than this (Euclidean RGB) to the background estimate are
    /// discarded as background.
    pub background_distance_threshold: f32,
    /// Channel grid step used to merge near-duplicate colors into bins.
    pub quantization_step: u32,
    /// Minimum saturation for a bin to become a candidate (exclusive).
    pub saturation_threshold: f32,
    /// Open lightness interval candidates must fall inside.
    pub lightness_range: (f32, f32),
    /// Minimum pixel count for a bin to become a candidate (exclusive).
    pub min_pixel_count: u32,
    /// Minimum circular hue distance between any two selected colors.
    pub hue_separation_degrees: f32,
    /// Maximum palette length.
    pub max_colors: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            canvas_size: 150,
            edge_sample_stride: 5,
            background_distance_threshold: 50.0,
            quantization_step: 16,
            saturation_threshold: 0.15,
            lightness_range: (0.12, 0.88),
            min_pixel_count: 15,
            hue_separation_degrees: 35.0,
            max_colors: 6,
        }
    }
}

/// Rejected at `Extractor` construction; per-call data problems (unreadable
/// images, degenerate buffers) never surface here.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("canvas_size must be at least 1")]
    CanvasSize,
    #[error("edge_sample_stride must be at least 1")]
    EdgeSampleStride,
    #[error("background_distance_threshold must be finite and non-negative, got {0}")]
    BackgroundDistanceThreshold(f32),
    #[error("quantization_step must be in 1..=128, got {0}")]
    QuantizationStep(u32),
    #[error("saturation_threshold must be in [0, 1), got {0}")]
    SaturationThreshold(f32),
    #[error("lightness_range must satisfy 0 <= low < high <= 1, got ({0}, {1})")]
    LightnessRange(f32, f32),
    #[error("hue_separation_degrees must be in (0, 180], got {0}")]
    HueSeparation(f32),
    #[error("max_colors must be at least 1")]
    MaxColors,
}

impl ExtractorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_size < 1 {
            return Err(ConfigError::CanvasSize);
        }
        if self.edge_sample_stride < 1 {
            return Err(ConfigError::EdgeSampleStride);
        }
        if !self.background_distance_threshold.is_finite() || self.background_distance_threshold < 0.0 {
            return Err(ConfigError::BackgroundDistanceThreshold(
                self.background_distance_threshold,
            ));
        }
        if !(1..=128).contains(&self.quantization_step) {
            return Err(ConfigError::QuantizationStep(self.quantization_step));
        }
        if !(0.0..1.0).contains(&self.saturation_threshold) {
            return Err(ConfigError::SaturationThreshold(self.saturation_threshold));
        }
        let (lo, hi) = self.lightness_range;
        if !(lo.is_finite() && hi.is_finite() && 0.0 <= lo && lo < hi && hi <= 1.0) {
            return Err(ConfigError::LightnessRange(lo, hi));
        }
        if !(self.hue_separation_degrees > 0.0 && self.hue_separation_degrees <= 180.0) {
            return Err(ConfigError::HueSeparation(self.hue_separation_degrees));
        }
        if self.max_colors < 1 {
            return Err(ConfigError::MaxColors);
        }
        Ok(())
    }
}
