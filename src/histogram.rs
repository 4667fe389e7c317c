//! Quantized color histogram over foreground pixels.

use std::collections::HashMap;

use crate::background::{BackgroundEstimate, OPAQUE_ALPHA_MIN};
use crate::color::Rgb;
use crate::config::ExtractorConfig;

/// Frequency map over grid-snapped colors. At the default step of 16 the key
/// space is bounded by 16³ = 4096 bins.
pub type ColorHistogram = HashMap<Rgb, u32>;

/// Snap a channel onto the quantization grid: 0, step, 2·step, … capped at
/// `256 - step` (so 255 snaps to 240 at the default step).
#[inline]
fn quantize(channel: u8, step: u32) -> u8 {
    ((channel as u32 / step) * step).min(256 - step) as u8
}

/// Bin every foreground pixel of the full buffer.
///
/// Transparent pixels (alpha < 128) and pixels within
/// `background_distance_threshold` of the background estimate are skipped;
/// the rest are grid-snapped and counted. Iteration order over the result is
/// unspecified and irrelevant downstream.
pub fn build_histogram(
    raw: &[u8],
    background: BackgroundEstimate,
    config: &ExtractorConfig,
) -> ColorHistogram {
    let step = config.quantization_step;
    // Compared in squared space to avoid the per-pixel sqrt.
    let threshold_sq = config.background_distance_threshold * config.background_distance_threshold;

    let mut bins = ColorHistogram::new();
    for px in raw.chunks_exact(4) {
        if px[3] < OPAQUE_ALPHA_MIN {
            continue;
        }
        let rgb = Rgb::new(px[0], px[1], px[2]);
        if (rgb.distance_squared(background.color) as f32) < threshold_sq {
            continue;
        }
        let key = Rgb::new(
            quantize(rgb.r, step),
            quantize(rgb.g, step),
            quantize(rgb.b, step),
        );
        *bins.entry(key).or_insert(0) += 1;
    }
    bins
}
