//! Background estimation from border samples.

use crate::color::Rgb;
use crate::config::ExtractorConfig;

/// Pixels below this alpha count as transparent throughout the pipeline.
pub const OPAQUE_ALPHA_MIN: u8 = 128;

/// Presumed background of the rasterized logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundEstimate {
    pub color: Rgb,
    /// The border sample was majority-transparent; `color` is white then.
    pub transparent: bool,
}

/// Estimate the background by sampling all four border edges at
/// `edge_sample_stride`.
///
/// A majority-transparent border signals a transparent background and maps to
/// white (the quantizer independently drops low-alpha pixels). Otherwise the
/// opaque samples are channel-averaged. Never fails and reads only border
/// pixels.
pub fn detect_background(raw: &[u8], size: u32, config: &ExtractorConfig) -> BackgroundEstimate {
    let size = size as usize;
    let stride = config.edge_sample_stride as usize;

    let px = |x: usize, y: usize| {
        let i = (y * size + x) * 4;
        [raw[i], raw[i + 1], raw[i + 2], raw[i + 3]]
    };

    let mut samples = Vec::with_capacity(4 * size.div_ceil(stride));
    let mut i = 0;
    while i < size {
        samples.push(px(i, 0)); // top
        samples.push(px(i, size - 1)); // bottom
        samples.push(px(0, i)); // left
        samples.push(px(size - 1, i)); // right
        i += stride;
    }

    let transparent_count = samples.iter().filter(|p| p[3] < OPAQUE_ALPHA_MIN).count();
    if transparent_count * 2 > samples.len() {
        return BackgroundEstimate {
            color: Rgb::WHITE,
            transparent: true,
        };
    }

    let (mut r, mut g, mut b, mut opaque) = (0u32, 0u32, 0u32, 0u32);
    for p in &samples {
        if p[3] >= OPAQUE_ALPHA_MIN {
            r += p[0] as u32;
            g += p[1] as u32;
            b += p[2] as u32;
            opaque += 1;
        }
    }

    let color = if opaque > 0 {
        let avg = |sum: u32| (sum as f32 / opaque as f32).round() as u8;
        Rgb::new(avg(r), avg(g), avg(b))
    } else {
        Rgb::WHITE
    };

    BackgroundEstimate {
        color,
        transparent: false,
    }
}
