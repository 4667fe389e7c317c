//! Candidate ranking and hue-diverse palette selection.

use palette::{Hsl, IntoColor, Srgb};

use crate::color::{Rgb, hue_distance};
use crate::config::ExtractorConfig;
use crate::histogram::ColorHistogram;

/// A histogram bin that passed the saturation/lightness/frequency gates.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    rgb: Rgb,
    hue: f32,
    score: f32,
}

fn to_hsl(rgb: Rgb) -> Hsl {
    Srgb::new(rgb.r, rgb.g, rgb.b).into_format::<f32>().into_color()
}

/// Rank surviving bins by `saturation * ln(count + 1)` and greedily keep up
/// to `max_colors` hue-diverse colors, encoded as lowercase `#rrggbb`.
///
/// The log damping keeps a rare oversaturated bin from dominating and a
/// washed-out but huge bin from crowding out vivid colors. An empty result is
/// a valid outcome; callers supply their own fallback swatch.
pub fn select_palette(histogram: &ColorHistogram, config: &ExtractorConfig) -> Vec<String> {
    let (lightness_min, lightness_max) = config.lightness_range;

    let mut candidates: Vec<Candidate> = histogram
        .iter()
        .filter_map(|(&rgb, &count)| {
            if count <= config.min_pixel_count {
                return None;
            }
            let hsl = to_hsl(rgb);
            if hsl.saturation <= config.saturation_threshold {
                return None;
            }
            if hsl.lightness <= lightness_min || hsl.lightness >= lightness_max {
                return None;
            }
            Some(Candidate {
                rgb,
                hue: hsl.hue.into_positive_degrees(),
                score: hsl.saturation * (count as f32 + 1.0).ln(),
            })
        })
        .collect();

    // Score descending, then RGB ascending. The histogram iterates in
    // arbitrary order, so the tie-break is what keeps output deterministic.
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.rgb.cmp(&b.rgb)));

    let mut claimed_hues: Vec<f32> = Vec::with_capacity(config.max_colors);
    let mut selected = Vec::with_capacity(config.max_colors);
    for candidate in &candidates {
        if selected.len() >= config.max_colors {
            break;
        }
        let too_close = claimed_hues
            .iter()
            .any(|&hue| hue_distance(hue, candidate.hue) < config.hue_separation_degrees);
        if too_close {
            continue;
        }
        claimed_hues.push(candidate.hue);
        selected.push(candidate.rgb.to_hex());
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram(entries: &[(Rgb, u32)]) -> ColorHistogram {
        entries.iter().copied().collect()
    }

    #[test]
    fn keeps_one_color_per_hue_family() {
        // Two reds (hue 0) and one blue; only the stronger red survives.
        let bins = histogram(&[
            (Rgb::new(240, 0, 0), 100),
            (Rgb::new(176, 0, 0), 90),
            (Rgb::new(0, 0, 240), 50),
        ]);
        let palette = select_palette(&bins, &ExtractorConfig::default());
        assert_eq!(palette, vec!["#f00000", "#0000f0"]);
    }

    #[test]
    fn filters_low_saturation_bins() {
        let bins = histogram(&[(Rgb::new(128, 128, 128), 1000)]);
        assert!(select_palette(&bins, &ExtractorConfig::default()).is_empty());
    }

    #[test]
    fn filters_near_black_and_near_white_bins() {
        let bins = histogram(&[
            (Rgb::new(32, 0, 0), 1000),   // lightness ≈ 0.06
            (Rgb::new(240, 224, 224), 1000), // lightness ≈ 0.91
        ]);
        assert!(select_palette(&bins, &ExtractorConfig::default()).is_empty());
    }

    #[test]
    fn filters_rare_bins() {
        let bins = histogram(&[(Rgb::new(240, 0, 0), 15)]);
        assert!(select_palette(&bins, &ExtractorConfig::default()).is_empty());
        let bins = histogram(&[(Rgb::new(240, 0, 0), 16)]);
        assert_eq!(
            select_palette(&bins, &ExtractorConfig::default()),
            vec!["#f00000"]
        );
    }

    #[test]
    fn equal_scores_break_ties_by_rgb_order() {
        // Fully saturated red and blue with identical counts score equally;
        // the lexicographically smaller RGB wins the first slot.
        let bins = histogram(&[
            (Rgb::new(240, 0, 0), 500),
            (Rgb::new(0, 0, 240), 500),
        ]);
        let palette = select_palette(&bins, &ExtractorConfig::default());
        assert_eq!(palette, vec!["#0000f0", "#f00000"]);
    }

    #[test]
    fn respects_max_colors() {
        // Seven well-separated hues, 48° apart.
        let bins = histogram(&[
            (Rgb::new(240, 0, 0), 100),   // 0°
            (Rgb::new(240, 192, 0), 100), // 48°
            (Rgb::new(96, 240, 0), 100),  // 96°
            (Rgb::new(0, 240, 96), 100),  // 144°
            (Rgb::new(0, 192, 240), 100), // 192°
            (Rgb::new(96, 0, 240), 100),  // 264°
            (Rgb::new(240, 0, 192), 100), // 312°
        ]);
        let palette = select_palette(&bins, &ExtractorConfig::default());
        assert_eq!(palette.len(), 6);
    }
}
