//! Small RGB helpers shared across the extraction pipeline.

/// 8-bit RGB triple. Used for background estimates and quantized bins alike.
///
/// The derived `Ord` (lexicographic r, g, b) doubles as the deterministic
/// tie-break when ranking candidates with equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance to another color.
    #[inline]
    pub fn distance_squared(self, other: Self) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Circular distance between two hues in degrees, in `[0, 180]`.
#[inline]
pub fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_zero_padded() {
        assert_eq!(Rgb::new(240, 0, 10).to_hex(), "#f0000a");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn hue_distance_wraps_around_red() {
        assert_eq!(hue_distance(350.0, 10.0), 20.0);
        assert_eq!(hue_distance(10.0, 350.0), 20.0);
        assert_eq!(hue_distance(0.0, 180.0), 180.0);
        assert_eq!(hue_distance(90.0, 90.0), 0.0);
    }

    #[test]
    fn distance_squared_is_symmetric() {
        let a = Rgb::new(255, 0, 0);
        let b = Rgb::new(205, 0, 0);
        assert_eq!(a.distance_squared(b), 2500);
        assert_eq!(b.distance_squared(a), 2500);
    }
}
