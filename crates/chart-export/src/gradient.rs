//! Period colour scale used to tint swell rows.

use std::fmt;

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim_start_matches('#');
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Linear interpolation between two colours, `t` in `0..=1`.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| ((a as f64) * (1.0 - t) + (b as f64) * t).round() as u8;
        Color::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Colour keypoints by wave period in seconds, sorted ascending.
#[derive(Debug, Clone)]
pub struct PeriodGradient {
    stops: Vec<(f64, Color)>,
}

impl Default for PeriodGradient {
    fn default() -> Self {
        const KEYPOINTS: [(f64, Color); 11] = [
            (3.0, Color::new(0x5e, 0x4f, 0xa2)),
            (4.0, Color::new(0x32, 0x88, 0xbd)),
            (5.0, Color::new(0x66, 0xc2, 0xa5)),
            (6.0, Color::new(0xab, 0xdd, 0xa4)),
            (7.0, Color::new(0xe6, 0xf5, 0x98)),
            (8.0, Color::new(0xff, 0xff, 0xbf)),
            (9.0, Color::new(0xfe, 0xe0, 0x90)),
            (10.0, Color::new(0xfd, 0xae, 0x61)),
            (11.0, Color::new(0xf4, 0x6d, 0x43)),
            (12.0, Color::new(0xd5, 0x3e, 0x4f)),
            (13.5, Color::new(0x9e, 0x01, 0x42)),
        ];
        Self {
            stops: KEYPOINTS.to_vec(),
        }
    }
}

impl PeriodGradient {
    /// Build a gradient from `(period, colour)` stops; they are sorted here.
    ///
    /// Returns `None` when no stops are given.
    pub fn new(mut stops: Vec<(f64, Color)>) -> Option<Self> {
        if stops.is_empty() {
            return None;
        }
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Some(Self { stops })
    }

    /// Colour for a period, clamped to the first and last stops.
    pub fn color_for(&self, period: f64) -> Color {
        let first = self.stops[0];
        if period <= first.0 || period.is_nan() {
            return first.1;
        }

        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if period <= hi.0 {
                let t = (period - lo.0) / (hi.0 - lo.0);
                return lo.1.lerp(&hi.1, t);
            }
        }

        self.stops[self.stops.len() - 1].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let c = Color::from_hex("#5e4fa2").unwrap();
        assert_eq!(c, Color::new(0x5e, 0x4f, 0xa2));
        assert_eq!(c.to_hex(), "#5e4fa2");
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("zzzzzz").is_none());
    }

    #[test]
    fn test_keypoints_are_exact() {
        let gradient = PeriodGradient::default();
        assert_eq!(gradient.color_for(3.0).to_hex(), "#5e4fa2");
        assert_eq!(gradient.color_for(8.0).to_hex(), "#ffffbf");
        assert_eq!(gradient.color_for(13.5).to_hex(), "#9e0142");
    }

    #[test]
    fn test_clamped_at_ends() {
        let gradient = PeriodGradient::default();
        assert_eq!(gradient.color_for(1.0).to_hex(), "#5e4fa2");
        assert_eq!(gradient.color_for(20.0).to_hex(), "#9e0142");
    }

    #[test]
    fn test_interpolates_between_stops() {
        let gradient = PeriodGradient::default();
        // Halfway between #5e4fa2 and #3288bd
        let mid = gradient.color_for(3.5);
        assert_eq!(mid, Color::new(0x48, 0x6c, 0xb0));
    }

    #[test]
    fn test_custom_stops_sorted() {
        let black = Color::new(0, 0, 0);
        let white = Color::new(255, 255, 255);
        let gradient = PeriodGradient::new(vec![(10.0, white), (0.0, black)]).unwrap();
        assert_eq!(gradient.color_for(5.0), Color::new(128, 128, 128));
        assert!(PeriodGradient::new(Vec::new()).is_none());
    }
}
