use image::Rgb;

use super::error::{StyleError, StyleResult};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

// Interpolation
//------------------------------------------------------------------------------

/// Linearly interpolates each channel from `c1` (factor 0) to `c2` (factor 1), rounding to the
/// nearest integer. The factor is expected to be clamped by the caller.
pub fn interpolate(c1: Rgb<u8>, c2: Rgb<u8>, factor: f64) -> Rgb<u8> {
    debug_assert!((0.0..=1.0).contains(&factor), "Blend factor {factor} outside [0, 1]");

    let mut res = [0u8; 3];
    for (i, ch) in res.iter_mut().enumerate() {
        let (a, b) = (c1[i] as f64, c2[i] as f64);
        *ch = (a + (b - a) * factor).round() as u8;
    }
    Rgb(res)
}

#[cfg(test)]
mod interpolate_tests {
    use image::Rgb;
    use test_case::test_case;

    use super::interpolate;

    #[test_case(Rgb([0x53, 0x0a, 0x0f]), Rgb([0x22, 0x20, 0x20]))]
    #[test_case(Rgb([0, 0, 0]), Rgb([255, 255, 255]))]
    #[test_case(Rgb([255, 0, 128]), Rgb([0, 255, 128]))]
    fn test_endpoints_exact(c1: Rgb<u8>, c2: Rgb<u8>) {
        assert_eq!(interpolate(c1, c2, 0.0), c1);
        assert_eq!(interpolate(c1, c2, 1.0), c2);
    }

    #[test]
    fn test_midpoint_rounds() {
        assert_eq!(interpolate(Rgb([0, 0, 0]), Rgb([255, 1, 3]), 0.5), Rgb([128, 1, 2]));
    }
}

// Gradient
//------------------------------------------------------------------------------

/// Two-color radial gradient. Factor 0 is the canvas center, factor 1 the edge.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Gradient {
    pub center: Rgb<u8>,
    pub edge: Rgb<u8>,
}

impl Default for Gradient {
    fn default() -> Self {
        Self { center: Rgb([0x53, 0x0a, 0x0f]), edge: Rgb([0x22, 0x20, 0x20]) }
    }
}

impl Gradient {
    pub fn new(center: Rgb<u8>, edge: Rgb<u8>) -> Self {
        Self { center, edge }
    }

    pub fn from_hex(center: &str, edge: &str) -> StyleResult<Self> {
        Ok(Self { center: parse_hex_color(center)?, edge: parse_hex_color(edge)? })
    }

    pub fn color_at(&self, factor: f64) -> Rgb<u8> {
        interpolate(self.center, self.edge, factor)
    }
}

/// Parses `#rrggbb` (leading `#` optional).
pub fn parse_hex_color(hex: &str) -> StyleResult<Rgb<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StyleError::InvalidColor(hex.to_string()));
    }

    let mut res = [0u8; 3];
    for (i, ch) in res.iter_mut().enumerate() {
        *ch = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| StyleError::InvalidColor(hex.to_string()))?;
    }
    Ok(Rgb(res))
}
