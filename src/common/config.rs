use std::path::PathBuf;

use qrcode::EcLevel;

use super::color::Gradient;

/// Immutable rendering configuration: colors, layout constants and the optional logo path.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub gradient: Gradient,
    pub ec_level: EcLevel,
    /// Pixels per module.
    pub module_size: u32,
    /// Quiet zone width, in modules.
    pub border_modules: u32,
    /// Logo footprint as a fraction of the shorter canvas side.
    pub logo_ratio: f64,
    /// Clearance disk diameter relative to the logo footprint.
    pub clearance_margin: f64,
    /// Dot diameter relative to the module size.
    pub dot_ratio: f64,
    /// Base render pixels below this intensity are dark.
    pub dark_threshold: u8,
    /// Sampled module colors with every channel at or above this are treated as white.
    pub near_white_threshold: u8,
    pub logo: Option<PathBuf>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            gradient: Gradient::default(),
            ec_level: EcLevel::H,
            module_size: 15,
            border_modules: 4,
            logo_ratio: 0.18,
            clearance_margin: 1.2,
            dot_ratio: 0.95,
            dark_threshold: 128,
            near_white_threshold: 200,
            logo: None,
        }
    }
}

impl StyleConfig {
    pub fn dot_radius(&self) -> i32 {
        (self.module_size as f64 * self.dot_ratio / 2.0).floor() as i32
    }

    pub fn is_near_white(&self, px: &image::Rgb<u8>) -> bool {
        px.0.iter().all(|&c| c >= self.near_white_threshold)
    }
}
