use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};

use super::error::{StyleError, StyleResult};

/// Square grid of dark/light modules as produced by the encoder. Immutable after creation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ModuleMatrix {
    grid: Vec<bool>,
    w: usize,
}

impl ModuleMatrix {
    /// Encodes `payload` with the `qrcode` crate, picking the smallest version that fits.
    pub fn encode(payload: &str, ecl: EcLevel) -> StyleResult<Self> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), ecl)?;
        let w = code.width();
        let grid = code.to_colors().into_iter().map(|c| c == Color::Dark).collect();
        Ok(Self { grid, w })
    }

    pub fn from_rows(rows: &[Vec<bool>]) -> StyleResult<Self> {
        let w = rows.len();
        if w == 0 {
            return Err(StyleError::GeometryInconsistency("empty module matrix".to_string()));
        }
        if let Some(r) = rows.iter().position(|row| row.len() != w) {
            return Err(StyleError::GeometryInconsistency(format!(
                "row {r} has {} modules, expected {w}",
                rows[r].len()
            )));
        }
        Ok(Self { grid: rows.concat(), w })
    }

    pub fn width(&self) -> usize {
        self.w
    }

    /// Returns whether the module at row `r`, column `c` is dark.
    pub fn get(&self, r: usize, c: usize) -> bool {
        debug_assert!(r < self.w && c < self.w, "Module ({r}, {c}) out of bounds");
        self.grid[r * self.w + c]
    }

    /// Plain black on white rendering with a light quiet zone of `qz_modules` on each side.
    pub fn render(&self, module_sz: u32, qz_modules: u32) -> GrayImage {
        let qz_sz = qz_modules * module_sz;
        let qr_sz = self.w as u32 * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        GrayImage::from_fn(total_sz, total_sz, |x, y| {
            if x < qz_sz || x >= qz_sz + qr_sz || y < qz_sz || y >= qz_sz + qr_sz {
                return Luma([255]);
            }
            let r = ((y - qz_sz) / module_sz) as usize;
            let c = ((x - qz_sz) / module_sz) as usize;
            if self.get(r, c) {
                Luma([0])
            } else {
                Luma([255])
            }
        })
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(self.w * (self.w + 1) + 1);
        res.push('\n');
        for r in 0..self.w {
            for c in 0..self.w {
                res.push(if self.get(r, c) { 'd' } else { '.' });
            }
            res.push('\n');
        }
        res
    }
}
