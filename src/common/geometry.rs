use super::config::StyleConfig;
use super::error::{StyleError, StyleResult};

/// Side of a finder pattern, in modules.
pub const FINDER_MODULES: u32 = 7;

/// Largest canvas side, in pixels, a render may produce.
pub const MAX_CANVAS_SIDE: u32 = u16::MAX as u32;

// Geometry
//------------------------------------------------------------------------------

/// Pixel layout of one render, derived once from the module count and the config.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Geometry {
    pub module_size: u32,
    pub border: u32,
    pub modules: u32,
    pub width: u32,
    pub height: u32,
    pub center: (i64, i64),
    pub max_radius: u32,
    clearance_radius: u32,
    logo_footprint: u32,
}

impl Geometry {
    /// Derives the layout for a `modules` x `modules` matrix. Fails when the canvas side would
    /// exceed [`MAX_CANVAS_SIDE`].
    pub fn new(modules: usize, cfg: &StyleConfig) -> StyleResult<Self> {
        let module_size = cfg.module_size;
        let too_large = || {
            StyleError::GeometryInconsistency(format!(
                "{modules} modules of {module_size} px with a {} module border exceed the \
                 maximum canvas side of {MAX_CANVAS_SIDE} px",
                cfg.border_modules
            ))
        };

        let modules = u32::try_from(modules).map_err(|_| too_large())?;
        let border = cfg.border_modules.checked_mul(module_size).ok_or_else(too_large)?;
        let width = modules
            .checked_mul(module_size)
            .and_then(|qr| border.checked_mul(2)?.checked_add(qr))
            .filter(|&w| w <= MAX_CANVAS_SIDE)
            .ok_or_else(too_large)?;
        let height = width;
        let short_side = width.min(height);

        let clearance_radius =
            (short_side as f64 * cfg.logo_ratio * cfg.clearance_margin / 2.0).round() as u32;
        let logo_footprint = (short_side as f64 * cfg.logo_ratio).floor() as u32;

        Ok(Self {
            module_size,
            border,
            modules,
            width,
            height,
            center: ((width / 2) as i64, (height / 2) as i64),
            max_radius: short_side / 2,
            clearance_radius,
            logo_footprint,
        })
    }

    pub fn clearance_radius(&self) -> u32 {
        self.clearance_radius
    }

    /// Longest side allowed for the composited logo.
    pub fn logo_footprint(&self) -> u32 {
        self.logo_footprint
    }

    pub fn finder_side(&self) -> u32 {
        FINDER_MODULES * self.module_size
    }

    pub fn distance_from_center(&self, x: i64, y: i64) -> f64 {
        let (dx, dy) = ((x - self.center.0) as f64, (y - self.center.1) as f64);
        dx.hypot(dy)
    }

    /// Normalized distance from the canvas center, clamped to [0, 1].
    pub fn gradient_factor(&self, x: i64, y: i64) -> f64 {
        if self.max_radius == 0 {
            return 1.0;
        }
        let f = self.distance_from_center(x, y) / self.max_radius as f64;
        num_traits::clamp(f, 0.0, 1.0)
    }
}


// Clearance zone
//------------------------------------------------------------------------------

impl Geometry {
    /// Whether the pixel lies strictly inside the central clearance disk.
    pub fn in_clearance(&self, x: i64, y: i64) -> bool {
        self.distance_from_center(x, y) < self.clearance_radius as f64
    }
}


// Finder territory
//------------------------------------------------------------------------------

impl Geometry {
    /// Module coordinate (column, row) containing the pixel. Quiet zone pixels map to
    /// negative or out of range coordinates.
    pub fn module_at(&self, x: i64, y: i64) -> (i64, i64) {
        let (b, ms) = (self.border as i64, self.module_size as i64);
        ((x - b).div_euclid(ms), (y - b).div_euclid(ms))
    }

    /// Whether module (`mx`, `my`) lies in one of the top-left, top-right or bottom-left
    /// 7x7 corner blocks. The bottom-right corner never is.
    pub fn is_finder_module(&self, mx: i64, my: i64) -> bool {
        let n = self.modules as i64;
        let f = FINDER_MODULES as i64;
        let near = 0..f;
        let far = n - f..n;

        (near.contains(&mx) && near.contains(&my))
            || (far.contains(&mx) && near.contains(&my))
            || (near.contains(&mx) && far.contains(&my))
    }

    pub fn is_finder_territory(&self, x: i64, y: i64) -> bool {
        let (mx, my) = self.module_at(x, y);
        self.is_finder_module(mx, my)
    }

    /// Whether the module block with top-left pixel (`x`, `y`) must not receive a data dot:
    /// it belongs to a corner eye or its center falls inside the clearance disk.
    pub fn is_reserved(&self, x: i64, y: i64) -> bool {
        let half = (self.module_size / 2) as i64;
        self.is_finder_territory(x, y) || self.in_clearance(x + half, y + half)
    }

    /// Top-left pixels of the top-left, top-right and bottom-left finder patterns.
    pub fn finder_origins(&self) -> [(u32, u32); 3] {
        let far = self.border + self.modules.saturating_sub(FINDER_MODULES) * self.module_size;
        [(self.border, self.border), (far, self.border), (self.border, far)]
    }

    /// Checks that the three corner eyes fit without overlapping and that the clearance disk
    /// stays clear of all of them.
    pub fn validate(&self) -> StyleResult<()> {
        if self.module_size == 0 {
            return Err(StyleError::GeometryInconsistency("module size is zero".to_string()));
        }
        if self.modules < 2 * FINDER_MODULES {
            return Err(StyleError::GeometryInconsistency(format!(
                "{0}x{0} modules cannot hold three non-overlapping {1}x{1} finder patterns",
                self.modules, FINDER_MODULES
            )));
        }

        let side = self.finder_side() as i64;
        let (cx, cy) = self.center;
        for (x0, y0) in self.finder_origins() {
            let (x0, y0) = (x0 as i64, y0 as i64);
            let dx = (x0 - cx).max(cx - (x0 + side - 1)).max(0);
            let dy = (y0 - cy).max(cy - (y0 + side - 1)).max(0);
            let dist = (dx as f64).hypot(dy as f64);
            if dist < self.clearance_radius as f64 {
                return Err(StyleError::GeometryInconsistency(format!(
                    "clearance radius {} reaches the finder pattern at ({x0}, {y0}), \
                     which is {dist:.1} px from the center",
                    self.clearance_radius
                )));
            }
        }
        Ok(())
    }
}
