mod finder;
pub mod logo;

pub use finder::{draw_filled_rounded_rect_mut, draw_finder_patterns};
pub use logo::{composite_logo, composite_logo_from_path, fit_logo, load_logo};

use image::{GrayImage, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::common::{Geometry, Gradient, StyleConfig, WHITE};

// Gradient fill
//------------------------------------------------------------------------------

/// Paints every dark pixel of the plain render with the gradient color for its distance from
/// the canvas center. Light pixels become white.
pub fn apply_gradient(
    base: &GrayImage,
    geo: &Geometry,
    grad: &Gradient,
    dark_threshold: u8,
) -> RgbImage {
    let (w, h) = base.dimensions();
    RgbImage::from_fn(w, h, |x, y| {
        if base.get_pixel(x, y)[0] < dark_threshold {
            grad.color_at(geo.gradient_factor(x as i64, y as i64))
        } else {
            WHITE
        }
    })
}


// Module rasterization
//------------------------------------------------------------------------------

/// Re-renders the gradient image as dots. The corner eyes are drawn first, then every
/// module-aligned block that is neither finder territory nor inside the clearance disk gets a
/// filled circle in the color sampled at its center, unless that color is near white.
/// Blocks crossing the canvas edge are skipped.
pub fn rasterize_modules(grad_img: &RgbImage, geo: &Geometry, cfg: &StyleConfig) -> RgbImage {
    let (w, h) = grad_img.dimensions();
    let mut canvas = RgbImage::from_pixel(w, h, WHITE);

    draw_finder_patterns(&mut canvas, geo, &cfg.gradient);

    let ms = geo.module_size;
    let radius = cfg.dot_radius();
    for y in (0..h).step_by(ms as usize) {
        for x in (0..w).step_by(ms as usize) {
            if x + ms > w || y + ms > h || geo.is_reserved(x as i64, y as i64) {
                continue;
            }

            let (cx, cy) = (x + ms / 2, y + ms / 2);
            let clr = *grad_img.get_pixel(cx, cy);
            if cfg.is_near_white(&clr) {
                continue;
            }
            draw_filled_circle_mut(&mut canvas, (cx as i32, cy as i32), radius, clr);
        }
    }

    canvas
}

#[cfg(test)]
mod rasterize_tests {
    use image::{Rgb, RgbImage};
    use qrcode::EcLevel;

    use super::{apply_gradient, rasterize_modules};
    use crate::common::{Geometry, ModuleMatrix, StyleConfig, WHITE};

    fn render(payload: &str, cfg: &StyleConfig) -> (ModuleMatrix, Geometry, RgbImage, RgbImage) {
        let matrix = ModuleMatrix::encode(payload, EcLevel::H).unwrap();
        let geo = Geometry::new(matrix.width(), cfg).unwrap();
        let base = matrix.render(cfg.module_size, cfg.border_modules);
        let grad = apply_gradient(&base, &geo, &cfg.gradient, cfg.dark_threshold);
        let dots = rasterize_modules(&grad, &geo, cfg);
        (matrix, geo, grad, dots)
    }

    #[test]
    fn test_dots_follow_modules() {
        let cfg = StyleConfig::default();
        let (matrix, geo, grad, dots) = render("PAY|MERCHANT123", &cfg);
        let ms = geo.module_size;

        for r in 0..matrix.width() {
            for c in 0..matrix.width() {
                let (x, y) = (geo.border + c as u32 * ms, geo.border + r as u32 * ms);
                if geo.is_reserved(x as i64, y as i64) {
                    continue;
                }
                let (cx, cy) = (x + ms / 2, y + ms / 2);
                let px = *dots.get_pixel(cx, cy);
                if matrix.get(r, c) {
                    assert_eq!(px, *grad.get_pixel(cx, cy), "module ({r}, {c})");
                } else {
                    assert_eq!(px, WHITE, "module ({r}, {c})");
                }
                // Block corners stay white: dots, not squares
                assert_eq!(*dots.get_pixel(x, y), WHITE);
            }
        }
    }

    #[test]
    fn test_clearance_disk_has_no_dots() {
        let cfg = StyleConfig::default();
        let (_, geo, _, dots) = render("PAY|MERCHANT123", &cfg);
        let free = geo.clearance_radius() as f64 - cfg.dot_radius() as f64 - 2.0;
        for (x, y, px) in dots.enumerate_pixels() {
            if geo.distance_from_center(x as i64, y as i64) < free {
                assert_eq!(*px, WHITE, "dot pixel at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_quiet_zone_stays_white() {
        let cfg = StyleConfig::default();
        let (_, geo, _, dots) = render("PAY|MERCHANT123", &cfg);
        let b = geo.border;
        for (x, y, px) in dots.enumerate_pixels() {
            if x < b || y < b || x >= geo.width - b || y >= geo.height - b {
                assert_eq!(*px, WHITE);
            }
        }
    }

    #[test]
    fn test_partial_blocks_skipped() {
        let cfg = StyleConfig { module_size: 4, ..StyleConfig::default() };
        let geo = Geometry::new(21, &cfg).unwrap();
        // Fully dark gradient image one pixel wider than the module grid
        let grad = RgbImage::from_pixel(geo.width + 1, geo.height + 1, Rgb([10, 10, 10]));
        let dots = rasterize_modules(&grad, &geo, &cfg);
        for y in 0..dots.height() {
            assert_eq!(*dots.get_pixel(geo.width, y), WHITE);
        }
        assert_ne!(*dots.get_pixel(geo.width - 2, geo.height / 3), WHITE);
    }
}
