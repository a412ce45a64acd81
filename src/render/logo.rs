use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, RgbImage, RgbaImage};
use log::{debug, warn};

use crate::common::{Geometry, StyleError, StyleResult};

// Loading
//------------------------------------------------------------------------------

/// Reads the logo at `path`. A missing file is not an error and yields `None`; a file that
/// exists but cannot be decoded is `AssetUnavailable`.
pub fn load_logo(path: &Path) -> StyleResult<Option<DynamicImage>> {
    if !path.exists() {
        debug!("No logo at {}, skipping", path.display());
        return Ok(None);
    }
    image::open(path)
        .map(Some)
        .map_err(|e| StyleError::AssetUnavailable(format!("{}: {e}", path.display())))
}

// Compositing
//------------------------------------------------------------------------------

/// Downscales `logo` so its longest side is at most `footprint`, preserving aspect ratio.
/// Logos already small enough are returned as is.
pub fn fit_logo(logo: &DynamicImage, footprint: u32) -> DynamicImage {
    let (w, h) = logo.dimensions();
    if w <= footprint && h <= footprint {
        return logo.clone();
    }
    logo.resize(footprint, footprint, FilterType::Lanczos3)
}

/// Centers `logo` on the canvas. Logos with an alpha channel are blended through it, others
/// overwrite their bounding box.
pub fn composite_logo(mut canvas: RgbImage, logo: &DynamicImage, geo: &Geometry) -> RgbImage {
    let logo = fit_logo(logo, geo.logo_footprint());
    let x = geo.center.0 - (logo.width() / 2) as i64;
    let y = geo.center.1 - (logo.height() / 2) as i64;
    debug!("Compositing {}x{} logo at ({x}, {y})", logo.width(), logo.height());

    if logo.color().has_alpha() {
        blend_masked(&mut canvas, &logo.to_rgba8(), x, y);
    } else {
        imageops::replace(&mut canvas, &logo.to_rgb8(), x, y);
    }
    canvas
}

/// Loads and composites the logo at `path`. Never fails: a missing or unreadable logo leaves
/// the canvas untouched.
pub fn composite_logo_from_path(canvas: RgbImage, path: Option<&Path>, geo: &Geometry) -> RgbImage {
    let Some(path) = path else {
        return canvas;
    };
    match load_logo(path) {
        Ok(Some(logo)) => composite_logo(canvas, &logo, geo),
        Ok(None) => canvas,
        Err(e) => {
            warn!("Could not add logo: {e}");
            canvas
        }
    }
}

// Per pixel: out = (src * a + dst * (255 - a)) / 255, rounded
fn blend_masked(canvas: &mut RgbImage, top: &RgbaImage, x: i64, y: i64) {
    let (w, h) = (canvas.width() as i64, canvas.height() as i64);
    for (tx, ty, src) in top.enumerate_pixels() {
        let (dx, dy) = (x + tx as i64, y + ty as i64);
        if dx < 0 || dy < 0 || dx >= w || dy >= h {
            continue;
        }

        let a = src[3] as u32;
        let dst = canvas.get_pixel_mut(dx as u32, dy as u32);
        for i in 0..3 {
            dst[i] = ((src[i] as u32 * a + dst[i] as u32 * (255 - a) + 127) / 255) as u8;
        }
    }
}
