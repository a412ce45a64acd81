use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;

use crate::common::{Geometry, Gradient, WHITE};

// Corner eyes
//------------------------------------------------------------------------------

/// Redraws the top-left, top-right and bottom-left finder patterns as a rounded outer square,
/// an inset white rounded square and a centered dot, each colored by its own distance from the
/// canvas center.
pub fn draw_finder_patterns(canvas: &mut RgbImage, geo: &Geometry, grad: &Gradient) {
    for (x, y) in geo.finder_origins() {
        draw_finder_pattern_at(canvas, geo, grad, x as i32, y as i32);
    }
}

fn draw_finder_pattern_at(canvas: &mut RgbImage, geo: &Geometry, grad: &Gradient, x: i32, y: i32) {
    let ms = geo.module_size as i32;
    let corner_r = ms / 3;

    let outer_sz = 7 * ms;
    let outer_mid = (x + outer_sz / 2, y + outer_sz / 2);
    let outer_clr = grad.color_at(geo.gradient_factor(outer_mid.0 as i64, outer_mid.1 as i64));
    draw_filled_rounded_rect_mut(canvas, x, y, outer_sz, corner_r, outer_clr);

    draw_filled_rounded_rect_mut(canvas, x + ms, y + ms, 5 * ms, corner_r, WHITE);

    let dot_sz = 3 * ms;
    let dot_mid = (x + 2 * ms + dot_sz / 2, y + 2 * ms + dot_sz / 2);
    let dot_clr = grad.color_at(geo.gradient_factor(dot_mid.0 as i64, dot_mid.1 as i64));
    draw_filled_circle_mut(canvas, dot_mid, dot_sz / 2, dot_clr);
}

/// Fills the square with top-left (`x`, `y`) and side `sz`, rounding each corner with
/// radius `r`. Nothing is drawn outside the square.
pub fn draw_filled_rounded_rect_mut(
    canvas: &mut RgbImage,
    x: i32,
    y: i32,
    sz: i32,
    r: i32,
    clr: Rgb<u8>,
) {
    if sz <= 0 {
        return;
    }
    let r = r.clamp(0, (sz - 1) / 2);
    let inner = (sz - 2 * r) as u32;

    draw_filled_rect_mut(canvas, Rect::at(x + r, y).of_size(inner, sz as u32), clr);
    draw_filled_rect_mut(canvas, Rect::at(x, y + r).of_size(sz as u32, inner), clr);

    let far = sz - 1 - r;
    for (dx, dy) in [(r, r), (far, r), (r, far), (far, far)] {
        draw_filled_circle_mut(canvas, (x + dx, y + dy), r, clr);
    }
}
