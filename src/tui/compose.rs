//! Page compositing: draw a rendered page into the frame at a pose.
//!
//! The page is first rendered at rest into an off-screen buffer, then
//! sampled column by column into the frame. Offset shifts the page,
//! rotation foreshortens it by cos(angle) about its centre, and opacity
//! blends RGB colors toward the paper.

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};

use crate::motion::Pose;

/// Below this the page is not drawn at all.
const INVISIBLE: f32 = 0.02;
/// Narrowest a foreshortened page may get, as a fraction of its width.
const MIN_SCALE: f32 = 0.05;
/// Non-RGB colors dim below this opacity since they cannot be blended.
const DIM_BELOW: f32 = 0.6;

/// Composite `page` into `dst` over `area` using `pose`.
///
/// `page` must be the page rendered at rest and have the same height as
/// `area`. Cells of `area` the posed page does not cover are left as-is.
pub fn project(page: &Buffer, dst: &mut Buffer, area: Rect, pose: Pose, paper: Color) {
    if pose.opacity <= INVISIBLE || area.width == 0 || page.area.width == 0 {
        return;
    }

    let width = f32::from(area.width);
    let scale = pose.rotation.to_radians().cos().clamp(MIN_SCALE, 1.0);
    let page_width = (width * scale).round().max(1.0);
    let left = f32::from(area.x) + pose.offset / 100.0 * width + (width - page_width) / 2.0;

    for x in area.left()..area.right() {
        let u = (f32::from(x) + 0.5 - left) / page_width;
        if !(0.0..1.0).contains(&u) {
            continue;
        }
        let src_x = page.area.x + ((u * f32::from(page.area.width)) as u16).min(page.area.width - 1);

        for row in 0..area.height.min(page.area.height) {
            let Some(src) = page.cell((src_x, page.area.y + row)) else {
                continue;
            };
            let Some(out) = dst.cell_mut((x, area.y + row)) else {
                continue;
            };
            *out = src.clone();
            fade(out, paper, pose.opacity);
        }
    }
}

/// Blend a cell's colors toward `paper` by `opacity`.
fn fade(cell: &mut Cell, paper: Color, opacity: f32) {
    if opacity >= 1.0 {
        return;
    }
    cell.fg = blend(cell.fg, paper, opacity);
    cell.bg = blend(cell.bg, paper, opacity);
    if opacity < DIM_BELOW && !matches!(cell.fg, Color::Rgb(..)) {
        cell.modifier.insert(Modifier::DIM);
    }
}

/// `paper + (color - paper) * opacity`, per channel, for RGB pairs.
/// Other colors pass through unchanged.
pub fn blend(color: Color, paper: Color, opacity: f32) -> Color {
    match (color, paper) {
        (Color::Rgb(r, g, b), Color::Rgb(pr, pg, pb)) => {
            let mix = |c: u8, p: u8| {
                let v = f32::from(p) + (f32::from(c) - f32::from(p)) * opacity.clamp(0.0, 1.0);
                v.round().clamp(0.0, 255.0) as u8
            };
            Color::Rgb(mix(r, pr), mix(g, pg), mix(b, pb))
        }
        _ => color,
    }
}

// ============================================================================
// TESTS
// ============================================================================
