//! Canvas2D software renderer.
//!
//! Replays a [`DrawList`] onto the overlay `<canvas>`. The canvas buffer is
//! the raster's native size and drawing happens in untransformed canvas
//! pixels; pan/zoom is applied to the element through CSS.

use web_sys::CanvasRenderingContext2d;
use wp_core::CanvasPoint;
use wp_render::{DrawList, PaintTheme, Rgb8};

/// Clear the overlay and draw the reference path, the editable path, and
/// its markers.
pub fn render_overlay(
    ctx: &CanvasRenderingContext2d,
    list: &DrawList,
    theme: &PaintTheme,
    canvas_width: f64,
    canvas_height: f64,
) {
    ctx.clear_rect(0.0, 0.0, canvas_width, canvas_height);
    if list.is_empty() {
        return;
    }

    if let Some((start, end)) = list.reference_ends() {
        stroke_polyline(ctx, &list.reference, theme.reference_path, theme.reference_width);
        dot(ctx, start, theme.reference_marker_radius, theme.reference_start);
        dot(ctx, end, theme.reference_marker_radius, theme.reference_end);
    }

    stroke_polyline(ctx, &list.path, theme.path, theme.path_width);

    for marker in &list.markers {
        dot(ctx, marker.center, theme.marker_radius, theme.marker_fill(marker.role));
        ctx.set_stroke_style_str(&theme.marker_outline.to_css());
        ctx.set_line_width(theme.marker_outline_width);
        ctx.stroke();
    }
}

fn stroke_polyline(
    ctx: &CanvasRenderingContext2d,
    points: &[CanvasPoint],
    color: Rgb8,
    width: f64,
) {
    let mut points = points.iter();
    let Some(first) = points.next() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in points {
        ctx.line_to(p.x, p.y);
    }
    ctx.set_stroke_style_str(&color.to_css());
    ctx.set_line_width(width);
    ctx.stroke();
}

/// Fill a circle; the path stays current so callers can outline it.
fn dot(ctx: &CanvasRenderingContext2d, at: CanvasPoint, radius: f64, color: Rgb8) {
    ctx.begin_path();
    let _ = ctx.arc(at.x, at.y, radius, 0.0, std::f64::consts::TAU);
    ctx.set_fill_style_str(&color.to_css());
    ctx.fill();
}
