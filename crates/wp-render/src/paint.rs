//! Draw list → Vello drawing commands.

use crate::draw::DrawList;
use crate::theme::{PaintTheme, Rgb8};
use kurbo::{Affine, BezPath, Circle, Point, Stroke};
use peniko::Fill;
use vello::Scene;
use wp_core::CanvasPoint;

/// Paint the waypoint overlay into a Vello scene.
///
/// Call once per frame with a freshly-cleared `Scene`; the caller presents
/// it via wgpu on top of the map raster.
pub fn paint_waypoints(scene: &mut Scene, list: &DrawList, theme: &PaintTheme) {
    if list.is_empty() {
        return;
    }
    let transform = Affine::new(list.transform);

    paint_reference(scene, list, theme, transform);

    if !list.path.is_empty() {
        scene.stroke(
            &Stroke::new(theme.path_width),
            transform,
            theme.path.to_peniko(),
            None,
            &polyline(&list.path),
        );
    }

    let outline = Stroke::new(theme.marker_outline_width);
    for marker in &list.markers {
        log::trace!(
            "MARKER #{} {:?} at ({}, {})",
            marker.index,
            marker.role,
            marker.center.x,
            marker.center.y
        );
        let circle = Circle::new(Point::new(marker.center.x, marker.center.y), theme.marker_radius);
        scene.fill(
            Fill::NonZero,
            transform,
            theme.marker_fill(marker.role).to_peniko(),
            None,
            &circle,
        );
        scene.stroke(
            &outline,
            transform,
            theme.marker_outline.to_peniko(),
            None,
            &circle,
        );
    }
}

// ─── Reference layer ─────────────────────────────────────────────────────

fn paint_reference(scene: &mut Scene, list: &DrawList, theme: &PaintTheme, transform: Affine) {
    let Some((start, end)) = list.reference_ends() else {
        return;
    };
    log::trace!("REFERENCE {} vertices", list.reference.len());
    scene.stroke(
        &Stroke::new(theme.reference_width),
        transform,
        theme.reference_path.to_peniko(),
        None,
        &polyline(&list.reference),
    );
    dot(scene, transform, start, theme.reference_marker_radius, theme.reference_start);
    dot(scene, transform, end, theme.reference_marker_radius, theme.reference_end);
}

fn dot(scene: &mut Scene, transform: Affine, at: CanvasPoint, radius: f64, color: Rgb8) {
    let circle = Circle::new(Point::new(at.x, at.y), radius);
    scene.fill(Fill::NonZero, transform, color.to_peniko(), None, &circle);
}

fn polyline(points: &[CanvasPoint]) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            path.move_to((p.x, p.y));
        } else {
            path.line_to((p.x, p.y));
        }
    }
    path
}
