//! Hit testing: point → waypoint lookup.
//!
//! Scans the path back-to-front (last painted = topmost) and returns the
//! first waypoint whose marker centre is strictly closer than the radius.

use wp_core::{CanvasPoint, CoordinateMapper, ScreenPoint, ViewTransform, WaypointStore};

/// Find the topmost waypoint within `radius` canvas pixels of `p`.
pub fn hit_test(
    store: &WaypointStore,
    mapper: &CoordinateMapper,
    p: CanvasPoint,
    radius: f64,
) -> Option<usize> {
    store
        .iter()
        .enumerate()
        .rev()
        .find(|(_, wp)| mapper.waypoint_to_canvas(wp).distance_to(p) < radius)
        .map(|(i, _)| i)
}

/// [`hit_test`] for a pointer position in screen space.
pub fn hit_test_screen(
    store: &WaypointStore,
    mapper: &CoordinateMapper,
    view: &ViewTransform,
    p: ScreenPoint,
    radius: f64,
) -> Option<usize> {
    hit_test(store, mapper, view.screen_to_canvas(p), radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wp_core::{HIT_RADIUS, MapFrame, MapPoint, Waypoint};

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(MapFrame::new(100, 100, 1.0, MapPoint::new(0.0, 0.0)).unwrap())
    }

    #[test]
    fn boundary_is_exclusive() {
        let store = WaypointStore::from_initial(&[Waypoint::new(50.0, 50.0, 0.0, 0.0)]);
        let m = mapper();
        assert_eq!(hit_test(&store, &m, CanvasPoint::new(60.0, 50.0), HIT_RADIUS), None);
        assert_eq!(
            hit_test(&store, &m, CanvasPoint::new(59.99, 50.0), HIT_RADIUS),
            Some(0)
        );
        assert_eq!(hit_test(&store, &m, CanvasPoint::new(56.0, 42.0), HIT_RADIUS), None);
    }

    #[test]
    fn overlapping_markers_prefer_later_index() {
        let store = WaypointStore::from_initial(&[
            Waypoint::new(50.0, 50.0, 0.0, 0.0),
            Waypoint::new(80.0, 80.0, 0.0, 0.0),
            Waypoint::new(52.0, 50.0, 0.0, 0.0),
        ]);
        let hit = hit_test(&store, &mapper(), CanvasPoint::new(50.0, 50.0), HIT_RADIUS);
        assert_eq!(hit, Some(2));
    }

    #[test]
    fn empty_store_never_hits() {
        let hit = hit_test(
            &WaypointStore::new(),
            &mapper(),
            CanvasPoint::new(0.0, 0.0),
            HIT_RADIUS,
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn radius_is_in_canvas_pixels_regardless_of_zoom() {
        let store = WaypointStore::from_initial(&[Waypoint::new(50.0, 50.0, 0.0, 0.0)]);
        let mut view = ViewTransform::new();
        view.zoom(4.0);
        // Marker sits at screen (200, 200); 30 screen px away is 7.5 canvas px.
        let m = mapper();
        let hit = hit_test_screen(&store, &m, &view, ScreenPoint::new(230.0, 200.0), HIT_RADIUS);
        assert_eq!(hit, Some(0));
        let miss = hit_test_screen(&store, &m, &view, ScreenPoint::new(241.0, 200.0), HIT_RADIUS);
        assert_eq!(miss, None);
    }
}
