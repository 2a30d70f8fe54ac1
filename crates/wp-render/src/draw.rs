//! Store → backend-neutral draw list.
//!
//! Rendering is a pure function of (store, reference path, mapper, view).
//! Backends (Vello here, Canvas2D in the wasm bridge) replay the list in
//! order: the reference path with its start and end dots, then the editable
//! polyline, then one marker per waypoint on top.

use wp_core::{
    CanvasPoint, CoordinateMapper, ViewTransform, Waypoint, WaypointRole, WaypointStore,
};

/// One waypoint marker, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub center: CanvasPoint,
    pub role: WaypointRole,
}

/// Everything needed to draw one frame of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    /// Canvas → screen affine (`[a, b, c, d, e, f]`).
    pub transform: [f64; 6],
    /// The unedited path, drawn underneath for comparison.
    pub reference: Vec<CanvasPoint>,
    /// Polyline vertices in path order.
    pub path: Vec<CanvasPoint>,
    pub markers: Vec<Marker>,
}

impl DrawList {
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.reference.is_empty()
    }

    /// First and last reference vertices, if any.
    pub fn reference_ends(&self) -> Option<(CanvasPoint, CanvasPoint)> {
        Some((*self.reference.first()?, *self.reference.last()?))
    }
}

/// Build the draw list for the current state.
pub fn build_draw_list(
    store: &WaypointStore,
    reference: &[Waypoint],
    mapper: &CoordinateMapper,
    view: &ViewTransform,
) -> DrawList {
    let len = store.len();
    let path: Vec<CanvasPoint> = store.iter().map(|wp| mapper.waypoint_to_canvas(wp)).collect();
    let markers = path
        .iter()
        .enumerate()
        .map(|(index, &center)| Marker {
            index,
            center,
            role: WaypointRole::of(index, len),
        })
        .collect();
    DrawList {
        transform: view.as_coeffs(),
        reference: reference.iter().map(|wp| mapper.waypoint_to_canvas(wp)).collect(),
        path,
        markers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wp_core::{MapFrame, MapPoint};

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(MapFrame::new(100, 100, 1.0, MapPoint::new(0.0, 0.0)).unwrap())
    }

    #[test]
    fn markers_follow_path_order_and_roles() {
        let store = WaypointStore::from_initial(&[
            Waypoint::new(10.0, 90.0, 0.0, 0.0),
            Waypoint::new(20.0, 80.0, 0.0, 0.0),
            Waypoint::new(30.0, 70.0, 0.0, 0.0),
            Waypoint::new(40.0, 60.0, 0.0, 0.0),
        ]);
        let list = build_draw_list(&store, &[], &mapper(), &ViewTransform::new());
        assert_eq!(
            list.path,
            vec![
                CanvasPoint::new(10.0, 10.0),
                CanvasPoint::new(20.0, 20.0),
                CanvasPoint::new(30.0, 30.0),
                CanvasPoint::new(40.0, 40.0),
            ]
        );
        let roles: Vec<WaypointRole> = list.markers.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                WaypointRole::Start,
                WaypointRole::Interior,
                WaypointRole::Interior,
                WaypointRole::Goal,
            ]
        );
    }

    #[test]
    fn view_transform_is_carried_not_applied() {
        let store = WaypointStore::from_initial(&[Waypoint::new(50.0, 50.0, 0.0, 0.0)]);
        let mut view = ViewTransform::new();
        view.pan(10.0, -5.0);
        view.zoom(2.0);
        let list = build_draw_list(&store, &[], &mapper(), &view);
        assert_eq!(list.path, vec![CanvasPoint::new(50.0, 50.0)]);
        assert_eq!(list.transform, [2.0, 0.0, 0.0, 2.0, 10.0, -5.0]);
    }

    #[test]
    fn empty_store_draws_nothing() {
        let list = build_draw_list(&WaypointStore::new(), &[], &mapper(), &ViewTransform::new());
        assert!(list.is_empty());
        assert!(list.path.is_empty());
        assert_eq!(list.reference_ends(), None);
    }

    #[test]
    fn reference_is_independent_of_the_store() {
        let reference = [
            Waypoint::new(10.0, 90.0, 0.0, 0.0),
            Waypoint::new(20.0, 80.0, 0.0, 0.0),
            Waypoint::new(30.0, 70.0, 0.0, 0.0),
        ];
        let mut store = WaypointStore::from_initial(&reference);
        store.delete(0);
        store.set_position(0, MapPoint::new(60.0, 60.0));

        let list = build_draw_list(&store, &reference, &mapper(), &ViewTransform::new());
        assert_eq!(
            list.reference,
            vec![
                CanvasPoint::new(10.0, 10.0),
                CanvasPoint::new(20.0, 20.0),
                CanvasPoint::new(30.0, 30.0),
            ]
        );
        assert_eq!(
            list.reference_ends(),
            Some((CanvasPoint::new(10.0, 10.0), CanvasPoint::new(30.0, 30.0)))
        );
        assert_eq!(list.path[0], CanvasPoint::new(60.0, 40.0));
    }

    #[test]
    fn emptied_store_still_shows_reference() {
        let reference = [Waypoint::new(50.0, 50.0, 0.0, 0.0)];
        let store = WaypointStore::new();
        let list = build_draw_list(&store, &reference, &mapper(), &ViewTransform::new());
        assert!(list.markers.is_empty());
        assert!(!list.is_empty());
    }
}
