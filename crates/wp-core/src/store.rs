//! Ordered waypoint list with in-place editing.
//!
//! Index order is path order: index 0 is the start, the last index is the
//! goal. Every operation either applies fully or not at all, and reports
//! whether the list changed so callers know when to redraw. Invalid indices
//! are silent no-ops.

use crate::model::{MapPoint, Waypoint, WaypointFields};

/// The editable path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointStore {
    waypoints: Vec<Waypoint>,
}

impl WaypointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a copy of `initial`; the caller's slice is never
    /// touched by later edits.
    pub fn from_initial(initial: &[Waypoint]) -> Self {
        Self {
            waypoints: initial.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub fn as_slice(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }

    /// Owned copy of the current path, for export.
    pub fn snapshot(&self) -> Vec<Waypoint> {
        self.waypoints.clone()
    }

    /// Append `wp` as the new goal.
    pub fn add(&mut self, wp: Waypoint) {
        self.waypoints.push(wp);
    }

    /// Replace x/y/theta at `index`; curvature only if `fields` carries one.
    pub fn update(&mut self, index: usize, fields: WaypointFields) -> bool {
        match self.waypoints.get_mut(index) {
            Some(wp) => {
                fields.apply_to(wp);
                true
            }
            None => {
                log::debug!("update: index {index} out of range (len {})", self.len());
                false
            }
        }
    }

    /// Move waypoint `index` to `p`, leaving heading and curvature alone.
    pub fn set_position(&mut self, index: usize, p: MapPoint) -> bool {
        match self.waypoints.get_mut(index) {
            Some(wp) => {
                wp.x = p.x;
                wp.y = p.y;
                true
            }
            None => {
                log::debug!("set_position: index {index} out of range (len {})", self.len());
                false
            }
        }
    }

    /// Remove the waypoint at `index`, shifting later ones down.
    pub fn delete(&mut self, index: usize) -> Option<Waypoint> {
        if index >= self.waypoints.len() {
            log::debug!("delete: index {index} out of range (len {})", self.len());
            return None;
        }
        Some(self.waypoints.remove(index))
    }

    /// Splice: remove at `from`, then insert at `to` in the shortened list.
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        let len = self.waypoints.len();
        if from == to || from >= len || to >= len {
            if from != to {
                log::debug!("move_to: {from} -> {to} out of range (len {len})");
            }
            return false;
        }
        let wp = self.waypoints.remove(from);
        self.waypoints.insert(to, wp);
        true
    }
}

impl<'a> IntoIterator for &'a WaypointStore {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}
