//! Core data model for waypoint editing.
//!
//! Three coordinate spaces are involved and each gets its own point type so
//! the compiler keeps them apart:
//!
//! - **Map space** (`MapPoint`): georeferenced units (usually metres), y up.
//! - **Canvas space** (`CanvasPoint`): raster pixels at native resolution,
//!   origin top-left, y down.
//! - **Screen space** (`ScreenPoint`): pixels of the panned/zoomed view as
//!   reported by the pointer device.

use serde::{Deserialize, Serialize};

// ─── Points ──────────────────────────────────────────────────────────────

/// A position in map space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A position in untransformed canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another canvas point.
    pub fn distance_to(self, other: CanvasPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A position in screen pixels, relative to the editor container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── Waypoints ───────────────────────────────────────────────────────────

/// A single path point: position, heading, and curvature.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    /// Heading in radians.
    #[serde(default)]
    pub theta: f64,
    #[serde(default)]
    pub curvature: f64,
}

impl Waypoint {
    pub const fn new(x: f64, y: f64, theta: f64, curvature: f64) -> Self {
        Self {
            x,
            y,
            theta,
            curvature,
        }
    }

    /// A waypoint at `p` with zero heading and zero curvature.
    pub const fn at(p: MapPoint) -> Self {
        Self::new(p.x, p.y, 0.0, 0.0)
    }

    pub fn position(&self) -> MapPoint {
        MapPoint::new(self.x, self.y)
    }
}

/// Replacement values for an existing waypoint.
///
/// `curvature` is optional: when `None` the waypoint keeps its current value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WaypointFields {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
    pub curvature: Option<f64>,
}

impl WaypointFields {
    pub const fn new(x: f64, y: f64, theta: f64) -> Self {
        Self {
            x,
            y,
            theta,
            curvature: None,
        }
    }

    pub const fn with_curvature(mut self, curvature: f64) -> Self {
        self.curvature = Some(curvature);
        self
    }

    /// Apply these fields on top of `wp`.
    pub fn apply_to(&self, wp: &mut Waypoint) {
        wp.x = self.x;
        wp.y = self.y;
        wp.theta = self.theta;
        if let Some(c) = self.curvature {
            wp.curvature = c;
        }
    }
}

/// Position of a waypoint within the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaypointRole {
    Start,
    Interior,
    Goal,
}

impl WaypointRole {
    /// Role of the waypoint at `index` in a path of `len` points.
    ///
    /// A single-point path is its own start.
    pub fn of(index: usize, len: usize) -> Self {
        if index == 0 {
            Self::Start
        } else if index + 1 == len {
            Self::Goal
        } else {
            Self::Interior
        }
    }
}
