//! Editor tuning knobs.

use serde::Deserialize;

/// Default pick radius around a waypoint marker, in canvas pixels.
pub const HIT_RADIUS: f64 = 10.0;

/// Interaction settings shared by the controller and the host bridge.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Factor applied per zoom-in step (zoom-out divides by it).
    pub zoom_step: f64,
    /// Pick radius around a waypoint marker, in canvas pixels.
    /// A point exactly this far away is a miss.
    pub hit_radius: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            zoom_step: 1.2,
            hit_radius: HIT_RADIUS,
        }
    }
}

impl EditorConfig {
    /// Parse a partial JSON override; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
