//! Colours and stroke widths for the waypoint overlay.

use wp_core::WaypointRole;

/// An opaque sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, as accepted by Canvas2D style setters.
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_peniko(self) -> peniko::Color {
        peniko::Color::from_rgb8(self.r, self.g, self.b)
    }
}

/// Overlay styling. The default reproduces the classic editor look:
/// magenta path, cyan start, orange goal, over a thin blue reference path
/// with a green start dot and a red end dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintTheme {
    pub path: Rgb8,
    pub path_width: f64,
    pub start: Rgb8,
    pub goal: Rgb8,
    pub interior: Rgb8,
    pub marker_radius: f64,
    pub marker_outline: Rgb8,
    pub marker_outline_width: f64,
    pub reference_path: Rgb8,
    pub reference_width: f64,
    pub reference_start: Rgb8,
    pub reference_end: Rgb8,
    pub reference_marker_radius: f64,
}

impl Default for PaintTheme {
    fn default() -> Self {
        Self {
            path: Rgb8::new(0xff, 0x00, 0xff),
            path_width: 2.0,
            start: Rgb8::new(0x00, 0xff, 0xff),
            goal: Rgb8::new(0xff, 0x99, 0x00),
            interior: Rgb8::new(0xff, 0x00, 0xff),
            marker_radius: 5.0,
            marker_outline: Rgb8::new(0, 0, 0),
            marker_outline_width: 1.0,
            reference_path: Rgb8::new(0x00, 0x00, 0xff),
            reference_width: 1.0,
            reference_start: Rgb8::new(0x00, 0x80, 0x00),
            reference_end: Rgb8::new(0xff, 0x00, 0x00),
            reference_marker_radius: 2.0,
        }
    }
}

impl PaintTheme {
    pub fn marker_fill(&self, role: WaypointRole) -> Rgb8 {
        match role {
            WaypointRole::Start => self.start,
            WaypointRole::Goal => self.goal,
            WaypointRole::Interior => self.interior,
        }
    }
}
