//! Raster map georeferencing and map ↔ canvas coordinate mapping.
//!
//! A map raster is `width × height` pixels; pixel (0, 0) is the top-left
//! corner while the map-space `origin` names the bottom-left corner. Canvas
//! y therefore runs opposite to map y.

use crate::model::{CanvasPoint, MapPoint, Waypoint};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_RESOLUTION: f64 = 0.05;

/// Why a map description was rejected.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("map metadata is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("map size must be positive, got {width}x{height}")]
    EmptyRaster { width: u32, height: u32 },
    #[error("map resolution must be a positive finite number, got {0}")]
    BadResolution(f64),
    #[error("map origin needs at least two finite coordinates, got {0:?}")]
    BadOrigin(Vec<f64>),
}

/// Immutable georeferencing of the raster map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapFrame {
    width: u32,
    height: u32,
    resolution: f64,
    origin: MapPoint,
}

/// Wire form of the map metadata supplied by the host page.
///
/// `origin` follows the map-server convention `[x, y, yaw]`; yaw is ignored.
#[derive(Debug, Deserialize)]
struct MapMetadata {
    width: u32,
    height: u32,
    #[serde(default = "default_resolution")]
    resolution: f64,
    #[serde(default = "default_origin")]
    origin: Vec<f64>,
}

fn default_resolution() -> f64 {
    DEFAULT_RESOLUTION
}

fn default_origin() -> Vec<f64> {
    vec![0.0, 0.0, 0.0]
}

impl MapFrame {
    /// Build a validated frame.
    pub fn new(
        width: u32,
        height: u32,
        resolution: f64,
        origin: MapPoint,
    ) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::EmptyRaster { width, height });
        }
        if !(resolution.is_finite() && resolution > 0.0) {
            return Err(FrameError::BadResolution(resolution));
        }
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            return Err(FrameError::BadOrigin(vec![origin.x, origin.y]));
        }
        Ok(Self {
            width,
            height,
            resolution,
            origin,
        })
    }

    /// Parse the host's metadata JSON:
    /// `{"width":W,"height":H,"resolution":R,"origin":[x,y,yaw]}`.
    pub fn from_metadata_json(json: &str) -> Result<Self, FrameError> {
        let meta: MapMetadata = serde_json::from_str(json)?;
        let origin = match meta.origin.as_slice() {
            [x, y, ..] => MapPoint::new(*x, *y),
            _ => return Err(FrameError::BadOrigin(meta.origin)),
        };
        Self::new(meta.width, meta.height, meta.resolution, origin)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Map units per pixel.
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Map-space coordinates of the raster's bottom-left corner.
    pub fn origin(&self) -> MapPoint {
        self.origin
    }
}

/// Pure bidirectional conversion between map space and canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    frame: MapFrame,
}

impl CoordinateMapper {
    pub fn new(frame: MapFrame) -> Self {
        Self { frame }
    }

    pub fn frame(&self) -> &MapFrame {
        &self.frame
    }

    pub fn map_to_canvas(&self, p: MapPoint) -> CanvasPoint {
        let f = &self.frame;
        CanvasPoint::new(
            (p.x - f.origin.x) / f.resolution,
            f.height as f64 - (p.y - f.origin.y) / f.resolution,
        )
    }

    pub fn canvas_to_map(&self, p: CanvasPoint) -> MapPoint {
        let f = &self.frame;
        MapPoint::new(
            p.x * f.resolution + f.origin.x,
            (f.height as f64 - p.y) * f.resolution + f.origin.y,
        )
    }

    /// Canvas position of a waypoint's marker.
    pub fn waypoint_to_canvas(&self, wp: &Waypoint) -> CanvasPoint {
        self.map_to_canvas(wp.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn unit_frame() -> MapFrame {
        MapFrame::new(100, 100, 1.0, MapPoint::new(0.0, 0.0)).unwrap()
    }

    #[test]
    fn center_maps_to_center() {
        let mapper = CoordinateMapper::new(unit_frame());
        let c = mapper.waypoint_to_canvas(&Waypoint::new(50.0, 50.0, 0.0, 0.0));
        assert_eq!(c, CanvasPoint::new(50.0, 50.0));
    }

    #[test]
    fn map_y_is_flipped() {
        let mapper = CoordinateMapper::new(unit_frame());
        // Bottom-left of the map is the bottom-left pixel row of the canvas.
        assert_eq!(
            mapper.map_to_canvas(MapPoint::new(0.0, 0.0)),
            CanvasPoint::new(0.0, 100.0)
        );
        assert_eq!(
            mapper.map_to_canvas(MapPoint::new(0.0, 100.0)),
            CanvasPoint::new(0.0, 0.0)
        );
    }

    #[test]
    fn round_trip_with_offset_origin() {
        let frame = MapFrame::new(384, 256, 0.05, MapPoint::new(-10.0, -6.4)).unwrap();
        let mapper = CoordinateMapper::new(frame);
        for &(x, y) in &[(0.0, 0.0), (-10.0, -6.4), (3.21, 4.56), (9.2, -1.0), (1e3, -1e3)] {
            let back = mapper.canvas_to_map(mapper.map_to_canvas(MapPoint::new(x, y)));
            assert!(approx(back.x, x) && approx(back.y, y), "({x}, {y}) -> {back:?}");
        }
    }

    #[test]
    fn canvas_round_trip() {
        let frame = MapFrame::new(200, 120, 0.1, MapPoint::new(2.0, 3.0)).unwrap();
        let mapper = CoordinateMapper::new(frame);
        let p = CanvasPoint::new(17.5, 99.25);
        let back = mapper.map_to_canvas(mapper.canvas_to_map(p));
        assert!(approx(back.x, p.x) && approx(back.y, p.y));
    }

    #[test]
    fn non_finite_input_propagates() {
        let mapper = CoordinateMapper::new(unit_frame());
        let c = mapper.map_to_canvas(MapPoint::new(f64::NAN, 1.0));
        assert!(c.x.is_nan());
        assert!(c.y.is_finite());
    }

    #[test]
    fn metadata_json_with_yaw() {
        let frame = MapFrame::from_metadata_json(
            r#"{"resolution":0.05,"origin":[-12.5,-8.0,0.0],"width":640,"height":480}"#,
        )
        .unwrap();
        assert_eq!(frame.width(), 640);
        assert_eq!(frame.height(), 480);
        assert_eq!(frame.origin(), MapPoint::new(-12.5, -8.0));
    }

    #[test]
    fn metadata_json_defaults() {
        let frame = MapFrame::from_metadata_json(r#"{"width":10,"height":20}"#).unwrap();
        assert_eq!(frame.resolution(), 0.05);
        assert_eq!(frame.origin(), MapPoint::new(0.0, 0.0));
    }

    #[test]
    fn rejects_invalid_metadata() {
        assert!(matches!(
            MapFrame::from_metadata_json(r#"{"width":0,"height":20}"#),
            Err(FrameError::EmptyRaster { .. })
        ));
        assert!(matches!(
            MapFrame::from_metadata_json(r#"{"width":5,"height":5,"resolution":0}"#),
            Err(FrameError::BadResolution(_))
        ));
        assert!(matches!(
            MapFrame::from_metadata_json(r#"{"width":5,"height":5,"origin":[1.0]}"#),
            Err(FrameError::BadOrigin(_))
        ));
        assert!(matches!(
            MapFrame::from_metadata_json("not json"),
            Err(FrameError::Json(_))
        ));
    }
}
