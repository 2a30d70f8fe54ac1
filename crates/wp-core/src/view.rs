//! Pan/zoom view transform between canvas pixels and screen pixels.
//!
//! The visual transform is `translate(origin) · scale(scale)`: a canvas
//! point `c` is shown at `origin + c * scale`. The same transform is applied
//! to the background raster, so the canvas buffer itself is never resized.

use crate::model::{CanvasPoint, ScreenPoint};

/// Pan offset and zoom factor of the editor view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    origin_x: f64,
    origin_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTransform {
    /// Identity view: scale 1, no pan.
    pub const fn new() -> Self {
        Self {
            scale: 1.0,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Screen-pixel pan offset `(origin_x, origin_y)`.
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }

    /// Shift the view by a screen-pixel delta. Unbounded.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.origin_x += dx;
        self.origin_y += dy;
    }

    /// Multiply the scale by `factor`, anchored at the coordinate origin.
    ///
    /// Non-positive or non-finite factors are ignored. Returns `true` if the
    /// scale changed.
    pub fn zoom(&mut self, factor: f64) -> bool {
        if !(factor.is_finite() && factor > 0.0) {
            log::debug!("ignoring zoom factor {factor}");
            return false;
        }
        self.scale *= factor;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Undo the visual transform: screen pixel → untransformed canvas pixel.
    pub fn screen_to_canvas(&self, p: ScreenPoint) -> CanvasPoint {
        CanvasPoint::new(
            (p.x - self.origin_x) / self.scale,
            (p.y - self.origin_y) / self.scale,
        )
    }

    /// Apply the visual transform: canvas pixel → screen pixel.
    pub fn canvas_to_screen(&self, p: CanvasPoint) -> ScreenPoint {
        ScreenPoint::new(
            p.x * self.scale + self.origin_x,
            p.y * self.scale + self.origin_y,
        )
    }

    /// CSS form of the visual transform, for the raster `<img>` and canvas.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.origin_x, self.origin_y, self.scale
        )
    }

    /// Affine coefficients `[a, b, c, d, e, f]` (canvas → screen), in the
    /// order used by `CanvasRenderingContext2d::set_transform` and kurbo.
    pub fn as_coeffs(&self) -> [f64; 6] {
        [self.scale, 0.0, 0.0, self.scale, self.origin_x, self.origin_y]
    }
}
