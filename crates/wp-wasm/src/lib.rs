//! WASM bridge for the map editor: exposes the Rust editing engine to
//! the browser page.
//!
//! Compiled via `wasm-pack build --target web`. The page forwards pointer
//! and keyboard events (container-relative coordinates) and shows the
//! waypoint form when a handler hands back an edit request.

mod render2d;

use serde_json::json;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wp_core::{
    EditorConfig, MapFrame, waypoints_from_json, waypoints_to_csv_string, waypoints_to_json,
};
use wp_editor::{EditRequest, InputEvent, InteractionController, Response};
use wp_render::PaintTheme;

/// The browser-facing editor.
///
/// Owns the interaction controller and the overlay canvas. Every handler
/// that changes the path or the view redraws before it returns.
#[wasm_bindgen]
pub struct WaypointCanvas {
    controller: InteractionController,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    theme: PaintTheme,
}

#[wasm_bindgen]
impl WaypointCanvas {
    /// Start the editor on `canvas` with the host's map metadata and
    /// initial waypoints (both JSON). `config_json` may override
    /// [`EditorConfig`] fields.
    ///
    /// Fails, leaving the page inert, when the canvas is missing or the
    /// metadata is unusable.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: Option<HtmlCanvasElement>,
        metadata_json: &str,
        waypoints_json: &str,
        config_json: Option<String>,
    ) -> Result<WaypointCanvas, JsValue> {
        console_error_panic_hook_setup();

        let canvas = canvas.ok_or_else(|| JsValue::from_str("no canvas element"))?;
        let frame = MapFrame::from_metadata_json(metadata_json).map_err(|e| {
            log::warn!("map metadata rejected: {e}");
            JsValue::from_str(&e.to_string())
        })?;
        let initial =
            waypoints_from_json(waypoints_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let config = match config_json {
            Some(json) => {
                EditorConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => EditorConfig::default(),
        };

        // Drawing buffer at native map resolution; display size is CSS's job.
        canvas.set_width(frame.width());
        canvas.set_height(frame.height());
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("unexpected 2d context type"))?;

        let editor = Self {
            controller: InteractionController::new(frame, &initial, config),
            canvas,
            ctx,
            theme: PaintTheme::default(),
        };
        editor.redraw();
        Ok(editor)
    }

    /// Redraw the overlay and re-apply the view transform to the canvas.
    pub fn redraw(&self) {
        let css = self.controller.view().css_transform();
        if let Err(e) = self.canvas.style().set_property("transform", &css) {
            log::warn!("could not set canvas transform: {e:?}");
        }
        let frame = self.controller.mapper().frame();
        render2d::render_overlay(
            &self.ctx,
            &self.controller.draw_list(),
            &self.theme,
            frame.width() as f64,
            frame.height() as f64,
        );
    }

    /// CSS transform the page should also apply to the map `<img>`.
    pub fn view_transform(&self) -> String {
        self.controller.view().css_transform()
    }

    /// CSS cursor for the current pointer state.
    pub fn cursor(&self) -> String {
        self.controller.state().cursor().to_string()
    }

    // ─── Pointer events ──────────────────────────────────────────────────

    /// `button` is the DOM `MouseEvent.button`; only primary presses pan
    /// or drag.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64, button: i16) {
        self.dispatch(&InputEvent::pointer_down(x, y, button));
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) {
        self.dispatch(&InputEvent::PointerMove { x, y });
    }

    pub fn handle_pointer_up(&mut self, x: f64, y: f64) {
        self.dispatch(&InputEvent::PointerUp { x, y });
    }

    /// Returns the form request as JSON (see [`request_json`]), or an empty
    /// string when nothing should open.
    pub fn handle_double_click(&mut self, x: f64, y: f64) -> String {
        let response = self.dispatch(&InputEvent::DoubleClick { x, y });
        response.request.as_ref().map(request_json).unwrap_or_default()
    }

    /// Returns `true` if the page must `preventDefault()` the native menu.
    pub fn handle_context_menu(&mut self, x: f64, y: f64) -> bool {
        self.dispatch(&InputEvent::ContextMenu { x, y })
            .suppress_context_menu
    }

    /// Handle a keyboard event. Returns JSON
    /// `{"handled":bool,"export":bool}`.
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let response = self.dispatch(&InputEvent::key(key, ctrl, shift, alt, meta));
        json!({
            "handled": response.redraw || response.export,
            "export": response.export,
        })
        .to_string()
    }

    // ─── Toolbar ─────────────────────────────────────────────────────────

    pub fn zoom_in(&mut self) {
        let response = self.controller.zoom_in();
        self.finish(response);
    }

    pub fn zoom_out(&mut self) {
        let response = self.controller.zoom_out();
        self.finish(response);
    }

    pub fn reset_view(&mut self) {
        let response = self.controller.reset_view();
        self.finish(response);
    }

    // ─── Waypoint form ───────────────────────────────────────────────────

    /// Submit the form's raw field text. Returns `{"ok":true}` or
    /// `{"ok":false,"error":"..."}`; on error nothing is changed and the
    /// request stays open.
    pub fn submit_form(&mut self, x: &str, y: &str, theta: &str) -> String {
        match self.controller.submit_fields(x, y, theta) {
            Ok(response) => {
                self.finish(response);
                json!({ "ok": true }).to_string()
            }
            Err(e) => error_json(&e.to_string()),
        }
    }

    pub fn cancel_form(&mut self) {
        self.controller.cancel_form();
    }

    // ─── Export ──────────────────────────────────────────────────────────

    /// Current path as JSON for the export collaborator. Returns
    /// `{"ok":true,"waypoints":[...]}` or `{"ok":false,"error":"no waypoints to export"}`.
    pub fn export_waypoints(&self) -> String {
        let result = self
            .controller
            .export_snapshot()
            .and_then(|snapshot| waypoints_to_json(&snapshot));
        match result {
            Ok(list) => format!(r#"{{"ok":true,"waypoints":{list}}}"#),
            Err(e) => error_json(&e.to_string()),
        }
    }

    /// Current path as CSV text. Returns `{"ok":true,"csv":"..."}` or an
    /// error envelope.
    pub fn export_csv(&self) -> String {
        let result = self
            .controller
            .export_snapshot()
            .and_then(|snapshot| waypoints_to_csv_string(&snapshot));
        match result {
            Ok(csv) => json!({ "ok": true, "csv": csv }).to_string(),
            Err(e) => error_json(&e.to_string()),
        }
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

impl WaypointCanvas {
    fn dispatch(&mut self, event: &InputEvent) -> Response {
        let response = self.controller.handle(event);
        if response.redraw {
            self.redraw();
        }
        response
    }

    fn finish(&self, response: Response) {
        if response.redraw {
            self.redraw();
        }
    }
}

/// Form request for the page:
/// `{"title":..,"index":n|null,"x":"..","y":"..","theta":"..","data":{..}}`.
fn request_json(request: &EditRequest) -> String {
    let [x, y, theta] = request.field_values();
    json!({
        "title": request.title(),
        "index": request.index,
        "x": x,
        "y": y,
        "theta": theta,
        "data": request.data,
    })
    .to_string()
}

fn error_json(message: &str) -> String {
    json!({ "ok": false, "error": message }).to_string()
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("wPGM editor panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wp_core::Waypoint;

    #[test]
    fn edit_request_envelope() {
        let req = EditRequest::edit(1, Waypoint::new(1.5, -2.0, 0.25, 0.1));
        let v: serde_json::Value = serde_json::from_str(&request_json(&req)).unwrap();
        assert_eq!(v["title"], "Edit Waypoint 2");
        assert_eq!(v["index"], 1);
        assert_eq!(v["x"], "1.5000");
        assert_eq!(v["theta"], "0.2500");
        assert_eq!(v["data"]["curvature"], 0.1);
    }

    #[test]
    fn add_request_has_null_index() {
        let req = EditRequest::add(Waypoint::new(0.0, 0.0, 0.0, 0.0));
        let v: serde_json::Value = serde_json::from_str(&request_json(&req)).unwrap();
        assert_eq!(v["title"], "Add New Waypoint");
        assert!(v["index"].is_null());
    }

    #[test]
    fn error_envelope_escapes_message() {
        let v: serde_json::Value =
            serde_json::from_str(&error_json(r#"y must be a number, got "a\b""#)).unwrap();
        assert_eq!(v["ok"], false);
        assert_eq!(v["error"], r#"y must be a number, got "a\b""#);
    }
}
