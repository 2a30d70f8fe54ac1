//! Pointer-driven interaction state machine.
//!
//! The controller owns the whole editing state: the waypoint store, the view
//! transform, and the current [`InteractionState`]. Every host event goes
//! through [`InteractionController::handle`], which runs to completion and
//! reports what the host has to do next (redraw, open the form, suppress the
//! native context menu).
//!
//! | Event | Idle | Panning | Dragging(i) |
//! |-------|------|---------|-------------|
//! | down (primary) | hit → Dragging(hit), else → Panning | — | — |
//! | move  | — | pan by Δscreen | move waypoint `i` under the pointer |
//! | up    | — | → Idle | drop on another waypoint `j` → `move_to(i, j)`; → Idle |
//! | dblclick | hit → edit request, else add request | — | — |
//! | contextmenu | hit → delete; suppress native menu | → Idle, as Idle | → Idle, as Idle |
//!
//! Non-primary presses are ignored, so a right-click never starts a drag.
//! The editor also keeps the path it was started with as a read-only
//! reference layer under the editable one.

use crate::form::{EditRequest, FormError, FormSubmission};
use crate::input::{InputEvent, PointerButton};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use wp_core::{
    CoordinateMapper, EditorConfig, MapFrame, MapPoint, ScreenPoint, ViewTransform, Waypoint,
    WaypointFields, WaypointIoError, WaypointStore,
};
use wp_render::{DrawList, build_draw_list, hit_test_screen};

/// What the pointer is currently doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    Idle,
    /// Panning the view; `last` is the previous pointer position.
    Panning { last: ScreenPoint },
    /// Dragging the waypoint at `index`.
    Dragging { index: usize },
}

impl InteractionState {
    /// CSS cursor hint for the host.
    pub fn cursor(&self) -> &'static str {
        match self {
            Self::Idle => "default",
            Self::Panning { .. } => "grabbing",
            Self::Dragging { .. } => "move",
        }
    }
}

/// Outcome of one handled event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// Store or view changed; the host must redraw before returning.
    pub redraw: bool,
    /// Open the waypoint form with this request.
    pub request: Option<EditRequest>,
    /// Call `preventDefault()` on the native context menu.
    pub suppress_context_menu: bool,
    /// The user asked to export (keyboard shortcut).
    pub export: bool,
}

impl Response {
    fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::default()
        }
    }
}

/// The editing engine behind the map canvas.
pub struct InteractionController {
    mapper: CoordinateMapper,
    store: WaypointStore,
    /// The path as loaded, never edited.
    reference: Vec<Waypoint>,
    view: ViewTransform,
    state: InteractionState,
    config: EditorConfig,
    /// Request currently shown by the form, awaiting submit or cancel.
    pending: Option<EditRequest>,
}

impl InteractionController {
    /// Start editing a copy of `initial` on top of `frame`.
    pub fn new(frame: MapFrame, initial: &[Waypoint], config: EditorConfig) -> Self {
        log::debug!(
            "editor started: {}x{} map, {} waypoints",
            frame.width(),
            frame.height(),
            initial.len()
        );
        Self {
            mapper: CoordinateMapper::new(frame),
            store: WaypointStore::from_initial(initial),
            reference: initial.to_vec(),
            view: ViewTransform::new(),
            state: InteractionState::Idle,
            config,
            pending: None,
        }
    }

    pub fn store(&self) -> &WaypointStore {
        &self.store
    }

    /// The path as it was when the editor started.
    pub fn reference(&self) -> &[Waypoint] {
        &self.reference
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The form request awaiting an answer, if any.
    pub fn pending_request(&self) -> Option<&EditRequest> {
        self.pending.as_ref()
    }

    /// Current frame for the renderer.
    pub fn draw_list(&self) -> DrawList {
        build_draw_list(&self.store, &self.reference, &self.mapper, &self.view)
    }

    /// Owned copy of the path for the export collaborator.
    pub fn export_snapshot(&self) -> Result<Vec<Waypoint>, WaypointIoError> {
        if self.store.is_empty() {
            return Err(WaypointIoError::NothingToExport);
        }
        Ok(self.store.snapshot())
    }

    // ─── Event dispatch ──────────────────────────────────────────────────

    pub fn handle(&mut self, event: &InputEvent) -> Response {
        match event {
            InputEvent::PointerDown { x, y, button } => {
                self.pointer_down(ScreenPoint::new(*x, *y), *button)
            }
            InputEvent::PointerMove { x, y } => self.pointer_move(ScreenPoint::new(*x, *y)),
            InputEvent::PointerUp { x, y } => self.pointer_up(ScreenPoint::new(*x, *y)),
            InputEvent::DoubleClick { x, y } => self.double_click(ScreenPoint::new(*x, *y)),
            InputEvent::ContextMenu { x, y } => self.context_menu(ScreenPoint::new(*x, *y)),
            InputEvent::Key {
                key,
                ctrl,
                shift,
                alt,
                meta,
            } => match ShortcutMap::resolve(key, *ctrl, *shift, *alt, *meta) {
                Some(action) => self.dispatch_action(action),
                None => Response::default(),
            },
        }
    }

    fn hit(&self, p: ScreenPoint) -> Option<usize> {
        hit_test_screen(&self.store, &self.mapper, &self.view, p, self.config.hit_radius)
    }

    fn screen_to_map(&self, p: ScreenPoint) -> MapPoint {
        self.mapper.canvas_to_map(self.view.screen_to_canvas(p))
    }

    fn pointer_down(&mut self, p: ScreenPoint, button: PointerButton) -> Response {
        if button != PointerButton::Primary {
            log::debug!("ignoring {button:?} press");
            return Response::default();
        }
        if self.state != InteractionState::Idle {
            return Response::default();
        }
        self.state = match self.hit(p) {
            Some(index) => InteractionState::Dragging { index },
            None => InteractionState::Panning { last: p },
        };
        log::debug!("pointer down → {:?}", self.state);
        Response::default()
    }

    fn pointer_move(&mut self, p: ScreenPoint) -> Response {
        match self.state {
            InteractionState::Idle => Response::default(),
            InteractionState::Panning { last } => {
                self.view.pan(p.x - last.x, p.y - last.y);
                self.state = InteractionState::Panning { last: p };
                Response::redraw()
            }
            InteractionState::Dragging { index } => {
                let target = self.screen_to_map(p);
                if self.store.set_position(index, target) {
                    Response::redraw()
                } else {
                    Response::default()
                }
            }
        }
    }

    fn pointer_up(&mut self, p: ScreenPoint) -> Response {
        let state = std::mem::replace(&mut self.state, InteractionState::Idle);
        match state {
            InteractionState::Idle | InteractionState::Panning { .. } => Response::default(),
            InteractionState::Dragging { index } => {
                let mut response = Response::default();
                if let Some(drop) = self.hit(p)
                    && drop != index
                    && self.store.move_to(index, drop)
                {
                    log::debug!("reordered waypoint {index} → {drop}");
                    response.redraw = true;
                }
                response
            }
        }
    }

    fn double_click(&mut self, p: ScreenPoint) -> Response {
        if self.state != InteractionState::Idle {
            return Response::default();
        }
        let request = match self.hit(p) {
            Some(index) => match self.store.get(index) {
                Some(wp) => EditRequest::edit(index, *wp),
                None => return Response::default(),
            },
            None => EditRequest::add(Waypoint::at(self.screen_to_map(p))),
        };
        self.pending = Some(request);
        Response {
            request: Some(request),
            ..Response::default()
        }
    }

    fn context_menu(&mut self, p: ScreenPoint) -> Response {
        let mut response = Response {
            suppress_context_menu: true,
            ..Response::default()
        };
        if self.state != InteractionState::Idle {
            log::debug!("context menu ends {:?}", self.state);
            self.state = InteractionState::Idle;
        }
        if let Some(index) = self.hit(p)
            && self.store.delete(index).is_some()
        {
            log::debug!("deleted waypoint {index}");
            response.redraw = true;
        }
        response
    }

    /// Run a shortcut or toolbar action.
    pub fn dispatch_action(&mut self, action: ShortcutAction) -> Response {
        match action {
            ShortcutAction::ZoomIn => self.zoom_in(),
            ShortcutAction::ZoomOut => self.zoom_out(),
            ShortcutAction::ResetView => self.reset_view(),
            ShortcutAction::Export => Response {
                export: true,
                ..Response::default()
            },
        }
    }

    // ─── View buttons ────────────────────────────────────────────────────

    pub fn zoom_in(&mut self) -> Response {
        self.zoom_by(self.config.zoom_step)
    }

    pub fn zoom_out(&mut self) -> Response {
        self.zoom_by(1.0 / self.config.zoom_step)
    }

    fn zoom_by(&mut self, factor: f64) -> Response {
        if self.view.zoom(factor) {
            Response::redraw()
        } else {
            Response::default()
        }
    }

    pub fn reset_view(&mut self) -> Response {
        self.view.reset();
        Response::redraw()
    }

    // ─── Form answers ────────────────────────────────────────────────────

    /// Merge the form's answer into the store and close the request.
    ///
    /// Edits keep the waypoint's current curvature; additions get `0`.
    pub fn submit_form(&mut self, submission: FormSubmission) -> Response {
        let Some(request) = self.pending.take() else {
            log::warn!("form submitted with no pending request");
            return Response::default();
        };
        let changed = match request.index {
            None => {
                self.store.add(Waypoint::new(
                    submission.x,
                    submission.y,
                    submission.theta,
                    0.0,
                ));
                true
            }
            Some(index) => self.store.update(
                index,
                WaypointFields::new(submission.x, submission.y, submission.theta),
            ),
        };
        Response {
            redraw: changed,
            ..Response::default()
        }
    }

    /// Parse the form's raw field text and merge it.
    ///
    /// Invalid input changes nothing and leaves the request open so the
    /// form can show the error and let the user correct it.
    pub fn submit_fields(
        &mut self,
        x: &str,
        y: &str,
        theta: &str,
    ) -> Result<Response, FormError> {
        let submission = FormSubmission::parse(x, y, theta).inspect_err(|e| {
            log::warn!("form input rejected: {e}");
        })?;
        Ok(self.submit_form(submission))
    }

    /// The form was dismissed without saving.
    pub fn cancel_form(&mut self) {
        self.pending = None;
    }
}
