use crate::{foundation::core::Point, geometry::projection::ViewState};

/// Clock advance per tick at time-scale 1.
pub const TIME_STEP: f64 = 0.01;
/// Idle auto-spin per tick at time-scale 1, in radians.
pub const AUTO_SPIN_STEP: f64 = 0.005;
/// Radians of view rotation per pixel of drag.
pub const DRAG_SENSITIVITY: f64 = 0.01;
/// Upper bound of the time-scale.
pub const MAX_TIME_SCALE: f64 = 3.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Playback state of the animation clock.
pub enum Playback {
    /// Ticks are ignored.
    Paused,
    /// Ticks advance the clock.
    #[default]
    Playing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Intents posted to the controller by the scheduler and pointer handlers.
pub enum ControlEvent {
    /// One scheduled frame tick.
    Tick,
    /// Flip between playing and paused.
    TogglePlay,
    /// Force a playback state.
    SetPlaying(bool),
    /// Change the time-scale (clamped to `[0, 3]`).
    SetTimeScale(f64),
    /// Enter or leave 3D mode.
    Set3d(bool),
    /// Pointer pressed at a position.
    Grab(Point),
    /// Pointer moved to a position.
    Drag(Point),
    /// Pointer released.
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Read-only copy of the controller state.
pub struct ControllerSnapshot {
    /// Clock value.
    pub time: f64,
    /// Playback state.
    pub playback: Playback,
    /// Current time-scale.
    pub time_scale: f64,
    /// Whether 3D mode is on.
    pub three_d: bool,
    /// Current orientation (meaningful in 3D mode).
    pub view: ViewState,
    /// Whether a drag gesture is in progress.
    pub dragging: bool,
}

/// Single owner of the animation clock and 3D view orientation.
///
/// All mutation goes through `&mut self`, either via [`Controller::apply`] with a
/// [`ControlEvent`] or the equivalent direct methods. [`Controller::teardown`] consumes the
/// controller, so no tick can reach it afterwards.
#[derive(Clone, Debug)]
pub struct Controller {
    time: f64,
    playback: Playback,
    time_scale: f64,
    three_d: bool,
    view: ViewState,
    drag_origin: Option<Point>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Playing, time 0, time-scale 1, 2D mode.
    pub fn new() -> Self {
        Self {
            time: 0.0,
            playback: Playback::Playing,
            time_scale: 1.0,
            three_d: false,
            view: ViewState::INITIAL,
            drag_origin: None,
        }
    }

    /// Dispatch one intent.
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Tick => self.tick(),
            ControlEvent::TogglePlay => self.toggle_play(),
            ControlEvent::SetPlaying(on) => self.set_playing(on),
            ControlEvent::SetTimeScale(s) => self.set_time_scale(s),
            ControlEvent::Set3d(on) => self.set_3d(on),
            ControlEvent::Grab(p) => self.grab(p),
            ControlEvent::Drag(p) => self.drag_to(p),
            ControlEvent::Release => self.release(),
        }
    }

    /// Advance the clock (and the idle auto-spin in 3D mode) if playing.
    pub fn tick(&mut self) {
        if self.playback != Playback::Playing {
            return;
        }
        self.time += TIME_STEP * self.time_scale;
        if self.three_d && self.drag_origin.is_none() {
            self.view.spin_y += AUTO_SPIN_STEP * self.time_scale;
        }
    }

    /// Flip playback.
    pub fn toggle_play(&mut self) {
        let on = self.playback != Playback::Playing;
        self.set_playing(on);
    }

    /// Set playback.
    pub fn set_playing(&mut self, on: bool) {
        self.playback = if on {
            Playback::Playing
        } else {
            Playback::Paused
        };
    }

    /// Set the time-scale, clamped to `[0, 3]`; NaN is ignored.
    ///
    /// A scale of 0 freezes animation without changing playback.
    pub fn set_time_scale(&mut self, scale: f64) {
        if scale.is_nan() {
            return;
        }
        self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
    }

    /// Enter or leave 3D mode. Entering resets the view; leaving cancels a drag.
    pub fn set_3d(&mut self, on: bool) {
        if on == self.three_d {
            return;
        }
        self.three_d = on;
        self.drag_origin = None;
        if on {
            self.view = ViewState::RESET_3D;
        }
        tracing::debug!(three_d = on, "view mode changed");
    }

    /// Start a drag at `at` (3D mode only).
    pub fn grab(&mut self, at: Point) {
        if self.three_d {
            self.drag_origin = Some(at);
        }
    }

    /// Rotate the view by the pointer delta since the last position.
    pub fn drag_to(&mut self, at: Point) {
        if !self.three_d {
            return;
        }
        let Some(origin) = self.drag_origin else {
            return;
        };
        let delta = at - origin;
        self.view.spin_y += delta.x * DRAG_SENSITIVITY;
        self.view.tilt_x += delta.y * DRAG_SENSITIVITY;
        self.drag_origin = Some(at);
    }

    /// End the drag; auto-spin resumes on the next tick.
    pub fn release(&mut self) {
        self.drag_origin = None;
    }

    /// Clock value.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Current time-scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Playback state.
    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Whether 3D mode is on.
    pub fn is_3d(&self) -> bool {
        self.three_d
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Orientation to render with: `Some` in 3D mode, `None` in 2D mode.
    pub fn view(&self) -> Option<ViewState> {
        self.three_d.then_some(self.view)
    }

    /// Copy of the full state.
    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            time: self.time,
            playback: self.playback,
            time_scale: self.time_scale,
            three_d: self.three_d,
            view: self.view,
            dragging: self.is_dragging(),
        }
    }

    /// Stop driving the controller, returning its final state.
    pub fn teardown(self) -> ControllerSnapshot {
        tracing::debug!(time = self.time, "controller torn down");
        self.snapshot()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/controller.rs"]
mod tests;
