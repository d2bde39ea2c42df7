use crate::gate::GateFlags;
use crate::geometry::{Point, ScrollDelta};
use crate::transform::{ViewportTransform, ZoomBounds};

/// Exponent factor applied to wheel `delta_y` when zooming: `scale × 2^(−dy × k)`.
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.01;

/// Primary mouse button as reported by `PointerEvent.button`.
pub const PRIMARY_BUTTON: i16 = 0;

/// Scale factor of one double-click (divided when shift is held).
pub const DOUBLE_CLICK_ZOOM_FACTOR: f64 = 2.0;
pub const DOUBLE_CLICK_ZOOM_MS: f64 = 250.0;

/// A drag follows one pointer; a second one turns it into a pinch.
const MAX_TRACKED_POINTERS: usize = 2;

/// Wheel event reduced to what the controller needs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
    /// ctrl or cmd held (also set by trackpad pinch)
    pub modifier: bool,
    /// Pointer position relative to the viewport element
    pub pointer: Point,
}

/// Pointer-down event reduced to what the controller needs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// `PointerEvent.pointerId`
    pub pointer_id: i32,
    pub button: i16,
    pub modifier: bool,
    /// Pointer position relative to the viewport element
    pub position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelOutcome {
    /// Target opted out: leave the event to the browser.
    PassThrough,
    /// Plain wheel pan; `delta` is also meant for the scrollbar model.
    Pan {
        delta: ScrollDelta,
        transform: ViewportTransform,
    },
    /// Modifier wheel (or pinch) zoom anchored at the pointer.
    Zoom(ViewportTransform),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerDownOutcome {
    Ignored,
    PanStarted {
        /// First press of this gesture: the host should broadcast a synthetic press.
        notify_press: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct TrackedPointer {
    id: i32,
    last: Point,
}

/// Input state machine turning wheel and pointer events into transform updates.
///
/// It never owns the transform: callers pass the current value in and write the
/// returned one to the store. One held pointer pans; two held pointers pinch-zoom
/// around their midpoint.
#[derive(Clone, Debug)]
pub struct GestureController {
    pan_on_scroll: bool,
    pointers: Vec<TrackedPointer>,
    user_pressed: bool,
}

impl GestureController {
    pub fn new(pan_on_scroll: bool) -> Self {
        Self {
            pan_on_scroll,
            pointers: Vec::with_capacity(MAX_TRACKED_POINTERS),
            user_pressed: false,
        }
    }

    /// True while a viewport drag is in progress (cursor feedback).
    pub fn is_panning(&self) -> bool {
        !self.pointers.is_empty()
    }

    pub fn on_wheel(
        &mut self,
        current: &ViewportTransform,
        bounds: &ZoomBounds,
        input: &WheelInput,
        gate: GateFlags,
    ) -> WheelOutcome {
        if gate.should_block_wheel(input.modifier) {
            return WheelOutcome::PassThrough;
        }

        if self.pan_on_scroll && !input.modifier {
            let delta = ScrollDelta::new(input.delta_x, input.delta_y);
            return WheelOutcome::Pan {
                delta,
                transform: current.panned_by_scroll(delta),
            };
        }

        let next_scale =
            bounds.clamp(current.scale * 2f64.powf(-input.delta_y * WHEEL_ZOOM_SENSITIVITY));
        WheelOutcome::Zoom(current.scaled_about(next_scale, input.pointer))
    }

    pub fn on_pointer_down(&mut self, input: &PointerInput, gate: GateFlags) -> PointerDownOutcome {
        if input.button != PRIMARY_BUTTON || input.modifier || gate.should_block_pan() {
            return PointerDownOutcome::Ignored;
        }

        match self.pointers.iter_mut().find(|p| p.id == input.pointer_id) {
            Some(tracked) => tracked.last = input.position,
            None => {
                let pinch_blocked = !self.pointers.is_empty() && gate.should_block_zoom();
                if self.pointers.len() >= MAX_TRACKED_POINTERS || pinch_blocked {
                    return PointerDownOutcome::Ignored;
                }
                self.pointers.push(TrackedPointer {
                    id: input.pointer_id,
                    last: input.position,
                });
            }
        }

        let notify_press = !self.user_pressed;
        self.user_pressed = true;
        PointerDownOutcome::PanStarted { notify_press }
    }

    /// Returns the panned (or pinched) transform when `pointer_id` is tracked.
    ///
    /// `position` is relative to the viewport element.
    pub fn on_pointer_move(
        &mut self,
        current: &ViewportTransform,
        bounds: &ZoomBounds,
        pointer_id: i32,
        position: Point,
    ) -> Option<ViewportTransform> {
        let tracked = self.pointers.iter_mut().find(|p| p.id == pointer_id)?;
        let before = tracked.last;
        tracked.last = position;
        if before == position {
            return None;
        }

        let Some(other) = self.pointers.iter().find(|p| p.id != pointer_id).map(|p| p.last) else {
            return Some(current.panned_by(position.x - before.x, position.y - before.y));
        };

        let (mid_before, mid_after) = (before.midpoint(&other), position.midpoint(&other));
        let (span_before, span_after) = (before.distance_to(&other), position.distance_to(&other));
        let scale = if span_before > 0.0 && span_after > 0.0 {
            bounds.clamp(current.scale * span_after / span_before)
        } else {
            current.scale
        };
        Some(
            current
                .scaled_about(scale, mid_before)
                .panned_by(mid_after.x - mid_before.x, mid_after.y - mid_before.y),
        )
    }

    /// Releases `pointer_id`. Returns whether that ended the gesture.
    pub fn on_pointer_up(&mut self, pointer_id: i32) -> bool {
        let held = self.pointers.len();
        self.pointers.retain(|p| p.id != pointer_id);
        if self.pointers.is_empty() {
            self.user_pressed = false;
        }
        held > 0 && self.pointers.is_empty()
    }

    /// Double-click zoom anchored at `pointer`; `zoom_out` is the shift variant.
    pub fn on_double_click(
        &self,
        current: &ViewportTransform,
        bounds: &ZoomBounds,
        pointer: Point,
        zoom_out: bool,
        gate: GateFlags,
    ) -> Option<ViewportTransform> {
        if gate.should_block_zoom() {
            return None;
        }
        let factor = if zoom_out {
            1.0 / DOUBLE_CLICK_ZOOM_FACTOR
        } else {
            DOUBLE_CLICK_ZOOM_FACTOR
        };
        let scale = bounds.clamp(current.scale * factor);
        if scale == current.scale {
            return None;
        }
        Some(current.scaled_about(scale, pointer))
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(true)
    }
}
