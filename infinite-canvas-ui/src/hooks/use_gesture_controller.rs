use infinite_canvas_core::gesture::DOUBLE_CLICK_ZOOM_MS;
use infinite_canvas_core::{
    GestureController, Point, PointerDownOutcome, PointerInput, ScrollDelta, WheelInput,
    WheelOutcome,
};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, PointerEvent, WheelEvent};

use super::TransformHandle;
use crate::dom::{self, EventBinding};

/// Handle returned by the gesture hook
#[derive(Clone, Copy)]
pub struct GestureHandle {
    /// True while the viewport itself is being dragged
    pub is_panning: Signal<bool>,
}

/// Wheel, pinch, drag and double-click input for the canvas element.
///
/// Listeners are attached once `canvas_ref` mounts and removed when the owning
/// scope is cleaned up. Wheel pans are also reported through `on_scroll_delta`
/// so the scrollbar can follow.
pub fn use_gesture_controller(
    canvas_ref: NodeRef<html::Div>,
    transform: TransformHandle,
    pan_on_scroll: bool,
    on_scroll_delta: Callback<ScrollDelta>,
) -> GestureHandle {
    let controller = store_value(GestureController::new(pan_on_scroll));
    let is_panning = create_rw_signal(false);
    let bindings = store_value::<Vec<EventBinding>>(Vec::new());

    // Client coordinates to viewport-local ones.
    let local_point = move |client_x: i32, client_y: i32| {
        let rect = canvas_ref
            .get_untracked()
            .map(|canvas| dom::bounding_rect(&canvas))
            .unwrap_or_default();
        Point::new(client_x as f64 - rect.x, client_y as f64 - rect.y)
    };

    let on_wheel = move |ev: WheelEvent| {
        if canvas_ref.get_untracked().is_none() {
            return;
        }
        let input = WheelInput {
            delta_x: ev.delta_x(),
            delta_y: ev.delta_y(),
            modifier: ev.ctrl_key() || ev.meta_key(),
            pointer: local_point(ev.client_x(), ev.client_y()),
        };
        let gate = dom::gate_flags(ev.target());
        let current = transform.get_untracked();
        let bounds = transform.bounds();

        match controller.try_update_value(|c| c.on_wheel(&current, &bounds, &input, gate)) {
            Some(WheelOutcome::Pan { delta, transform: next }) => {
                ev.prevent_default();
                transform.set(next);
                on_scroll_delta.call(delta);
            }
            Some(WheelOutcome::Zoom(next)) => {
                ev.prevent_default();
                transform.set(next);
            }
            Some(WheelOutcome::PassThrough) | None => {}
        }
    };

    let on_pointer_down = move |ev: PointerEvent| {
        let input = PointerInput {
            pointer_id: ev.pointer_id(),
            button: ev.button(),
            modifier: ev.ctrl_key() || ev.meta_key(),
            position: local_point(ev.client_x(), ev.client_y()),
        };
        let gate = dom::gate_flags(ev.target());

        let Some(PointerDownOutcome::PanStarted { notify_press }) =
            controller.try_update_value(|c| c.on_pointer_down(&input, gate))
        else {
            return;
        };
        is_panning.set(true);
        if notify_press {
            if let Err(e) = dom::dispatch_press_notification() {
                log::warn!("Failed to dispatch press notification: {:?}", e);
            }
        }
    };

    let on_pointer_move = move |ev: PointerEvent| {
        if !is_panning.get_untracked() {
            return;
        }
        let position = local_point(ev.client_x(), ev.client_y());
        let current = transform.get_untracked();
        let bounds = transform.bounds();
        if let Some(next) = controller
            .try_update_value(|c| c.on_pointer_move(&current, &bounds, ev.pointer_id(), position))
            .flatten()
        {
            transform.set(next);
        }
    };

    let on_pointer_up = move |ev: PointerEvent| {
        if controller.try_update_value(|c| c.on_pointer_up(ev.pointer_id())) == Some(true) {
            is_panning.set(false);
        }
    };

    let on_double_click = move |ev: MouseEvent| {
        let gate = dom::gate_flags(ev.target());
        let current = transform.get_untracked();
        let bounds = transform.bounds();
        let pointer = local_point(ev.client_x(), ev.client_y());
        if let Some(next) = controller
            .try_with_value(|c| c.on_double_click(&current, &bounds, pointer, ev.shift_key(), gate))
            .flatten()
        {
            ev.prevent_default();
            transform.animate_to(next, DOUBLE_CLICK_ZOOM_MS);
        }
    };

    let teardown = move || {
        let _ = bindings.try_update_value(|b| b.clear());
    };

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let canvas: &web_sys::EventTarget = canvas.unchecked_ref();

        let mut attached = Vec::with_capacity(6);
        dom::attach_or_warn(&mut attached, canvas, "wheel", false, on_wheel);
        dom::attach_or_warn(&mut attached, canvas, "pointerdown", true, on_pointer_down);
        dom::attach_or_warn(&mut attached, canvas, "dblclick", false, on_double_click);
        dom::attach_or_warn(&mut attached, &window, "pointermove", true, on_pointer_move);
        dom::attach_or_warn(&mut attached, &window, "pointerup", true, on_pointer_up);
        dom::attach_or_warn(&mut attached, &window, "pointercancel", true, on_pointer_up);
        log::debug!("Gesture listeners attached: {}", attached.len());
        bindings.set_value(attached);

        on_cleanup(teardown);
    });

    GestureHandle {
        is_panning: is_panning.into(),
    }
}
