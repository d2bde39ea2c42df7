//! Thin helpers over `web-sys`: listener lifetimes, measurement, idle scheduling.

use std::time::Duration;

use infinite_canvas_core::{BoundingRect, GateFlags};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, EventTarget, IdleRequestOptions, MouseEvent, MouseEventInit};

/// A registered DOM listener. Dropping it removes the listener.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventBinding {
    /// Register `handler` for `event` on `target`.
    ///
    /// `passive: false` is required for listeners that call `preventDefault` on
    /// wheel or touch input.
    pub fn attach<E, F>(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        mut handler: F,
    ) -> Result<Self, JsValue>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            handler(ev.unchecked_into::<E>());
        }) as Box<dyn FnMut(web_sys::Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Attach and log instead of failing; a missing listener degrades one gesture only.
pub fn attach_or_warn<E, F>(
    bindings: &mut Vec<EventBinding>,
    target: &EventTarget,
    event: &'static str,
    passive: bool,
    handler: F,
) where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    match EventBinding::attach(target, event, passive, handler) {
        Ok(binding) => bindings.push(binding),
        Err(e) => log::warn!("Failed to add {} listener: {:?}", event, e),
    }
}

pub fn bounding_rect(element: &Element) -> BoundingRect {
    let rect = element.get_bounding_client_rect();
    BoundingRect::new(rect.x(), rect.y(), rect.width(), rect.height())
}

/// Resolve which opt-out marker classes enclose an event target.
pub fn gate_flags(target: Option<EventTarget>) -> GateFlags {
    let Some(element) = target.and_then(|t| t.dyn_into::<Element>().ok()) else {
        return GateFlags::default();
    };
    GateFlags::from_lookup(|class| {
        matches!(element.closest(&format!(".{}", class)), Ok(Some(_)))
    })
}

/// Broadcast a bubbling `mousedown` on `document.body` so host popovers relying on
/// outside-click detection close when the canvas starts a pan.
pub fn dispatch_press_notification() -> Result<(), JsValue> {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .ok_or_else(|| JsValue::from_str("No document body"))?;

    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousedown", &init)?;
    body.dispatch_event(&event)?;
    Ok(())
}

/// High-resolution timestamp in milliseconds.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn user_agent() -> Option<String> {
    web_sys::window()?.navigator().user_agent().ok()
}

/// Run `f` once the browser is idle, or after `timeout_ms` at the latest.
///
/// Falls back to a zero-delay timeout where `requestIdleCallback` is missing.
pub fn schedule_idle(timeout_ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let has_idle = js_sys::Reflect::has(&window, &JsValue::from_str("requestIdleCallback"))
        .unwrap_or(false);
    if !has_idle {
        leptos::set_timeout(f, Duration::from_millis(0));
        return;
    }

    let callback = Closure::once_into_js(f);
    let options = IdleRequestOptions::new();
    options.set_timeout(timeout_ms);
    if let Err(e) = window.request_idle_callback_with_options(callback.unchecked_ref(), &options) {
        log::warn!("requestIdleCallback failed: {:?}", e);
    }
}
