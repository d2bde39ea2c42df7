use infinite_canvas_core::{shortcut_for_key, ZoomAction};
use leptos::*;

/// Window-level ctrl/cmd zoom shortcuts for the lifetime of the calling scope.
pub fn use_zoom_shortcuts<F>(on_action: F)
where
    F: Fn(ZoomAction) + 'static,
{
    let _ = leptos_use::use_event_listener(leptos_use::use_window(), ev::keydown, move |ev| {
        let modifier = ev.ctrl_key() || ev.meta_key();
        if let Some(action) = shortcut_for_key(&ev.key(), modifier) {
            ev.prevent_default();
            log::debug!("Zoom shortcut: {:?}", action);
            on_action(action);
        }
    });
}
