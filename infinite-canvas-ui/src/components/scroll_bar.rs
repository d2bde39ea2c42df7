use std::time::Duration;

use infinite_canvas_core::{block_class_name, ScrollAxis, ScrollBarConfig, ScrollDelta};
use leptos::*;
use leptos_use::use_element_size;
use web_sys::PointerEvent;

use crate::dom::{self, EventBinding};
use crate::hooks::ScrollbarHandle;

/// Track classes; the canvas must not start a pan from a thumb press.
fn track_class(axis: ScrollAxis) -> String {
    let name = match axis {
        ScrollAxis::Vertical => "vertical",
        ScrollAxis::Horizontal => "horizontal",
    };
    format!("infinite-canvas-scrollbar {} {}", name, block_class_name(false, false, true))
}

fn track_style(axis: ScrollAxis, thickness: f64) -> String {
    match axis {
        ScrollAxis::Vertical => format!(
            "position: absolute; top: 0; right: 0; bottom: 0; width: {}px; z-index: 10;",
            thickness
        ),
        ScrollAxis::Horizontal => format!(
            "position: absolute; left: 0; right: 0; bottom: 0; height: {}px; z-index: 10;",
            thickness
        ),
    }
}

fn thumb_style(axis: ScrollAxis, (start, length): (f64, f64), config: &ScrollBarConfig) -> String {
    let (edge, extent, min_extent, cross) = match axis {
        ScrollAxis::Vertical => ("top", "height", "min-height", "width"),
        ScrollAxis::Horizontal => ("left", "width", "min-width", "height"),
    };
    format!(
        "position: absolute; {edge}: {start}px; {extent}: {length}px; {min_extent}: {min}px; \
         {cross}: 100%; background: {color}; border-radius: {radius}px; cursor: pointer;",
        min = config.min_size,
        color = config.color,
        radius = config.thickness / 2.0,
    )
}

/// Synthetic vertical and horizontal scrollbars.
///
/// Thumb drags are reported through `on_drag_delta`; the canvas turns them into
/// pans.
#[component]
pub fn ScrollBar(
    handle: ScrollbarHandle,
    config: ScrollBarConfig,
    on_drag_delta: Callback<ScrollDelta>,
) -> impl IntoView {
    let vertical_ref = create_node_ref::<html::Div>();
    let horizontal_ref = create_node_ref::<html::Div>();
    let vertical_size = use_element_size(vertical_ref);
    let horizontal_size = use_element_size(horizontal_ref);
    let drag_bindings = store_value::<Vec<EventBinding>>(Vec::new());

    create_effect(move |_| {
        let (vertical, horizontal) = (vertical_size.height.get(), horizontal_size.width.get());
        if vertical > 0.0 && horizontal > 0.0 {
            handle.set_track_lengths(vertical, horizontal);
        }
    });

    let release_listeners = move || {
        let _ = drag_bindings.try_update_value(|b| b.clear());
    };
    on_cleanup(release_listeners);

    let start_drag = move |axis: ScrollAxis, ev: PointerEvent| {
        ev.stop_propagation();
        ev.prevent_default();

        let pointer = match axis {
            ScrollAxis::Vertical => ev.client_y() as f64,
            ScrollAxis::Horizontal => ev.client_x() as f64,
        };
        let track_ref = match axis {
            ScrollAxis::Vertical => vertical_ref,
            ScrollAxis::Horizontal => horizontal_ref,
        };
        let track_start = move || {
            track_ref
                .get_untracked()
                .map(|track| {
                    let rect = dom::bounding_rect(&track);
                    match axis {
                        ScrollAxis::Vertical => rect.y,
                        ScrollAxis::Horizontal => rect.x,
                    }
                })
                .unwrap_or(0.0)
        };
        let (thumb_start, _) = handle.thumb_extent(axis);
        handle.begin_drag(axis, pointer - track_start() - thumb_start, pointer);

        let Some(window) = web_sys::window() else {
            return;
        };
        let mut bindings = Vec::with_capacity(2);
        dom::attach_or_warn(&mut bindings, &window, "pointermove", true, move |ev: PointerEvent| {
            let pointer = match axis {
                ScrollAxis::Vertical => ev.client_y() as f64,
                ScrollAxis::Horizontal => ev.client_x() as f64,
            };
            if let Some(delta) = handle.drag_to(pointer, track_start()) {
                on_drag_delta.call(delta);
            }
        });
        dom::attach_or_warn(&mut bindings, &window, "pointerup", true, move |_: PointerEvent| {
            handle.end_drag();
            // The running listener is one of the bindings; drop them after it returns.
            set_timeout(release_listeners, Duration::ZERO);
        });
        drag_bindings.set_value(bindings);
    };

    let vertical_thumb = {
        let config = config.clone();
        move || thumb_style(ScrollAxis::Vertical, handle.thumb_extent(ScrollAxis::Vertical), &config)
    };
    let horizontal_thumb = {
        let config = config.clone();
        move || {
            thumb_style(ScrollAxis::Horizontal, handle.thumb_extent(ScrollAxis::Horizontal), &config)
        }
    };

    view! {
        <div
            class=track_class(ScrollAxis::Vertical)
            node_ref=vertical_ref
            style=track_style(ScrollAxis::Vertical, config.thickness)
        >
            <div
                data-id="vertical-scrollbar"
                style=vertical_thumb
                on:pointerdown=move |ev| start_drag(ScrollAxis::Vertical, ev)
            />
        </div>
        <div
            class=track_class(ScrollAxis::Horizontal)
            node_ref=horizontal_ref
            style=track_style(ScrollAxis::Horizontal, config.thickness)
        >
            <div
                data-id="horizontal-scrollbar"
                style=horizontal_thumb
                on:pointerdown=move |ev| start_drag(ScrollAxis::Horizontal, ev)
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_style_uses_axis_properties() {
        let style = thumb_style(ScrollAxis::Vertical, (12.0, 40.0), &ScrollBarConfig::default());
        assert!(style.contains("top: 12px;"));
        assert!(style.contains("height: 40px;"));
        assert!(style.contains("min-height: 15px;"));
        assert!(style.contains("background: gray;"));

        let style = thumb_style(ScrollAxis::Horizontal, (3.0, 20.0), &ScrollBarConfig::default());
        assert!(style.contains("left: 3px;"));
        assert!(style.contains("width: 20px;"));
    }

    #[test]
    fn tracks_opt_out_of_canvas_pan() {
        assert_eq!(
            track_class(ScrollAxis::Vertical),
            "infinite-canvas-scrollbar vertical infinite-canvas-block-pan"
        );
        assert!(track_class(ScrollAxis::Horizontal).ends_with("infinite-canvas-block-pan"));
    }
}
