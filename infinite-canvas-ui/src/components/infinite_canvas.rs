use infinite_canvas_core::{idle_timeout_ms, is_safari, CanvasConfig, ScrollDelta, ZoomState};
use leptos::*;

use super::{AnchoredOverlay, CustomComponent, DotBackground, ScrollBar};
use crate::dom;
use crate::hooks::{
    use_gesture_controller, use_scrollbar, use_transform_store, use_zoom_shortcuts, CanvasHandle,
};

const CONTENT_STYLE: &str = "position: absolute; top: 0; left: 0; transform-origin: 0 0; \
                             will-change: transform;";

fn container_style(is_panning: bool) -> String {
    format!(
        "position: relative; width: 100%; height: 100%; overflow: hidden; \
         touch-action: none; user-select: none; cursor: {};",
        if is_panning { "grabbing" } else { "grab" }
    )
}

/// Pan-and-zoom viewport around arbitrary content.
///
/// `on_canvas_mount` receives the navigation handle once the viewport element is
/// in the DOM.
#[component]
pub fn InfiniteCanvas(
    children: Children,
    #[prop(optional)] config: Option<CanvasConfig>,
    #[prop(optional)] custom_components: Vec<CustomComponent>,
    #[prop(optional, into)] on_canvas_mount: Option<Callback<CanvasHandle>>,
) -> impl IntoView {
    let config = match config.unwrap_or_default().validate() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid canvas config, using defaults: {}", e);
            CanvasConfig::default()
        }
    };
    let bounds = config.zoom_bounds();

    let canvas_ref = create_node_ref::<html::Div>();
    let content_ref = create_node_ref::<html::Div>();

    let transform = use_transform_store(bounds);
    let scrollbar = use_scrollbar(&config.scroll_bar, transform);
    let gestures = use_gesture_controller(
        canvas_ref,
        transform,
        config.pan_on_scroll,
        Callback::new(move |delta: ScrollDelta| scrollbar.on_scroll_delta(delta)),
    );

    let safari = dom::user_agent().map(|ua| is_safari(&ua)).unwrap_or(false);
    let handle = CanvasHandle::new(
        transform,
        scrollbar,
        canvas_ref,
        content_ref,
        gestures.is_panning,
        idle_timeout_ms(safari),
    );

    use_zoom_shortcuts(move |action| handle.apply_zoom_action(action));

    create_effect(move |mounted: Option<bool>| {
        if mounted == Some(true) {
            return true;
        }
        if canvas_ref.get().is_none() {
            return false;
        }
        log::info!("Infinite canvas mounted (safari: {})", safari);
        if let Some(callback) = on_canvas_mount {
            callback.call(handle);
        }
        true
    });

    let zoom_state = Signal::derive(move || ZoomState::new(&transform.signal().get(), &bounds));
    let on_drag_delta = Callback::new(move |delta: ScrollDelta| {
        transform.set(transform.get_untracked().panned_by_scroll(delta));
    });

    let overlays = custom_components
        .into_iter()
        .map(|component| view! { <AnchoredOverlay component=component zoom_state=zoom_state /> })
        .collect_view();

    view! {
        <div
            class="infinite-canvas"
            node_ref=canvas_ref
            style=move || container_style(gestures.is_panning.get())
        >
            <DotBackground
                config=config.background.clone()
                transform=transform.signal()
                max_zoom=config.background_max_zoom()
            />
            <div
                class="infinite-canvas-content"
                node_ref=content_ref
                style=move || format!("{} transform: {};", CONTENT_STYLE, transform.signal().get().css())
            >
                {children()}
            </div>
            {config.render_scroll_bar.then(|| view! {
                <ScrollBar
                    handle=scrollbar
                    config=config.scroll_bar.clone()
                    on_drag_delta=on_drag_delta
                />
            })}
            {overlays}
        </div>
    }
}
