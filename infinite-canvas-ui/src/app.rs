use infinite_canvas_core::{
    AnchorPosition, CanvasConfig, FitOptions, Offset, ScrollNodeOptions, ZoomAction, ZoomState,
};
use leptos::*;

use crate::components::{CustomComponent, EventBlocker, InfiniteCanvas};
use crate::hooks::CanvasHandle;

const DEMO_CONFIG: &str = r##"{
    "max_zoom": 3,
    "background": { "id": "demo", "gap": 24 },
    "scroll_bar": { "color": "#8892a6" }
}"##;

const CARDS: [(&str, &str, f64, f64); 4] = [
    ("card-intro", "Start here", 80.0, 60.0),
    ("card-pan", "Drag the background or scroll to pan", 520.0, 140.0),
    ("card-zoom", "Ctrl/Cmd + wheel or pinch to zoom", 180.0, 460.0),
    ("card-far", "Far away card", 1400.0, 900.0),
];

fn demo_config() -> CanvasConfig {
    CanvasConfig::from_json(DEMO_CONFIG).unwrap_or_else(|e| {
        log::warn!("Demo config rejected: {}", e);
        CanvasConfig::default()
    })
}

fn zoom_controls(handle: RwSignal<Option<CanvasHandle>>) -> CustomComponent {
    let run = move |action: ZoomAction| {
        if let Some(handle) = handle.get_untracked() {
            handle.apply_zoom_action(action);
        }
    };
    CustomComponent::new(AnchorPosition::BottomLeft, move |zoom: Signal<ZoomState>| {
        view! {
            <div class="zoom-controls" style="display: flex; gap: 4px; align-items: center;">
                <button
                    disabled=move || !zoom.get().can_zoom_out()
                    on:click=move |_| run(ZoomAction::ZoomOut)
                >
                    "-"
                </button>
                <span style="min-width: 48px; text-align: center;">
                    {move || format!("{}%", zoom.get().percent())}
                </span>
                <button
                    disabled=move || !zoom.get().can_zoom_in()
                    on:click=move |_| run(ZoomAction::ZoomIn)
                >
                    "+"
                </button>
                <button on:click=move |_| run(ZoomAction::FitToView)>"Fit"</button>
                <button on:click=move |_| run(ZoomAction::ResetToHundred)>"100%"</button>
            </div>
        }
        .into_view()
    })
    .with_offset(Offset::new(16.0, 16.0))
}

fn jump_menu(handle: RwSignal<Option<CanvasHandle>>) -> CustomComponent {
    let jump = move |id: &'static str| {
        let Some(handle) = handle.get_untracked() else {
            return;
        };
        let Some(node) = document().get_element_by_id(id) else {
            log::debug!("No element with id {}", id);
            return;
        };
        handle.scroll_node_to_center(
            node,
            ScrollNodeOptions {
                scale: Some(1.0),
                ..ScrollNodeOptions::default()
            },
        );
    };
    CustomComponent::new(AnchorPosition::TopRight, move |_| {
        view! {
            <EventBlocker>
                <div class="jump-menu" style="display: flex; flex-direction: column; gap: 4px;">
                    {CARDS
                        .iter()
                        .map(|(id, title, _, _)| {
                            let id = *id;
                            view! { <button on:click=move |_| jump(id)>{*title}</button> }
                        })
                        .collect_view()}
                </div>
            </EventBlocker>
        }
        .into_view()
    })
    .with_offset(Offset::new(24.0, 16.0))
}

#[component]
pub fn App() -> impl IntoView {
    let handle = create_rw_signal::<Option<CanvasHandle>>(None);

    let on_mount = move |canvas: CanvasHandle| {
        handle.set(Some(canvas));
        canvas.fit_content_to_view(FitOptions::default());
    };

    let cards = CARDS
        .iter()
        .map(|(id, title, x, y)| {
            let style = format!(
                "position: absolute; left: {}px; top: {}px; width: 240px; padding: 16px; \
                 background: white; border-radius: 8px; box-shadow: 0 1px 4px rgba(0,0,0,.15);",
                x, y
            );
            view! { <div id=*id style=style>{*title}</div> }
        })
        .collect_view();

    view! {
        <div style="width: 100vw; height: 100vh; background: #f4f6fa;">
            <InfiniteCanvas
                config=demo_config()
                custom_components=vec![zoom_controls(handle), jump_menu(handle)]
                on_canvas_mount=on_mount
            >
                <div style="position: relative; width: 1700px; height: 1100px;">
                    {cards}
                    <EventBlocker block_zoom=false>
                        <textarea
                            style="position: absolute; left: 560px; top: 480px; width: 260px; height: 120px;"
                            placeholder="Scrolling in here does not pan the canvas"
                        />
                    </EventBlocker>
                </div>
            </InfiniteCanvas>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_config_parses() {
        let config = demo_config();
        assert_eq!(config.max_zoom, 3.0);
        assert_eq!(config.background.gap, 24.0);
        assert_eq!(config.background.id, "demo");
        assert_eq!(config.scroll_bar.color, "#8892a6");
    }
}

