use infinite_canvas_core::{BackgroundConfig, BackgroundPattern, ViewportTransform};
use leptos::*;

const SVG_STYLE: &str =
    "position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none;";

/// Dot grid that follows the pan and fades in with zoom.
#[component]
pub fn DotBackground(
    config: BackgroundConfig,
    transform: Signal<ViewportTransform>,
    /// Scale at which dots reach full opacity
    max_zoom: f64,
) -> impl IntoView {
    let pattern = create_memo(move |_| BackgroundPattern::compute(&config, &transform.get(), max_zoom));

    move || {
        pattern.get().map(|p| {
            let style = match &p.background_color {
                Some(color) => format!("{} background-color: {};", SVG_STYLE, color),
                None => SVG_STYLE.to_string(),
            };
            view! {
                <svg class="infinite-canvas-background" style=style>
                    <pattern
                        id=p.pattern_id.clone()
                        x=p.x
                        y=p.y
                        width=p.gap
                        height=p.gap
                        patternUnits="userSpaceOnUse"
                        patternTransform=p.pattern_transform()
                    >
                        <circle cx=p.radius cy=p.radius r=p.radius fill=p.color.clone() opacity=p.opacity />
                    </pattern>
                    <rect x="0" y="0" width="100%" height="100%" fill=p.fill() />
                </svg>
            }
        })
    }
}
