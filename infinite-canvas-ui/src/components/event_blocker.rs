use infinite_canvas_core::block_class_name;
use leptos::*;

/// Wrapper that keeps canvas gestures away from its children.
///
/// Blocks everything by default; switch individual gestures back on with the
/// matching prop.
#[component]
pub fn EventBlocker(
    children: Children,
    #[prop(default = true)] block_scroll: bool,
    #[prop(default = true)] block_zoom: bool,
    #[prop(default = true)] block_pan: bool,
) -> impl IntoView {
    let class = block_class_name(block_scroll, block_zoom, block_pan);
    view! { <div class=class>{children()}</div> }
}
