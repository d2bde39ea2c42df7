use std::rc::Rc;

use infinite_canvas_core::{overlay_style, AnchorPosition, Offset, ZoomState};
use leptos::*;

/// Host widget pinned to the viewport (zoom controls, legends, minimaps).
///
/// `render` is called once and receives a live zoom-state signal.
#[derive(Clone)]
pub struct CustomComponent {
    pub render: Rc<dyn Fn(Signal<ZoomState>) -> View>,
    pub position: AnchorPosition,
    pub offset: Offset,
    /// Render above scrollbars and content
    pub overlap: bool,
    pub class_name: String,
}

impl CustomComponent {
    pub fn new<F>(position: AnchorPosition, render: F) -> Self
    where
        F: Fn(Signal<ZoomState>) -> View + 'static,
    {
        Self {
            render: Rc::new(render),
            position,
            offset: Offset::default(),
            overlap: true,
            class_name: String::new(),
        }
    }

    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_overlap(mut self, overlap: bool) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }
}

#[component]
pub fn AnchoredOverlay(component: CustomComponent, zoom_state: Signal<ZoomState>) -> impl IntoView {
    let style = overlay_style(component.position, component.offset, component.overlap);
    view! {
        <div class=component.class_name.clone() style=style>
            {(component.render)(zoom_state)}
        </div>
    }
}
