use infinite_canvas_core::{ScrollAxis, ScrollBarConfig, ScrollDelta, ScrollbarModel, ThumbState};
use leptos::*;

use super::TransformHandle;

/// Reactive wrapper over [`ScrollbarModel`]
#[derive(Clone, Copy)]
pub struct ScrollbarHandle {
    model: RwSignal<ScrollbarModel>,
}

impl ScrollbarHandle {
    pub fn thumb(&self, axis: ScrollAxis) -> ThumbState {
        self.model.with(|m| m.thumb(axis))
    }

    /// Rendered `(start, length)` of a thumb, tracked.
    pub fn thumb_extent(&self, axis: ScrollAxis) -> (f64, f64) {
        self.model.with(|m| {
            let thumb = m.thumb(axis);
            (thumb.rendered_start(m.is_at_end(axis)), thumb.rendered_size())
        })
    }

    pub fn is_dragging(&self) -> bool {
        self.model.with_untracked(|m| m.is_dragging())
    }

    pub fn on_scroll_delta(&self, delta: ScrollDelta) {
        self.model.update(|m| m.on_scroll_delta(delta));
    }

    pub fn set_track_lengths(&self, vertical: f64, horizontal: f64) {
        self.model.update(|m| m.set_track_lengths(vertical, horizontal));
    }

    pub fn reset(&self) {
        self.model.update(|m| m.reset());
    }

    pub fn begin_drag(&self, axis: ScrollAxis, grab_offset: f64, pointer: f64) {
        self.model.update(|m| m.begin_drag(axis, grab_offset, pointer));
    }

    pub fn drag_to(&self, pointer: f64, container_offset: f64) -> Option<ScrollDelta> {
        let mut delta = None;
        self.model.update(|m| delta = m.drag_to(pointer, container_offset));
        delta
    }

    pub fn end_drag(&self) {
        self.model.update(|m| {
            m.end_drag();
        });
    }
}

/// Scrollbar state that follows the canvas scale.
pub fn use_scrollbar(config: &ScrollBarConfig, transform: TransformHandle) -> ScrollbarHandle {
    let model = create_rw_signal(ScrollbarModel::new(config, transform.get_untracked().scale));
    let scale = create_memo(move |_| transform.signal().get().scale);

    create_effect(move |_| {
        let scale = scale.get();
        model.update(|m| m.on_scale_change(scale));
    });

    ScrollbarHandle { model }
}
