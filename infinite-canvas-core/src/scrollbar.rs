//! Synthetic scrollbar model.
//!
//! The canvas has no real scroll extent, so the thumbs are a visual cue driven by the
//! same wheel deltas that pan the content. Pushing past an edge shrinks the thumb
//! (overscroll feedback) instead of moving it; dragging a thumb produces deltas that
//! the host feeds back into the pan path.

use crate::config::ScrollBarConfig;
use crate::geometry::{clamp_value, Offset, ScrollDelta};

/// Thumb length at scale 1.0.
pub const BASE_THUMB_SIZE: f64 = 50.0;
/// Without a configured start, thumbs rest at a third of their track.
pub const START_POSITION_RATIO: f64 = 3.0;
/// Added to thumb-drag movement so slow drags still pan visibly.
pub const DRAG_DELTA_BOOST: f64 = 1.5;
/// Pixels the thumb shifts per unit of relative scale change.
pub const SCALE_SHIFT: f64 = 25.0;

const SCROLL_STEP_DIVISOR: f64 = 10.0;
const SHRINK_DIVISOR: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollAxis {
    Vertical,
    Horizontal,
}

impl ScrollAxis {
    pub fn of_delta(self, delta: ScrollDelta) -> f64 {
        match self {
            ScrollAxis::Vertical => delta.delta_y,
            ScrollAxis::Horizontal => delta.delta_x,
        }
    }

    pub fn of_offset(self, offset: Offset) -> f64 {
        match self {
            ScrollAxis::Vertical => offset.y,
            ScrollAxis::Horizontal => offset.x,
        }
    }

    /// Delta that only moves along this axis.
    pub fn delta(self, amount: f64) -> ScrollDelta {
        match self {
            ScrollAxis::Vertical => ScrollDelta::new(0.0, amount),
            ScrollAxis::Horizontal => ScrollDelta::new(amount, 0.0),
        }
    }
}

/// Base thumb length for `scale`, before track clamping.
pub fn base_thumb_size(axis: ScrollAxis, scale: f64) -> f64 {
    let ratio = match axis {
        ScrollAxis::Vertical => (scale - 0.2).max(0.2),
        ScrollAxis::Horizontal => scale,
    };
    BASE_THUMB_SIZE / ratio
}

/// One thumb. `size_decrease` is never positive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThumbState {
    pub size: f64,
    pub position: f64,
    pub size_decrease: f64,
}

impl ThumbState {
    pub fn rendered_size(&self) -> f64 {
        self.size + self.size_decrease
    }

    /// Rendered start edge. A thumb pinned at the far end shrinks towards that end.
    pub fn rendered_start(&self, at_end: bool) -> f64 {
        if at_end {
            self.position - self.size_decrease
        } else {
            self.position
        }
    }
}

/// Active thumb drag
#[derive(Clone, Copy, Debug, PartialEq)]
struct DragSession {
    axis: ScrollAxis,
    /// Pointer offset inside the thumb when the drag began
    grab_offset: f64,
    last_pointer: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollbarModel {
    vertical: ThumbState,
    horizontal: ThumbState,
    vertical_track: f64,
    horizontal_track: f64,
    offset: Offset,
    min_size: f64,
    starting_position: Option<Offset>,
    scale: f64,
    drag: Option<DragSession>,
    initialized: bool,
}

impl ScrollbarModel {
    pub fn new(config: &ScrollBarConfig, scale: f64) -> Self {
        let mut model = Self {
            vertical: ThumbState::default(),
            horizontal: ThumbState::default(),
            vertical_track: 0.0,
            horizontal_track: 0.0,
            offset: config.offset,
            min_size: config.min_size.max(0.0),
            starting_position: config.starting_position,
            scale,
            drag: None,
            initialized: false,
        };
        model.resize_thumbs();
        model
    }

    pub fn thumb(&self, axis: ScrollAxis) -> ThumbState {
        match axis {
            ScrollAxis::Vertical => self.vertical,
            ScrollAxis::Horizontal => self.horizontal,
        }
    }

    fn thumb_mut(&mut self, axis: ScrollAxis) -> &mut ThumbState {
        match axis {
            ScrollAxis::Vertical => &mut self.vertical,
            ScrollAxis::Horizontal => &mut self.horizontal,
        }
    }

    pub fn track_length(&self, axis: ScrollAxis) -> f64 {
        match axis {
            ScrollAxis::Vertical => self.vertical_track,
            ScrollAxis::Horizontal => self.horizontal_track,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Lowest allowed thumb position on `axis`.
    pub fn min_position(&self, axis: ScrollAxis) -> f64 {
        axis.of_offset(self.offset)
    }

    /// Highest allowed thumb position on `axis`.
    pub fn max_position(&self, axis: ScrollAxis) -> f64 {
        let lo = self.min_position(axis);
        (self.track_length(axis) - self.thumb(axis).size).max(lo)
    }

    /// Whether the thumb sits in the far half of its range.
    pub fn is_at_end(&self, axis: ScrollAxis) -> bool {
        let lo = self.min_position(axis);
        let hi = self.max_position(axis);
        hi > lo && self.thumb(axis).position > lo + (hi - lo) / 2.0
    }

    fn shrink_floor(&self, axis: ScrollAxis) -> f64 {
        (self.min_size - self.thumb(axis).size).min(0.0)
    }

    fn resize_thumbs(&mut self) {
        for axis in [ScrollAxis::Vertical, ScrollAxis::Horizontal] {
            let track = self.track_length(axis) - self.min_position(axis);
            let upper = if track > 0.0 {
                track.max(self.min_size)
            } else {
                f64::INFINITY
            };
            let size = clamp_value(base_thumb_size(axis, self.scale), self.min_size, upper);
            self.thumb_mut(axis).size = size;
        }
        self.clamp_positions();
    }

    fn clamp_positions(&mut self) {
        for axis in [ScrollAxis::Vertical, ScrollAxis::Horizontal] {
            let (lo, hi) = (self.min_position(axis), self.max_position(axis));
            let floor = self.shrink_floor(axis);
            let thumb = self.thumb_mut(axis);
            thumb.position = clamp_value(thumb.position, lo, hi);
            thumb.size_decrease = clamp_value(thumb.size_decrease, floor, 0.0);
        }
    }

    /// Record measured track lengths. The first time both are known the thumbs are
    /// placed at their start position.
    pub fn set_track_lengths(&mut self, vertical: f64, horizontal: f64) {
        self.vertical_track = vertical.max(0.0);
        self.horizontal_track = horizontal.max(0.0);
        if !self.initialized && self.vertical_track > 0.0 && self.horizontal_track > 0.0 {
            self.initialized = true;
            self.reset();
        } else {
            self.resize_thumbs();
        }
    }

    /// Return both thumbs to the start position and clear overscroll.
    pub fn reset(&mut self) {
        for axis in [ScrollAxis::Vertical, ScrollAxis::Horizontal] {
            let start = match self.starting_position {
                Some(start) => axis.of_offset(start),
                None => self.track_length(axis) / START_POSITION_RATIO,
            };
            let thumb = self.thumb_mut(axis);
            thumb.position = start;
            thumb.size_decrease = 0.0;
        }
        self.resize_thumbs();
    }

    /// Wheel pan feedback. Dropped while a thumb is held.
    pub fn on_scroll_delta(&mut self, delta: ScrollDelta) {
        if self.drag.is_some() {
            return;
        }
        self.scroll_axis(ScrollAxis::Vertical, ScrollAxis::Vertical.of_delta(delta));
        self.scroll_axis(ScrollAxis::Horizontal, ScrollAxis::Horizontal.of_delta(delta));
    }

    fn scroll_axis(&mut self, axis: ScrollAxis, amount: f64) {
        if amount == 0.0 {
            return;
        }
        let step = amount / SCROLL_STEP_DIVISOR;
        let shrink = amount.abs() / SHRINK_DIVISOR;
        let (lo, hi) = (self.min_position(axis), self.max_position(axis));
        let floor = self.shrink_floor(axis);
        let at_end = self.is_at_end(axis);
        let thumb = self.thumb_mut(axis);

        if thumb.size_decrease < 0.0 {
            // Pinned: push further shrinks, reversing grows back before moving.
            let pushing = if at_end { amount > 0.0 } else { amount < 0.0 };
            thumb.size_decrease = if pushing {
                (thumb.size_decrease - shrink).max(floor)
            } else {
                (thumb.size_decrease + shrink).min(0.0)
            };
            thumb.position = if at_end { hi } else { lo };
            return;
        }

        let next = thumb.position + step;
        if next < lo || next > hi {
            thumb.position = if next < lo { lo } else { hi };
            thumb.size_decrease = (-shrink).max(floor);
        } else {
            thumb.position = next;
        }
    }

    pub fn begin_drag(&mut self, axis: ScrollAxis, grab_offset: f64, pointer: f64) {
        self.thumb_mut(axis).size_decrease = 0.0;
        self.drag = Some(DragSession {
            axis,
            grab_offset,
            last_pointer: pointer,
        });
    }

    /// Move the held thumb under the pointer.
    ///
    /// Returns the pan delta to apply, or `None` when the pointer did not move or the
    /// thumb is at either end of its track.
    pub fn drag_to(&mut self, pointer: f64, container_offset: f64) -> Option<ScrollDelta> {
        let session = self.drag.as_mut()?;
        let axis = session.axis;
        let movement = pointer - session.last_pointer;
        session.last_pointer = pointer;
        let wanted = pointer - session.grab_offset - container_offset;

        let (lo, hi) = (self.min_position(axis), self.max_position(axis));
        self.thumb_mut(axis).position = clamp_value(wanted, lo, hi);

        if movement == 0.0 || wanted <= lo || wanted >= hi {
            return None;
        }
        let boosted = if movement > 0.0 {
            movement + DRAG_DELTA_BOOST
        } else {
            movement - DRAG_DELTA_BOOST
        };
        Some(axis.delta(boosted))
    }

    /// Returns whether a drag was active.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    pub fn on_scale_change(&mut self, next_scale: f64) {
        if next_scale == self.scale || !next_scale.is_finite() || next_scale <= 0.0 {
            return;
        }
        let shift = (next_scale / self.scale - 1.0) * SCALE_SHIFT;
        self.scale = next_scale;
        // A shifted thumb is no longer pinned to the edge it was pushed against.
        for thumb in [&mut self.vertical, &mut self.horizontal] {
            thumb.position += shift;
            thumb.size_decrease = 0.0;
        }
        self.resize_thumbs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ScrollbarModel {
        let mut m = ScrollbarModel::new(&ScrollBarConfig::default(), 1.0);
        m.set_track_lengths(600.0, 800.0);
        m
    }

    fn assert_in_bounds(m: &ScrollbarModel) {
        for axis in [ScrollAxis::Vertical, ScrollAxis::Horizontal] {
            let t = m.thumb(axis);
            assert!(t.position >= m.min_position(axis) - 1e-9, "{:?} below start", axis);
            assert!(t.position <= m.max_position(axis) + 1e-9, "{:?} past end", axis);
            assert!(t.size_decrease <= 0.0);
            assert!(t.rendered_size() >= 15.0 - 1e-9);
        }
    }

    #[test]
    fn thumb_sizes_follow_scale() {
        assert_eq!(base_thumb_size(ScrollAxis::Horizontal, 2.0), 25.0);
        assert!((base_thumb_size(ScrollAxis::Vertical, 1.2) - 50.0).abs() < 1e-12);
        // Vertical ratio bottoms out at 0.2.
        assert!((base_thumb_size(ScrollAxis::Vertical, 0.1) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn initial_position_is_a_third_of_the_track() {
        let m = model();
        assert_eq!(m.thumb(ScrollAxis::Vertical).position, 200.0);
        assert!((m.thumb(ScrollAxis::Horizontal).position - 800.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn configured_starting_position_wins() {
        let config = ScrollBarConfig {
            starting_position: Some(Offset::new(40.0, 60.0)),
            ..ScrollBarConfig::default()
        };
        let mut m = ScrollbarModel::new(&config, 1.0);
        m.set_track_lengths(600.0, 800.0);
        assert_eq!(m.thumb(ScrollAxis::Vertical).position, 60.0);
        assert_eq!(m.thumb(ScrollAxis::Horizontal).position, 40.0);
    }

    #[test]
    fn scroll_moves_by_a_tenth_of_the_delta() {
        let mut m = model();
        m.on_scroll_delta(ScrollDelta::new(0.0, 100.0));
        assert_eq!(m.thumb(ScrollAxis::Vertical).position, 210.0);
    }

    #[test]
    fn overscroll_shrinks_and_relaxes() {
        let mut m = model();
        for _ in 0..200 {
            m.on_scroll_delta(ScrollDelta::new(0.0, 100.0));
            assert_in_bounds(&m);
        }
        let pinned = m.thumb(ScrollAxis::Vertical);
        assert_eq!(pinned.position, m.max_position(ScrollAxis::Vertical));
        assert!(pinned.size_decrease < 0.0);
        assert!(m.is_at_end(ScrollAxis::Vertical));

        // Reversing first relaxes the shrink without moving the thumb.
        m.on_scroll_delta(ScrollDelta::new(0.0, -100.0));
        let relaxed = m.thumb(ScrollAxis::Vertical);
        assert_eq!(relaxed.position, pinned.position);
        assert!(relaxed.size_decrease > pinned.size_decrease);

        for _ in 0..200 {
            m.on_scroll_delta(ScrollDelta::new(0.0, -100.0));
            assert_in_bounds(&m);
        }
        assert_eq!(m.thumb(ScrollAxis::Vertical).position, 0.0);
    }

    #[test]
    fn shrink_never_goes_below_min_size() {
        let mut m = model();
        for _ in 0..10_000 {
            m.on_scroll_delta(ScrollDelta::new(-500.0, 0.0));
        }
        let t = m.thumb(ScrollAxis::Horizontal);
        assert!((t.rendered_size() - 15.0).abs() < 1e-9);
        assert_eq!(t.position, 0.0);
    }

    #[test]
    fn drag_produces_boosted_delta() {
        let mut m = model();
        m.begin_drag(ScrollAxis::Vertical, 5.0, 205.0);
        let delta = m.drag_to(215.0, 0.0);
        assert_eq!(delta, Some(ScrollDelta::new(0.0, 11.5)));
        assert_eq!(m.thumb(ScrollAxis::Vertical).position, 210.0);

        let delta = m.drag_to(210.0, 0.0);
        assert_eq!(delta, Some(ScrollDelta::new(0.0, -6.5)));
    }

    #[test]
    fn drag_at_track_end_is_silent() {
        let mut m = model();
        m.begin_drag(ScrollAxis::Horizontal, 0.0, 100.0);
        assert_eq!(m.drag_to(5000.0, 0.0), None);
        assert_eq!(
            m.thumb(ScrollAxis::Horizontal).position,
            m.max_position(ScrollAxis::Horizontal)
        );
        assert_eq!(m.drag_to(-5000.0, 0.0), None);
        assert_eq!(m.thumb(ScrollAxis::Horizontal).position, 0.0);
    }

    #[test]
    fn wheel_is_ignored_while_dragging() {
        let mut m = model();
        m.begin_drag(ScrollAxis::Vertical, 0.0, 200.0);
        let before = m.clone();
        m.on_scroll_delta(ScrollDelta::new(50.0, 50.0));
        assert_eq!(m, before);
        assert!(m.end_drag());
        assert!(!m.is_dragging());
        assert_eq!(m.drag_to(300.0, 0.0), None);
    }

    #[test]
    fn scale_change_shifts_and_resizes() {
        let mut m = model();
        m.on_scale_change(2.0);
        assert_eq!(m.thumb(ScrollAxis::Vertical).position, 225.0);
        assert_eq!(m.thumb(ScrollAxis::Horizontal).size, 25.0);
        m.on_scale_change(1.0);
        assert_eq!(m.thumb(ScrollAxis::Vertical).position, 212.5);
        assert_in_bounds(&m);
    }

    #[test]
    fn scale_change_releases_a_pinned_thumb() {
        let mut m = ScrollbarModel::new(&ScrollBarConfig::default(), 0.1);
        m.set_track_lengths(600.0, 800.0);
        m.on_scroll_delta(ScrollDelta::new(0.0, -10_000.0));
        assert_eq!(m.thumb(ScrollAxis::Vertical).position, 0.0);
        assert!(m.thumb(ScrollAxis::Vertical).size_decrease < 0.0);

        // The shift carries the thumb from the start edge all the way to the far end.
        m.on_scale_change(4.0);
        let hi = m.max_position(ScrollAxis::Vertical);
        assert_eq!(m.thumb(ScrollAxis::Vertical).position, hi);
        assert_eq!(m.thumb(ScrollAxis::Vertical).size_decrease, 0.0);

        m.on_scroll_delta(ScrollDelta::new(0.0, -10.0));
        assert_eq!(m.thumb(ScrollAxis::Vertical).position, hi - 1.0);
        assert_in_bounds(&m);
    }

    #[test]
    fn reset_clears_overscroll() {
        let mut m = model();
        for _ in 0..100 {
            m.on_scroll_delta(ScrollDelta::new(0.0, -100.0));
        }
        m.reset();
        assert_eq!(m.thumb(ScrollAxis::Vertical).position, 200.0);
        assert_eq!(m.thumb(ScrollAxis::Vertical).size_decrease, 0.0);
    }

    #[test]
    fn offset_raises_the_lower_bound() {
        let config = ScrollBarConfig {
            offset: Offset::new(10.0, 30.0),
            ..ScrollBarConfig::default()
        };
        let mut m = ScrollbarModel::new(&config, 1.0);
        m.set_track_lengths(600.0, 800.0);
        for _ in 0..100 {
            m.on_scroll_delta(ScrollDelta::new(-100.0, -100.0));
        }
        assert_eq!(m.thumb(ScrollAxis::Vertical).position, 30.0);
        assert_eq!(m.thumb(ScrollAxis::Horizontal).position, 10.0);
    }
}
