use crate::anchor::{Align, AnchorPosition};
use crate::geometry::{clamp_value, BoundingRect, Offset};
use crate::transform::{ViewportTransform, ZoomBounds};

pub const DEFAULT_SCROLL_DURATION_MS: f64 = 300.0;
pub const DEFAULT_FIT_DURATION_MS: f64 = 500.0;
/// Fit-to-view never zooms past 100% unless told otherwise.
pub const FIT_TO_VIEW_MAX_ZOOM: f64 = 1.0;

/// Options for moving a content element to an anchor of the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollNodeOptions {
    pub offset: Offset,
    pub scale: Option<f64>,
    /// Never zoom out to satisfy the call: use `max(scale, current)`.
    pub should_update_max_scale: bool,
    pub max_scale: Option<f64>,
    pub transition_duration: f64,
    pub position: AnchorPosition,
}

impl Default for ScrollNodeOptions {
    fn default() -> Self {
        Self {
            offset: Offset::default(),
            scale: None,
            should_update_max_scale: true,
            max_scale: None,
            transition_duration: DEFAULT_SCROLL_DURATION_MS,
            position: AnchorPosition::TopCenter,
        }
    }
}

impl ScrollNodeOptions {
    pub fn centered() -> Self {
        Self {
            position: AnchorPosition::CenterCenter,
            ..Self::default()
        }
    }

    /// Scale the navigation should end at, given the current one.
    pub fn resolve_scale(&self, current_scale: f64, bounds: &ZoomBounds) -> f64 {
        let requested = match self.scale {
            None => current_scale,
            Some(scale) if self.should_update_max_scale => scale.max(current_scale),
            Some(scale) => scale,
        };
        let capped = match self.max_scale {
            Some(max_scale) => requested.min(max_scale),
            None => requested,
        };
        bounds.clamp(capped)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitOptions {
    pub duration: f64,
    pub offset: Offset,
    pub scale: Option<f64>,
    pub max_zoom_limit: f64,
    /// Allow vertical centering when the height ratio dominates.
    pub center_vertically: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            duration: DEFAULT_FIT_DURATION_MS,
            offset: Offset::default(),
            scale: None,
            max_zoom_limit: FIT_TO_VIEW_MAX_ZOOM,
            center_vertically: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalCenterOptions {
    pub offset: f64,
    pub transition_duration: f64,
}

impl Default for HorizontalCenterOptions {
    fn default() -> Self {
        Self {
            offset: 0.0,
            transition_duration: DEFAULT_SCROLL_DURATION_MS,
        }
    }
}

/// Translate along one axis placing the node's alignment point on the viewport's.
///
/// `node_start`/`node_len` are screen-space measurements at the current transform;
/// `ratio` is next scale over current scale.
fn aligned_translate(
    align: Align,
    translate: f64,
    ratio: f64,
    viewport_start: f64,
    viewport_len: f64,
    node_start: f64,
    node_len: f64,
    offset: f64,
) -> f64 {
    let a = align.factor();
    ratio * translate + a * viewport_len - ratio * ((node_start - viewport_start) + a * node_len)
        + offset
}

/// Target transform bringing `node` to `options.position` inside `viewport`.
pub fn scroll_node_target(
    current: &ViewportTransform,
    viewport: &BoundingRect,
    node: &BoundingRect,
    bounds: &ZoomBounds,
    options: &ScrollNodeOptions,
) -> ViewportTransform {
    let next_scale = options.resolve_scale(current.scale, bounds);
    let ratio = next_scale / current.scale;

    let translate_x = aligned_translate(
        options.position.horizontal(),
        current.translate_x,
        ratio,
        viewport.x,
        viewport.width,
        node.x,
        node.width,
        options.offset.x,
    );
    let translate_y = aligned_translate(
        options.position.vertical(),
        current.translate_y,
        ratio,
        viewport.y,
        viewport.height,
        node.y,
        node.height,
        options.offset.y,
    );

    ViewportTransform::new(translate_x, translate_y, next_scale)
}

/// Content rect converted back to content space (unscaled size and origin).
fn unscaled_content(
    current: &ViewportTransform,
    container: &BoundingRect,
    content: &BoundingRect,
) -> BoundingRect {
    BoundingRect::new(
        (content.x - container.x - current.translate_x) / current.scale,
        (content.y - container.y - current.translate_y) / current.scale,
        content.width / current.scale,
        content.height / current.scale,
    )
}

/// Target transform fitting `content` inside `container`.
///
/// Horizontal centering is unconditional; vertical centering only applies when the
/// height ratio strictly dominates the width ratio, matching top-anchored layouts.
pub fn fit_content_target(
    current: &ViewportTransform,
    container: &BoundingRect,
    content: &BoundingRect,
    bounds: &ZoomBounds,
    options: &FitOptions,
) -> ViewportTransform {
    let local = unscaled_content(current, container, content);
    let width_ratio = container.width / local.width;
    let height_ratio = container.height / local.height;

    let scale = match options.scale {
        Some(scale) => bounds.clamp(scale),
        None => clamp_value(
            width_ratio.min(height_ratio),
            bounds.min,
            bounds.max.min(options.max_zoom_limit),
        ),
    };

    let translate_x = (container.width - local.width * scale) / 2.0 - local.x * scale + options.offset.x;
    let translate_y = if options.center_vertically && height_ratio > width_ratio {
        (container.height - local.height * scale) / 2.0 - local.y * scale + options.offset.y
    } else {
        options.offset.y
    };

    ViewportTransform::new(translate_x, translate_y, scale)
}

/// Target transform centering `content` horizontally at the current scale.
pub fn horizontal_center_target(
    current: &ViewportTransform,
    container: &BoundingRect,
    content: &BoundingRect,
    options: &HorizontalCenterOptions,
) -> ViewportTransform {
    let local = unscaled_content(current, container, content);
    let translate_x =
        (container.width - local.width * current.scale) / 2.0 - local.x * current.scale + options.offset;
    ViewportTransform::new(translate_x, current.translate_y, current.scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> BoundingRect {
        BoundingRect::new(0.0, 0.0, 800.0, 600.0)
    }

    /// Screen rect of a content-space rect rendered inside `viewport()`.
    fn rendered(t: &ViewportTransform, x: f64, y: f64, w: f64, h: f64) -> BoundingRect {
        BoundingRect::new(
            t.translate_x + x * t.scale,
            t.translate_y + y * t.scale,
            w * t.scale,
            h * t.scale,
        )
    }

    // ============================================================================
    // Scale resolution
    // ============================================================================

    #[test]
    fn no_requested_scale_keeps_current() {
        let opts = ScrollNodeOptions::default();
        assert_eq!(opts.resolve_scale(1.7, &ZoomBounds::default()), 1.7);
    }

    #[test]
    fn should_update_max_scale_never_zooms_out() {
        let opts = ScrollNodeOptions {
            scale: Some(0.5),
            ..ScrollNodeOptions::default()
        };
        assert_eq!(opts.resolve_scale(2.0, &ZoomBounds::default()), 2.0);

        let opts = ScrollNodeOptions {
            scale: Some(0.5),
            should_update_max_scale: false,
            ..ScrollNodeOptions::default()
        };
        assert_eq!(opts.resolve_scale(2.0, &ZoomBounds::default()), 0.5);
    }

    #[test]
    fn max_scale_caps_the_result() {
        let opts = ScrollNodeOptions {
            scale: Some(3.0),
            max_scale: Some(1.5),
            ..ScrollNodeOptions::default()
        };
        assert_eq!(opts.resolve_scale(1.0, &ZoomBounds::default()), 1.5);
    }

    // ============================================================================
    // Anchors
    // ============================================================================

    #[test]
    fn top_left_anchor_moves_node_to_viewport_origin_plus_offset() {
        let t = ViewportTransform::new(30.0, 40.0, 1.0);
        let node = rendered(&t, 500.0, 700.0, 100.0, 50.0);
        let opts = ScrollNodeOptions {
            position: AnchorPosition::TopLeft,
            offset: Offset::new(10.0, 20.0),
            ..ScrollNodeOptions::default()
        };
        let next = scroll_node_target(&t, &viewport(), &node, &ZoomBounds::default(), &opts);
        let moved = rendered(&next, 500.0, 700.0, 100.0, 50.0);
        assert!((moved.x - 10.0).abs() < 1e-9);
        assert!((moved.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn bottom_right_anchor_with_zoom_change() {
        let t = ViewportTransform::new(-120.0, 15.0, 0.8);
        let node = rendered(&t, 900.0, 250.0, 60.0, 30.0);
        let opts = ScrollNodeOptions {
            position: AnchorPosition::BottomRight,
            scale: Some(2.0),
            ..ScrollNodeOptions::default()
        };
        let next = scroll_node_target(&t, &viewport(), &node, &ZoomBounds::default(), &opts);
        assert_eq!(next.scale, 2.0);
        let moved = rendered(&next, 900.0, 250.0, 60.0, 30.0);
        assert!((moved.x + moved.width - 800.0).abs() < 1e-9);
        assert!((moved.y + moved.height - 600.0).abs() < 1e-9);
    }

    #[test]
    fn top_center_is_the_default_anchor() {
        let t = ViewportTransform::identity();
        let node = rendered(&t, 100.0, 300.0, 200.0, 100.0);
        let next = scroll_node_target(
            &t,
            &viewport(),
            &node,
            &ZoomBounds::default(),
            &ScrollNodeOptions::default(),
        );
        let moved = rendered(&next, 100.0, 300.0, 200.0, 100.0);
        assert!((moved.center().x - 400.0).abs() < 1e-9);
        assert!(moved.y.abs() < 1e-9);
    }

    // ============================================================================
    // Fit to view
    // ============================================================================

    #[test]
    fn fit_800x600_with_400x300_content() {
        let t = ViewportTransform::identity();
        let content = BoundingRect::new(0.0, 0.0, 400.0, 300.0);
        let next = fit_content_target(
            &t,
            &viewport(),
            &content,
            &ZoomBounds::default(),
            &FitOptions::default(),
        );
        assert_eq!(next, ViewportTransform::new(200.0, 0.0, 1.0));
    }

    #[test]
    fn fit_centers_vertically_when_height_ratio_dominates() {
        let t = ViewportTransform::identity();
        let content = BoundingRect::new(0.0, 0.0, 400.0, 200.0);
        let next = fit_content_target(
            &t,
            &viewport(),
            &content,
            &ZoomBounds::default(),
            &FitOptions::default(),
        );
        assert_eq!(next, ViewportTransform::new(200.0, 200.0, 1.0));
    }

    #[test]
    fn fit_vertical_centering_can_be_disabled() {
        let t = ViewportTransform::identity();
        let content = BoundingRect::new(0.0, 0.0, 400.0, 200.0);
        let opts = FitOptions {
            center_vertically: false,
            offset: Offset::new(0.0, 12.0),
            ..FitOptions::default()
        };
        let next = fit_content_target(&t, &viewport(), &content, &ZoomBounds::default(), &opts);
        assert_eq!(next.translate_y, 12.0);
    }

    #[test]
    fn fit_shrinks_large_content() {
        let t = ViewportTransform::new(50.0, 50.0, 2.0);
        // 1600x2400 content-space, rendered at scale 2.
        let content = rendered(&t, 0.0, 0.0, 1600.0, 2400.0);
        let next = fit_content_target(
            &t,
            &viewport(),
            &content,
            &ZoomBounds::default(),
            &FitOptions::default(),
        );
        assert!((next.scale - 0.25).abs() < 1e-12);
        assert!((next.translate_x - 200.0).abs() < 1e-9);
        assert_eq!(next.translate_y, 0.0);
    }

    #[test]
    fn fit_respects_min_zoom() {
        let t = ViewportTransform::identity();
        let content = BoundingRect::new(0.0, 0.0, 100_000.0, 100_000.0);
        let next = fit_content_target(
            &t,
            &viewport(),
            &content,
            &ZoomBounds::default(),
            &FitOptions::default(),
        );
        assert_eq!(next.scale, 0.1);
    }

    #[test]
    fn fit_max_zoom_limit_can_be_raised() {
        let t = ViewportTransform::identity();
        let content = BoundingRect::new(0.0, 0.0, 200.0, 150.0);
        let opts = FitOptions {
            max_zoom_limit: 10.0,
            ..FitOptions::default()
        };
        let next = fit_content_target(&t, &viewport(), &content, &ZoomBounds::default(), &opts);
        assert_eq!(next.scale, 4.0);
    }

    #[test]
    fn fit_explicit_scale_wins() {
        let t = ViewportTransform::identity();
        let content = BoundingRect::new(0.0, 0.0, 400.0, 300.0);
        let opts = FitOptions {
            scale: Some(0.5),
            ..FitOptions::default()
        };
        let next = fit_content_target(&t, &viewport(), &content, &ZoomBounds::default(), &opts);
        assert_eq!(next.scale, 0.5);
        assert_eq!(next.translate_x, 300.0);
    }

    // ============================================================================
    // Horizontal centering
    // ============================================================================

    #[test]
    fn horizontal_center_keeps_scale_and_vertical_position() {
        let t = ViewportTransform::new(-300.0, 77.0, 0.5);
        let content = rendered(&t, 0.0, 0.0, 800.0, 2000.0);
        let opts = HorizontalCenterOptions {
            offset: 10.0,
            ..HorizontalCenterOptions::default()
        };
        let next = horizontal_center_target(&t, &viewport(), &content, &opts);
        assert_eq!(next.scale, 0.5);
        assert_eq!(next.translate_y, 77.0);
        assert!((next.translate_x - 210.0).abs() < 1e-9);
    }
}
