//! Programmatic navigation exposed to the host through [`CanvasHandle`].
//!
//! Every operation waits for the browser to go idle before measuring, so layout
//! changes made in the same tick (opening a side panel, inserting the target node)
//! are reflected in the rects. Missing elements turn the call into a no-op.

use infinite_canvas_core::keyboard::ZOOM_ANIMATION_MS;
use infinite_canvas_core::{
    fit_content_target, horizontal_center_target, scroll_node_target, AnchorPosition, FitOptions,
    HorizontalCenterOptions, Point, ScrollNodeOptions, ViewportTransform, ZoomAction, ZoomBounds,
};
use leptos::*;
use web_sys::{Element, HtmlDivElement};

use super::{ScrollbarHandle, TransformHandle};
use crate::dom;

/// Snapshot returned by [`CanvasHandle::get_canvas_state`]
#[derive(Clone, Debug)]
pub struct CanvasState {
    pub current_position: ViewportTransform,
    pub zoom_bounds: ZoomBounds,
    pub is_panning: bool,
    /// Viewport element receiving input
    pub canvas: Option<HtmlDivElement>,
    /// Transformed layer holding the host content
    pub content: Option<HtmlDivElement>,
}

#[derive(Clone, Copy)]
pub struct CanvasHandle {
    transform: TransformHandle,
    scrollbar: ScrollbarHandle,
    canvas_ref: NodeRef<html::Div>,
    content_ref: NodeRef<html::Div>,
    is_panning: Signal<bool>,
    idle_timeout_ms: u32,
}

impl CanvasHandle {
    pub fn new(
        transform: TransformHandle,
        scrollbar: ScrollbarHandle,
        canvas_ref: NodeRef<html::Div>,
        content_ref: NodeRef<html::Div>,
        is_panning: Signal<bool>,
        idle_timeout_ms: u32,
    ) -> Self {
        Self {
            transform,
            scrollbar,
            canvas_ref,
            content_ref,
            is_panning,
            idle_timeout_ms,
        }
    }

    pub fn transform(&self) -> TransformHandle {
        self.transform
    }

    /// Bring `node` to `options.position` of the viewport.
    pub fn scroll_node_handler(&self, node: Element, options: ScrollNodeOptions) {
        let this = *self;
        dom::schedule_idle(self.idle_timeout_ms, move || {
            let Some(canvas) = this.canvas_ref.get_untracked() else {
                log::debug!("scroll_node_handler: canvas not mounted");
                return;
            };
            if !node.is_connected() {
                log::debug!("scroll_node_handler: target node is detached");
                return;
            }

            let viewport = dom::bounding_rect(&canvas);
            let node_rect = dom::bounding_rect(&node);
            let target = scroll_node_target(
                &this.transform.get_untracked(),
                &viewport,
                &node_rect,
                &this.transform.bounds(),
                &options,
            );
            log::debug!("scroll_node_handler: {:?} -> {:?}", options.position, target);
            this.transform.animate_to(target, options.transition_duration);
        });
    }

    pub fn scroll_node_to_center(&self, node: Element, options: ScrollNodeOptions) {
        self.scroll_node_handler(
            node,
            ScrollNodeOptions {
                position: AnchorPosition::CenterCenter,
                ..options
            },
        );
    }

    /// Fit the whole content inside the viewport and reset the scrollbar.
    pub fn fit_content_to_view(&self, options: FitOptions) {
        let this = *self;
        dom::schedule_idle(self.idle_timeout_ms, move || {
            let (Some(canvas), Some(content)) = (
                this.canvas_ref.get_untracked(),
                this.content_ref.get_untracked(),
            ) else {
                log::debug!("fit_content_to_view: canvas not mounted");
                return;
            };

            let container = dom::bounding_rect(&canvas);
            let content = dom::bounding_rect(&content);
            if !content.is_measured() || !container.is_measured() {
                log::debug!("fit_content_to_view: nothing to fit");
                return;
            }

            let target = fit_content_target(
                &this.transform.get_untracked(),
                &container,
                &content,
                &this.transform.bounds(),
                &options,
            );
            log::debug!("fit_content_to_view: {:?}", target);
            this.scrollbar.reset();
            this.transform.animate_to(target, options.duration);
        });
    }

    pub fn scroll_content_horizontally_center(&self, options: HorizontalCenterOptions) {
        let this = *self;
        dom::schedule_idle(self.idle_timeout_ms, move || {
            let (Some(canvas), Some(content)) = (
                this.canvas_ref.get_untracked(),
                this.content_ref.get_untracked(),
            ) else {
                log::debug!("scroll_content_horizontally_center: canvas not mounted");
                return;
            };

            let container = dom::bounding_rect(&canvas);
            let content = dom::bounding_rect(&content);
            if content.width <= 0.0 {
                return;
            }
            let target = horizontal_center_target(
                &this.transform.get_untracked(),
                &container,
                &content,
                &options,
            );
            this.transform.animate_to(target, options.transition_duration);
        });
    }

    pub fn get_canvas_state(&self) -> CanvasState {
        CanvasState {
            current_position: self.transform.get_untracked(),
            zoom_bounds: self.transform.bounds(),
            is_panning: self.is_panning.get_untracked(),
            canvas: self.canvas_ref.get_untracked().map(|el| (*el).clone()),
            content: self.content_ref.get_untracked().map(|el| (*el).clone()),
        }
    }

    /// Run a discrete zoom command. Steps are anchored at the viewport centre.
    pub fn apply_zoom_action(&self, action: ZoomAction) {
        let current = self.transform.get_untracked();
        let Some(scale) = action.target_scale(current.scale, &self.transform.bounds()) else {
            self.fit_content_to_view(FitOptions::default());
            return;
        };
        let Some(canvas) = self.canvas_ref.get_untracked() else {
            return;
        };

        let rect = dom::bounding_rect(&canvas);
        let center = Point::new(rect.width / 2.0, rect.height / 2.0);
        self.transform
            .animate_to(current.scaled_about(scale, center), ZOOM_ANIMATION_MS);
    }
}
