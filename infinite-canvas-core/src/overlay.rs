use serde::{Deserialize, Serialize};

use crate::anchor::{Align, AnchorPosition};
use crate::geometry::Offset;
use crate::transform::{ViewportTransform, ZoomBounds};

pub const OVERLAP_Z_INDEX: u32 = 20;
pub const BASE_Z_INDEX: u32 = 1;

/// Live view state handed to host overlays (zoom controls, minimaps)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomState {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl ZoomState {
    pub fn new(transform: &ViewportTransform, bounds: &ZoomBounds) -> Self {
        Self {
            translate_x: transform.translate_x,
            translate_y: transform.translate_y,
            scale: transform.scale,
            min_zoom: bounds.min,
            max_zoom: bounds.max,
        }
    }

    pub fn can_zoom_in(&self) -> bool {
        self.scale < self.max_zoom
    }

    pub fn can_zoom_out(&self) -> bool {
        self.scale > self.min_zoom
    }

    /// Rounded percentage for display
    pub fn percent(&self) -> i64 {
        (self.scale * 100.0).round() as i64
    }
}

fn axis_rules(align: Align, start: &str, end: &str, offset: f64) -> (String, bool) {
    match align {
        Align::Start => (format!("{}: {}px;", start, offset), false),
        Align::End => (format!("{}: {}px;", end, offset), false),
        Align::Center => (format!("{}: calc(50% + {}px);", start, offset), true),
    }
}

/// Inline style placing an overlay at `position` inside the canvas.
pub fn overlay_style(position: AnchorPosition, offset: Offset, overlap: bool) -> String {
    let (vertical, center_y) = axis_rules(position.vertical(), "top", "bottom", offset.y);
    let (horizontal, center_x) = axis_rules(position.horizontal(), "left", "right", offset.x);
    let z_index = if overlap { OVERLAP_Z_INDEX } else { BASE_Z_INDEX };

    let mut style = format!("position: absolute; {} {} z-index: {};", vertical, horizontal, z_index);
    match (center_x, center_y) {
        (true, true) => style.push_str(" transform: translate(-50%, -50%);"),
        (true, false) => style.push_str(" transform: translateX(-50%);"),
        (false, true) => style.push_str(" transform: translateY(-50%);"),
        (false, false) => {}
    }
    style
}
