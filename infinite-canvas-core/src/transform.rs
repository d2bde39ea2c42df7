use crate::geometry::{clamp_value, Point, ScrollDelta};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_ZOOM: f64 = 0.1;
pub const DEFAULT_MAX_ZOOM: f64 = 4.0;

/// Inclusive scale range a store keeps its transform inside
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomBounds {
    pub min: f64,
    pub max: f64,
}

impl ZoomBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, scale: f64) -> f64 {
        clamp_value(scale, self.min, self.max)
    }

    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM)
    }
}

/// Pan/zoom transform mapping content space to screen space:
/// `screen = translate + content * scale`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewportTransform {
    pub fn new(translate_x: f64, translate_y: f64, scale: f64) -> Self {
        Self {
            translate_x,
            translate_y,
            scale,
        }
    }

    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Content-space point currently under `screen`
    pub fn content_point(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.translate_x) / self.scale,
            (screen.y - self.translate_y) / self.scale,
        )
    }

    /// Screen-space position of a content-space point
    pub fn screen_point(&self, content: Point) -> Point {
        Point::new(
            self.translate_x + content.x * self.scale,
            self.translate_y + content.y * self.scale,
        )
    }

    /// Translate by a raw screen-space movement (viewport drag).
    pub fn panned_by(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.translate_x + dx, self.translate_y + dy, self.scale)
    }

    /// Apply a wheel-style scroll delta.
    ///
    /// The delta is divided by the scale so a wheel notch covers the same
    /// content distance at every zoom level.
    pub fn panned_by_scroll(&self, delta: ScrollDelta) -> Self {
        Self::new(
            self.translate_x - delta.delta_x / self.scale,
            self.translate_y - delta.delta_y / self.scale,
            self.scale,
        )
    }

    /// Rescale to `next_scale` keeping the content point under `anchor` fixed on screen.
    pub fn scaled_about(&self, next_scale: f64, anchor: Point) -> Self {
        let content = self.content_point(anchor);
        Self::new(
            anchor.x - content.x * next_scale,
            anchor.y - content.y * next_scale,
            next_scale,
        )
    }

    /// Same transform with the scale clamped into `bounds`.
    pub fn clamped(&self, bounds: &ZoomBounds) -> Self {
        Self::new(self.translate_x, self.translate_y, bounds.clamp(self.scale))
    }

    /// Component-wise linear interpolation, `t` in `[0, 1]`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self::new(
            mix(self.translate_x, other.translate_x),
            mix(self.translate_y, other.translate_y),
            mix(self.scale, other.scale),
        )
    }

    /// CSS `transform` value for the content layer (origin must be `0 0`).
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.translate_x - other.translate_x).abs() <= epsilon
            && (self.translate_y - other.translate_y).abs() <= epsilon
            && (self.scale - other.scale).abs() <= epsilon
    }
}
