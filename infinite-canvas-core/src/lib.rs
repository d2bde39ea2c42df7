pub mod anchor;
pub mod background;
pub mod config;
pub mod error;
pub mod gate;
pub mod geometry;
pub mod gesture;
pub mod keyboard;
pub mod navigation;
pub mod overlay;
pub mod platform;
pub mod scrollbar;
pub mod store;
pub mod transform;

pub use anchor::{AnchorPosition, Align};
pub use background::BackgroundPattern;
pub use config::{BackgroundConfig, CanvasConfig, ScrollBarConfig};
pub use error::ConfigError;
pub use gate::{block_class_name, GateFlags};
pub use geometry::{clamp_value, BoundingRect, Offset, Point, ScrollDelta};
pub use gesture::{GestureController, PointerDownOutcome, PointerInput, WheelInput, WheelOutcome};
pub use keyboard::{shortcut_for_key, ZoomAction};
pub use navigation::{
    fit_content_target, horizontal_center_target, scroll_node_target, FitOptions,
    HorizontalCenterOptions, ScrollNodeOptions,
};
pub use overlay::{overlay_style, ZoomState};
pub use platform::{idle_timeout_ms, is_safari};
pub use scrollbar::{ScrollAxis, ScrollbarModel, ThumbState};
pub use store::{ease_cubic_in_out, TransformStore, TransitionStep};
pub use transform::{ViewportTransform, ZoomBounds};
