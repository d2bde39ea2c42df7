mod use_canvas_navigation;
mod use_gesture_controller;
mod use_scrollbar;
mod use_transform_store;
mod use_zoom_shortcuts;

pub use use_canvas_navigation::{CanvasHandle, CanvasState};
pub use use_gesture_controller::{use_gesture_controller, GestureHandle};
pub use use_scrollbar::{use_scrollbar, ScrollbarHandle};
pub use use_transform_store::{use_transform_store, TransformHandle};
pub use use_zoom_shortcuts::use_zoom_shortcuts;
