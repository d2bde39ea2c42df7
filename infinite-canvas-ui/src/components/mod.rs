pub mod background;
pub mod event_blocker;
pub mod infinite_canvas;
pub mod overlay;
pub mod scroll_bar;

pub use background::DotBackground;
pub use event_blocker::EventBlocker;
pub use infinite_canvas::InfiniteCanvas;
pub use overlay::{AnchoredOverlay, CustomComponent};
pub use scroll_bar::ScrollBar;
