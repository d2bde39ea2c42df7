pub mod app;
pub mod components;
pub mod dom;
pub mod hooks;

use wasm_bindgen::prelude::*;

pub use app::App;
pub use components::{CustomComponent, EventBlocker, InfiniteCanvas};
pub use hooks::{CanvasHandle, CanvasState, TransformHandle};

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(App);
}
