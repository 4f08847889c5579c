mod app;
mod components;
mod config;
mod hooks;
mod rendering;

use leptos::*;
use wasm_bindgen::prelude::*;

pub use hooks::LocalStorageStore;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Starting double-slit visualizer");
    mount_to_body(app::App);
}
