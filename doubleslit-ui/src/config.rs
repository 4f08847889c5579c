//! Runtime settings persisted to localStorage (but not URL).
//!
//! The URL hash carries only the optical parameters so shared links show the
//! same pattern; display preferences stay per-browser.

use doubleslit_compute::RenderConfig;
use std::cell::Cell;

#[cfg(target_arch = "wasm32")]
const INVERSE_SQUARE_STORAGE_KEY: &str = "doubleslit_inverse_square";

thread_local! {
    /// Cached inverse-square toggle. None = not yet loaded from localStorage.
    static INVERSE_SQUARE_CACHE: Cell<Option<bool>> = const { Cell::new(None) };
}

fn load_inverse_square_from_storage() -> Option<bool> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        let value = storage.get_item(INVERSE_SQUARE_STORAGE_KEY).ok()??;
        value.parse().ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn save_inverse_square_to_storage(value: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Err(e) = storage.set_item(INVERSE_SQUARE_STORAGE_KEY, &value.to_string()) {
                    log::warn!("Failed to save falloff setting: {:?}", e);
                }
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = value;
    }
}

/// Whether inverse-square dimming is on. Off unless the user enabled it.
pub fn get_inverse_square_enabled() -> bool {
    INVERSE_SQUARE_CACHE.with(|cell| {
        if cell.get().is_none() {
            cell.set(Some(load_inverse_square_from_storage().unwrap_or(false)));
        }
        cell.get().unwrap_or(false)
    })
}

/// Set the inverse-square toggle and persist it.
pub fn set_inverse_square_enabled(value: bool) {
    INVERSE_SQUARE_CACHE.with(|cell| cell.set(Some(value)));
    save_inverse_square_to_storage(value);
}

/// Renderer settings for the current toggle state and screen distance.
pub fn render_config(inverse_square: bool, distance_mm: f64) -> RenderConfig {
    RenderConfig::default().with_inverse_square(inverse_square, distance_mm)
}
