//! Browser persistence for the current optical parameters.
//! Supports both localStorage and URL hash parameters.
//! Priority on load: URL hash > localStorage > defaults.
//! A copied link reproduces the same interference pattern.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use doubleslit_core::OpticalParameters;
use flate2::{read::DeflateDecoder, write::DeflateEncoder, Compression};
use leptos::ev::hashchange;
use leptos_use::{use_event_listener, use_window};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use web_sys::Storage;

const STORAGE_KEY: &str = "doubleslit_state";
const URL_HASH_PREFIX: &str = "v1:";

/// Session state persisted between visits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub params: OpticalParameters,
    /// Schema version for future migrations
    version: u32,
}

impl PersistedState {
    const CURRENT_VERSION: u32 = 1;

    pub fn new(params: OpticalParameters) -> Self {
        Self {
            params,
            version: Self::CURRENT_VERSION,
        }
    }

    /// Stored state is only trusted if it is current and physically valid.
    fn accept(self, source: &str) -> Option<Self> {
        if self.version != Self::CURRENT_VERSION {
            log::warn!(
                "Ignoring {} state with version {} (current: {})",
                source,
                self.version,
                Self::CURRENT_VERSION
            );
            return None;
        }
        if let Err(e) = self.params.validate() {
            log::warn!("Ignoring {} state: {}", source, e);
            return None;
        }
        Some(self)
    }
}

/// Load persisted state with priority: URL hash > localStorage > None.
pub fn load_state() -> Option<PersistedState> {
    if let Some(state) = load_from_url_hash() {
        return Some(state);
    }
    load_from_local_storage()
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn load_from_local_storage() -> Option<PersistedState> {
    let json = local_storage()?.get_item(STORAGE_KEY).ok()??;

    match serde_json::from_str::<PersistedState>(&json) {
        Ok(state) => {
            let state = state.accept("localStorage")?;
            log::info!(
                "Loaded persisted state from localStorage: λ={} nm",
                state.params.wavelength_nm
            );
            Some(state)
        }
        Err(e) => {
            log::warn!("Failed to parse localStorage state: {}", e);
            None
        }
    }
}

/// Save state to both localStorage and URL hash.
pub fn save_state(state: &PersistedState) {
    save_to_local_storage(state);
    save_to_url_hash(state);
}

fn save_to_local_storage(state: &PersistedState) {
    let Some(storage) = local_storage() else {
        return;
    };

    match serde_json::to_string(state) {
        Ok(json) => {
            if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
                log::warn!("Failed to save state to localStorage: {:?}", e);
            }
        }
        Err(e) => {
            log::warn!("Failed to serialize state: {}", e);
        }
    }
}

// =============================================================================
// URL Hash Encoding/Decoding
// =============================================================================

/// Encode state to a compressed, URL-safe string.
pub(crate) fn encode_state(state: &PersistedState) -> Option<String> {
    let json = serde_json::to_string(state).ok()?;

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(json.as_bytes()).ok()?;
    let compressed = encoder.finish().ok()?;

    let encoded = URL_SAFE_NO_PAD.encode(compressed);
    Some(format!("{URL_HASH_PREFIX}{encoded}"))
}

/// Decode state from a compressed, URL-safe string.
pub(crate) fn decode_state(encoded: &str) -> Option<PersistedState> {
    let data = encoded.strip_prefix(URL_HASH_PREFIX)?;
    let compressed = URL_SAFE_NO_PAD.decode(data).ok()?;

    let mut decoder = DeflateDecoder::new(&compressed[..]);
    let mut json = String::new();
    decoder.read_to_string(&mut json).ok()?;

    let state: PersistedState = serde_json::from_str(&json).ok()?;
    state.accept("URL hash")
}

fn load_from_url_hash() -> Option<PersistedState> {
    let window = web_sys::window()?;
    let hash = window.location().hash().ok()?;
    let hash = hash.strip_prefix('#').unwrap_or(&hash);

    if hash.is_empty() {
        return None;
    }

    match decode_state(hash) {
        Some(state) => {
            log::info!(
                "Loaded state from URL hash: λ={} nm",
                state.params.wavelength_nm
            );
            Some(state)
        }
        None => {
            log::warn!("Failed to decode URL hash state");
            None
        }
    }
}

/// Replace the URL hash without adding a history entry.
fn save_to_url_hash(state: &PersistedState) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let Some(encoded) = encode_state(state) else {
        log::warn!("Failed to encode state for URL hash");
        return;
    };

    if let Ok(history) = window.history() {
        let new_url = format!("#{encoded}");
        if let Err(e) =
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
        {
            log::warn!("Failed to update URL hash: {:?}", e);
        }
    }
}

/// Call `on_change` with the decoded state whenever the URL hash changes
/// (a pasted or edited link). Undecodable hashes are ignored.
pub fn use_hashchange_listener<F>(on_change: F)
where
    F: Fn(PersistedState) + 'static,
{
    let _ = use_event_listener(use_window(), hashchange, move |_| {
        if let Some(state) = load_from_url_hash() {
            on_change(state);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_roundtrip_keeps_parameters() {
        let state = PersistedState::new(OpticalParameters {
            wavelength_nm: 632.0,
            separation_mm: 0.25,
            distance_cm: 150.0,
        });
        let encoded = encode_state(&state).unwrap();
        assert!(encoded.starts_with(URL_HASH_PREFIX));
        assert!(!encoded.contains('+') && !encoded.contains('/') && !encoded.contains('='));
        assert_eq!(decode_state(&encoded), Some(state));
    }

    #[test]
    fn decode_rejects_missing_prefix() {
        let encoded = encode_state(&PersistedState::new(OpticalParameters::default())).unwrap();
        let bare = encoded.strip_prefix(URL_HASH_PREFIX).unwrap();
        assert_eq!(decode_state(bare), None);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert_eq!(decode_state("v1:not-deflate"), None);
        assert_eq!(decode_state(""), None);
    }

    #[test]
    fn decode_rejects_other_versions() {
        let mut state = PersistedState::new(OpticalParameters::default());
        state.version = 2;
        let encoded = encode_state(&state).unwrap();
        assert_eq!(decode_state(&encoded), None);
    }

    #[test]
    fn decode_rejects_invalid_parameters() {
        let state = PersistedState::new(OpticalParameters {
            wavelength_nm: 500.0,
            separation_mm: 0.0,
            distance_cm: 100.0,
        });
        let encoded = encode_state(&state).unwrap();
        assert_eq!(decode_state(&encoded), None);
    }
}
