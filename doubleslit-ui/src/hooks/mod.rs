mod configurations;
mod persistence;

pub use configurations::{use_configurations, LocalStorageStore};
pub use persistence::{load_state, save_state, use_hashchange_listener, PersistedState};
