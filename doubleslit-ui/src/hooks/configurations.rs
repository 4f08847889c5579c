//! Saved configurations backed by browser localStorage.
//!
//! The whole `MemoryStore` is kept as one JSON document, so ids keep counting
//! up across reloads and a reload shows the same list.

use doubleslit_core::{
    ConfigurationStore, MemoryStore, NewConfiguration, SavedConfiguration, StoreError,
};
use leptos::*;
use web_sys::Storage;

const STORAGE_KEY: &str = "doubleslit_configurations";

/// `ConfigurationStore` that writes through to `localStorage` after every
/// mutation.
pub struct LocalStorageStore {
    storage: Storage,
    inner: MemoryStore,
}

impl LocalStorageStore {
    /// Open the store, loading any records a previous session left behind.
    pub fn open() -> Result<Self, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))?;

        let inner = match storage
            .get_item(STORAGE_KEY)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
        {
            Some(json) => serde_json::from_str(&json)?,
            None => MemoryStore::new(),
        };

        log::debug!("Opened configuration store with {} records", inner.len());
        Ok(Self { storage, inner })
    }

    fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.inner)?;
        self.storage
            .set_item(STORAGE_KEY, &json)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    /// Apply `op` and persist; the in-memory state is rolled back if the
    /// write fails so memory and storage never disagree.
    fn mutate<T>(
        &mut self,
        op: impl FnOnce(&mut MemoryStore) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let snapshot = self.inner.clone();
        let result = op(&mut self.inner)?;
        if let Err(e) = self.flush() {
            log::warn!("Failed to persist configurations: {}", e);
            self.inner = snapshot;
            return Err(e);
        }
        Ok(result)
    }
}

impl ConfigurationStore for LocalStorageStore {
    fn list(&self) -> Result<Vec<SavedConfiguration>, StoreError> {
        self.inner.list()
    }

    fn create(&mut self, config: NewConfiguration) -> Result<SavedConfiguration, StoreError> {
        self.mutate(|store| store.create(config))
    }

    fn delete(&mut self, id: u32) -> Result<(), StoreError> {
        self.mutate(|store| store.delete(id))
    }
}

/// Reactive handle to the saved configurations.
#[derive(Clone, Copy)]
pub struct Configurations {
    store: StoredValue<Box<dyn ConfigurationStore>>,
    /// Current list, oldest first.
    pub items: RwSignal<Vec<SavedConfiguration>>,
}

impl Configurations {
    pub fn create(&self, config: NewConfiguration) -> Result<SavedConfiguration, StoreError> {
        let result = self
            .store
            .try_update_value(|store| store.create(config))
            .unwrap_or_else(|| Err(StoreError::Unavailable("store disposed".to_string())));
        self.refresh();
        result
    }

    pub fn delete(&self, id: u32) -> Result<(), StoreError> {
        let result = self
            .store
            .try_update_value(|store| store.delete(id))
            .unwrap_or_else(|| Err(StoreError::Unavailable("store disposed".to_string())));
        self.refresh();
        result
    }

    /// Re-read the list from the store.
    pub fn refresh(&self) {
        let listed = self
            .store
            .try_with_value(|store| store.list())
            .unwrap_or_else(|| Ok(Vec::new()));
        match listed {
            Ok(items) => self.items.set(items),
            Err(e) => log::warn!("Failed to list configurations: {}", e),
        }
    }
}

/// Open the browser store, falling back to an in-memory one (lost on reload)
/// when localStorage is unavailable.
pub fn use_configurations() -> Configurations {
    let store: Box<dyn ConfigurationStore> = match LocalStorageStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("Saved configurations will not persist: {}", e);
            Box::new(MemoryStore::new())
        }
    };

    let handle = Configurations {
        store: store_value(store),
        items: create_rw_signal(Vec::new()),
    };
    handle.refresh();
    handle
}
