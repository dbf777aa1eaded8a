//! Sound Cache
//!
//! Maps sound ids to loaded handles. Each entry is a shared once-cell, so
//! concurrent requests for the same uncached id wait on one in-flight load
//! instead of loading twice.
//!
//! ```text
//! NotLoaded ──get_or_load──▶ Loading ──ok──▶ Loaded ──evict──▶ NotLoaded
//!                               │
//!                               └──err──▶ NotLoaded
//! ```

use ff_core::SoundId;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::platform::{AudioHandle, PlatformError};

/// Lifecycle of one cache entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheState {
    NotLoaded,
    Loading,
    Loaded,
}

type Slot = Arc<OnceCell<AudioHandle>>;

/// Load-once sound handle cache
#[derive(Debug, Default)]
pub struct SoundCache {
    slots: Mutex<HashMap<SoundId, Slot>>,
}

impl SoundCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached handle, loading it first if needed
    ///
    /// Only one `load` runs per id at a time; other callers await its
    /// result. A failed load leaves the id uncached so the next call retries.
    pub async fn get_or_load<F, Fut>(&self, id: SoundId, load: F) -> Result<AudioHandle, PlatformError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<AudioHandle, PlatformError>>,
    {
        let slot = Arc::clone(self.slots.lock().entry(id).or_default());

        let result = slot.get_or_try_init(load).await.copied();
        if result.is_err() {
            self.remove_slot(id, &slot);
        }
        result
    }

    /// Loaded handle, if any (never triggers a load)
    pub fn get(&self, id: SoundId) -> Option<AudioHandle> {
        self.slots.lock().get(&id).and_then(|slot| slot.get().copied())
    }

    pub fn state(&self, id: SoundId) -> CacheState {
        match self.slots.lock().get(&id) {
            None => CacheState::NotLoaded,
            Some(slot) if slot.initialized() => CacheState::Loaded,
            Some(_) => CacheState::Loading,
        }
    }

    /// Drop an entry; returns its handle if it had finished loading
    pub fn evict(&self, id: SoundId) -> Option<AudioHandle> {
        self.slots.lock().remove(&id).and_then(|slot| slot.get().copied())
    }

    /// Empty the cache, returning every loaded handle
    pub fn drain(&self) -> Vec<(SoundId, AudioHandle)> {
        self.slots
            .lock()
            .drain()
            .filter_map(|(id, slot)| slot.get().copied().map(|handle| (id, handle)))
            .collect()
    }

    /// Every loaded handle
    pub fn loaded(&self) -> Vec<(SoundId, AudioHandle)> {
        self.slots
            .lock()
            .iter()
            .filter_map(|(id, slot)| slot.get().copied().map(|handle| (*id, handle)))
            .collect()
    }

    /// Number of entries, loading or loaded
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }

    fn remove_slot(&self, id: SoundId, slot: &Slot) {
        let mut slots = self.slots.lock();
        // A newer slot may already have replaced ours.
        if slots.get(&id).is_some_and(|current| Arc::ptr_eq(current, slot)) {
            slots.remove(&id);
        }
    }
}
