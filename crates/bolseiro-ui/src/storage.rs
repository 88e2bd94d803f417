//! Browser persistence for the content model.
//!
//! The whole model lives in one localStorage slot and is rewritten on every
//! change; edits are human-paced and the blob is small. Every failure path
//! degrades to "no persisted state" with a logged warning — persistence
//! problems must never interrupt editing.

use bolseiro_core::Scholarship;

/// localStorage key holding the serialized model.
const STORAGE_KEY: &str = "bolseiro.studio.scholarship";

/// Session-scoped persistence adapter over browser localStorage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentStore;

impl ContentStore {
    /// Read the persisted model, if any.
    ///
    /// Absent or malformed data yields `None`; the caller falls back to the
    /// default instance.
    pub fn load(&self) -> Option<Scholarship> {
        let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(scholarship) => Some(scholarship),
            Err(err) => {
                log::warn!("discarding persisted content: {err}");
                None
            }
        }
    }

    /// Persist the full model, overwriting the slot.
    pub fn save(&self, scholarship: &Scholarship) {
        let Some(storage) = storage() else {
            return;
        };
        match serde_json::to_string(scholarship) {
            Ok(raw) => {
                if let Err(err) = storage.set_item(STORAGE_KEY, &raw) {
                    log::warn!("persisting content failed: {err:?}");
                }
            }
            Err(err) => log::warn!("serializing content failed: {err}"),
        }
    }

    /// Remove the persisted slot entirely.
    pub fn clear(&self) {
        if let Some(storage) = storage()
            && let Err(err) = storage.remove_item(STORAGE_KEY)
        {
            log::warn!("clearing persisted content failed: {err:?}");
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}
