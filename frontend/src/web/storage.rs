//! Thin wrapper over browser LocalStorage so callers never touch the web API
//! directly (and tests can stay off it entirely).

use gloo_storage::{LocalStorage as Backing, Storage};

pub struct LocalStorage;

impl LocalStorage {
    /// `None` when the key is absent or storage is unavailable.
    pub fn get(key: &str) -> Option<String> {
        Backing::get(key).ok()
    }

    /// Returns whether the write succeeded.
    pub fn set(key: &str, value: &str) -> bool {
        Backing::set(key, value).is_ok()
    }

    pub fn delete(key: &str) {
        Backing::delete(key);
    }
}
