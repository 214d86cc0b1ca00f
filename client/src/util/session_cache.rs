//! `localStorage`-backed [`SessionCache`].

use gate::SessionCache;
use gate::cache::SESSION_KEY;

use super::storage;

/// Session record slot under the `"user"` key.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageCache;

impl SessionCache for LocalStorageCache {
    fn read_raw(&self) -> Option<String> {
        storage::load_raw(SESSION_KEY)
    }

    fn write_raw(&self, raw: &str) {
        storage::save_raw(SESSION_KEY, raw);
    }

    fn clear(&self) {
        storage::remove(SESSION_KEY);
    }
}
