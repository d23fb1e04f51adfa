// Browser helpers shared by components.

use web_sys::Storage;

pub fn init_logging() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
}

pub fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

/// Write side of a key/value store such as `localStorage`.
pub trait KeyValueStore {
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

impl KeyValueStore for Storage {
    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.set_item(key, value)
            .map_err(|e| e.as_string().unwrap_or_else(|| format!("{e:?}")))
    }
}

/// Store `value` under `key`, logging a failure (quota, private mode).
pub fn persist<S: KeyValueStore + ?Sized>(store: &S, key: &str, value: &str) -> bool {
    match store.set(key, value) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("could not persist {key}: {e}");
            false
        }
    }
}
