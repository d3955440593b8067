//! Key-value preference persistence.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{self, SiteError};

/// A string key-value store that survives page reloads.
pub trait PreferenceStore {
	/// Returns the stored value, or `None` when absent or unreadable.
	fn get(&self, key: &str) -> Option<String>;
	/// Best-effort write.
	fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
	fn storage() -> error::Result<web_sys::Storage> {
		error::window()?
			.local_storage()?
			.ok_or_else(|| SiteError::Js("localStorage unavailable".into()))
	}
}

impl PreferenceStore for BrowserStorage {
	fn get(&self, key: &str) -> Option<String> {
		match Self::storage().and_then(|s| Ok(s.get_item(key)?)) {
			Ok(value) => value,
			Err(err) => {
				log::debug!("reading {key} from storage failed: {err}");
				None
			}
		}
	}

	fn set(&self, key: &str, value: &str) {
		if let Err(err) = Self::storage().and_then(|s| Ok(s.set_item(key, value)?)) {
			log::debug!("writing {key} to storage failed: {err}");
		}
	}
}

/// In-memory store, for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
	values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.values.borrow().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) {
		self.values.borrow_mut().insert(key.into(), value.into());
	}
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
	fn get(&self, key: &str) -> Option<String> {
		(**self).get(key)
	}

	fn set(&self, key: &str, value: &str) {
		(**self).set(key, value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn memory_store_overwrites() {
		let store = MemoryStore::default();
		assert_eq!(store.get("theme"), None);
		store.set("theme", "light");
		store.set("theme", "dark");
		assert_eq!(store.get("theme").as_deref(), Some("dark"));
	}
}
