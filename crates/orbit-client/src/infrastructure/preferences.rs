//! In-memory [`PreferenceStore`].
//!
//! Values live only as long as the process.  Used by the CLI, where there is
//! no browser storage, and by tests.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::application::theme::PreferenceStore;

#[derive(Debug, Default)]
pub struct InMemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}
