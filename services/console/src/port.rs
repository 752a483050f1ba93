//! Host capability seams for the console controller
//!
//! The browser globals a dashboard page exposes (document, localStorage,
//! clipboard, location) are modeled as injected traits so the controller
//! runs and tests without a rendering surface. Every seam is
//! defensive about absent page elements: a missing target means the
//! corresponding feature is silently disabled, never an error.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::toast::{Severity, ToastId};

/// A stat display slot on the dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    TotalRequests,
    SuccessRate,
    AvgResponseTime,
}

/// Rendering surface of the dashboard page
#[cfg_attr(test, mockall::automock)]
pub trait DisplayPort: Send + Sync {
    /// Write text into a stat slot. Implementations skip slots that are
    /// not present on the current page.
    fn set_stat(&self, field: StatField, text: &str);

    /// Set a document-wide attribute (e.g. `data-theme`)
    fn set_document_attr(&self, name: &str, value: &str);

    /// Mount a toast node in its off-screen state. The message is plain
    /// text and must never be interpreted as markup.
    fn mount_toast(&self, id: ToastId, message: &str, severity: Severity);

    /// Slide a mounted toast on screen (`true`) or off screen (`false`)
    fn set_toast_visible(&self, id: ToastId, visible: bool);

    /// Remove a toast node from the page
    fn remove_toast(&self, id: ToastId);

    /// Current search input value, or `None` when the page has no search
    /// input (search features are disabled in that case)
    fn search_query(&self) -> Option<String>;

    /// Replace the search input value
    fn set_search_query(&self, value: &str);

    /// Focus the search input, optionally selecting its text
    fn focus_search(&self, select_all: bool);

    /// Remove focus from the search input
    fn blur_search(&self);

    /// Submit the form enclosing the search input
    fn submit_search_form(&self);
}

/// Durable key-value preference storage (the `localStorage` seam)
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore: Send + Sync {
    /// Read a preference slot
    fn get(&self, key: &str) -> Option<String>;

    /// Write a preference slot. Write failures are the implementation's
    /// concern; callers proceed regardless.
    fn set(&self, key: &str, value: &str);
}

/// Clipboard write access
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    /// Place text on the host clipboard
    fn write_text(&self, text: &str) -> crate::Result<()>;
}

/// Full-page reload, driven by the auto-refresh timer
#[cfg_attr(test, mockall::automock)]
pub trait PageReloader: Send + Sync {
    fn reload(&self);
}

/// File-backed preference store: a flat JSON object on disk
///
/// Stands in for the browser's `localStorage`. Reads tolerate a missing or
/// corrupt file (treated as empty); write failures are logged and swallowed
/// so a read-only disk never breaks a preference toggle.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> HashMap<String, String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return HashMap::new(),
        };
        match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("Preference file {:?} is not valid JSON: {}", self.path, e);
                HashMap::new()
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        let content = match serde_json::to_string_pretty(&map) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to serialize preferences: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, content) {
            tracing::warn!("Failed to write preference file {:?}: {}", self.path, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_from_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));

        store.set("theme", "dark");
        assert_eq!(store.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn set_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));

        store.set("theme", "dark");
        store.set("other", "value");
        assert_eq!(store.get("theme"), Some("dark".to_string()));
        assert_eq!(store.get("other"), Some("value".to_string()));
    }

    #[test]
    fn survives_page_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        FilePreferenceStore::new(&path).set("theme", "dark");
        // A fresh store over the same file sees the persisted value
        assert_eq!(
            FilePreferenceStore::new(&path).get("theme"),
            Some("dark".to_string())
        );
    }

    #[test]
    fn corrupt_file_reads_as_empty_and_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FilePreferenceStore::new(&path);
        assert_eq!(store.get("theme"), None);

        store.set("theme", "light");
        assert_eq!(store.get("theme"), Some("light".to_string()));
    }
}
