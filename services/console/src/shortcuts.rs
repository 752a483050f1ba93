//! Page-wide keyboard shortcuts
//!
//! The composing application registers one key-down hook and forwards
//! events here; the returned disposition tells it whether to suppress the
//! host's default handling.

use std::sync::Arc;

use crate::port::DisplayPort;

/// A key press as delivered by the host event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyEvent {
    /// Either Ctrl or Cmd counts as the shortcut modifier
    fn modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    F5,
}

/// Whether the host should still run its default handling for the key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    Suppressed,
    PassThrough,
}

/// Dispatches global keyboard shortcuts against the search input
pub struct ShortcutController {
    display: Arc<dyn DisplayPort>,
}

impl ShortcutController {
    pub fn new(display: Arc<dyn DisplayPort>) -> Self {
        Self { display }
    }

    pub fn on_key_down(&self, event: &KeyEvent) -> KeyDisposition {
        // Ctrl/Cmd + K focuses the search input and selects its text
        if event.modifier() && event.key == Key::Char('k') {
            if self.display.search_query().is_some() {
                self.display.focus_search(true);
            }
            return KeyDisposition::Suppressed;
        }

        // F5 and Ctrl/Cmd + R: let the host's native refresh proceed
        if event.key == Key::F5 || (event.modifier() && event.key == Key::Char('r')) {
            return KeyDisposition::PassThrough;
        }

        // Escape clears a non-empty search input and drops its focus
        if event.key == Key::Escape {
            if let Some(query) = self.display.search_query() {
                if !query.is_empty() {
                    self.display.set_search_query("");
                    self.display.blur_search();
                }
            }
        }

        KeyDisposition::PassThrough
    }
}
