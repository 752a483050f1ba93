//! Console - headless behavior layer for the gatewatch dashboard
//!
//! Polls the proxy's statistics endpoint, formats values for display, and
//! drives the dashboard's interactive affordances (search wiring, keyboard
//! shortcuts, toast notifications, auto-refresh and theme preferences).
//! The page itself is behind injected capability traits (`port`), so the
//! whole layer runs and tests without a rendering surface.

pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod io;
pub mod port;
pub mod refresh;
pub mod search;
pub mod shortcuts;
pub mod stats;
pub mod theme;
pub mod toast;

pub use config::{load_config, ConsoleConfig};
pub use controller::{Capabilities, Console};
pub use error::{ConsoleError, Result};
pub use shortcuts::{Key, KeyDisposition, KeyEvent};
pub use theme::Theme;
pub use toast::Severity;

/// Lock a mutex, recovering the guard if a panicked callback poisoned it
pub(crate) fn lock<T>(mutex: &std::sync::Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
