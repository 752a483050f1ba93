//! Transient toast notifications
//!
//! Each toast runs a fixed, non-cancelable schedule on a detached task:
//! mount off-screen, slide in after 100ms, stay visible for 3s, slide out,
//! and remove the node 300ms later. Toasts are independent; there is no
//! dedup, cap, or queue.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::port::DisplayPort;

/// Delay between mounting and the slide-in transition
const ENTER_DELAY: Duration = Duration::from_millis(100);
/// How long a toast stays on screen
const VISIBLE_DURATION: Duration = Duration::from_millis(3000);
/// Slide-out transition time before the node is removed
const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Severity of a toast, controls its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Background color of the toast node
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Success => "#38a169",
            Severity::Error => "#e53e3e",
            Severity::Info => "#667eea",
        }
    }
}

/// Identifier of a mounted toast node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

/// Creates auto-dismissing toasts on the display port
pub struct Toaster {
    display: Arc<dyn DisplayPort>,
    next_id: AtomicU64,
}

impl Toaster {
    pub fn new(display: Arc<dyn DisplayPort>) -> Self {
        Self {
            display,
            next_id: AtomicU64::new(0),
        }
    }

    /// Show a toast. Returns as soon as the node is mounted; the
    /// slide-in/slide-out schedule runs on a detached task and cannot be
    /// canceled. Must be called within a tokio runtime.
    pub fn show(&self, message: &str, severity: Severity) -> ToastId {
        let id = ToastId(self.next_id.fetch_add(1, Ordering::Relaxed));
        tracing::debug!("Toast {} ({}): {}", id.0, severity.as_str(), message);

        self.display.mount_toast(id, message, severity);

        let display = Arc::clone(&self.display);
        tokio::spawn(async move {
            tokio::time::sleep(ENTER_DELAY).await;
            display.set_toast_visible(id, true);
            tokio::time::sleep(VISIBLE_DURATION).await;
            display.set_toast_visible(id, false);
            tokio::time::sleep(EXIT_DURATION).await;
            display.remove_toast(id);
        });

        id
    }
}
