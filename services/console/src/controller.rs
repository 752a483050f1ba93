//! Console: composition root for the dashboard behavior layer
//!
//! Builds the five controllers from one config and one set of injected
//! host capabilities, and exposes the page's entry points as plain
//! methods. The composing application forwards DOM-level events here and
//! applies the returned dispositions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::ConsoleConfig;
use crate::io::HttpClient;
use crate::port::{Clipboard, DisplayPort, PageReloader, PreferenceStore};
use crate::refresh::AutoRefreshController;
use crate::search::SearchController;
use crate::shortcuts::{KeyDisposition, KeyEvent, ShortcutController};
use crate::stats::StatsPoller;
use crate::theme::{Theme, ThemeController};
use crate::toast::{Severity, ToastId, Toaster};

/// Host capabilities the console is wired to
pub struct Capabilities {
    pub http: Arc<dyn HttpClient>,
    pub display: Arc<dyn DisplayPort>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub clipboard: Arc<dyn Clipboard>,
    pub reloader: Arc<dyn PageReloader>,
    pub suggestions: Arc<dyn crate::search::SuggestionSink>,
}

/// The dashboard page controller
pub struct Console {
    stats: StatsPoller,
    toaster: Arc<Toaster>,
    search: SearchController,
    shortcuts: ShortcutController,
    refresh: AutoRefreshController,
    theme: ThemeController,
    clipboard: Arc<dyn Clipboard>,
    initialized: AtomicBool,
}

impl Console {
    pub fn new(config: &ConsoleConfig, caps: Capabilities) -> Self {
        let toaster = Arc::new(Toaster::new(Arc::clone(&caps.display)));

        let stats = StatsPoller::new(
            Arc::clone(&caps.http),
            Arc::clone(&caps.display),
            config.stats_url.clone(),
        );
        let search = SearchController::new(
            Arc::clone(&caps.display),
            caps.suggestions,
            Duration::from_millis(config.search_debounce_ms),
        );
        let shortcuts = ShortcutController::new(Arc::clone(&caps.display));
        let refresh = AutoRefreshController::new(
            caps.reloader,
            Arc::clone(&toaster),
            Duration::from_secs(config.auto_refresh_seconds),
        );
        let theme = ThemeController::new(
            Arc::clone(&caps.display),
            caps.preferences,
            Arc::clone(&toaster),
        );

        Self {
            stats,
            toaster,
            search,
            shortcuts,
            refresh,
            theme,
            clipboard: caps.clipboard,
            initialized: AtomicBool::new(false),
        }
    }

    /// One-time page setup: applies the persisted theme. Repeated calls
    /// are no-ops.
    pub fn init(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            tracing::debug!("Console already initialized");
            return;
        }
        self.theme.init();
    }

    /// Fetch the latest statistics and update the stat slots.
    /// Failures are logged and swallowed.
    pub async fn update_stats(&self) {
        self.stats.update().await;
    }

    /// Show a toast on the page
    pub fn show_notification(&self, message: &str, severity: Severity) -> ToastId {
        self.toaster.show(message, severity)
    }

    /// Copy text via the host clipboard. Never errors: a failed write is
    /// logged and reported as `false`.
    pub fn copy_to_clipboard(&self, text: &str) -> bool {
        match self.clipboard.write_text(text) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Clipboard write failed: {}", e);
                false
            }
        }
    }

    /// Keystroke in the search input
    pub fn on_search_input(&self) {
        self.search.on_input();
    }

    /// Enter pressed in the search input
    pub fn on_search_enter(&self) {
        self.search.on_enter();
    }

    /// Page-wide key-down event
    pub fn on_key_down(&self, event: &KeyEvent) -> KeyDisposition {
        self.shortcuts.on_key_down(event)
    }

    /// Auto-refresh checkbox change
    pub fn on_auto_refresh_toggled(&self, enabled: bool) {
        self.refresh.on_toggled(enabled);
    }

    /// Whether the auto-refresh timer is currently live
    pub fn auto_refresh_active(&self) -> bool {
        self.refresh.is_active()
    }

    /// Theme toggle click
    pub fn on_theme_toggle(&self) {
        self.theme.on_toggle();
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.current()
    }

    /// Page-unload cleanup: stops the auto-refresh timer
    pub fn shutdown(&self) {
        self.refresh.shutdown();
    }
}
