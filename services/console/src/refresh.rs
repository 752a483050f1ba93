//! Auto-refresh preference controller
//!
//! Two states: Off and On. While On, a timer task reloads the page on a
//! fixed period. The timer handle is an explicit slot owned by this
//! controller; enabling while already enabled replaces the previous timer
//! instead of leaking it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::port::PageReloader;
use crate::toast::{Severity, Toaster};

pub struct AutoRefreshController {
    reloader: Arc<dyn PageReloader>,
    toaster: Arc<Toaster>,
    period: Duration,
    timer: Mutex<Option<CancellationToken>>,
}

impl AutoRefreshController {
    pub fn new(reloader: Arc<dyn PageReloader>, toaster: Arc<Toaster>, period: Duration) -> Self {
        Self {
            reloader,
            toaster,
            period,
            timer: Mutex::new(None),
        }
    }

    /// Handle the auto-refresh checkbox change. Must be called within a
    /// tokio runtime when enabling.
    pub fn on_toggled(&self, enabled: bool) {
        if enabled {
            let cancel = CancellationToken::new();
            let reloader = Arc::clone(&self.reloader);
            let period = self.period;
            let task_cancel = cancel.clone();
            tokio::spawn(async move {
                loop {
                    tokio::select! {
                        _ = tokio::time::sleep(period) => reloader.reload(),
                        _ = task_cancel.cancelled() => break,
                    }
                }
            });

            if let Some(previous) = crate::lock(&self.timer).replace(cancel) {
                previous.cancel();
            }
            tracing::debug!("Auto-refresh enabled, period {}s", period.as_secs());
            self.toaster.show("Auto-refresh enabled", Severity::Success);
        } else {
            if let Some(timer) = crate::lock(&self.timer).take() {
                timer.cancel();
            }
            tracing::debug!("Auto-refresh disabled");
            self.toaster.show("Auto-refresh disabled", Severity::Info);
        }
    }

    /// Whether a refresh timer is currently live
    pub fn is_active(&self) -> bool {
        crate::lock(&self.timer).is_some()
    }

    /// Page-unload cleanup: stop the timer without a toast
    pub fn shutdown(&self) {
        if let Some(timer) = crate::lock(&self.timer).take() {
            timer.cancel();
        }
    }
}
