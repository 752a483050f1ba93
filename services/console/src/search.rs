//! Search input wiring: enter-to-submit and debounced suggestion signals

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::port::DisplayPort;

/// A settled query must be strictly longer than this to produce a suggestion
const SUGGESTION_MIN_LEN: usize = 2;

/// Receiver for settled search queries. Hook point for real-time
/// suggestions; the default sink only logs.
#[cfg_attr(test, mockall::automock)]
pub trait SuggestionSink: Send + Sync {
    fn suggest(&self, query: &str);
}

/// Default sink: records the suggestion signal in the log
#[derive(Debug, Default)]
pub struct LogSuggestionSink;

impl SuggestionSink for LogSuggestionSink {
    fn suggest(&self, query: &str) {
        tracing::info!("Search suggestion: {}", query);
    }
}

/// Wires the search input's keystroke behavior
pub struct SearchController {
    display: Arc<dyn DisplayPort>,
    sink: Arc<dyn SuggestionSink>,
    debounce: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl SearchController {
    pub fn new(
        display: Arc<dyn DisplayPort>,
        sink: Arc<dyn SuggestionSink>,
        debounce: Duration,
    ) -> Self {
        Self {
            display,
            sink,
            debounce,
            pending: Mutex::new(None),
        }
    }

    /// Enter submits the enclosing form. No-op when the page has no
    /// search input.
    pub fn on_enter(&self) {
        if self.display.search_query().is_some() {
            self.display.submit_search_form();
        }
    }

    /// Restart the debounce window. When it settles without another
    /// keystroke, the current query is read back, trimmed, and forwarded
    /// to the sink if long enough. Must be called within a tokio runtime.
    pub fn on_input(&self) {
        if self.display.search_query().is_none() {
            return;
        }

        let display = Arc::clone(&self.display);
        let sink = Arc::clone(&self.sink);
        let debounce = self.debounce;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            let query = display.search_query().unwrap_or_default();
            let query = query.trim();
            if query.chars().count() > SUGGESTION_MIN_LEN {
                sink.suggest(query);
            }
        });

        if let Some(previous) = crate::lock(&self.pending).replace(handle) {
            previous.abort();
        }
    }
}
