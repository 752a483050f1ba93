//! Theme preference controller

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::port::{DisplayPort, PreferenceStore};
use crate::toast::{Severity, Toaster};

/// Preference slot holding the persisted theme
const THEME_KEY: &str = "theme";
/// Document attribute the active theme is applied to
const THEME_ATTR: &str = "data-theme";

/// The two supported themes. No third "system" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything other than `dark` is treated as light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applies and persists the light/dark theme preference
pub struct ThemeController {
    display: Arc<dyn DisplayPort>,
    store: Arc<dyn PreferenceStore>,
    toaster: Arc<Toaster>,
    current: Mutex<Theme>,
}

impl ThemeController {
    pub fn new(
        display: Arc<dyn DisplayPort>,
        store: Arc<dyn PreferenceStore>,
        toaster: Arc<Toaster>,
    ) -> Self {
        Self {
            display,
            store,
            toaster,
            current: Mutex::new(Theme::default()),
        }
    }

    /// Read the persisted preference and apply it to the document
    pub fn init(&self) {
        let theme = Theme::from_stored(self.store.get(THEME_KEY).as_deref());
        tracing::debug!("Applying persisted theme '{}'", theme);
        self.display.set_document_attr(THEME_ATTR, theme.as_str());
        *crate::lock(&self.current) = theme;
    }

    pub fn current(&self) -> Theme {
        *crate::lock(&self.current)
    }

    /// Flip between light and dark: apply, persist, announce
    pub fn on_toggle(&self) {
        let theme = {
            let mut current = crate::lock(&self.current);
            *current = current.flipped();
            *current
        };

        self.display.set_document_attr(THEME_ATTR, theme.as_str());
        self.store.set(THEME_KEY, theme.as_str());
        self.toaster
            .show(&format!("Switched to {} theme", theme), Severity::Success);
    }
}
