use std::fmt;

use eframe::Storage;
use serde::{Deserialize, Serialize};

use crate::config::{DF, PERSISTENCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored flag value. Anything other than `"dark"` (including nothing) reads as light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_stored(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_stored())
    }
}

/// Owns the current theme and keeps the persisted flag in step with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeController {
    theme: Theme,
}

impl ThemeController {
    pub fn load(storage: Option<&dyn Storage>) -> Self {
        let stored = storage.and_then(|s| s.get_string(PERSISTENCE.theme.key));
        let theme = Theme::from_stored(stored.as_deref());
        if DF.log_theme {
            log::info!("Theme restored: {} (stored flag: {:?})", theme, stored);
        }
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme, storage: Option<&mut (dyn Storage + 'static)>) {
        self.theme = theme;
        if let Some(storage) = storage {
            storage.set_string(PERSISTENCE.theme.key, theme.as_stored().to_string());
            storage.flush();
        }
    }

    pub fn toggle(&mut self, storage: Option<&mut (dyn Storage + 'static)>) -> Theme {
        let next = self.theme.toggled();
        self.set(next, storage);
        if DF.log_theme {
            log::info!("Theme switched to {}", next);
        }
        next
    }
}
