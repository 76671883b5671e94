//! Theme management module for the application.
//!
//! Light and dark themes, applied as a class on the document root.
//! Theme preference is persisted in localStorage; without a stored value the
//! system color scheme decides.

pub mod theme_toggle;

pub use theme_toggle::ThemeToggle;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for CSS class and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle button: describes the action, not the state.
    pub fn toggle_title(&self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark theme",
            Theme::Dark => "Switch to light theme",
        }
    }
}

const THEME_STORAGE_KEY: &str = "theme";

fn load_theme_from_storage() -> Option<Theme> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|s| Theme::parse(&s))
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// `Some(true)` when the system asks for dark, `None` outside a browser.
fn system_prefers_dark() -> Option<bool> {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
}

/// Stored choice first, then the system preference, then `Light`.
fn initial_theme(stored: Option<Theme>, prefers_dark: Option<bool>) -> Theme {
    match (stored, prefers_dark) {
        (Some(theme), _) => theme,
        (None, Some(true)) => Theme::Dark,
        (None, _) => Theme::Light,
    }
}

/// Apply theme: swap the class on `<html>` and mirror it as `data-theme` on body.
fn apply_theme(theme: Theme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
        let _ = classes.add_1(theme.as_str());
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Handle to the current theme.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Loads the stored theme (or the system preference) and applies it.
    pub fn new() -> Self {
        let initial = match load_theme_from_storage() {
            Some(theme) => theme,
            None => initial_theme(None, system_prefers_dark()),
        };
        apply_theme(initial);
        log::debug!("theme initialised: {}", initial.as_str());
        Self {
            theme: RwSignal::new(initial),
        }
    }

    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }

    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme(next);
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_parse_stored_values() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("system"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn test_as_str_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn test_initial_theme_prefers_stored_then_system() {
        assert_eq!(initial_theme(Some(Theme::Light), Some(true)), Theme::Light);
        assert_eq!(initial_theme(Some(Theme::Dark), None), Theme::Dark);
        assert_eq!(initial_theme(None, Some(true)), Theme::Dark);
        assert_eq!(initial_theme(None, Some(false)), Theme::Light);
        assert_eq!(initial_theme(None, None), Theme::Light);
    }
}
