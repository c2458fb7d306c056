use gloo::storage::{LocalStorage, Storage};
use gloo::utils::document;
use shared::models::Theme;

const THEME_KEY: &str = "theme";

/// Persisted theme preference, independent of all other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeStore;

impl ThemeStore {
    pub fn load(&self) -> Theme {
        LocalStorage::get::<String>(THEME_KEY)
            .map(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }

    pub fn save(&self, theme: Theme) {
        if let Err(err) = LocalStorage::set(THEME_KEY, theme.as_str()) {
            tracing::error!("failed to persist theme preference: {err}");
        }
    }

    /// Reflect the preference on the document element for the stylesheet.
    pub fn apply(&self, theme: Theme) {
        if let Some(root) = document().document_element() {
            if root.set_attribute("data-theme", theme.as_str()).is_err() {
                tracing::warn!("failed to set data-theme attribute");
            }
        }
    }
}
