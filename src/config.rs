//! Page contract for the theme toggle.
//!
//! DESIGN
//! ======
//! Every selector, key, and label the controller touches lives here so a host
//! page with different markup can pass overrides through `init_with_config`
//! without forking the controller. Unset fields fall back to the defaults.

use serde::Deserialize;

use crate::error::ThemeError;
use crate::theme::Theme;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_TOGGLE_SELECTOR: &str = ".theme-toggle";
pub const DEFAULT_ICON_SELECTOR: &str = "i";
pub const DEFAULT_DARK_ICON_CLASS: &str = "fas fa-moon";
pub const DEFAULT_LIGHT_ICON_CLASS: &str = "fas fa-sun";
pub const DEFAULT_DARK_TITLE: &str = "Switch to light mode";
pub const DEFAULT_LIGHT_TITLE: &str = "Switch to dark mode";
pub const DEFAULT_COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Names and labels used to find, mutate, and persist the theme.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding `light` or `dark`.
    pub storage_key: String,
    /// Attribute set on `<html>`.
    pub attribute: String,
    pub toggle_selector: String,
    /// Selector for the icon, scoped to the toggle control.
    pub icon_selector: String,
    pub dark_icon_class: String,
    pub light_icon_class: String,
    /// Control title while dark is active.
    pub dark_title: String,
    /// Control title while light is active.
    pub light_title: String,
    pub color_scheme_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
            toggle_selector: DEFAULT_TOGGLE_SELECTOR.to_owned(),
            icon_selector: DEFAULT_ICON_SELECTOR.to_owned(),
            dark_icon_class: DEFAULT_DARK_ICON_CLASS.to_owned(),
            light_icon_class: DEFAULT_LIGHT_ICON_CLASS.to_owned(),
            dark_title: DEFAULT_DARK_TITLE.to_owned(),
            light_title: DEFAULT_LIGHT_TITLE.to_owned(),
            color_scheme_query: DEFAULT_COLOR_SCHEME_QUERY.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] when `raw` is not a JSON object with
    /// string-valued known fields.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Icon class for the given active theme.
    #[must_use]
    pub fn icon_class(&self, theme: Theme) -> &str {
        if theme.is_dark() { &self.dark_icon_class } else { &self.light_icon_class }
    }

    /// Control title for the given active theme; it names the action a click performs.
    #[must_use]
    pub fn title(&self, theme: Theme) -> &str {
        if theme.is_dark() { &self.dark_title } else { &self.light_title }
    }
}
