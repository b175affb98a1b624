//! Theme resolution, application, and event handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeController` holds all behavior that does not need a browser. The
//! `dom` module implements the three seams below against `web-sys` and wires
//! the click and colour-scheme events to [`ThemeController::toggle`] and
//! [`ThemeController::on_system_change`].
//!
//! TRADE-OFFS
//! ==========
//! First visits always resolve `light`, ignoring the OS preference, but a
//! live OS change is honored when nothing was stored at load. The OS handler
//! never re-checks storage once registered, so it keeps reacting even after
//! the user clicks the toggle during the same page view.

use log::{debug, info, warn};

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Persistent key-value storage for the preference.
pub trait PreferenceStore {
    /// Raw stored value, `None` when nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be reached.
    fn load(&self) -> Result<Option<String>, ThemeError>;

    /// Persist `theme`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or rejects the write.
    fn save(&mut self, theme: Theme) -> Result<(), ThemeError>;
}

/// The document root carrying the theme attribute.
pub trait ThemeTarget {
    fn theme_attribute(&self) -> Option<String>;
    fn set_theme_attribute(&mut self, theme: Theme);
}

/// The toggle control and its icon.
pub trait ToggleIcon {
    fn set_icon_class(&mut self, class: &str);
    fn set_title(&mut self, title: &str);
}

/// Outcome of [`ThemeController::initialize`], used to decide which
/// listeners to register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Startup {
    pub theme: Theme,
    pub has_toggle: bool,
    /// Register the OS colour-scheme listener.
    pub follow_system: bool,
}

/// Point the toggle's icon and title at `theme`.
pub fn sync_icon<T: ToggleIcon + ?Sized>(config: &ThemeConfig, theme: Theme, icon: &mut T) {
    icon.set_icon_class(config.icon_class(theme));
    icon.set_title(config.title(theme));
}

pub struct ThemeController<S, D, T> {
    config: ThemeConfig,
    store: S,
    document: D,
    toggle: Option<T>,
}

impl<S, D, T> ThemeController<S, D, T>
where
    S: PreferenceStore,
    D: ThemeTarget,
    T: ToggleIcon,
{
    #[must_use]
    pub fn new(config: ThemeConfig, store: S, document: D, toggle: Option<T>) -> Self {
        Self { config, store, document, toggle }
    }

    /// Resolve, apply, and sync the theme for a freshly loaded page.
    pub fn initialize(&mut self) -> Startup {
        let stored = self.stored_preference();
        let theme = stored.unwrap_or_default();
        self.apply_theme(theme);

        let Some(toggle) = self.toggle.as_mut() else {
            debug!("theme: no toggle control, skipping listeners");
            return Startup { theme, has_toggle: false, follow_system: false };
        };
        sync_icon(&self.config, theme, toggle);

        let follow_system = stored.is_none();
        info!("theme: initialized {theme} (follow_system={follow_system})");
        Startup { theme, has_toggle: true, follow_system }
    }

    /// Set the document attribute, then persist.
    ///
    /// The attribute is written first so a failing store never leaves the
    /// page without an active theme.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.document.set_theme_attribute(theme);
        if let Err(err) = self.store.save(theme) {
            warn!("theme: {err}");
        }
    }

    /// Theme currently on the document; anything unreadable counts as light.
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        match self.document.theme_attribute() {
            Some(raw) => raw.parse().unwrap_or_default(),
            None => Theme::default(),
        }
    }

    /// Toggle click: flip the document's theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current_theme().toggled();
        self.apply_theme(next);
        self.sync_toggle(next);
        debug!("theme: toggled to {next}");
        next
    }

    /// OS colour-scheme change.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> Theme {
        let theme = Theme::from_prefers_dark(prefers_dark);
        self.apply_theme(theme);
        self.sync_toggle(theme);
        debug!("theme: system preference changed to {theme}");
        theme
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    #[must_use]
    pub fn toggle_control(&self) -> Option<&T> {
        self.toggle.as_ref()
    }

    fn sync_toggle(&mut self, theme: Theme) {
        if let Some(toggle) = self.toggle.as_mut() {
            sync_icon(&self.config, theme, toggle);
        }
    }

    /// Parsed stored preference. Unreadable or unknown values count as absent.
    fn stored_preference(&self) -> Option<Theme> {
        let raw = match self.store.load() {
            Ok(raw) => raw?,
            Err(err) => {
                warn!("theme: {err}");
                return None;
            }
        };
        match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(err) => {
                warn!("theme: ignoring stored preference: {err}");
                None
            }
        }
    }
}
