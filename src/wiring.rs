//! Browser-free decisions behind the `dom` event wiring.
//!
//! `dom` asks these helpers what to do (run now or wait, which change API to
//! use, which listeners to attach) and only performs the `web-sys` calls.
//! The toggle's icon guard lives here too, written against a small element
//! seam so it can be exercised with fakes.

use std::cell::Cell;

use log::warn;

use crate::controller::{Startup, ToggleIcon};

#[cfg(test)]
#[path = "wiring_test.rs"]
mod wiring_test;

/// Whether module start boots with the default config. Off with `manual-init`,
/// where the page calls `init_with_config` itself.
pub const AUTO_BOOT: bool = cfg!(not(feature = "manual-init"));

/// At-most-once guard around boot.
///
/// Released again when scheduling fails (or when the caller reports a later
/// install failure) so a subsequent boot can retry.
#[derive(Debug, Default)]
pub struct BootLatch {
    booted: Cell<bool>,
}

impl BootLatch {
    #[must_use]
    pub const fn new() -> Self {
        Self { booted: Cell::new(false) }
    }

    #[must_use]
    pub fn is_booted(&self) -> bool {
        self.booted.get()
    }

    pub fn release(&self) {
        self.booted.set(false);
    }

    /// Run `schedule` unless already booted. `Ok(false)` means the call was
    /// ignored.
    ///
    /// # Errors
    ///
    /// Propagates the error from `schedule`, after releasing the latch.
    pub fn run<E>(&self, schedule: impl FnOnce() -> Result<(), E>) -> Result<bool, E> {
        if self.booted.replace(true) {
            warn!("theme: already initialized, ignoring");
            return Ok(false);
        }
        if let Err(err) = schedule() {
            self.release();
            return Err(err);
        }
        Ok(true)
    }
}

/// What to do with the init callback given `document.readyState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyAction {
    RunNow,
    WaitForContentLoaded,
}

impl ReadyAction {
    #[must_use]
    pub fn from_ready_state(state: &str) -> Self {
        if state == "loading" { Self::WaitForContentLoaded } else { Self::RunNow }
    }
}

/// Which colour-scheme change API a `MediaQueryList` offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeSupport {
    /// `addEventListener("change", ..)`.
    EventListener,
    /// Legacy `addListener(..)` (older Safari).
    LegacyListener,
    Unsupported,
}

impl ChangeSupport {
    /// Prefer the standard API, fall back to the legacy one.
    #[must_use]
    pub fn detect(has_add_event_listener: bool, has_add_listener: bool) -> Self {
        match (has_add_event_listener, has_add_listener) {
            (true, _) => Self::EventListener,
            (false, true) => Self::LegacyListener,
            (false, false) => Self::Unsupported,
        }
    }
}

/// Listeners to attach after [`crate::ThemeController::initialize`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Listeners {
    pub click: bool,
    pub system: bool,
}

impl Listeners {
    #[must_use]
    pub fn for_startup(startup: &Startup) -> Self {
        Self { click: startup.has_toggle, system: startup.has_toggle && startup.follow_system }
    }
}

/// The slice of a DOM element the toggle needs.
pub trait ElementHandle {
    fn set_class_name(&self, class: &str);

    /// # Errors
    ///
    /// Returns the browser's message when the attribute write throws.
    fn set_title(&self, title: &str) -> Result<(), String>;
}

/// A toggle control whose icon may be missing.
///
/// Without an icon only the title is kept in sync.
pub struct GuardedToggle<E> {
    control: E,
    icon: Option<E>,
}

impl<E: ElementHandle> GuardedToggle<E> {
    #[must_use]
    pub fn new(control: E, icon: Option<E>) -> Self {
        if icon.is_none() {
            warn!("theme: toggle control has no icon, only its title will update");
        }
        Self { control, icon }
    }

    #[must_use]
    pub fn control(&self) -> &E {
        &self.control
    }

    #[must_use]
    pub fn has_icon(&self) -> bool {
        self.icon.is_some()
    }
}

impl<E: ElementHandle> ToggleIcon for GuardedToggle<E> {
    fn set_icon_class(&mut self, class: &str) {
        if let Some(icon) = &self.icon {
            icon.set_class_name(class);
        }
    }

    fn set_title(&mut self, title: &str) {
        if let Err(err) = self.control.set_title(title) {
            warn!("theme: failed to set toggle title: {err}");
        }
    }
}
