//! # theme-toggle
//!
//! Light/dark theme switching for a web page, compiled to WebAssembly.
//!
//! The active theme lives in a `data-theme` attribute on `<html>` and is
//! persisted to `localStorage`. An optional `.theme-toggle` control flips it,
//! and on a first visit (nothing stored) live OS colour-scheme changes are
//! followed too.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The `light` / `dark` value type |
//! | [`config`] | Storage key, selectors, icon classes, and titles |
//! | [`controller`] | Browser-free controller and its storage/document/toggle seams |
//! | [`error`] | Error taxonomy |
//! | [`wiring`] | Browser-free listener and readiness decisions, guarded toggle |
//! | `dom` | `web-sys` adapters and event wiring (`hydrate` only) |

pub mod config;
pub mod controller;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod theme;
pub mod wiring;

pub use config::ThemeConfig;
pub use controller::{PreferenceStore, Startup, ThemeController, ThemeTarget, ToggleIcon, sync_icon};
pub use error::ThemeError;
pub use theme::Theme;

#[cfg(feature = "hydrate")]
mod entry {
    use log::{debug, warn};
    use wasm_bindgen::prelude::*;

    use crate::config::ThemeConfig;
    use crate::dom;
    use crate::error::ThemeError;
    use crate::wiring::{AUTO_BOOT, BootLatch};

    thread_local! {
        static BOOT: BootLatch = const { BootLatch::new() };
    }

    #[cfg(feature = "manual-init")]
    fn to_js(err: ThemeError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    /// Schedule `install` for when the DOM is ready, at most once.
    fn boot(config: ThemeConfig) -> Result<(), ThemeError> {
        BOOT.with(|latch| {
            latch.run(|| {
                dom::on_ready(move || match dom::install(config) {
                    Ok(startup) => debug!("theme: installed {startup:?}"),
                    Err(err) => {
                        BOOT.with(BootLatch::release);
                        warn!("theme: install failed: {err}");
                    }
                })
            })
        })?;
        Ok(())
    }

    /// Module start: panic hook, console logging, and (unless the
    /// `manual-init` feature is on) initialization with the default config.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
        }
        if AUTO_BOOT {
            if let Err(err) = boot(ThemeConfig::default()) {
                warn!("theme: {err}");
            }
        }
    }

    /// Initialize with a JSON override of [`ThemeConfig`].
    ///
    /// Only exported with `manual-init`; otherwise `start` has already booted.
    #[cfg(feature = "manual-init")]
    #[wasm_bindgen]
    pub fn init_with_config(json: &str) -> Result<(), JsValue> {
        let config = ThemeConfig::from_json(json).map_err(to_js)?;
        boot(config).map_err(to_js)
    }
}
