//! `web-sys` adapters and event wiring for [`ThemeController`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. Everything here is glue: the
//! controller decides, these types read and write the live document.
//!
//! TRADE-OFFS
//! ==========
//! Event closures are leaked with `Closure::forget`; they live as long as the
//! page does. The controller sits in an `Rc<RefCell<..>>` shared by the click
//! and colour-scheme handlers. Browser dispatch never overlaps handlers, so
//! the `borrow_mut` calls cannot contend.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, MediaQueryListEvent, Storage, Window};

use crate::config::ThemeConfig;
use crate::controller::{PreferenceStore, Startup, ThemeController, ThemeTarget};
use crate::error::ThemeError;
use crate::theme::Theme;
use crate::wiring::{ChangeSupport, ElementHandle, GuardedToggle, Listeners, ReadyAction};

type DomController = ThemeController<LocalStore, DocumentRoot, DomToggle>;

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn dom_error(value: JsValue) -> ThemeError {
    ThemeError::Dom(js_message(&value))
}

// =============================================================
// Adapters
// =============================================================

/// `localStorage` under a single key.
pub struct LocalStore {
    storage: Option<Storage>,
    key: String,
}

impl LocalStore {
    /// Open the window's `localStorage`. Access denial is remembered as an
    /// unavailable store rather than failing the page.
    #[must_use]
    pub fn open(window: &Window, key: &str) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                warn!("theme: localStorage access denied: {}", js_message(&err));
                None
            }
        };
        Self { storage, key: key.to_owned() }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self) -> Result<Option<String>, ThemeError> {
        let storage = self.storage.as_ref().ok_or(ThemeError::StorageUnavailable)?;
        storage.get_item(&self.key).map_err(dom_error)
    }

    fn save(&mut self, theme: Theme) -> Result<(), ThemeError> {
        let storage = self.storage.as_ref().ok_or(ThemeError::StorageUnavailable)?;
        storage
            .set_item(&self.key, theme.as_str())
            .map_err(|err| ThemeError::StorageWrite(js_message(&err)))
    }
}

/// The `<html>` element.
pub struct DocumentRoot {
    root: Element,
    attribute: String,
}

impl DocumentRoot {
    #[must_use]
    pub fn new(root: Element, attribute: String) -> Self {
        Self { root, attribute }
    }
}

impl ThemeTarget for DocumentRoot {
    fn theme_attribute(&self) -> Option<String> {
        self.root.get_attribute(&self.attribute)
    }

    fn set_theme_attribute(&mut self, theme: Theme) {
        if let Err(err) = self.root.set_attribute(&self.attribute, theme.as_str()) {
            warn!("theme: failed to set {}: {}", self.attribute, js_message(&err));
        }
    }
}

/// The `.theme-toggle` control and its icon.
pub type DomToggle = GuardedToggle<Element>;

impl ElementHandle for Element {
    fn set_class_name(&self, class: &str) {
        Element::set_class_name(self, class);
    }

    fn set_title(&self, title: &str) -> Result<(), String> {
        self.set_attribute("title", title).map_err(|err| js_message(&err))
    }
}

/// Locate the toggle control and its icon; `None` when the page has no control.
pub fn find_toggle(document: &Document, config: &ThemeConfig) -> Option<DomToggle> {
    let control = match document.query_selector(&config.toggle_selector) {
        Ok(found) => found?,
        Err(err) => {
            warn!("theme: bad toggle selector {:?}: {}", config.toggle_selector, js_message(&err));
            return None;
        }
    };
    let icon = match control.query_selector(&config.icon_selector) {
        Ok(icon) => icon,
        Err(err) => {
            warn!("theme: bad icon selector {:?}: {}", config.icon_selector, js_message(&err));
            None
        }
    };
    Some(GuardedToggle::new(control, icon))
}

// =============================================================
// Wiring
// =============================================================

/// Run `f` once the document structure is parsed.
///
/// # Errors
///
/// Returns [`ThemeError::Dom`] when there is no document or the
/// `DOMContentLoaded` listener cannot be attached.
pub fn on_ready<F>(f: F) -> Result<(), ThemeError>
where
    F: FnOnce() + 'static,
{
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ThemeError::Dom("no document".to_owned()))?;

    if ReadyAction::from_ready_state(&document.ready_state()) == ReadyAction::RunNow {
        f();
        return Ok(());
    }

    let mut pending = Some(f);
    let on_loaded = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Some(f) = pending.take() {
            f();
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_loaded.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    on_loaded.forget();
    Ok(())
}

/// Build the controller against the live document, initialize it, and
/// register the click and colour-scheme listeners it asks for.
///
/// # Errors
///
/// Returns [`ThemeError::Dom`] when the window, document, or root element is
/// missing, or when a listener cannot be attached.
pub fn install(config: ThemeConfig) -> Result<Startup, ThemeError> {
    let window = web_sys::window().ok_or_else(|| ThemeError::Dom("no window".to_owned()))?;
    let document = window.document().ok_or_else(|| ThemeError::Dom("no document".to_owned()))?;
    let root = document
        .document_element()
        .ok_or_else(|| ThemeError::Dom("no root element".to_owned()))?;

    let store = LocalStore::open(&window, &config.storage_key);
    let target = DocumentRoot::new(root, config.attribute.clone());
    let toggle = find_toggle(&document, &config);
    let control = toggle.as_ref().map(|t| t.control().clone());

    let mut controller = ThemeController::new(config, store, target, toggle);
    let startup = controller.initialize();
    let controller = Rc::new(RefCell::new(controller));

    let listeners = Listeners::for_startup(&startup);
    if let (true, Some(control)) = (listeners.click, control) {
        listen_for_clicks(&control, &controller)?;
    }
    if listeners.system {
        listen_for_system(&window, &controller)?;
    }
    Ok(startup)
}

fn listen_for_clicks(control: &Element, controller: &Rc<RefCell<DomController>>) -> Result<(), ThemeError> {
    let controller = Rc::clone(controller);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        controller.borrow_mut().toggle();
    });
    control
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    on_click.forget();
    Ok(())
}

fn listen_for_system(window: &Window, controller: &Rc<RefCell<DomController>>) -> Result<(), ThemeError> {
    let query = controller.borrow().config().color_scheme_query.clone();
    let media = match window.match_media(&query) {
        Ok(Some(media)) => media,
        Ok(None) => {
            debug!("theme: matchMedia returned nothing for {query:?}");
            return Ok(());
        }
        Err(err) => return Err(dom_error(err)),
    };

    let fallback = media.clone();
    let controller = Rc::clone(controller);
    let on_change = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let prefers_dark = event
            .dyn_ref::<MediaQueryListEvent>()
            .map_or_else(|| fallback.matches(), MediaQueryListEvent::matches);
        controller.borrow_mut().on_system_change(prefers_dark);
    });
    let callback: &js_sys::Function = on_change.as_ref().unchecked_ref();

    match ChangeSupport::detect(supports(&media, "addEventListener"), supports(&media, "addListener")) {
        ChangeSupport::EventListener => {
            media.add_event_listener_with_callback("change", callback).map_err(dom_error)?;
        }
        ChangeSupport::LegacyListener => {
            #[allow(deprecated)]
            media.add_listener_with_opt_callback(Some(callback)).map_err(dom_error)?;
        }
        ChangeSupport::Unsupported => {
            debug!("theme: colour-scheme change notifications unsupported");
            return Ok(());
        }
    }
    on_change.forget();
    Ok(())
}

/// Feature-detect a method on a JS object.
fn supports(target: &JsValue, method: &str) -> bool {
    match js_sys::Reflect::get(target, &JsValue::from_str(method)) {
        Ok(value) => value.is_function(),
        Err(_) => false,
    }
}
