//! WASM bindings for the sidebar collapser
//!
//! Reads the rendered sidebar, wires the page events to a [`Collapser`] and
//! renders its state back onto the DOM. Load the module on documentation
//! pages and call `install()` once the document is ready.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn, Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlAnchorElement, HtmlElement, Node, NodeList};

use crate::collapser::Collapser;
use crate::config::NavConfig;
use crate::error::{NavError, NavResult};
use crate::item::{ItemSource, Visibility};
use crate::surface::NavSurface;

// Use wee_alloc for smaller WASM binary
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

impl From<NavError> for JsValue {
    fn from(err: NavError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn dom_error(value: JsValue) -> NavError {
    NavError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

// ========================
// Console logging
// ========================

/// Forwards `log` records to the browser console
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&message),
            Level::Warn => web_sys::console::warn_1(&message),
            Level::Info => web_sys::console::info_1(&message),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

fn init_logging(level: LevelFilter) {
    // A second install keeps the logger but may change the level
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

// ========================
// DOM rendering
// ========================

/// Writes collapser changes onto the sidebar items
struct DomSurface<'a> {
    elements: &'a [HtmlElement],
    selected_class: &'a str,
}

impl NavSurface for DomSurface<'_> {
    fn set_selected(&mut self, index: usize, selected: bool) {
        let Some(element) = self.elements.get(index) else {
            return;
        };
        let classes = element.class_list();
        let result = if selected {
            classes.add_1(self.selected_class)
        } else {
            classes.remove_1(self.selected_class)
        };
        if let Err(err) = result {
            warn!("could not update header {index}: {:?}", err);
        }
    }

    fn set_visibility(&mut self, index: usize, visibility: Visibility) {
        let Some(element) = self.elements.get(index) else {
            return;
        };
        let display = match visibility {
            Visibility::Visible => "block",
            Visibility::Hidden => "none",
        };
        if let Err(err) = element.style().set_property("display", display) {
            warn!("could not update item {index}: {:?}", err);
        }
    }
}

/// Everything one page load needs
struct Page {
    collapser: Collapser,
    elements: Vec<HtmlElement>,
    sidenav: Element,
    config: NavConfig,
}

impl Page {
    fn render(&mut self) {
        let mut surface = DomSurface {
            elements: &self.elements,
            selected_class: &self.config.selected_class,
        };
        self.collapser.flush(&mut surface);
    }

    /// Item holding the scrollspy marker, innermost first
    fn active_index(&self) -> Option<usize> {
        let active = self
            .sidenav
            .query_selector(&self.config.active_selector())
            .ok()
            .flatten()?;
        let active: &Node = &active;
        self.elements
            .iter()
            .rposition(|element| element.contains(Some(active)))
    }

    fn header_indices(&self) -> Vec<usize> {
        self.collapser
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_header())
            .map(|(index, _)| index)
            .collect()
    }
}

/// Run an event handler against the page, then render
fn with_page(page: &Rc<RefCell<Page>>, handler: impl FnOnce(&mut Page)) {
    match page.try_borrow_mut() {
        Ok(mut page) => {
            handler(&mut page);
            page.render();
        }
        Err(_) => warn!("event dropped: sidebar is already being updated"),
    }
}

// ========================
// Page reading
// ========================

fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn read_source(element: &HtmlElement, config: &NavConfig) -> ItemSource {
    let href = element
        .query_selector("a")
        .ok()
        .flatten()
        .and_then(|link| link.dyn_into::<HtmlAnchorElement>().ok())
        .map(|link| link.href())
        .filter(|href| !href.is_empty());
    ItemSource {
        is_header: element.class_list().contains(&config.header_class),
        href,
    }
}

fn query_all(document: &Document, selector: &str) -> NavResult<NodeList> {
    document.query_selector_all(selector).map_err(dom_error)
}

// ========================
// Listeners
// ========================

/// An event listener that is removed again when dropped
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Option<Closure<dyn FnMut(Event)>>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> NavResult<Self> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        Ok(Self {
            target: target.clone(),
            event,
            callback: Some(callback),
        })
    }

    /// Keep the listener for the lifetime of the page
    fn leak(mut self) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(callback) = &self.callback {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, callback.as_ref().unchecked_ref());
        }
    }
}

// ========================
// Exported API
// ========================

/// Handle on an installed sidebar collapser.
///
/// Dropping it (`free()` from JavaScript) removes every listener.
#[wasm_bindgen]
pub struct AutoClose {
    page: Rc<RefCell<Page>>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl AutoClose {
    /// Remove every listener; the sidebar keeps its current state
    pub fn detach(&mut self) {
        debug!("detaching {} listener(s)", self.listeners.len());
        self.listeners.clear();
    }

    /// Keep listening after this handle is dropped
    pub fn forget_listeners(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.leak();
        }
    }

    /// Current item states, as JSON
    pub fn state_json(&self) -> Result<String, JsValue> {
        let page = self.page.try_borrow().map_err(|_| NavError::Dom("sidebar is busy".into()))?;
        let json = serde_json::to_string(page.collapser.items()).map_err(NavError::from)?;
        Ok(json)
    }
}

impl AutoClose {
    fn attach(config: NavConfig) -> NavResult<Option<AutoClose>> {
        let window = web_sys::window().ok_or(NavError::MissingGlobal("window"))?;
        let document = window.document().ok_or(NavError::MissingGlobal("document"))?;

        let Some(sidenav) = document
            .query_selector(&config.sidenav_selector)
            .map_err(dom_error)?
        else {
            info!("{} not found, sidebar left as is", config.sidenav_selector);
            return Ok(None);
        };
        if !config.applies_to(sidenav.scroll_height(), sidenav.client_height()) {
            debug!("sidebar fits without scrolling, left as is");
            return Ok(None);
        }

        let elements = html_elements(&query_all(&document, &config.item_selector)?);
        let sources: Vec<ItemSource> = elements.iter().map(|element| read_source(element, &config)).collect();
        let mut collapser = Collapser::new(&sources);
        let location = window.location().href().ok();
        collapser.start(location.as_deref());

        let content_links = html_elements(&query_all(&document, &config.content_link_selector)?);
        let page = Rc::new(RefCell::new(Page {
            collapser,
            elements,
            sidenav,
            config,
        }));
        {
            let mut page = page.borrow_mut();
            let active = page.active_index();
            page.collapser.seed_active(active);
            page.render();
        }

        let mut listeners = Vec::new();

        let headers: Vec<(usize, HtmlElement)> = {
            let page = page.borrow();
            let headers = page
                .header_indices()
                .into_iter()
                .map(|index| (index, page.elements[index].clone()))
                .collect();
            headers
        };
        for (index, header) in headers {
            let page = Rc::clone(&page);
            let callback = Closure::wrap(Box::new(move |_event: Event| {
                with_page(&page, |page| {
                    if let Err(err) = page.collapser.header_activated(index) {
                        warn!("{err}");
                    }
                });
            }) as Box<dyn FnMut(Event)>);
            listeners.push(Listener::attach(&header, "click", callback)?);
        }

        for link in content_links {
            let Ok(anchor) = link.dyn_into::<HtmlAnchorElement>() else {
                continue;
            };
            let page = Rc::clone(&page);
            let target = anchor.clone();
            let callback = Closure::wrap(Box::new(move |_event: Event| {
                let href = anchor.href();
                with_page(&page, |page| page.collapser.content_link_followed(&href));
            }) as Box<dyn FnMut(Event)>);
            listeners.push(Listener::attach(&target, "click", callback)?);
        }

        {
            let page = Rc::clone(&page);
            let callback = Closure::wrap(Box::new(move |_event: Event| {
                with_page(&page, |page| {
                    let active = page.active_index();
                    page.collapser.active_changed(active);
                });
            }) as Box<dyn FnMut(Event)>);
            listeners.push(Listener::attach(&document, "scroll", callback)?);
        }

        info!(
            "sidebar collapser installed: {} item(s), {} listener(s)",
            page.borrow().collapser.len(),
            listeners.len()
        );
        Ok(Some(AutoClose { page, listeners }))
    }
}

/// Install the collapser on the current page.
///
/// `config_json` overrides selectors and class names (see `NavConfig`).
/// Returns `undefined` when the page has no sidebar or the sidebar fits
/// without scrolling.
#[wasm_bindgen]
pub fn install(config_json: Option<String>) -> Result<Option<AutoClose>, JsValue> {
    let config = NavConfig::from_json(config_json.as_deref().unwrap_or(""))?;
    init_logging(config.level_filter()?);
    Ok(AutoClose::attach(config)?)
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
