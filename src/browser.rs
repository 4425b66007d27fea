//! Browser controller (wasm)
//!
//! Wires the server-rendered page to a [`PageStore`]: window scroll events
//! feed the scroll tracker, `[data-nav-target]` clicks navigate, and the
//! `#menu-toggle` button flips the mobile menu. A store listener re-applies
//! nav classes and menu visibility after every state change.
//!
//! Tracing output goes to the browser console.
//!
//! Build with `wasm-pack build --target web --no-default-features --features wasm`.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollToOptions, Window};

use crate::content::DEFAULT_EVALUATION_FORM_URL;
use crate::page::{
    menu_open_from_aria, menu_view, nav_class_patch, Effect, PageAction, PageConfig, PageState,
    PageStore, ScrollBehavior, ScrollRequest, SectionLayout, SectionMetrics, SectionRegistry,
};

/// Measures sections straight from the live document
struct DomLayout {
    document: Document,
}

impl SectionLayout for DomLayout {
    fn measure(&self, section_id: &str) -> Option<SectionMetrics> {
        let element = self
            .document
            .get_element_by_id(section_id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionMetrics::from_offsets(
            element.offset_top(),
            element.offset_height(),
        ))
    }
}

struct Controller {
    window: Window,
    layout: DomLayout,
    store: RefCell<PageStore>,
}

impl Controller {
    fn dispatch(&self, action: PageAction) {
        let effect = self.store.borrow_mut().dispatch(action, &self.layout);
        if let Some(Effect::ScrollTo(request)) = effect {
            self.scroll_to(request);
        }
    }

    fn on_scroll(&self) {
        let offset = self.window.page_y_offset().unwrap_or(0.0);
        self.dispatch(PageAction::Scrolled { offset });
    }

    fn scroll_to(&self, request: ScrollRequest) {
        let options = ScrollToOptions::new();
        options.set_top(request.top);
        options.set_behavior(match request.behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// One formatted tracing event, flushed to the browser console on drop
struct ConsoleLine(Vec<u8>);

impl io::Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.0);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&JsValue::from_str(line));
        }
    }
}

fn init_console_logging() {
    // A second mount keeps the subscriber already installed
    let _ = tracing_subscriber::fmt()
        .with_writer(|| ConsoleLine(Vec::new()))
        .without_time()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Attach the controller to the current document.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    init_console_logging();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // The rendered floating link carries the configured form URL
    let form_url = document
        .get_element_by_id("evaluation")
        .and_then(|link| link.get_attribute("href"))
        .unwrap_or_else(|| DEFAULT_EVALUATION_FORM_URL.to_string());

    // Start from whatever menu state the server rendered (`?menu=open`)
    let menu_button = document.get_element_by_id("menu-toggle");
    let initial = PageState {
        menu_open: menu_open_from_aria(
            menu_button
                .as_ref()
                .and_then(|button| button.get_attribute("aria-expanded"))
                .as_deref(),
        ),
        ..PageState::default()
    };

    let mut store = PageStore::with_state(
        SectionRegistry::standard(&form_url),
        PageConfig::default(),
        initial,
    );
    {
        let document = document.clone();
        store.subscribe(move |state| render(&document, state));
    }

    let controller = Rc::new(Controller {
        window: window.clone(),
        layout: DomLayout {
            document: document.clone(),
        },
        store: RefCell::new(store),
    });

    {
        let controller = Rc::clone(&controller);
        listen(window.as_ref(), "scroll", move |_event| controller.on_scroll())?;
    }

    if let Some(button) = menu_button {
        let controller = Rc::clone(&controller);
        listen(button.as_ref(), "click", move |_event| {
            controller.dispatch(PageAction::ToggleMenu)
        })?;
    }

    for element in select_all(&document, "[data-nav-target]")? {
        let Some(section_id) = element.get_attribute("data-nav-target") else {
            continue;
        };
        let controller = Rc::clone(&controller);
        listen(element.as_ref(), "click", move |event| {
            event.prevent_default();
            controller.dispatch(PageAction::NavigateTo {
                section_id: section_id.clone(),
            });
        })?;
    }

    tracing::debug!(
        menu_open = controller.store.borrow().state().menu_open,
        "page controller mounted"
    );
    Ok(())
}

/// Register `handler` for `event_type`; the closure lives as long as the page.
fn listen<F>(target: &web_sys::EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn render(document: &Document, state: &PageState) {
    if let Ok(items) = select_all(document, "#desktop-nav [data-nav-target]") {
        for item in items {
            let active = item
                .get_attribute("data-nav-target")
                .map(|id| state.is_active(&id))
                .unwrap_or(false);
            let patch = nav_class_patch(active);
            let classes = item.class_list();
            for token in patch.remove {
                let _ = classes.remove_1(token);
            }
            for token in patch.add {
                let _ = classes.add_1(token);
            }
        }
    }

    let menu = menu_view(state.menu_open);

    if let Some(panel) = document.get_element_by_id("mobile-menu") {
        let _ = if menu.panel_hidden {
            panel.set_attribute("hidden", "")
        } else {
            panel.remove_attribute("hidden")
        };
    }

    if let Some(button) = document.get_element_by_id("menu-toggle") {
        let _ = button.set_attribute("aria-expanded", menu.aria_expanded);
    }

    if let Some(icon) = document.get_element_by_id("menu-icon") {
        let _ = icon.set_attribute("d", menu.icon_path);
    }
}
