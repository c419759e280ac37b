//! Tab selector bindings

use std::cell::RefCell;
use std::rc::Rc;

use shared::{TabSet, ACTIVE_SELECTOR_CLASSES, HIDDEN_PANEL_CLASS, INACTIVE_SELECTOR_CLASSES};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::dom::{add_classes, elements_by_selector, remove_classes};

/// Selector controls carry this class and a `data-tab` target
pub const SELECTOR_QUERY: &str = ".tabBtn";

/// Content panels carry this class
pub const PANEL_QUERY: &str = ".tabContent";

struct TabBindings {
    tabs: RefCell<TabSet>,
    selectors: Vec<Element>,
    panels: Vec<Element>,
}

impl TabBindings {
    fn click(&self, index: usize) {
        if !self.tabs.borrow_mut().activate(index) {
            return;
        }
        let tabs = self.tabs.borrow();

        for (panel, state) in self.panels.iter().zip(tabs.panel_states()) {
            if state.visible {
                remove_classes(panel, &[HIDDEN_PANEL_CLASS]);
            } else {
                add_classes(panel, &[HIDDEN_PANEL_CLASS]);
            }
        }

        for (selector, state) in self.selectors.iter().zip(tabs.selector_states()) {
            remove_classes(selector, &ACTIVE_SELECTOR_CLASSES);
            add_classes(selector, &INACTIVE_SELECTOR_CLASSES);
            if state.active {
                add_classes(selector, &ACTIVE_SELECTOR_CLASSES);
            }
        }
    }
}

/// Attach click handlers to every tab selector
pub fn bind_tabs(document: &Document) -> Result<(), JsValue> {
    let selectors = elements_by_selector(document, SELECTOR_QUERY)?;
    let panels = elements_by_selector(document, PANEL_QUERY)?;

    let targets = selectors
        .iter()
        .map(|s| s.get_attribute("data-tab").unwrap_or_default())
        .collect();
    let panel_ids = panels.iter().map(|p| p.id()).collect();

    let bindings = Rc::new(TabBindings {
        tabs: RefCell::new(TabSet::new(panel_ids, targets)),
        selectors: selectors.clone(),
        panels,
    });

    for (index, selector) in selectors.iter().enumerate() {
        let bindings = Rc::clone(&bindings);
        let on_click = Closure::<dyn FnMut()>::new(move || bindings.click(index));
        selector.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    Ok(())
}
