use std::cell::RefCell;
use std::rc::Rc;

use gatehouse_business::TabSet;
use log::error;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::dom::elements;
use crate::selectors;

/// Wire every `.tab` to show its `data-tab` panel.
pub fn bind(document: &Document) -> Result<(), JsValue> {
    let tabs: Vec<Element> = elements(&document.query_selector_all(selectors::TAB)?).collect();
    if tabs.is_empty() {
        return Ok(());
    }

    let mut set = TabSet::new();
    for tab in &tabs {
        let panel = tab
            .get_attribute(selectors::TAB_TARGET_ATTR)
            .unwrap_or_default();
        let present = document.get_element_by_id(&panel).is_some();
        set.push(panel, present);
    }

    let set = Rc::new(RefCell::new(set));
    let tabs = Rc::new(tabs);

    for (index, tab) in tabs.iter().enumerate() {
        let set = Rc::clone(&set);
        let all_tabs = Rc::clone(&tabs);
        let document = document.clone();

        let on_click = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = set.borrow_mut().activate(index) {
                error!("Failed to switch tab: {err}");
                return;
            }

            if let Err(err) = show(&document, &all_tabs, &set.borrow()) {
                error!("Failed to switch tab: {err:?}");
            }
        });

        tab.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    Ok(())
}

/// Render the tab bar and panels from the current state of `set`.
fn show(document: &Document, tabs: &[Element], set: &TabSet) -> Result<(), JsValue> {
    for (index, tab) in tabs.iter().enumerate() {
        if set.is_active(index) {
            tab.class_list().add_1(selectors::ACTIVE_CLASS)?;
        } else {
            tab.class_list().remove_1(selectors::ACTIVE_CLASS)?;
        }
    }

    for content in elements(&document.query_selector_all(selectors::TAB_CONTENT)?) {
        content.class_list().remove_1(selectors::ACTIVE_CLASS)?;
    }

    if let Some(panel) = set
        .active_panel()
        .and_then(|panel| document.get_element_by_id(panel))
    {
        panel.class_list().add_1(selectors::ACTIVE_CLASS)?;
    }

    Ok(())
}
