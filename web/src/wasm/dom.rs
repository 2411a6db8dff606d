//! DOM-backed record table.

use gatehouse_business::RecordTable;
use log::error;
use wasm_bindgen::JsCast as _;
use web_sys::{Element, NodeList};

use crate::selectors;

/// Element nodes of a `NodeList`, in document order.
pub fn elements(list: &NodeList) -> impl Iterator<Item = Element> {
    (0..list.length())
        .filter_map(move |index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}

/// A rendered `<table>`; rows are its `<tr>` elements.
#[derive(Debug, Clone)]
pub struct DomTable {
    table: Element,
}

impl DomTable {
    pub fn new(table: Element) -> Self {
        Self { table }
    }
}

impl RecordTable for DomTable {
    type Row = Element;

    fn headers(&self) -> Vec<String> {
        match self.table.query_selector_all(selectors::HEADER_CELL) {
            Ok(cells) => elements(&cells)
                .map(|cell| cell.text_content().unwrap_or_default())
                .collect(),
            Err(err) => {
                error!("Failed to read table headers: {err:?}");
                Vec::new()
            }
        }
    }

    fn cell_text(&self, row: &Element, column: usize) -> Option<String> {
        row.query_selector(&selectors::cell(column))
            .ok()
            .flatten()
            .map(|cell| cell.text_content().unwrap_or_default())
    }

    fn remove_row(&self, row: &Element) {
        row.remove();
    }
}
