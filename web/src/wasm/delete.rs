//! Delete buttons: one controller per table, one request per click.

use std::rc::Rc;

use gatehouse_business::{BusinessConfig, Notifier, RowDeletionController};
use log::{debug, error, info, warn};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use super::dom::{DomTable, elements};
use crate::selectors;

/// `window.alert`, which blocks until dismissed.
struct AlertNotifier {
    window: Window,
}

impl Notifier for AlertNotifier {
    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            error!("Failed to show alert: {err:?}");
        }
    }
}

type DomController = RowDeletionController<DomTable, AlertNotifier>;

pub fn bind(window: &Window, document: &Document) -> Result<(), JsValue> {
    // reqwest needs absolute URLs; the endpoints live on the page's origin.
    let config = BusinessConfig::new(window.location().origin()?);

    for table in elements(&document.query_selector_all(selectors::TABLE)?) {
        bind_table(table, &config, window)?;
    }

    Ok(())
}

fn bind_table(table: Element, config: &BusinessConfig, window: &Window) -> Result<(), JsValue> {
    let buttons = table.query_selector_all(selectors::DELETE_BUTTON)?;
    if buttons.length() == 0 {
        return Ok(());
    }

    let controller: Rc<DomController> = Rc::new(RowDeletionController::bind(
        DomTable::new(table),
        config.clone(),
        AlertNotifier {
            window: window.clone(),
        },
    ));
    info!(
        "Wired {} delete buttons for {} records",
        buttons.length(),
        controller.kind()
    );

    for button in elements(&buttons) {
        let controller = Rc::clone(&controller);
        let target = button.clone();

        let on_click = Closure::<dyn FnMut()>::new(move || {
            let Ok(Some(row)) = target.closest(selectors::ROW) else {
                warn!("Delete button is not inside a table row");
                return;
            };

            let controller = Rc::clone(&controller);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = controller.delete_row(row).await;
                debug!("Delete finished: {outcome:?}");
            });
        });

        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        // Handlers live as long as the page.
        on_click.forget();
    }

    Ok(())
}
