use chrono::Utc;
use gatehouse_business::{FlashFade, FlashPhase};
use log::{debug, error};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use crate::selectors;

/// Fade the flash banner out: opacity first, then the `fade-out` class.
pub fn schedule_fade(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(banner) = document.get_element_by_id(selectors::FLASH_BANNER_ID) else {
        return Ok(());
    };
    let banner: HtmlElement = banner.dyn_into()?;

    let now = Utc::now();
    let fade = FlashFade::new(now);
    debug!(
        "Flash banner fades at {} and hides at {}",
        fade.fade_at(),
        fade.hide_at()
    );

    let hide_window = window.clone();
    let on_fade = Closure::once_into_js(move || {
        // Timers never fire early; the clock may disagree by a few ms.
        let now = Utc::now();
        render(&banner, fade.phase_at(now).max(FlashPhase::Fading));

        let on_hide = Closure::once_into_js(move || {
            render(&banner, FlashPhase::Hidden);
        });
        if let Err(err) = hide_window.set_timeout_with_callback_and_timeout_and_arguments_0(
            on_hide.unchecked_ref(),
            fade.millis_until_hide(now),
        ) {
            error!("Failed to schedule flash banner removal: {err:?}");
        }
    });

    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        on_fade.unchecked_ref(),
        fade.millis_until_fade(now),
    )?;

    Ok(())
}

fn render(banner: &HtmlElement, phase: FlashPhase) {
    if phase.is_transparent()
        && let Err(err) = banner.style().set_property("opacity", "0")
    {
        error!("Failed to fade flash banner: {err:?}");
    }

    if phase.is_hidden()
        && let Err(err) = banner.class_list().add_1(selectors::FADE_OUT_CLASS)
    {
        error!("Failed to hide flash banner: {err:?}");
    }
}
