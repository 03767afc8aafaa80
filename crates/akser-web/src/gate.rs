//! Password wall shown while the site is under development.
//!
//! The unlock flag lives in localStorage under a fixed key; a matching
//! passphrase hides the wall for good. This is a cosmetic gate — if storage
//! is unavailable the wall simply shows on every visit.

use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    GATE_BUTTON_ID, GATE_ERROR_ID, GATE_ERROR_MS, GATE_ID, GATE_INPUT_ID, GATE_PASSPHRASE,
    UNLOCK_STORAGE_KEY,
};

fn local_storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

pub fn is_unlocked() -> bool {
    local_storage()
        .and_then(|s| s.get_item(UNLOCK_STORAGE_KEY).ok().flatten())
        .as_deref()
        == Some("1")
}

pub fn set_unlocked() {
    if let Some(s) = local_storage() {
        let _ = s.set_item(UNLOCK_STORAGE_KEY, "1");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(GATE_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(GATE_ID) {
        let _ = el.set_attribute("style", "");
    }
}

/// Wire the gate form: button click and Enter in the input both attempt the
/// passphrase. `on_unlock` runs once the flag is set and the wall is hidden.
pub fn wire(document: &web::Document, on_unlock: impl Fn() + 'static) {
    let on_unlock = Rc::new(on_unlock);

    if let Some(button) = document.get_element_by_id(GATE_BUTTON_ID) {
        let doc = document.clone();
        let unlock = on_unlock.clone();
        let closure = Closure::wrap(Box::new(move || {
            try_unlock(&doc, &unlock);
        }) as Box<dyn FnMut()>);
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if let Some(input) = document.get_element_by_id(GATE_INPUT_ID) {
        let doc = document.clone();
        let unlock = on_unlock.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if ev.key() == "Enter" {
                try_unlock(&doc, &unlock);
            }
        }) as Box<dyn FnMut(web::KeyboardEvent)>);
        let _ = input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn try_unlock(document: &web::Document, on_unlock: &Rc<impl Fn() + 'static>) {
    let Some(input) = document
        .get_element_by_id(GATE_INPUT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };

    if input.value().trim().to_lowercase() == GATE_PASSPHRASE {
        set_unlocked();
        hide(document);
        log::info!("gate unlocked");
        on_unlock();
    } else {
        flash_error(document);
    }
}

/// Show the error line, then clear it after a short delay.
fn flash_error(document: &web::Document) {
    let Some(el) = document.get_element_by_id(GATE_ERROR_ID) else {
        return;
    };
    let _ = el.set_attribute("style", "");

    let el_clear = el.clone();
    let clear = Closure::wrap(Box::new(move || {
        let _ = el_clear.set_attribute("style", "display:none");
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            clear.as_ref().unchecked_ref(),
            GATE_ERROR_MS,
        );
    }
    clear.forget();
}
