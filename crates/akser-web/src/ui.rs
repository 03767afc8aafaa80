use akser_core::{parallax_offset, TOPO_PARALLAX_SPEED};
use web_sys as web;

use crate::constants::{CARD_ID_PREFIX, TOPO_LAYER_ID};

/// Reflect the active journey stop onto the card elements.
///
/// Cards carry ids `journey-card-0` .. `journey-card-N`; the CSS keys its
/// highlight off `data-active`.
pub fn mark_active_card(document: &web::Document, active: usize, count: usize) {
    for idx in 0..count {
        if let Some(el) = document.get_element_by_id(&format!("{CARD_ID_PREFIX}{idx}")) {
            let _ = el.set_attribute("data-active", if idx == active { "1" } else { "0" });
        }
    }
}

/// Slide the layered topo background at its parallax speed.
pub fn apply_topo_parallax(document: &web::Document, scroll_y: f32) {
    if let Some(el) = document.get_element_by_id(TOPO_LAYER_ID) {
        let offset = parallax_offset(scroll_y, TOPO_PARALLAX_SPEED);
        let _ = el.set_attribute("style", &format!("transform: translateY({offset}px)"));
    }
}
