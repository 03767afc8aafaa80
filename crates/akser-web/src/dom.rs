use akser_core::RegionGeometry;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{HERO_ID, SECTION_ID};

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn scroll_offset_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Snapshot the layout of the hero and journey regions.
///
/// Returns `None` while either region is not mounted; the caller holds its
/// last progress value in that case. This is the only place the frontend
/// reads layout, and the frame loop calls it at most once per frame.
pub fn read_region_geometry(document: &web::Document) -> Option<RegionGeometry> {
    let window = web::window()?;
    let section = document.get_element_by_id(SECTION_ID)?;
    let hero = document.get_element_by_id(HERO_ID)?;
    let hero_html = hero.dyn_ref::<web::HtmlElement>()?;

    let section_rect = section.get_bounding_client_rect();
    let hero_rect = hero.get_bounding_client_rect();
    let viewport_height = window.inner_height().ok()?.as_f64()?;

    Some(RegionGeometry {
        hero_bottom: hero_rect.bottom() as f32,
        hero_height: hero_html.offset_height() as f32,
        section_top: section_rect.top() as f32,
        section_scroll_height: section.scroll_height() as f32,
        viewport_height: viewport_height as f32,
    })
}

/// Keep the canvas backing store at CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
