#![cfg(target_arch = "wasm32")]
//! WASM entry point: password gate, scene construction and loop startup.

pub mod constants;
pub mod dom;
pub mod frame;
pub mod gate;
pub mod render;
pub mod ui;

use akser_core::{journey_anchor_positions, CameraPath, TerrainMesh, TerrainSpace};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use frame::{FrameContext, FrameLoop};

thread_local! {
    static ACTIVE_LOOP: RefCell<Option<FrameLoop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("akser-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;

    if gate::is_unlocked() {
        gate::hide(&document);
        spawn_init();
    } else {
        gate::show(&document);
        gate::wire(&document, spawn_init);
    }
    Ok(())
}

/// Tear down the animation loop and its listeners. Idempotent; exposed so
/// the page can stop the backdrop when the journey view unmounts.
#[wasm_bindgen]
pub fn shutdown() {
    let stopped = ACTIVE_LOOP.with(|slot| slot.borrow_mut().take()).is_some();
    if stopped {
        log::info!("terrain loop stopped");
    }
}

fn spawn_init() {
    spawn_local(async {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    // One TerrainSpace for the whole scene: the mesh and the camera
    // waypoints must agree on where the surface is.
    let space = TerrainSpace::journey();
    let mesh = TerrainMesh::generate(&space);
    let path = CameraPath::from_anchors(&space, &journey_anchor_positions());
    log::info!(
        "journey scene: {} vertices, {} waypoints",
        mesh.vertices.len(),
        path.len()
    );

    let gpu = render::init_gpu(&canvas, mesh.vertices.len(), &mesh.wire_indices).await;
    if gpu.is_none() {
        log::warn!("WebGPU unavailable; backdrop stays static");
    }

    let ctx = FrameContext::new(space, mesh, path, gpu, canvas, document);
    let frame_loop = FrameLoop::start(Rc::new(RefCell::new(ctx)));

    // Replacing a previous loop drops it, which cancels its frame and
    // detaches its listeners first.
    ACTIVE_LOOP.with(|slot| *slot.borrow_mut() = Some(frame_loop));
    Ok(())
}
