//! Per-frame pipeline and the animation loop.
//!
//! One tick runs the whole data flow in order: layout snapshot → scroll
//! progress → (vertex displacement, camera-path query) → rig smoothing →
//! render handoff. Scroll and resize listeners never touch layout
//! themselves; they only mark it dirty so the next tick reads it once.
//!
//! `FrameLoop` owns the requestAnimationFrame chain and both listeners and
//! undoes all of it on drop — after teardown no further ticks run and no
//! listener stays attached.

use akser_core::{
    active_card_index, mesh_parallax, Camera, CameraPath, CameraRig, LoopState, RegionGeometry,
    ScrollTracker, TerrainMesh, TerrainSpace, TickScheduler, JOURNEY_ANCHOR_COUNT, WAVE_AMPLITUDE,
    WAVE_SPEED,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{dom, render, ui};

pub struct FrameContext {
    pub space: TerrainSpace,
    pub mesh: TerrainMesh,
    pub path: CameraPath,
    pub rig: CameraRig,
    pub tracker: ScrollTracker,
    pub gpu: Option<render::GpuState<'static>>,

    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,

    /// Set by the scroll/resize listeners, consumed once per tick.
    pub layout_dirty: Rc<Cell<bool>>,
    pub geometry: Option<RegionGeometry>,
    pub scroll_y: f32,

    pub last_instant: Instant,
    pub time_accum: f32,
    pub active_card: Option<usize>,
}

impl FrameContext {
    pub fn new(
        space: TerrainSpace,
        mesh: TerrainMesh,
        path: CameraPath,
        gpu: Option<render::GpuState<'static>>,
        canvas: web::HtmlCanvasElement,
        document: web::Document,
    ) -> Self {
        Self {
            space,
            mesh,
            path,
            rig: CameraRig::new(),
            tracker: ScrollTracker::new(),
            gpu,
            canvas,
            document,
            layout_dirty: Rc::new(Cell::new(true)),
            geometry: None,
            scroll_y: 0.0,
            last_instant: Instant::now(),
            time_accum: 0.0,
            active_card: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.time_accum += dt * WAVE_SPEED;

        // At most one layout read per frame, and only when something scrolled
        // or resized since the last one.
        if self.layout_dirty.replace(false) {
            if let Some(g) = dom::read_region_geometry(&self.document) {
                self.geometry = Some(g);
            }
            self.scroll_y = dom::scroll_offset_y();
            ui::apply_topo_parallax(&self.document, self.scroll_y);
        }

        let progress = self.tracker.sample(self.geometry.as_ref());

        self.mesh
            .displace(&self.space, self.time_accum, progress / 100.0, WAVE_AMPLITUDE);

        if let Some(target) = self.path.pose_at(progress) {
            let pose = self.rig.step(&target);
            let aspect = self.canvas.width().max(1) as f32 / self.canvas.height().max(1) as f32;
            let camera = Camera::from_pose(&pose, aspect);
            let parallax = mesh_parallax(progress);
            let view_proj =
                camera.view_proj() * self.space.model_matrix_with(parallax.offset, parallax.roll);

            if let Some(g) = &mut self.gpu {
                g.resize_if_needed(self.canvas.width(), self.canvas.height());
                if let Err(e) = g.render(&self.mesh.vertices, view_proj) {
                    log::error!("render error: {:?}", e);
                }
            }
        }

        let active = active_card_index(progress, JOURNEY_ANCHOR_COUNT);
        if self.active_card != Some(active) {
            self.active_card = Some(active);
            ui::mark_active_card(&self.document, active, JOURNEY_ANCHOR_COUNT);
        }
    }
}

/// Event listener that detaches itself when dropped.
struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl ListenerGuard {
    fn attach(
        target: &web::EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut()>,
        passive: bool,
    ) -> Self {
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        );
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// requestAnimationFrame exposed as the core loop scheduler.
struct RafScheduler<'a> {
    callback: Option<&'a Closure<dyn FnMut()>>,
}

impl TickScheduler for RafScheduler<'_> {
    fn schedule(&mut self) -> Option<i32> {
        let cb = self.callback?;
        web::window()?
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            let _ = w.cancel_animation_frame(handle);
        }
    }
}

/// Handle to the running animation loop.
///
/// Dropping it cancels the pending animation frame and detaches the scroll
/// and resize listeners; `cancel` is the explicit spelling of the same thing.
pub struct FrameLoop {
    state: Rc<RefCell<LoopState>>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    _listeners: Vec<ListenerGuard>,
}

impl FrameLoop {
    pub fn start(ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
        let state = Rc::new(RefCell::new(LoopState::new()));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let mut listeners = Vec::new();
        if let Some(window) = web::window() {
            let target: &web::EventTarget = window.as_ref();

            let dirty = ctx.borrow().layout_dirty.clone();
            listeners.push(ListenerGuard::attach(
                target,
                "scroll",
                Closure::wrap(Box::new(move || dirty.set(true)) as Box<dyn FnMut()>),
                true,
            ));

            let dirty = ctx.borrow().layout_dirty.clone();
            let canvas = ctx.borrow().canvas.clone();
            listeners.push(ListenerGuard::attach(
                target,
                "resize",
                Closure::wrap(Box::new(move || {
                    dom::sync_canvas_backing_size(&canvas);
                    dirty.set(true);
                }) as Box<dyn FnMut()>),
                false,
            ));
        }

        // The closure reaches its own container through a weak handle; the
        // only strong one lives in the FrameLoop, so dropping the loop frees
        // the closure and the FrameContext it captures.
        let loop_state = state.clone();
        let tick_weak = Rc::downgrade(&tick);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !loop_state.borrow_mut().begin_tick() {
                return;
            }
            ctx.borrow_mut().frame();
            let Some(tick) = tick_weak.upgrade() else {
                return;
            };
            let tick_ref = tick.borrow();
            let mut scheduler = RafScheduler {
                callback: tick_ref.as_ref(),
            };
            loop_state.borrow_mut().finish_tick(&mut scheduler);
        }) as Box<dyn FnMut()>));

        {
            let tick_ref = tick.borrow();
            let mut scheduler = RafScheduler {
                callback: tick_ref.as_ref(),
            };
            state.borrow_mut().start(&mut scheduler);
        }

        FrameLoop {
            state,
            _tick: tick,
            _listeners: listeners,
        }
    }

    /// Stop ticking and detach the listeners.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        // Revoking the pending frame needs no callback reference.
        let mut scheduler = RafScheduler { callback: None };
        self.state.borrow_mut().stop(&mut scheduler);
    }
}
