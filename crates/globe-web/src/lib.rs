#![cfg(target_arch = "wasm32")]
//! Canvas2D front-end for the tech globe.
//!
//! The globe is purely decorative: any failure to acquire the canvas or its
//! rendering context is logged and swallowed so the surrounding page renders
//! unaffected. The JS host calls [`mount`] to start the animation and holds
//! the returned [`GlobeHandle`] for teardown.

use globe_core::{FieldDriver, FieldParams, MarkerSet, ParticleField, Viewport};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod draw;
mod events;
mod frame;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web loaded");
    Ok(())
}

/// Owner of a mounted globe. Dropping it on the JS side without calling
/// `dispose` leaks the animation loop, so hosts should dispose on unmount.
#[wasm_bindgen]
pub struct GlobeHandle {
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    cancelled: Rc<Cell<bool>>,
    frame_loop: frame::FrameLoop,
    resize: Option<events::ResizeWiring>,
    pointer: Option<events::PointerWiring>,
}

#[wasm_bindgen]
impl GlobeHandle {
    /// Stop the animation, unhook every listener, and clear the canvas.
    /// Safe to call more than once; frames scheduled before disposal become
    /// no-ops.
    pub fn dispose(&mut self) {
        self.cancelled.set(true);
        self.frame_loop.cancel();
        if let Some(w) = self.resize.take() {
            w.unwire();
        }
        if let Some(w) = self.pointer.take() {
            w.unwire();
        }
        let mut ctx = self.frame_ctx.borrow_mut();
        ctx.driver.stop();
        ctx.clear();
        log::info!("globe disposed");
    }
}

/// Mount the globe onto the canvas with the given element id and start the
/// frame loop. Returns the teardown handle, or `None` when the canvas or its
/// context is unavailable. The globe is decorative, so failure only logs and
/// never throws into the host page.
#[wasm_bindgen]
pub fn mount(canvas_id: &str) -> Option<GlobeHandle> {
    match init(canvas_id) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("globe unavailable: {e:?}");
            None
        }
    }
}

fn init(canvas_id: &str) -> anyhow::Result<GlobeHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas_el = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{canvas_id}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let ctx2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{e:?}"))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    let viewport = Viewport::new(canvas.width() as f32, canvas.height() as f32)
        .ok_or_else(|| anyhow::anyhow!("zero-sized container"))?;

    let seed = js_sys::Date::now() as u64;
    let field = ParticleField::new(FieldParams::default(), seed)?;
    log::info!(
        "globe field: {} points, {} edges (seed {seed})",
        field.points().len(),
        field.edge_count()
    );

    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    let pointer = events::wire_pointer_handlers(&canvas, mouse.clone());
    let resize = events::wire_canvas_resize(&canvas);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        driver: FieldDriver::new(field),
        markers: MarkerSet::default_set(),
        viewport,
        canvas,
        ctx: ctx2d,
        mouse,
        last_instant: Instant::now(),
    }));
    let cancelled = Rc::new(Cell::new(false));
    let frame_loop = frame::start_loop(frame_ctx.clone(), cancelled.clone());

    Ok(GlobeHandle {
        frame_ctx,
        cancelled,
        frame_loop,
        resize: Some(resize),
        pointer: Some(pointer),
    })
}
