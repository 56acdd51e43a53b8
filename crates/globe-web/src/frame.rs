use crate::draw;
use crate::input::MouseState;
use globe_core::{FieldDriver, MarkerSet, Viewport};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: FieldDriver,
    pub markers: MarkerSet,
    pub viewport: Viewport,

    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub mouse: Rc<RefCell<MouseState>>,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Track the canvas backing size; zero-sized layouts keep the old
        // viewport and the field itself never reseeds.
        self.viewport
            .resize(self.canvas.width() as f32, self.canvas.height() as f32);

        self.driver.advance(dt);

        let radius = self.driver.field.params.radius;
        let hovered = {
            let m = self.mouse.borrow();
            m.inside
                .then(|| {
                    self.markers.pick_projected(
                        &self.viewport,
                        self.driver.angle(),
                        radius,
                        m.x,
                        m.y,
                    )
                })
                .flatten()
        };
        self.markers.set_hovered(hovered);
        self.markers.update_hover(dt);

        draw::draw(
            &self.ctx,
            &self.viewport,
            &self.driver.field,
            &self.markers,
            self.driver.angle(),
        );
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }
}

/// The running requestAnimationFrame chain: the callback closure plus the id
/// of the registration currently pending with the browser.
pub struct FrameLoop {
    raf_id: Rc<Cell<i32>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    /// Cancel the pending registration and drop the callback closure, which
    /// also breaks the closure's cycle on its own `Rc`. Idempotent.
    pub fn cancel(&self) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.raf_id.get());
        }
        self.tick.borrow_mut().take();
    }
}

/// Drive `frame` from requestAnimationFrame until cancelled. Each reschedule
/// records its registration id so `FrameLoop::cancel` leaves nothing pending.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, cancelled: Rc<Cell<bool>>) -> FrameLoop {
    let raf_id = Rc::new(Cell::new(0));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let raf_id_tick = raf_id.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    raf_id_tick.set(id);
                }
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_id.set(id);
            }
        }
    }
    FrameLoop { raf_id, tick }
}
