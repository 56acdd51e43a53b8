//! Listener wiring. Each wiring keeps its closures alive and knows how to
//! unhook itself, so `GlobeHandle::dispose` leaves nothing registered.

use crate::dom;
use crate::input::{self, MouseState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ResizeWiring {
    closure: Closure<dyn FnMut()>,
}

impl ResizeWiring {
    pub fn unwire(&self) {
        if let Some(window) = web::window() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) -> ResizeWiring {
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    ResizeWiring { closure }
}

pub struct PointerWiring {
    target: web::HtmlCanvasElement,
    on_move: Closure<dyn FnMut(web::PointerEvent)>,
    on_leave: Closure<dyn FnMut(web::PointerEvent)>,
}

impl PointerWiring {
    pub fn unwire(&self) {
        let _ = self.target.remove_event_listener_with_callback(
            "pointermove",
            self.on_move.as_ref().unchecked_ref(),
        );
        let _ = self.target.remove_event_listener_with_callback(
            "pointerleave",
            self.on_leave.as_ref().unchecked_ref(),
        );
    }
}

pub fn wire_pointer_handlers(
    canvas: &web::HtmlCanvasElement,
    mouse: Rc<RefCell<MouseState>>,
) -> PointerWiring {
    let canvas_move = canvas.clone();
    let mouse_move = mouse.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = input::pointer_canvas_px(&ev, &canvas_move);
        let mut m = mouse_move.borrow_mut();
        m.x = x;
        m.y = y;
        m.inside = true;
    }) as Box<dyn FnMut(web::PointerEvent)>);

    let on_leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        mouse.borrow_mut().inside = false;
    }) as Box<dyn FnMut(web::PointerEvent)>);

    let _ = canvas
        .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
    let _ = canvas
        .add_event_listener_with_callback("pointerleave", on_leave.as_ref().unchecked_ref());
    PointerWiring {
        target: canvas.clone(),
        on_move,
        on_leave,
    }
}
