use crate::constants::MAX_FRAME_SECS;
use crate::core::GalleryEngine;
use crate::dom::GalleryDom;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<GalleryEngine>>,
    pub dom: Rc<RefCell<GalleryDom>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_SECS);

        self.engine.borrow_mut().tick(dt_sec);
        self.dom.borrow_mut().apply(&self.engine.borrow());
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running requestAnimationFrame loop.
pub struct FrameLoop {
    tick: TickClosure,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Cancel the pending frame and drop the tick closure, which also breaks
    /// its self-reference.
    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &TickClosure, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        pending.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &pending_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &pending);
    FrameLoop { tick, pending }
}
