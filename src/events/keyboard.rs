use super::Listeners;
use crate::core::input::is_cancel_key;
use crate::core::GalleryEngine;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, engine: &Rc<RefCell<GalleryEngine>>) {
    let key = ev.key();
    if is_cancel_key(&key) {
        log::debug!("[keys] cancel");
        engine.borrow_mut().cancel();
    }
}

pub fn wire_global_keydown(
    document: &web::Document,
    engine: Rc<RefCell<GalleryEngine>>,
    listeners: &mut Listeners,
) {
    listeners.add(document.as_ref(), "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &engine);
    });
}
