use super::Listeners;
use crate::core::GalleryEngine;
use crate::dom::GalleryDom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub engine: Rc<RefCell<GalleryEngine>>,
    pub dom: Rc<RefCell<GalleryDom>>,
}

pub fn wire_input_handlers(w: &InputWiring, listeners: &mut Listeners) {
    wire_pointermove(w, listeners);
    wire_pointerout(w, listeners);
    wire_card_clicks(w, listeners);
    wire_background_click(w, listeners);
}

fn wire_pointermove(w: &InputWiring, listeners: &mut Listeners) {
    let w2 = w.clone();
    listeners.add(w.document.as_ref(), "pointermove", move |ev: web::PointerEvent| {
        if !w2.engine.borrow().pointer_effects_active() {
            return;
        }
        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let centers = w2.dom.borrow().card_centers();
        w2.engine.borrow_mut().pointer_move(pointer, &centers);
    });
}

/// True when the pointer went out of the page rather than onto another element.
fn left_document(ev: &web::PointerEvent) -> bool {
    match ev.related_target() {
        None => true,
        Some(t) => t
            .dyn_ref::<web::Node>()
            .map(|n| n.node_name() == "HTML")
            .unwrap_or(false),
    }
}

fn wire_pointerout(w: &InputWiring, listeners: &mut Listeners) {
    let w2 = w.clone();
    listeners.add(w.document.as_ref(), "pointerout", move |ev: web::PointerEvent| {
        if left_document(&ev) {
            w2.engine.borrow_mut().pointer_leave();
        }
    });
}

fn wire_card_clicks(w: &InputWiring, listeners: &mut Listeners) {
    let cards = w.dom.borrow().cards.clone();
    for (i, card) in cards.iter().enumerate() {
        let w2 = w.clone();
        listeners.add(card.as_ref(), "click", move |ev: web::MouseEvent| {
            if w2.engine.borrow_mut().click_item(i) {
                ev.stop_propagation();
                log::info!("[click] card {}", i);
            }
        });
    }
}

fn wire_background_click(w: &InputWiring, listeners: &mut Listeners) {
    let w2 = w.clone();
    listeners.add(w.document.as_ref(), "click", move |_: web::MouseEvent| {
        w2.engine.borrow_mut().click_background();
    });
}
