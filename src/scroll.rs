use crate::core::{scroll, GalleryEngine};
use crate::events::Listeners;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Progress of the pinned region: how far its top has scrolled above the
/// viewport top, over `distance_px`.
pub fn region_progress(region: &web::Element, distance_px: f32) -> Option<f32> {
    let top = region.get_bounding_client_rect().top() as f32;
    scroll::progress(-top, distance_px)
}

/// Feed scroll progress of `region` into the engine on every window scroll.
pub fn wire_scroll_progress(
    region: web::Element,
    distance_px: f32,
    engine: Rc<RefCell<GalleryEngine>>,
    listeners: &mut Listeners,
) {
    let Some(window) = web::window() else {
        return;
    };
    let sync = move || {
        if let Some(p) = region_progress(&region, distance_px) {
            engine.borrow_mut().set_scroll_progress(p);
        }
    };
    sync();
    listeners.add(window.as_ref(), "scroll", move |_: web::Event| sync());
}
