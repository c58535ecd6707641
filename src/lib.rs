#![cfg(target_arch = "wasm32")]
use crate::core::{Config, GalleryEngine, ItemContent};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod scroll;

use constants::*;
use dom::GalleryDom;

/// Everything a mounted gallery owns.
struct Mounted {
    engine: Rc<RefCell<GalleryEngine>>,
    dom: Rc<RefCell<GalleryDom>>,
    listeners: events::Listeners,
    frame_loop: frame::FrameLoop,
}

impl Mounted {
    fn dispose(mut self) {
        self.frame_loop.stop();
        self.listeners.detach_all();
        self.dom.borrow_mut().clear();
        log::info!("[gallery] disposed");
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

fn wire_resize(engine: &Rc<RefCell<GalleryEngine>>, listeners: &mut events::Listeners) {
    let Some(window) = web::window() else {
        return;
    };
    let engine = engine.clone();
    listeners.add(window.as_ref(), "resize", move |_: web::Event| {
        let size = dom::viewport_size();
        engine.borrow_mut().resize(size.x, size.y);
    });
}

fn collection() -> Vec<ItemContent> {
    COLLECTION
        .iter()
        .map(|(src, title)| ItemContent {
            image_src: (*src).to_string(),
            title: (*title).to_string(),
        })
        .collect()
}

fn intro_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    // Missing containers mean this page doesn't host a gallery: bail quietly.
    let Some(mut gallery_dom) = GalleryDom::find(
        &document,
        [GALLERY_ID, CONTAINER_ID, TITLE_CONTAINER_ID, AFFORDANCE_ID],
    ) else {
        log::warn!("[gallery] containers not found; not mounting");
        return Ok(());
    };

    let viewport = dom::viewport_size();
    let mut engine = GalleryEngine::new(Config::default(), &collection(), viewport)?;
    engine.start_intro(intro_seed());

    let mut listeners = events::Listeners::default();
    gallery_dom.build_cards(engine.items(), &mut listeners)?;

    let engine = Rc::new(RefCell::new(engine));
    let gallery_dom = Rc::new(RefCell::new(gallery_dom));

    wire_resize(&engine, &mut listeners);
    events::wire_global_keydown(&document, engine.clone(), &mut listeners);
    events::wire_input_handlers(
        &events::InputWiring {
            document: document.clone(),
            engine: engine.clone(),
            dom: gallery_dom.clone(),
        },
        &mut listeners,
    );
    if let Some(region) = document.get_element_by_id(SCROLL_REGION_ID) {
        scroll::wire_scroll_progress(region, SCROLL_DISTANCE_PX, engine.clone(), &mut listeners);
    }
    log::info!("[gallery] wired {} listeners", listeners.len());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine: engine.clone(),
        dom: gallery_dom.clone(),
        last_instant: Instant::now(),
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    let previous = MOUNTED.with(|m| {
        m.borrow_mut().replace(Mounted {
            engine,
            dom: gallery_dom,
            listeners,
            frame_loop,
        })
    });
    if let Some(old) = previous {
        old.dispose();
    }
    Ok(())
}

fn with_engine<R>(f: impl FnOnce(&mut GalleryEngine) -> R) -> Option<R> {
    MOUNTED.with(|m| m.borrow().as_ref().map(|g| f(&mut g.engine.borrow_mut())))
}

/// Tear down the mounted gallery: stop the frame loop, detach every listener
/// and remove the cards.
#[wasm_bindgen]
pub fn dispose_gallery() {
    if let Some(g) = MOUNTED.with(|m| m.borrow_mut().take()) {
        g.dispose();
    }
}

/// Focus card `index` as if it had been clicked. Returns false if dropped.
#[wasm_bindgen]
pub fn focus_card(index: usize) -> bool {
    with_engine(|e| e.focus(index)).unwrap_or(false)
}

#[wasm_bindgen]
pub fn reset_gallery() -> bool {
    with_engine(|e| e.reset()).unwrap_or(false)
}

/// Drive scroll zoom from host code (e.g. a custom scroll container).
#[wasm_bindgen]
pub fn set_scroll_progress(progress: f32) {
    with_engine(|e| e.set_scroll_progress(progress));
}
