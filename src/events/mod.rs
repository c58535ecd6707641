pub mod keyboard;
pub mod pointer;

pub use keyboard::*;
pub use pointer::*;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Every DOM listener the gallery registered, kept so teardown can detach them.
#[derive(Default)]
pub struct Listeners {
    attached: Vec<Listener>,
}

impl Listeners {
    /// Attach `handler` for `kind` events on `target`. Events that are not an
    /// `E` are ignored.
    pub fn add<E>(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
            Ok(()) => self.attached.push(Listener {
                target: target.clone(),
                kind,
                closure,
            }),
            Err(e) => log::warn!("[events] failed to attach {}: {:?}", kind, e),
        }
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    /// Detach and drop every registered closure.
    pub fn detach_all(&mut self) {
        for l in self.attached.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.kind, l.closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.detach_all();
    }
}
