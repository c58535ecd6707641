use crate::constants::{CARD_CLASS, CARD_PERSPECTIVE_PX};
use crate::core::{GalleryEngine, GalleryTransform, Item, ItemPose};
use crate::events::Listeners;
use crate::overlay::{self, TitleNodes};
use glam::{Vec2, Vec3};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlElement>()
        .ok()
}

/// Current window inner size in CSS px.
pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(width as f32, height as f32)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn rect_center(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        (rect.left() + rect.width() / 2.0) as f32,
        (rect.top() + rect.height() / 2.0) as f32,
    )
}

pub fn card_transform(pose: &ItemPose) -> String {
    format!(
        "translate(-50%, -50%) perspective({}px) translate({:.2}px, {:.2}px) rotate({:.2}deg) rotateY({:.2}deg) scale({:.4})",
        CARD_PERSPECTIVE_PX, pose.x, pose.y, pose.rotation_z, pose.rotation_y, pose.scale
    )
}

pub fn gallery_transform(g: &GalleryTransform) -> String {
    format!(
        "translate({:.2}px, {:.2}px) rotate({:.3}deg) scale({:.4})",
        g.x, g.y, g.rotation, g.scale
    )
}

pub fn container_transform(tilt: Vec3) -> String {
    format!(
        "rotateX({:.3}deg) rotateY({:.3}deg) rotate({:.3}deg)",
        tilt.x, tilt.y, tilt.z
    )
}

/// DOM nodes the engine's state is rendered into, indexed like the engine's items.
pub struct GalleryDom {
    pub document: web::Document,
    pub gallery: web::HtmlElement,
    pub container: web::HtmlElement,
    pub title_container: web::HtmlElement,
    pub affordance: web::HtmlElement,
    pub cards: Vec<web::HtmlElement>,
    title: TitleNodes,
}

impl GalleryDom {
    /// Look up the required containers; `None` if any is missing.
    pub fn find(document: &web::Document, ids: [&str; 4]) -> Option<Self> {
        let [gallery, container, title, affordance] = ids;
        let lookup = |id: &str| {
            let el = html_by_id(document, id);
            if el.is_none() {
                log::warn!("[dom] missing #{}", id);
            }
            el
        };
        Some(Self {
            document: document.clone(),
            gallery: lookup(gallery)?,
            container: lookup(container)?,
            title_container: lookup(title)?,
            affordance: lookup(affordance)?,
            cards: Vec::new(),
            title: TitleNodes::default(),
        })
    }

    /// Create one card per item. Images stay transparent until they load, so
    /// a broken source leaves an empty card without affecting the others.
    pub fn build_cards(&mut self, items: &[Item], listeners: &mut Listeners) -> anyhow::Result<()> {
        let make = |tag: &str| {
            self.document
                .create_element(tag)
                .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))
        };
        let mut cards = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let card: web::HtmlElement = make("div")?
                .dyn_into()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            card.set_class_name(CARD_CLASS);
            _ = card.set_attribute("data-index", &i.to_string());
            _ = card.set_attribute("data-title", &item.content.title);

            let img: web::HtmlImageElement = make("img")?
                .dyn_into()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            img.set_alt(&item.content.title);
            set_style(&img, "opacity", "0");
            let img_loaded = img.clone();
            listeners.add(img.as_ref(), "load", move |_: web::Event| {
                set_style(&img_loaded, "opacity", "1");
            });
            img.set_src(&item.content.image_src);

            card.append_child(&img)
                .map_err(|e| anyhow::anyhow!("append img: {:?}", e))?;
            self.gallery
                .append_child(&card)
                .map_err(|e| anyhow::anyhow!("append card: {:?}", e))?;
            set_style(&card, "transform", &card_transform(&item.pose));
            set_style(&card, "opacity", &format!("{:.3}", item.pose.opacity));
            cards.push(card);
        }
        self.cards = cards;
        Ok(())
    }

    pub fn card_centers(&self) -> Vec<Vec2> {
        self.cards.iter().map(|c| rect_center(c)).collect()
    }

    /// Write the engine's current frame into the DOM.
    pub fn apply(&mut self, engine: &GalleryEngine) {
        set_style(
            &self.container,
            "transform",
            &container_transform(engine.container_tilt()),
        );
        set_style(&self.gallery, "transform", &gallery_transform(&engine.gallery()));
        for (card, item) in self.cards.iter().zip(engine.items()) {
            set_style(card, "transform", &card_transform(&item.pose));
            set_style(card, "opacity", &format!("{:.3}", item.pose.opacity));
        }
        overlay::apply_affordance(&self.affordance, engine.affordance());
        self.title
            .sync(&self.document, &self.title_container, engine.title());
    }

    /// Remove every node the gallery created.
    pub fn clear(&mut self) {
        for card in self.cards.drain(..) {
            card.remove();
        }
        self.title.clear();
    }
}
