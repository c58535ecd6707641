use crate::constants::TITLE_WORD_CLASS;
use crate::core::title::TitleLabel;
use crate::core::Affordance;
use crate::dom::set_style;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(el: &web::HtmlElement) {
    _ = el.class_list().remove_1("hidden");
    _ = el.set_attribute("aria-hidden", "false");
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    _ = el.class_list().add_1("hidden");
    _ = el.set_attribute("aria-hidden", "true");
}

#[inline]
pub fn is_hidden(el: &web::HtmlElement) -> bool {
    el.class_list().contains("hidden")
}

/// Render the "click to view" hint; fully transparent means hidden.
pub fn apply_affordance(el: &web::HtmlElement, a: Affordance) {
    set_style(el, "opacity", &format!("{:.3}", a.opacity));
    set_style(el, "transform", &format!("translateY({:.2}px)", a.y));
    let visible = a.opacity > 0.001;
    if visible && is_hidden(el) {
        show(el);
    } else if !visible && !is_hidden(el) {
        hide(el);
    }
}

/// The `<p>` holding the current title, one inline-block span per word.
#[derive(Default)]
pub struct TitleNodes {
    paragraph: Option<web::HtmlElement>,
    words: Vec<web::HtmlElement>,
    revision: u32,
}

impl TitleNodes {
    /// Rebuild the spans when the label's words changed, then position each word.
    pub fn sync(&mut self, document: &web::Document, container: &web::HtmlElement, title: &TitleLabel) {
        if title.revision() != self.revision {
            self.clear();
            self.revision = title.revision();
            if !title.words().is_empty() {
                if let Err(e) = self.build(document, container, title.words()) {
                    log::error!("[title] build error: {:?}", e);
                    self.clear();
                }
            }
        }
        for (span, offset) in self.words.iter().zip(title.offsets()) {
            set_style(span, "transform", &format!("translateY({:.2}%)", offset));
        }
    }

    fn build(
        &mut self,
        document: &web::Document,
        container: &web::HtmlElement,
        words: &[String],
    ) -> Result<(), wasm_bindgen::JsValue> {
        let p: web::HtmlElement = document.create_element("p")?.dyn_into()?;
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                p.append_with_str_1(" ")?;
            }
            let span: web::HtmlElement = document.create_element("span")?.dyn_into()?;
            span.set_class_name(TITLE_WORD_CLASS);
            span.set_text_content(Some(word));
            set_style(&span, "display", "inline-block");
            p.append_child(&span)?;
            self.words.push(span);
        }
        container.append_child(&p)?;
        self.paragraph = Some(p);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.words.clear();
        if let Some(p) = self.paragraph.take() {
            p.remove();
        }
    }
}
