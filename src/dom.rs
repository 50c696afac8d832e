use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{} is not an HTML element: {:?}", id, e))
}

/// Creates `<tag class=...>` with an inline style.
pub fn create_styled<T: JsCast>(
    document: &web::Document,
    tag: &str,
    class: &str,
    style: &str,
) -> anyhow::Result<T> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?;
    el.set_class_name(class);
    _ = el.set_attribute("style", style);
    el.dyn_into::<T>()
        .map_err(|e| anyhow!("<{}> has unexpected type: {:?}", tag, e))
}

pub fn append(parent: &web::Element, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("append_child: {:?}", e))
}

#[inline]
pub fn set_style_property(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

/// Layout box in viewport coordinates, the space pointer events report in.
pub fn client_rect(el: &web::Element) -> avatar_core::ElementRect {
    let rect = el.get_bounding_client_rect();
    avatar_core::ElementRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}
