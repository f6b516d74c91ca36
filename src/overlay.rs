use crate::constants::{CURSOR_HOVER_CLASS, CURSOR_ID};
use backdrop_core::{cursor_transform, CursorVariant};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn find_cursor(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(CURSOR_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn move_to(cursor: &web::HtmlElement, pos: Vec2) {
    _ = cursor
        .style()
        .set_property("transform", &cursor_transform(pos));
}

pub fn apply_variant(cursor: &web::HtmlElement, variant: CursorVariant) {
    let cl = cursor.class_list();
    match variant {
        CursorVariant::Hover => {
            _ = cl.add_1(CURSOR_HOVER_CLASS);
        }
        CursorVariant::Default => {
            _ = cl.remove_1(CURSOR_HOVER_CLASS);
        }
    }
    _ = cursor.set_attribute("data-variant", variant.as_str());
}
