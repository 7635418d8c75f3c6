use crate::constants::{px, SPOT_X_PROP, SPOT_Y_PROP};
use glam::DVec2;
use spotlight_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn viewport(window: &web::Window) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(w, h)
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    add_listener(target, event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn listen_pointer(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
    add_listener(target, event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn add_listener(target: &web::EventTarget, event: &str, f: &js_sys::Function) {
    if let Err(e) = target.add_event_listener_with_callback(event, f) {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
}

/// Nearest ancestor-or-self of the event target matching `selector`.
pub fn closest_from_event(ev: &web::Event, selector: &str) -> Option<web::Element> {
    let el = ev.target()?.dyn_into::<web::Element>().ok()?;
    el.closest(selector).ok().flatten()
}

pub fn set_body_class(document: &web::Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        _ = body.class_list().toggle_with_force(class, on);
    }
}

#[inline]
pub fn body_has_class(document: &web::Document, class: &str) -> bool {
    document
        .body()
        .map(|b| b.class_list().contains(class))
        .unwrap_or(false)
}

pub fn set_spot_position(darkness: &web::HtmlElement, pos: DVec2) {
    let style = darkness.style();
    _ = style.set_property(SPOT_X_PROP, &px(pos.x));
    _ = style.set_property(SPOT_Y_PROP, &px(pos.y));
}

pub fn set_z_index(el: &web::Element, z: i32) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property("z-index", &z.to_string());
    }
}
