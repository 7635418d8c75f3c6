use crate::constants::Anchors;
use crate::dom;
use spotlight_core::{Lights, SpotlightController};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn sync_toggle(toggle: &web::Element, lights: Lights) {
    _ = toggle.set_attribute("aria-pressed", lights.aria_pressed());
    toggle.set_text_content(Some(lights.label()));
}

/// Wire the optional lights toggle; a page without one simply stays dark.
pub fn wire_lights_toggle(
    document: &web::Document,
    anchors: &Rc<Anchors>,
    controller: &Rc<RefCell<SpotlightController>>,
) {
    let Some(toggle) = document.get_element_by_id(&anchors.toggle_id) else {
        log::info!("[lights] no #{} control", anchors.toggle_id);
        return;
    };
    sync_toggle(&toggle, controller.borrow().lights());

    let doc = document.clone();
    let anchors = anchors.clone();
    let controller = controller.clone();
    let toggle_for_click = toggle.clone();
    dom::listen(&toggle, "click", move |_ev| {
        let lights = controller.borrow_mut().toggle_lights();
        dom::set_body_class(&doc, &anchors.lights_on_class, lights.is_on());
        sync_toggle(&toggle_for_click, lights);
    });
}
