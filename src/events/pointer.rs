use crate::constants::Anchors;
use crate::dom;
use spotlight_core::{
    ClickHit, Effect, Effects, PointerEnd, PointerId, PointerInput, SpotlightController,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct StageWiring {
    pub document: web::Document,
    pub stage: web::Element,
    pub anchors: Rc<Anchors>,
    pub controller: Rc<RefCell<SpotlightController>>,
}

pub fn wire_stage_handlers(w: StageWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointer_end(&w, "pointerup", PointerEnd::Up);
    wire_pointer_end(&w, "pointercancel", PointerEnd::Cancel);
    wire_pointer_end(&w, "lostpointercapture", PointerEnd::LostCapture);
    wire_click(&w);
}

fn pointer_input(ev: &web::PointerEvent, anchors: &Anchors) -> PointerInput {
    let input = PointerInput::new(ev.pointer_id(), ev.client_x() as f64, ev.client_y() as f64);
    if dom::closest_from_event(ev, &anchors.toggle_selector()).is_some() {
        input.on_toggle()
    } else {
        input
    }
}

fn apply_effects(w: &StageWiring, effects: Effects) {
    for effect in effects {
        match effect {
            Effect::SetDragging(on) => {
                dom::set_body_class(&w.document, &w.anchors.dragging_class, on);
            }
            Effect::CapturePointer(PointerId(id)) => {
                if let Err(e) = w.stage.set_pointer_capture(id) {
                    log::warn!("[pointer] capture failed for {}: {:?}", id, e);
                }
            }
        }
    }
}

fn wire_pointerdown(w: &StageWiring) {
    let w2 = w.clone();
    dom::listen_pointer(&w.stage, "pointerdown", move |ev| {
        let input = pointer_input(&ev, &w2.anchors);
        let effects = w2.controller.borrow_mut().on_pointer_down(input);
        apply_effects(&w2, effects);
    });
}

fn wire_pointermove(w: &StageWiring) {
    let w2 = w.clone();
    dom::listen_pointer(&w.stage, "pointermove", move |ev| {
        let input = pointer_input(&ev, &w2.anchors);
        let effects = w2.controller.borrow_mut().on_pointer_move(input);
        apply_effects(&w2, effects);
    });
}

fn wire_pointer_end(w: &StageWiring, event: &str, end: PointerEnd) {
    let w2 = w.clone();
    dom::listen_pointer(&w.stage, event, move |ev| {
        let effects = w2
            .controller
            .borrow_mut()
            .on_pointer_end(PointerId(ev.pointer_id()), end);
        apply_effects(&w2, effects);
    });
}

fn wire_click(w: &StageWiring) {
    let w2 = w.clone();
    dom::listen(&w.stage, "click", move |ev| {
        let on_toggle = dom::closest_from_event(&ev, &w2.anchors.toggle_selector()).is_some();
        let discoverable = if on_toggle {
            None
        } else {
            dom::closest_from_event(&ev, &w2.anchors.discoverable_selector())
        };
        let hit = ClickHit {
            on_toggle,
            discoverable: discoverable.is_some(),
        };
        let z = w2.controller.borrow_mut().on_click(hit);
        if let (Some(el), Some(z)) = (discoverable, z) {
            dom::set_z_index(&el, z);
        }
    });
}
