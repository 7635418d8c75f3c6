use crate::dom;
use spotlight_core::{FrameScheduler, SpotlightController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Self-rescheduling `requestAnimationFrame` loop. Runs until the page unloads.
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn run(&self, mut frame: Box<dyn FnMut()>) {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame();
            request_frame(&tick_clone);
        }) as Box<dyn FnMut()>));
        request_frame(&tick);
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(
    scheduler: &impl FrameScheduler,
    controller: Rc<RefCell<SpotlightController>>,
    darkness: web::HtmlElement,
) {
    dom::set_spot_position(&darkness, controller.borrow().current());
    scheduler.run(Box::new(move || {
        let pos = controller.borrow_mut().tick();
        dom::set_spot_position(&darkness, pos);
    }));
}
