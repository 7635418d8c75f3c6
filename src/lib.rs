#![cfg(target_arch = "wasm32")]
use crate::constants::Anchors;
use spotlight_core::{Lights, SpotlightController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod photos;

fn wire_viewport_resize(window: &web::Window, controller: &Rc<RefCell<SpotlightController>>) {
    let controller = controller.clone();
    let window_resize = window.clone();
    dom::listen(window, "resize", move |_ev| {
        controller
            .borrow_mut()
            .on_resize(dom::viewport(&window_resize));
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spotlight-web starting");

    let Some(document) = dom::window_document() else {
        log::warn!("no document; spotlight disabled");
        return Ok(());
    };
    // Wait for the markup so the anchors can be found
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_ev| run());
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = init(Anchors::default()) {
        log::warn!("spotlight not started: {:?}", e);
    }
}

fn init(anchors: Anchors) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let stage = document
        .get_element_by_id(&anchors.stage_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", anchors.stage_id))?;
    let darkness: web::HtmlElement = document
        .get_element_by_id(&anchors.darkness_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", anchors.darkness_id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    photos::setup_fallback_labels(&document, &anchors);

    let lights = Lights::new(dom::body_has_class(&document, &anchors.lights_on_class));
    let controller = Rc::new(RefCell::new(
        SpotlightController::new(dom::viewport(&window)).with_lights(lights),
    ));
    {
        let c = controller.borrow();
        let vp = c.viewport();
        log::info!(
            "[spotlight] viewport={}x{} start=({:.1},{:.1}) lights={}",
            vp.width,
            vp.height,
            c.target().x,
            c.target().y,
            c.lights().is_on()
        );
    }

    let anchors = Rc::new(anchors);
    frame::start_loop(&frame::RafScheduler, controller.clone(), darkness);

    events::wire_stage_handlers(events::StageWiring {
        document: document.clone(),
        stage,
        anchors: anchors.clone(),
        controller: controller.clone(),
    });
    events::wire_lights_toggle(&document, &anchors, &controller);
    wire_viewport_resize(&window, &controller);

    Ok(())
}
