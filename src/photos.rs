use crate::constants::{Anchors, PHOTO_LABEL_ATTR};
use crate::dom;
use spotlight_core::photo_label;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Label every photo with its file name and mark it `missing` if its image
/// fails to load, so the stylesheet can show the name instead of a broken
/// image icon. Failed loads are not retried.
pub fn setup_fallback_labels(document: &web::Document, anchors: &Anchors) {
    let photos = match document.query_selector_all(&anchors.photo_selector()) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[photos] query failed: {:?}", e);
            return;
        }
    };
    let mut labelled = 0u32;
    for i in 0..photos.length() {
        let Some(fig) = photos.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Ok(Some(img)) = fig.query_selector("img") else {
            continue;
        };

        let label = photo_label(img.get_attribute("src").as_deref());
        _ = fig.set_attribute(PHOTO_LABEL_ATTR, &label);
        labelled += 1;

        let missing = anchors.missing_class.clone();
        dom::listen(&img, "error", move |_ev| {
            log::info!("[photos] image failed to load: {}", label);
            _ = fig.class_list().add_1(&missing);
        });
    }
    log::info!("[photos] labelled {} photo(s)", labelled);
}
