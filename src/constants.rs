// DOM anchors and class names shared with the page's markup and stylesheet.

pub const STAGE_ID: &str = "stage";
pub const DARKNESS_ID: &str = "darkness";
pub const TOGGLE_ID: &str = "toggleLights";

pub const DISCOVERABLE_CLASS: &str = "discoverable";
pub const PHOTO_CLASS: &str = "photo";
pub const MISSING_CLASS: &str = "missing";
pub const DRAGGING_CLASS: &str = "dragging";
pub const LIGHTS_ON_CLASS: &str = "lights-on";

// Custom properties read by the radial reveal in CSS
pub const SPOT_X_PROP: &str = "--spot-x";
pub const SPOT_Y_PROP: &str = "--spot-y";

pub const PHOTO_LABEL_ATTR: &str = "data-label";

#[derive(Clone, Debug)]
pub struct Anchors {
    pub stage_id: String,
    pub darkness_id: String,
    pub toggle_id: String,
    pub discoverable_class: String,
    pub photo_class: String,
    pub missing_class: String,
    pub dragging_class: String,
    pub lights_on_class: String,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            stage_id: STAGE_ID.to_string(),
            darkness_id: DARKNESS_ID.to_string(),
            toggle_id: TOGGLE_ID.to_string(),
            discoverable_class: DISCOVERABLE_CLASS.to_string(),
            photo_class: PHOTO_CLASS.to_string(),
            missing_class: MISSING_CLASS.to_string(),
            dragging_class: DRAGGING_CLASS.to_string(),
            lights_on_class: LIGHTS_ON_CLASS.to_string(),
        }
    }
}

impl Anchors {
    #[inline]
    pub fn toggle_selector(&self) -> String {
        format!("#{}", self.toggle_id)
    }

    #[inline]
    pub fn discoverable_selector(&self) -> String {
        format!(".{}", self.discoverable_class)
    }

    #[inline]
    pub fn photo_selector(&self) -> String {
        format!(".{}", self.photo_class)
    }
}

/// Value for a pixel-valued custom property.
#[inline]
pub fn px(v: f64) -> String {
    format!("{}px", v)
}
