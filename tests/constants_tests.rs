// Host-side tests for DOM names and layer constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use spotlight_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn layers_keep_discoverables_between_darkness_and_ui() {
    // Depths handed out start just above the darkness surface
    assert!(DISCOVERABLE_Z_SEED > DARKNESS_Z);
    // and start below the fixed UI chrome
    assert!(DISCOVERABLE_Z_SEED < UI_Z_MIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_constants_are_fractions() {
    assert!(EASE_IDLE > 0.0 && EASE_IDLE < 1.0);
    assert!(EASE_DRAGGING > 0.0 && EASE_DRAGGING < 1.0);
    // Dragging tracks the pointer more tightly than idle gliding
    assert!(EASE_DRAGGING > EASE_IDLE);
    assert!(SPOT_MARGIN_PX >= 0.0);
    assert!(DRAG_THRESHOLD_SQ > 0.0);
}

#[test]
fn default_config_matches_constants() {
    let cfg = SpotlightConfig::default();
    assert_eq!(cfg.margin, 8.0);
    assert_eq!(cfg.drag_threshold_sq, 20.0);
    assert_eq!(cfg.ease(false), 0.16);
    assert_eq!(cfg.ease(true), 0.24);
    assert_eq!(cfg.z_seed, 600);
    assert!(cfg.validate().is_ok());
}

#[test]
fn config_rejects_out_of_range_values() {
    let cfg = SpotlightConfig {
        ease_idle: 1.0,
        ..SpotlightConfig::default()
    };
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::Ease {
            name: "ease_idle",
            value: 1.0
        })
    );

    let cfg = SpotlightConfig {
        ease_dragging: 0.0,
        ..SpotlightConfig::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::Ease {
            name: "ease_dragging",
            ..
        })
    ));

    let cfg = SpotlightConfig {
        margin: -1.0,
        ..SpotlightConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::Margin(-1.0)));

    let cfg = SpotlightConfig {
        drag_threshold_sq: f64::NAN,
        ..SpotlightConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(ConfigError::DragThreshold(_))));

    let viewport = Viewport::new(800.0, 600.0);
    let cfg = SpotlightConfig {
        margin: f64::INFINITY,
        ..SpotlightConfig::default()
    };
    assert!(SpotlightController::with_config(viewport, cfg).is_err());
}

#[test]
fn anchors_default_to_page_markup() {
    let a = Anchors::default();
    assert_eq!(a.stage_id, "stage");
    assert_eq!(a.darkness_id, "darkness");
    assert_eq!(a.toggle_selector(), "#toggleLights");
    assert_eq!(a.discoverable_selector(), ".discoverable");
    assert_eq!(a.photo_selector(), ".photo");
    assert_eq!(a.dragging_class, "dragging");
    assert_eq!(a.lights_on_class, "lights-on");
    assert_eq!(a.missing_class, "missing");
}

#[test]
fn px_formats_custom_property_values() {
    assert_eq!(px(100.0), "100px");
    assert_eq!(px(12.5), "12.5px");
    assert_eq!(SPOT_X_PROP, "--spot-x");
    assert_eq!(SPOT_Y_PROP, "--spot-y");
}
