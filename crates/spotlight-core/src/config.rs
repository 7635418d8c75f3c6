use crate::error::ConfigError;

// Tuning shared by the tracker, easing loop and z-order counter.

// Inset from every viewport edge, in CSS pixels
pub const SPOT_MARGIN_PX: f64 = 8.0;

// Squared CSS-pixel displacement a press must exceed before it becomes a drag.
// Not rescaled by devicePixelRatio.
pub const DRAG_THRESHOLD_SQ: f64 = 20.0;

// Fraction of the remaining distance covered per frame
pub const EASE_IDLE: f64 = 0.16;
pub const EASE_DRAGGING: f64 = 0.24;

// Stacking layers: the darkness surface sits at 500, UI chrome at 900 and up
pub const DARKNESS_Z: i32 = 500;
pub const UI_Z_MIN: i32 = 900;
pub const DISCOVERABLE_Z_SEED: i32 = 600;

#[derive(Clone, Debug, PartialEq)]
pub struct SpotlightConfig {
    pub margin: f64,
    pub drag_threshold_sq: f64,
    pub ease_idle: f64,
    pub ease_dragging: f64,
    pub z_seed: i32,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            margin: SPOT_MARGIN_PX,
            drag_threshold_sq: DRAG_THRESHOLD_SQ,
            ease_idle: EASE_IDLE,
            ease_dragging: EASE_DRAGGING,
            z_seed: DISCOVERABLE_Z_SEED,
        }
    }
}

impl SpotlightConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ConfigError::Margin(self.margin));
        }
        if !self.drag_threshold_sq.is_finite() || self.drag_threshold_sq < 0.0 {
            return Err(ConfigError::DragThreshold(self.drag_threshold_sq));
        }
        check_ease("ease_idle", self.ease_idle)?;
        check_ease("ease_dragging", self.ease_dragging)?;
        Ok(())
    }

    /// Ease factor for the current interaction mode.
    #[inline]
    pub fn ease(&self, dragging: bool) -> f64 {
        if dragging {
            self.ease_dragging
        } else {
            self.ease_idle
        }
    }
}

fn check_ease(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Ease { name, value })
    }
}
