use crate::config::SpotlightConfig;
use crate::easing::EasingLoop;
use crate::error::ConfigError;
use crate::geometry::{clamp_to_viewport, Position, Viewport};
use crate::lights::Lights;
use crate::tracker::{Effects, PointerEnd, PointerId, PointerInput, PointerTracker, Transition};
use crate::zorder::ZOrder;

/// What a click landed on, resolved by the host via `closest()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickHit {
    pub on_toggle: bool,
    pub discoverable: bool,
}

/// All state of one spotlight stage. Instantiated once per page.
///
/// Event handlers are plain transitions: they update state and hand back the
/// document effects to apply. `tick` is called once per display frame by
/// whatever [`FrameScheduler`](crate::FrameScheduler) the host uses.
pub struct SpotlightController {
    config: SpotlightConfig,
    viewport: Viewport,
    tracker: PointerTracker,
    easing: EasingLoop,
    z_order: ZOrder,
    lights: Lights,
}

impl SpotlightController {
    pub fn new(viewport: Viewport) -> Self {
        Self::build(viewport, SpotlightConfig::default())
    }

    pub fn with_config(viewport: Viewport, config: SpotlightConfig) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            log::warn!("[spotlight] rejecting config: {}", e);
            return Err(e);
        }
        Ok(Self::build(viewport, config))
    }

    fn build(viewport: Viewport, config: SpotlightConfig) -> Self {
        let start = clamp_to_viewport(viewport.center(), viewport, config.margin);
        Self {
            tracker: PointerTracker::new(config.drag_threshold_sq),
            easing: EasingLoop::new(start),
            z_order: ZOrder::new(config.z_seed),
            lights: Lights::default(),
            viewport,
            config,
        }
    }

    /// Start from the lights state already present in the document.
    pub fn with_lights(mut self, lights: Lights) -> Self {
        self.lights = lights;
        self
    }

    #[inline]
    pub fn config(&self) -> &SpotlightConfig {
        &self.config
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn target(&self) -> Position {
        self.easing.target()
    }

    #[inline]
    pub fn current(&self) -> Position {
        self.easing.current()
    }

    #[inline]
    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    #[inline]
    pub fn lights(&self) -> Lights {
        self.lights
    }

    #[inline]
    pub fn top_z(&self) -> i32 {
        self.z_order.top()
    }

    pub fn on_pointer_down(&mut self, input: PointerInput) -> Effects {
        let t = self.tracker.press(input);
        self.apply(t)
    }

    pub fn on_pointer_move(&mut self, input: PointerInput) -> Effects {
        let t = self.tracker.motion(input);
        self.apply(t)
    }

    pub fn on_pointer_end(&mut self, id: PointerId, end: PointerEnd) -> Effects {
        let t = self.tracker.release(id, end);
        self.apply(t)
    }

    /// Returns the stacking depth to give the clicked discoverable element.
    pub fn on_click(&mut self, hit: ClickHit) -> Option<i32> {
        if hit.on_toggle || !hit.discoverable {
            return None;
        }
        match self.z_order.bring_to_front() {
            Some(z) => {
                log::debug!("[click] bring to front z={}", z);
                Some(z)
            }
            None => {
                log::warn!("[click] z-order exhausted at {}", self.z_order.top());
                None
            }
        }
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let target = self.easing.target();
        self.set_target(target);
    }

    pub fn toggle_lights(&mut self) -> Lights {
        self.lights.toggle();
        self.lights
    }

    /// Advance the easing loop by one frame; returns the position to publish.
    pub fn tick(&mut self) -> Position {
        let ease = self.config.ease(self.tracker.is_dragging());
        let current = self.easing.step(ease);
        clamp_to_viewport(current, self.viewport, self.config.margin)
    }

    fn set_target(&mut self, pos: Position) {
        let clamped = clamp_to_viewport(pos, self.viewport, self.config.margin);
        self.easing.set_target(clamped);
    }

    fn apply(&mut self, t: Transition) -> Effects {
        if let Some(pos) = t.target {
            self.set_target(pos);
        }
        t.effects
    }
}
