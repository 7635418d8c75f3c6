use crate::geometry::Position;

/// Move `current` a fraction `ease` of the way toward `target`.
///
/// With `ease` in (0, 1) the step never overshoots; the remaining distance
/// shrinks by `(1 - ease)` per call.
#[inline]
pub fn ease_toward(current: Position, target: Position, ease: f64) -> Position {
    current + (target - current) * ease
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EasingLoop {
    target: Position,
    current: Position,
}

impl EasingLoop {
    pub fn new(start: Position) -> Self {
        Self {
            target: start,
            current: start,
        }
    }

    #[inline]
    pub fn target(&self) -> Position {
        self.target
    }

    #[inline]
    pub fn current(&self) -> Position {
        self.current
    }

    #[inline]
    pub fn set_target(&mut self, target: Position) {
        self.target = target;
    }

    /// One frame of easing; returns the new current position.
    pub fn step(&mut self, ease: f64) -> Position {
        self.current = ease_toward(self.current, self.target, ease);
        self.current
    }
}
