use glam::DVec2;

/// A point in viewport (CSS pixel) space.
pub type Position = DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Position {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Clamp `pos` into the viewport inset by `margin` on every side.
///
/// Viewport size can change between calls, so nothing here is cached. An axis
/// narrower than `2 * margin` collapses to its midpoint.
#[inline]
pub fn clamp_to_viewport(pos: Position, viewport: Viewport, margin: f64) -> Position {
    DVec2::new(
        clamp_axis(pos.x, viewport.width, margin),
        clamp_axis(pos.y, viewport.height, margin),
    )
}

#[inline]
fn clamp_axis(v: f64, extent: f64, margin: f64) -> f64 {
    let lo = margin;
    let hi = extent - margin;
    if hi < lo || hi.is_nan() {
        return (extent * 0.5).max(0.0);
    }
    v.clamp(lo, hi)
}
