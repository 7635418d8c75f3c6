/// Hands out ever-increasing stacking depths for click-to-front.
///
/// Depths are never reissued: once `i32::MAX` has been handed out the counter
/// is exhausted and `bring_to_front` returns `None`.
#[derive(Clone, Copy, Debug)]
pub struct ZOrder {
    top: i32,
    exhausted: bool,
}

impl ZOrder {
    pub fn new(seed: i32) -> Self {
        Self {
            top: seed,
            exhausted: seed == i32::MAX,
        }
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn bring_to_front(&mut self) -> Option<i32> {
        if self.exhausted {
            return None;
        }
        self.top += 1;
        self.exhausted = self.top == i32::MAX;
        Some(self.top)
    }
}
