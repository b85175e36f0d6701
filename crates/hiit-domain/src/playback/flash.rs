use super::FLASH_DECAY_STEP;

/// Below this the level snaps to zero so float residue never keeps the overlay alive.
const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlashLevel(f64);

impl FlashLevel {
    pub fn new() -> Self {
        Self(0.0)
    }

    pub fn level(&self) -> f64 {
        self.0
    }

    pub fn trigger(&mut self) {
        self.0 = 1.0;
    }

    /// One decay step, floored at zero. Returns the new level.
    pub fn decay(&mut self) -> f64 {
        let next = self.0 - FLASH_DECAY_STEP;
        self.0 = if next < EPSILON { 0.0 } else { next };
        self.0
    }

    pub fn is_visible(&self) -> bool {
        self.0 > 0.0
    }
}
