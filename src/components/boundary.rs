//! First-order Mur absorbing boundary.
//!
//! Each domain edge holds the last two values of its interior neighbour.
//! On every step the edge cell receives the older one and the neighbour's
//! current value is pushed in, so the edge trails its neighbour by two
//! steps. At a Courant factor of 0.5 a wave needs exactly two steps to
//! cross one cell, which makes the edge transparent to outgoing waves.

/// Two-slot delay feeding one edge cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeDelay {
    /// Value pushed two steps ago (next one out)
    older: f64,
    /// Value pushed on the previous step
    newer: f64,
}

impl EdgeDelay {
    /// Create an empty (all-zero) delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest value and push `incoming` behind the newest one.
    pub fn cycle(&mut self, incoming: f64) -> f64 {
        let out = self.older;
        self.older = self.newer;
        self.newer = incoming;
        out
    }

    /// The two held values, oldest first.
    pub fn held(&self) -> [f64; 2] {
        [self.older, self.newer]
    }

    /// Clear both slots.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Absorbing boundary state for both ends of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MurBoundary {
    low: EdgeDelay,
    high: EdgeDelay,
}

impl MurBoundary {
    /// Create a boundary with both delays zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive both edge cells of `ex` and record their neighbours.
    ///
    /// `ex` must hold at least two cells.
    pub fn apply(&mut self, ex: &mut [f64]) {
        let last = ex.len() - 1;

        ex[0] = self.low.cycle(ex[1]);
        ex[last] = self.high.cycle(ex[last - 1]);
    }

    /// Delay feeding cell 0.
    pub fn low(&self) -> &EdgeDelay {
        &self.low
    }

    /// Delay feeding the last cell.
    pub fn high(&self) -> &EdgeDelay {
        &self.high
    }

    /// Clear both edges.
    pub fn reset(&mut self) {
        self.low.reset();
        self.high.reset();
    }
}
