//! Viewport-intersection gating for per-frame work.
//!
//! A gate is purely an optimization: widgets render correctly without one, they just keep
//! burning frames while off screen.

use crate::foundation::core::{Rect, Viewport};
use crate::geometry::intersection_ratio;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityChange {
    Entered,
    Exited,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityGate {
    threshold: f64,
    visible: bool,
    latch: bool,
}

impl VisibilityGate {
    /// Visible while at least `threshold` of the region is on screen (0 = any overlap).
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
            latch: false,
        }
    }

    /// Reports the first entry and then stays visible for good.
    pub fn once(threshold: f64) -> Self {
        Self {
            latch: true,
            ..Self::new(threshold)
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_latched(&self) -> bool {
        self.latch && self.visible
    }

    /// Feed the current intersection ratio; only threshold crossings are reported.
    pub fn observe(&mut self, ratio: f64) -> Option<VisibilityChange> {
        if self.is_latched() {
            return None;
        }
        let now = ratio > 0.0 && ratio >= self.threshold;
        if now == self.visible {
            return None;
        }
        self.visible = now;
        Some(if now {
            VisibilityChange::Entered
        } else {
            VisibilityChange::Exited
        })
    }

    pub fn observe_rect(&mut self, rect: Rect, viewport: Viewport) -> Option<VisibilityChange> {
        self.observe(intersection_ratio(rect, viewport))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gate/mod.rs"]
mod tests;
