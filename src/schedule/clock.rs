use crate::animation::smoothing::clamp_delta;

/// Converts frame timestamps into clamped per-frame deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous timestamp; the next frame reports a zero delta.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn last_ms(&self) -> Option<f64> {
        self.last_ms
    }

    /// Elapsed seconds since the previous call, clamped to
    /// [`crate::MAX_FRAME_DELTA_SECS`].
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) => clamp_delta((now_ms - last) / 1000.0),
            None => 0.0,
        };
        if now_ms.is_finite() {
            self.last_ms = Some(now_ms);
        }
        dt
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/clock.rs"]
mod tests;
