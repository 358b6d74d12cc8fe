//! Word-by-word slide-up reveal, played once the first time the block scrolls into view.

use crate::animation::ease::Ease;
use crate::animation::smoothing::Motion;
use crate::config::device::DeviceProfile;
use crate::foundation::core::{ElementId, WidgetId};
use crate::foundation::math::clamp01;
use crate::gate::VisibilityGate;
use crate::output::style::{Slot, Style, StyleBatch, Transform, TransformOp};
use crate::schedule::FrameCtx;
use crate::widgets::Widget;

/// Timing of a reveal; the mobile variant is quicker and tighter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTiming {
    pub threshold: f64,
    pub start_delay_ms: f64,
    pub word_stagger_ms: f64,
    pub duration_ms: f64,
}

impl RevealTiming {
    pub const DESKTOP: Self = Self {
        threshold: 0.1,
        start_delay_ms: 100.0,
        word_stagger_ms: 30.0,
        duration_ms: 1000.0,
    };

    pub const MOBILE: Self = Self {
        threshold: 0.05,
        start_delay_ms: 50.0,
        word_stagger_ms: 15.0,
        duration_ms: 800.0,
    };

    pub fn for_device(device: DeviceProfile) -> Self {
        if device.mobile { Self::MOBILE } else { Self::DESKTOP }
    }
}

pub struct TextReveal {
    block: ElementId,
    words: usize,
    extra_delay_ms: f64,
    timing: RevealTiming,
    started_ms: Option<f64>,
    elapsed_ms: f64,
}

impl TextReveal {
    pub fn new(block: ElementId, words: usize) -> Self {
        Self {
            block,
            words,
            extra_delay_ms: 0.0,
            timing: RevealTiming::DESKTOP,
            started_ms: None,
            elapsed_ms: 0.0,
        }
    }

    /// Additional delay before the first word, on top of the device's start delay.
    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.extra_delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn has_started(&self) -> bool {
        self.started_ms.is_some()
    }

    /// Raw timeline position of word `index`, in `[0, 1]`.
    pub fn word_t(&self, index: usize) -> f64 {
        if self.started_ms.is_none() {
            return 0.0;
        }
        let delay = self.timing.start_delay_ms
            + self.extra_delay_ms
            + index as f64 * self.timing.word_stagger_ms;
        clamp01((self.elapsed_ms - delay) / self.timing.duration_ms)
    }

    pub fn is_complete(&self) -> bool {
        self.words == 0 || self.word_t(self.words - 1) >= 1.0
    }
}

impl Widget for TextReveal {
    fn kind(&self) -> &'static str {
        "text_reveal"
    }

    fn observed_region(&self) -> Option<ElementId> {
        Some(self.block)
    }

    fn gate(&self, device: DeviceProfile) -> VisibilityGate {
        VisibilityGate::once(RevealTiming::for_device(device).threshold)
    }

    fn update_targets(&mut self, frame: &FrameCtx<'_>) {
        if self.started_ms.is_none() {
            self.timing = RevealTiming::for_device(frame.device);
            self.started_ms = Some(frame.now_ms);
        }
    }

    fn advance(&mut self, frame: &FrameCtx<'_>, _snap: bool) -> Motion {
        if let Some(start) = self.started_ms {
            self.elapsed_ms = (frame.now_ms - start).max(0.0);
        }
        if self.is_complete() {
            Motion::Settled
        } else {
            Motion::Moving
        }
    }

    fn compose(&self, id: WidgetId, _frame: &FrameCtx<'_>, out: &mut StyleBatch) {
        for i in 0..self.words {
            let e = Ease::OutExpo.apply(self.word_t(i));
            out.push(
                Slot::indexed(id, "word", i),
                Style::transform(Transform::new().then(TransformOp::TranslatePercent {
                    x: 0.0,
                    y: (1.0 - e) * 110.0,
                }))
                .with_opacity(e),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/text_reveal.rs"]
mod tests;
