//! Thin bar across the top of the page showing whole-document scroll progress.

use crate::animation::smoothing::{Motion, Smoothed, Smoothing};
use crate::foundation::core::WidgetId;
use crate::mapping::progress::{ProgressTracker, document_progress};
use crate::output::style::{Slot, Style, StyleBatch, Transform, TransformOp};
use crate::schedule::FrameCtx;
use crate::widgets::Widget;

pub struct ScrollProgressBar {
    progress: Smoothed<f64>,
    tracker: ProgressTracker,
}

impl Default for ScrollProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollProgressBar {
    pub fn new() -> Self {
        Self {
            progress: Smoothed::new(0.0),
            tracker: ProgressTracker::new(0.0),
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress.current()
    }
}

impl Widget for ScrollProgressBar {
    fn kind(&self) -> &'static str {
        "scroll_progress"
    }

    fn input_driven(&self) -> bool {
        true
    }

    fn update_targets(&mut self, frame: &FrameCtx<'_>) {
        let g = frame.geometry;
        self.tracker
            .update(document_progress(g.scroll_y(), g.document_height(), g.viewport()));
        self.progress.set_target(self.tracker.value());
    }

    fn advance(&mut self, frame: &FrameCtx<'_>, _snap: bool) -> Motion {
        self.progress.step(Smoothing::Immediate, frame.dt_secs)
    }

    fn compose(&self, id: WidgetId, _frame: &FrameCtx<'_>, out: &mut StyleBatch) {
        out.push(
            Slot::new(id, "bar"),
            Style::transform(Transform::new().then(TransformOp::ScaleX { s: self.progress() })),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/scroll_progress.rs"]
mod tests;
