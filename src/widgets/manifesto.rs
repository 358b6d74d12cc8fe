//! Manifesto section: a slow-following progress line and background parallax, plus
//! tracking of the principle currently at mid-screen.

use crate::animation::smoothing::{Motion, Smoothed, Smoothing};
use crate::foundation::core::{ElementId, WidgetId};
use crate::mapping::progress::{ProgressMapper, ProgressTracker};
use crate::output::style::{Slot, Style, StyleBatch, Transform, TransformOp};
use crate::schedule::FrameCtx;
use crate::widgets::Widget;

const SMOOTHING: Smoothing = Smoothing::Linear { factor: 0.08 };

pub struct Manifesto {
    section: ElementId,
    mapper: ProgressMapper,
    progress: Smoothed<f64>,
    tracker: ProgressTracker,
    principles: Vec<ElementId>,
    active: usize,
}

impl Manifesto {
    pub fn new(section: ElementId, principles: Vec<ElementId>) -> Self {
        Self {
            section,
            mapper: ProgressMapper::PassThrough,
            progress: Smoothed::new(0.0),
            tracker: ProgressTracker::new(0.0),
            principles,
            active: 0,
        }
    }

    pub fn with_mapper(mut self, mapper: ProgressMapper) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn progress(&self) -> f64 {
        self.progress.current()
    }

    /// Index of the principle crossing the middle of the viewport. Starts at the first
    /// principle and sticks while none is strictly across the line; `None` without any.
    pub fn active_principle(&self) -> Option<usize> {
        (!self.principles.is_empty()).then_some(self.active)
    }

    fn update_active(&mut self, frame: &FrameCtx<'_>) {
        let mid = frame.geometry.viewport().height * 0.5;
        // Later principles win when several cross the line.
        let hit = self.principles.iter().rposition(|&id| {
            frame
                .geometry
                .bounding_rect(id)
                .is_some_and(|r| r.y0 < mid && r.y1 > mid)
        });
        if let Some(i) = hit
            && i != self.active
        {
            tracing::debug!(principle = i, "active principle changed");
            self.active = i;
        }
    }
}

impl Widget for Manifesto {
    fn kind(&self) -> &'static str {
        "manifesto"
    }

    fn observed_region(&self) -> Option<ElementId> {
        Some(self.section)
    }

    fn update_targets(&mut self, frame: &FrameCtx<'_>) {
        let viewport = frame.geometry.viewport();
        let mapped = frame
            .geometry
            .bounding_rect(self.section)
            .and_then(|r| self.mapper.map(r, viewport));
        self.tracker.update(mapped);
        self.progress.set_target(self.tracker.value());
        self.update_active(frame);
    }

    fn advance(&mut self, frame: &FrameCtx<'_>, snap: bool) -> Motion {
        if snap {
            self.progress.snap();
            return Motion::Settled;
        }
        self.progress.step(SMOOTHING, frame.dt_secs)
    }

    fn compose(&self, id: WidgetId, _frame: &FrameCtx<'_>, out: &mut StyleBatch) {
        let p = self.progress.current();
        out.push(
            Slot::new(id, "line"),
            Style::transform(Transform::new().then(TransformOp::ScaleY { s: p })),
        );
        out.push(
            Slot::new(id, "glow"),
            Style::transform(Transform::new().then(TransformOp::TranslatePercent {
                x: 0.0,
                y: p * 100.0,
            })),
        );
        out.push(
            Slot::indexed(id, "blob", 0),
            Style::transform(
                Transform::translate(0.0, p * 150.0).then(TransformOp::Scale { s: 1.0 + p * 0.5 }),
            ),
        );
        out.push(
            Slot::indexed(id, "blob", 1),
            Style::transform(
                Transform::translate(0.0, -p * 150.0).then(TransformOp::Scale { s: 1.5 - p * 0.5 }),
            ),
        );
        out.push(
            Slot::new(id, "grid"),
            Style::transform(Transform::translate(0.0, -p * 50.0)),
        );
        out.push(
            Slot::new(id, "dots"),
            Style::transform(Transform::translate(0.0, -p * 20.0)),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/manifesto.rs"]
mod tests;
