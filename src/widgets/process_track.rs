//! Horizontal track that slides sideways while its tall section scrolls past.

use crate::animation::smoothing::{Motion, Smoothed, Smoothing};
use crate::foundation::core::{ElementId, WidgetId};
use crate::mapping::progress::ProgressMapper;
use crate::output::style::{Slot, Style, StyleBatch, Transform};
use crate::schedule::FrameCtx;
use crate::widgets::Widget;

/// Extra travel so the last card clears the right padding.
pub const TRAILING_GUTTER: f64 = 48.0;

const SMOOTHING: Smoothing = Smoothing::Linear { factor: 0.1 };
const EPSILON_PX: f64 = 0.5;

pub struct ProcessTrack {
    section: ElementId,
    track: ElementId,
    mapper: ProgressMapper,
    offset: Smoothed<f64>,
}

impl ProcessTrack {
    pub fn new(section: ElementId, track: ElementId) -> Self {
        Self {
            section,
            track,
            mapper: ProgressMapper::Sticky,
            offset: Smoothed::new(0.0).with_epsilon(EPSILON_PX),
        }
    }

    pub fn with_mapper(mut self, mapper: ProgressMapper) -> Self {
        self.mapper = mapper;
        self
    }

    /// Current horizontal shift in pixels (positive = moved left).
    pub fn offset(&self) -> f64 {
        self.offset.current()
    }

    pub fn target(&self) -> Option<f64> {
        self.offset.target()
    }
}

impl Widget for ProcessTrack {
    fn kind(&self) -> &'static str {
        "process_track"
    }

    fn observed_region(&self) -> Option<ElementId> {
        Some(self.section)
    }

    fn update_targets(&mut self, frame: &FrameCtx<'_>) {
        let viewport = frame.geometry.viewport();
        let Some(progress) = frame
            .geometry
            .bounding_rect(self.section)
            .and_then(|r| self.mapper.map(r, viewport))
        else {
            return;
        };
        let track_width = frame.geometry.scroll_width(self.track).unwrap_or(0.0);
        let distance = (track_width - viewport.width + TRAILING_GUTTER).max(0.0);
        self.offset.set_target(progress * distance);
    }

    fn advance(&mut self, frame: &FrameCtx<'_>, snap: bool) -> Motion {
        if snap {
            self.offset.snap();
            return Motion::Settled;
        }
        self.offset.step(SMOOTHING, frame.dt_secs)
    }

    fn compose(&self, id: WidgetId, _frame: &FrameCtx<'_>, out: &mut StyleBatch) {
        out.push(
            Slot::new(id, "track"),
            Style::transform(Transform::translate3d(-self.offset(), 0.0, 0.0)),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/process_track.rs"]
mod tests;
