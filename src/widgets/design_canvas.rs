//! Zooming project grid pinned inside a tall section.
//!
//! Scroll progress through the section drives an eased zoom-out (1.6 → 0.9) and fade-in;
//! the pointer tilts the grid and pushes each card by its depth. Cards also float on a slow
//! sine path that fades out as the zoom completes, so the loop keeps running while visible.

use crate::animation::ease::Ease;
use crate::animation::smoothing::{Motion, Smoothed, Smoothing};
use crate::foundation::core::{ElementId, Vec2, WidgetId};
use crate::foundation::math::lerp;
use crate::mapping::progress::{ProgressMapper, ProgressTracker, pointer_offset};
use crate::output::style::{Slot, Style, StyleBatch, Transform, TransformOp};
use crate::schedule::FrameCtx;
use crate::widgets::Widget;

pub const WARMUP_FRAMES: u32 = 60;
pub const START_SCALE: f64 = 1.6;
pub const END_SCALE: f64 = 0.9;

const PROGRESS_SMOOTHING: Smoothing = Smoothing::Exponential { rate: 5.0 };
const TILT_SMOOTHING: Smoothing = Smoothing::Linear { factor: 0.12 };
const TILT_DEG: f64 = 6.0;

/// Parallax depth of each card; the center card comes first.
pub const ITEM_DEPTHS: [f64; 9] = [1.0, 1.2, 0.8, 1.5, 0.9, 1.3, 0.7, 1.1, 1.4];

pub struct DesignCanvas {
    section: ElementId,
    mapper: ProgressMapper,
    progress: Smoothed<f64>,
    tracker: ProgressTracker,
    tilt: Smoothed<Vec2>,
}

impl DesignCanvas {
    pub fn new(section: ElementId) -> Self {
        Self {
            section,
            mapper: ProgressMapper::Sticky,
            progress: Smoothed::new(0.0),
            tracker: ProgressTracker::new(0.0),
            tilt: Smoothed::new(Vec2::ZERO),
        }
    }

    pub fn with_mapper(mut self, mapper: ProgressMapper) -> Self {
        self.mapper = mapper;
        self
    }

    /// Smoothed scroll progress through the section.
    pub fn progress(&self) -> f64 {
        self.progress.current()
    }

    pub fn tilt(&self) -> Vec2 {
        self.tilt.current()
    }

    pub fn scale(&self) -> f64 {
        lerp(START_SCALE, END_SCALE, Ease::OutQuart.apply(self.progress.current()))
    }
}

impl Widget for DesignCanvas {
    fn kind(&self) -> &'static str {
        "design_canvas"
    }

    fn observed_region(&self) -> Option<ElementId> {
        Some(self.section)
    }

    fn warmup_frames(&self) -> u32 {
        WARMUP_FRAMES
    }

    fn update_targets(&mut self, frame: &FrameCtx<'_>) {
        let viewport = frame.geometry.viewport();
        let mapped = frame
            .geometry
            .bounding_rect(self.section)
            .and_then(|r| self.mapper.map(r, viewport));
        self.tracker.update(mapped);
        self.progress.set_target(self.tracker.value());

        if frame.device.mobile {
            self.tilt.clear_target();
        } else if let Some(p) = frame.input.pointer {
            self.tilt.set_target(pointer_offset(p, viewport, 2.0));
        }
    }

    fn advance(&mut self, frame: &FrameCtx<'_>, snap: bool) -> Motion {
        let progress = if snap {
            self.progress.snap();
            Motion::Settled
        } else {
            self.progress.step(PROGRESS_SMOOTHING, frame.dt_secs)
        };
        progress.or(self.tilt.step(TILT_SMOOTHING, frame.dt_secs))
    }

    fn compose(&self, id: WidgetId, frame: &FrameCtx<'_>, out: &mut StyleBatch) {
        let e = Ease::OutQuart.apply(self.progress.current());
        let s = self.scale();
        let tilt = self.tilt.current();

        let container = Transform::new()
            .then(TransformOp::Scale3d { x: s, y: s, z: 1.0 })
            .then(TransformOp::RotateX { deg: tilt.y * TILT_DEG })
            .then(TransformOp::RotateY { deg: tilt.x * TILT_DEG })
            .then(TransformOp::Translate3d { x: 0.0, y: 0.0, z: 0.0 });
        out.push(
            Slot::new(id, "container"),
            Style::transform(container).with_opacity((0.4 + e * 1.6).min(1.0)),
        );
        out.push(Slot::new(id, "overlay"), Style::opacity(e * 0.6));

        let float = if frame.device.low_perf { 3.0 } else { 10.0 };
        let parallax = if frame.device.mobile { 0.0 } else { 40.0 };
        let t = frame.now_ms;
        for (i, depth) in ITEM_DEPTHS.iter().enumerate() {
            let phase = i as f64;
            let fx = (t * 0.001 + phase).sin() * float * (1.0 - e);
            let fy = (t * 0.0012 + phase).cos() * float * (1.0 - e);
            let x = fx + tilt.x * parallax * depth;
            let y = fy + tilt.y * parallax * depth;
            out.push(
                Slot::indexed(id, "item", i),
                Style::transform(Transform::translate3d(x, y, 0.0)),
            );
        }
    }

    fn wants_frame(&self, _motion: Motion) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/design_canvas.rs"]
mod tests;
