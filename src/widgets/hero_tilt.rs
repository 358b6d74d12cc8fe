//! Hero headline that tilts in 3D toward the pointer.

use crate::animation::smoothing::{Motion, Smoothed, Smoothing};
use crate::foundation::core::{ElementId, Vec2, WidgetId};
use crate::mapping::progress::element_pointer_offset;
use crate::output::style::{Slot, Style, StyleBatch, Transform, TransformOp};
use crate::schedule::FrameCtx;
use crate::widgets::Widget;

pub const MAX_TILT_DEG: f64 = 4.0;

const SMOOTHING: Smoothing = Smoothing::Linear { factor: 0.2 };

pub struct HeroTilt {
    container: ElementId,
    tilt: Smoothed<Vec2>,
}

impl HeroTilt {
    pub fn new(container: ElementId) -> Self {
        Self {
            container,
            tilt: Smoothed::new(Vec2::ZERO),
        }
    }

    /// Normalized pointer offset currently displayed, each axis in `[-0.5, 0.5]`.
    pub fn tilt(&self) -> Vec2 {
        self.tilt.current()
    }
}

impl Widget for HeroTilt {
    fn kind(&self) -> &'static str {
        "hero_tilt"
    }

    fn observed_region(&self) -> Option<ElementId> {
        Some(self.container)
    }

    fn update_targets(&mut self, frame: &FrameCtx<'_>) {
        let rect = frame.geometry.bounding_rect(self.container);
        let target = match (frame.input.pointer, rect) {
            (Some(p), Some(r)) if !frame.device.mobile && r.contains(p.to_point()) => {
                element_pointer_offset(p, r).unwrap_or(Vec2::ZERO)
            }
            _ => Vec2::ZERO,
        };
        self.tilt.set_target(target);
    }

    fn advance(&mut self, frame: &FrameCtx<'_>, snap: bool) -> Motion {
        if snap {
            self.tilt.snap();
            return Motion::Settled;
        }
        self.tilt.step(SMOOTHING, frame.dt_secs)
    }

    fn compose(&self, id: WidgetId, _frame: &FrameCtx<'_>, out: &mut StyleBatch) {
        let t = self.tilt.current();
        out.push(
            Slot::new(id, "content"),
            Style::transform(
                Transform::new()
                    .then(TransformOp::RotateX { deg: -t.y * MAX_TILT_DEG })
                    .then(TransformOp::RotateY { deg: t.x * MAX_TILT_DEG }),
            ),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/hero_tilt.rs"]
mod tests;
