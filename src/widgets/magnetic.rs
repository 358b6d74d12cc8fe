//! Element that leans toward the pointer while hovered.

use crate::animation::smoothing::{Motion, Smoothed, Smoothing};
use crate::foundation::core::{ElementId, Vec2, WidgetId};
use crate::mapping::progress::center_offset;
use crate::output::style::{Slot, Style, StyleBatch, Transform};
use crate::schedule::FrameCtx;
use crate::widgets::Widget;

pub const DEFAULT_STRENGTH: f64 = 0.5;

const SMOOTHING: Smoothing = Smoothing::Linear { factor: 0.2 };

pub struct Magnetic {
    element: ElementId,
    strength: f64,
    offset: Smoothed<Vec2>,
}

impl Magnetic {
    pub fn new(element: ElementId) -> Self {
        Self::with_strength(element, DEFAULT_STRENGTH)
    }

    pub fn with_strength(element: ElementId, strength: f64) -> Self {
        Self {
            element,
            strength: if strength.is_finite() { strength } else { DEFAULT_STRENGTH },
            offset: Smoothed::new(Vec2::ZERO).with_epsilon(0.01),
        }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset.current()
    }
}

impl Widget for Magnetic {
    fn kind(&self) -> &'static str {
        "magnetic"
    }

    fn update_targets(&mut self, frame: &FrameCtx<'_>) {
        let rect = frame.geometry.bounding_rect(self.element);
        let target = match (frame.input.pointer, rect) {
            (Some(p), Some(r)) if !frame.device.mobile && r.contains(p.to_point()) => {
                center_offset(p, r) * self.strength
            }
            // Pointer left the element (or the window): spring back.
            _ => Vec2::ZERO,
        };
        self.offset.set_target(target);
    }

    fn advance(&mut self, frame: &FrameCtx<'_>, snap: bool) -> Motion {
        if snap {
            self.offset.snap();
            return Motion::Settled;
        }
        self.offset.step(SMOOTHING, frame.dt_secs)
    }

    fn compose(&self, id: WidgetId, _frame: &FrameCtx<'_>, out: &mut StyleBatch) {
        let o = self.offset.current();
        out.push(
            Slot::new(id, "element"),
            Style::transform(Transform::translate(o.x, o.y)),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/magnetic.rs"]
mod tests;
