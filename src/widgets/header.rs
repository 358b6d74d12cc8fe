//! Site header: compacts once scrolled, hides while scrolling down, and highlights the
//! section crossing the upper third of the viewport.

use crate::animation::smoothing::Motion;
use crate::foundation::core::{ElementId, WidgetId};
use crate::input::ScrollDirection;
use crate::mapping::active::ActiveSectionTracker;
use crate::output::style::{Slot, Style, StyleBatch, Transform, TransformOp};
use crate::schedule::FrameCtx;
use crate::widgets::Widget;

pub const SCROLLED_AFTER: f64 = 20.0;
pub const HIDE_AFTER: f64 = 100.0;

pub struct Header {
    sections: ActiveSectionTracker,
    scrolled: bool,
    hidden: bool,
}

impl Header {
    pub fn new(sections: Vec<ElementId>) -> Self {
        Self {
            sections: ActiveSectionTracker::new(
                sections,
                ActiveSectionTracker::DEFAULT_ANCHOR_FRACTION,
            ),
            scrolled: false,
            hidden: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn active_section(&self) -> Option<ElementId> {
        self.sections.active()
    }
}

impl Widget for Header {
    fn kind(&self) -> &'static str {
        "header"
    }

    fn input_driven(&self) -> bool {
        true
    }

    fn update_targets(&mut self, frame: &FrameCtx<'_>) {
        let y = frame.input.scroll_y;
        self.scrolled = y > SCROLLED_AFTER;
        match frame.input.direction {
            ScrollDirection::Down if y > HIDE_AFTER => self.hidden = true,
            ScrollDirection::Up => self.hidden = false,
            _ if y <= HIDE_AFTER => self.hidden = false,
            _ => {}
        }
        self.sections.update(frame.geometry);
    }

    fn advance(&mut self, _frame: &FrameCtx<'_>, _snap: bool) -> Motion {
        Motion::Settled
    }

    fn compose(&self, id: WidgetId, _frame: &FrameCtx<'_>, out: &mut StyleBatch) {
        let (shift, opacity) = if self.hidden { (-100.0, 0.0) } else { (0.0, 1.0) };
        out.push(
            Slot::new(id, "bar"),
            Style::transform(Transform::new().then(TransformOp::TranslatePercent {
                x: 0.0,
                y: shift,
            }))
            .with_opacity(opacity),
        );
        for (i, &section) in self.sections.sections().iter().enumerate() {
            let active = self.sections.active() == Some(section);
            out.push(
                Slot::indexed(id, "nav", i),
                Style::opacity(if active { 1.0 } else { 0.6 }),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/header.rs"]
mod tests;
