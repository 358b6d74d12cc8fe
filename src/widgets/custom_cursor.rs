//! Pointer-following cursor: a dot pinned to the pointer and a trailing outline that is
//! pulled toward the center of magnetic elements under the pointer. Hovering a clickable or
//! labelled element switches the cursor into a contextual mode.

use std::collections::{BTreeMap, BTreeSet};

use crate::animation::smoothing::{Motion, Smoothed, Smoothing};
use crate::foundation::core::{ElementId, PointerSample, Vec2, WidgetId};
use crate::output::style::{Slot, Style, StyleBatch, Transform};
use crate::schedule::FrameCtx;
use crate::widgets::Widget;

pub const MAGNETIC_PULL: f64 = 0.35;

const SMOOTHING: Smoothing = Smoothing::Linear { factor: 0.15 };

/// Contextual state derived from the element under the pointer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CursorMode {
    #[default]
    Idle,
    /// Over a link, button or other clickable element.
    Hovering,
    /// Over an element carrying a cursor label; the outline shows the text.
    Text(String),
}

pub struct CustomCursor {
    magnetic: BTreeSet<ElementId>,
    clickable: BTreeSet<ElementId>,
    labels: BTreeMap<ElementId, String>,
    pointer: Option<PointerSample>,
    outline: Smoothed<Vec2>,
    mode: CursorMode,
    enabled: bool,
}

impl CustomCursor {
    pub fn new(magnetic: impl IntoIterator<Item = ElementId>) -> Self {
        Self {
            magnetic: magnetic.into_iter().collect(),
            clickable: BTreeSet::new(),
            labels: BTreeMap::new(),
            pointer: None,
            outline: Smoothed::new(Vec2::ZERO),
            mode: CursorMode::Idle,
            enabled: true,
        }
    }

    pub fn with_clickable(mut self, ids: impl IntoIterator<Item = ElementId>) -> Self {
        self.clickable.extend(ids);
        self
    }

    /// Labelled elements also count as clickable.
    pub fn with_label(mut self, id: ElementId, text: impl Into<String>) -> Self {
        self.labels.insert(id, text.into());
        self
    }

    pub fn outline(&self) -> Vec2 {
        self.outline.current()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn mode(&self) -> &CursorMode {
        &self.mode
    }

    pub fn is_hovering(&self) -> bool {
        self.mode != CursorMode::Idle
    }

    pub fn label(&self) -> Option<&str> {
        match &self.mode {
            CursorMode::Text(text) => Some(text),
            _ => None,
        }
    }

    fn mode_for(&self, hover: Option<ElementId>) -> CursorMode {
        let Some(id) = hover else {
            return CursorMode::Idle;
        };
        if let Some(text) = self.labels.get(&id) {
            CursorMode::Text(text.clone())
        } else if self.clickable.contains(&id) {
            CursorMode::Hovering
        } else {
            CursorMode::Idle
        }
    }
}

impl Widget for CustomCursor {
    fn kind(&self) -> &'static str {
        "custom_cursor"
    }

    fn update_targets(&mut self, frame: &FrameCtx<'_>) {
        self.enabled = !frame.device.mobile;
        if !self.enabled {
            self.mode = CursorMode::Idle;
            return;
        }
        let mode = self.mode_for(frame.input.hover);
        if mode != self.mode {
            tracing::trace!(?mode, "cursor mode");
            self.mode = mode;
        }
        if let Some(p) = frame.input.pointer {
            self.pointer = Some(p);
        }
        let Some(p) = self.pointer else {
            return;
        };

        let mut target = p.to_point().to_vec2();
        // Hover rects are read here, inside the frame, never in the event handler.
        let magnet = frame
            .input
            .hover
            .filter(|id| self.magnetic.contains(id))
            .and_then(|id| frame.geometry.bounding_rect(id));
        if let Some(rect) = magnet {
            target += (rect.center().to_vec2() - target) * MAGNETIC_PULL;
        }
        self.outline.set_target(target);
    }

    fn advance(&mut self, frame: &FrameCtx<'_>, snap: bool) -> Motion {
        if !self.enabled {
            return Motion::Settled;
        }
        if snap {
            self.outline.snap();
            return Motion::Settled;
        }
        self.outline.step(SMOOTHING, frame.dt_secs)
    }

    fn compose(&self, id: WidgetId, _frame: &FrameCtx<'_>, out: &mut StyleBatch) {
        if !self.enabled {
            return;
        }
        let Some(p) = self.pointer else {
            return;
        };
        out.push(
            Slot::new(id, "dot"),
            Style::transform(Transform::translate3d(p.x, p.y, 0.0)),
        );
        let o = self.outline.current();
        out.push(
            Slot::new(id, "outline"),
            Style::transform(Transform::translate3d(o.x, o.y, 0.0)),
        );
        out.push(
            Slot::new(id, "label"),
            Style::opacity(if self.label().is_some() { 1.0 } else { 0.0 }),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/custom_cursor.rs"]
mod tests;
