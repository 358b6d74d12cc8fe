//! Event-side input capture.
//!
//! Handlers only store numbers. Anything that needs element geometry (hover targets,
//! bounding boxes) is resolved later, inside the next frame, so high-frequency events never
//! force a layout.

use crate::foundation::core::{ElementId, PointerSample, Viewport};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    #[default]
    Still,
    Down,
    Up,
}

/// Per-kind event counters; a widget compares them against the ones it saw last frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputGenerations {
    pub scroll: u64,
    pub pointer: u64,
    pub resize: u64,
    pub hover: u64,
}

impl InputGenerations {
    pub fn any_since(&self, earlier: &InputGenerations) -> bool {
        self != earlier
    }
}

/// Immutable view of the inputs handed to widgets during a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub scroll_y: f64,
    pub direction: ScrollDirection,
    /// `None` until the first pointer event, and again after the pointer leaves the window.
    pub pointer: Option<PointerSample>,
    /// Element under the pointer, as reported by the host's hit testing.
    pub hover: Option<ElementId>,
    pub generations: InputGenerations,
}

#[derive(Clone, Debug, Default)]
pub struct InputSampler {
    snap: InputSnapshot,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> InputSnapshot {
        self.snap
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        if !scroll_y.is_finite() {
            return;
        }
        let prev = self.snap.scroll_y;
        self.snap.direction = if scroll_y > prev {
            ScrollDirection::Down
        } else if scroll_y < prev {
            ScrollDirection::Up
        } else {
            self.snap.direction
        };
        self.snap.scroll_y = scroll_y;
        self.snap.generations.scroll += 1;
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        self.snap.pointer = Some(PointerSample::new(x, y));
        self.snap.generations.pointer += 1;
    }

    pub fn on_pointer_leave(&mut self) {
        self.snap.pointer = None;
        self.snap.hover = None;
        self.snap.generations.pointer += 1;
    }

    /// Size changes are read back from geometry; the sampler only records that one happened.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if viewport.validate().is_err() {
            tracing::warn!(?viewport, "ignoring degenerate resize");
            return;
        }
        self.snap.generations.resize += 1;
    }

    pub fn on_hover(&mut self, target: Option<ElementId>) {
        if self.snap.hover == target {
            return;
        }
        self.snap.hover = target;
        self.snap.generations.hover += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/mod.rs"]
mod tests;
