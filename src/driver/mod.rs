//! Per-widget frame loop: visibility gating, warmup, frame requests and disposal.

use std::any::Any;

use crate::config::device::DeviceProfile;
use crate::foundation::core::WidgetId;
use crate::gate::{VisibilityChange, VisibilityGate};
use crate::geometry::{GeometryProvider, intersection_ratio};
use crate::input::InputGenerations;
use crate::output::style::StyleBatch;
use crate::schedule::{FrameClock, FrameCtx, FrameHandle, FrameQueue, Tick, TickControl};
use crate::widgets::Widget;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not visible; no frame pending.
    Idle,
    /// Just became visible; values snap to their targets for `remaining` more frames.
    Warming { remaining: u32 },
    /// Values chase their targets through the widget's smoothing.
    Tracking,
    /// Unmounted. Terminal.
    Disposed,
}

impl Phase {
    pub fn is_active(self) -> bool {
        matches!(self, Self::Warming { .. } | Self::Tracking)
    }
}

/// Owns one widget together with its visibility gate, clock and pending frame.
pub struct Driver<W> {
    id: WidgetId,
    widget: W,
    gate: Option<VisibilityGate>,
    phase: Phase,
    clock: FrameClock,
    pending: Option<FrameHandle>,
    /// Input generations seen by the last frame; `None` right after activation.
    seen: Option<InputGenerations>,
    frames: u64,
}

impl<W: Widget> Driver<W> {
    /// Widgets without an observed region get no gate and count as always visible.
    pub fn new(id: WidgetId, widget: W, device: DeviceProfile) -> Self {
        let gate = widget.observed_region().map(|_| widget.gate(device));
        Self {
            id,
            widget,
            gate,
            phase: Phase::Idle,
            clock: FrameClock::new(),
            pending: None,
            seen: None,
            frames: 0,
        }
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Frames that ran to completion since mount.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn activate(&mut self, queue: &mut FrameQueue) {
        let warmup = self.widget.warmup_frames();
        self.phase = if warmup > 0 {
            Phase::Warming { remaining: warmup }
        } else {
            Phase::Tracking
        };
        self.clock.reset();
        self.seen = None;
        self.widget.on_enter();
        tracing::debug!(widget = %self.id, kind = self.widget.kind(), phase = ?self.phase, "activated");
        self.request(queue);
    }

    fn deactivate(&mut self, queue: &mut FrameQueue) {
        if let Some(h) = self.pending.take() {
            queue.cancel(h);
        }
        self.phase = Phase::Idle;
        self.widget.on_exit();
        tracing::debug!(widget = %self.id, kind = self.widget.kind(), "idle");
    }

    fn request(&mut self, queue: &mut FrameQueue) {
        if self.pending.is_none() {
            self.pending = Some(queue.request(self.id));
        }
    }
}

impl<W: Widget> Tick for Driver<W> {
    fn tick(&mut self, frame: &FrameCtx<'_>, out: &mut StyleBatch) -> TickControl {
        if !self.phase.is_active() {
            return TickControl::Stop;
        }

        let generations = frame.input.generations;
        let input_moved = self.seen.is_none_or(|seen| generations.any_since(&seen));
        if input_moved || !self.widget.input_driven() {
            self.widget.update_targets(frame);
        } else {
            tracing::trace!(widget = %self.id, "inputs unchanged, keeping targets");
        }
        self.seen = Some(generations);
        let warming = matches!(self.phase, Phase::Warming { .. });
        let motion = self.widget.advance(frame, warming);

        if let Phase::Warming { remaining } = self.phase {
            let remaining = remaining.saturating_sub(1);
            self.phase = if remaining == 0 {
                tracing::debug!(widget = %self.id, "warmup complete");
                Phase::Tracking
            } else {
                Phase::Warming { remaining }
            };
        }

        self.widget.compose(self.id, frame, out);
        self.frames += 1;

        let warming = matches!(self.phase, Phase::Warming { .. });
        if warming || self.widget.wants_frame(motion) {
            TickControl::Continue
        } else {
            TickControl::Stop
        }
    }
}

/// Type-erased driver as stored by a session.
pub trait AnyDriver {
    fn id(&self) -> WidgetId;
    fn kind(&self) -> &'static str;
    fn phase(&self) -> Phase;
    fn is_visible(&self) -> bool;

    /// Called once after mount. Ungated drivers start tracking immediately.
    fn start(&mut self, queue: &mut FrameQueue);

    /// Re-evaluate the visibility gate against the current geometry.
    fn observe(&mut self, geometry: &dyn GeometryProvider, queue: &mut FrameQueue);

    /// Input changed: make sure a frame is pending if the driver is active.
    fn wake(&mut self, queue: &mut FrameQueue);

    /// Run the callback for `handle`. Returns `false` when the handle is stale.
    fn on_frame(
        &mut self,
        handle: FrameHandle,
        env: &FrameCtx<'_>,
        queue: &mut FrameQueue,
        out: &mut StyleBatch,
    ) -> bool;

    fn dispose(&mut self, queue: &mut FrameQueue);

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<W: Widget> AnyDriver for Driver<W> {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn kind(&self) -> &'static str {
        self.widget.kind()
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn is_visible(&self) -> bool {
        match &self.gate {
            Some(g) => g.is_visible(),
            None => self.phase != Phase::Disposed,
        }
    }

    fn start(&mut self, queue: &mut FrameQueue) {
        if self.gate.is_none() && self.phase == Phase::Idle {
            self.activate(queue);
        }
    }

    fn observe(&mut self, geometry: &dyn GeometryProvider, queue: &mut FrameQueue) {
        if self.phase == Phase::Disposed {
            return;
        }
        let (Some(gate), Some(region)) = (self.gate.as_mut(), self.widget.observed_region())
        else {
            return;
        };
        let ratio = geometry
            .bounding_rect(region)
            .map(|r| intersection_ratio(r, geometry.viewport()))
            .unwrap_or(0.0);
        match gate.observe(ratio) {
            Some(VisibilityChange::Entered) => {
                tracing::debug!(widget = %self.id, ratio, "entered viewport");
                self.activate(queue);
            }
            Some(VisibilityChange::Exited) => {
                tracing::debug!(widget = %self.id, ratio, "left viewport");
                self.deactivate(queue);
            }
            None => {}
        }
    }

    fn wake(&mut self, queue: &mut FrameQueue) {
        if self.phase.is_active() {
            self.request(queue);
        }
    }

    fn on_frame(
        &mut self,
        handle: FrameHandle,
        env: &FrameCtx<'_>,
        queue: &mut FrameQueue,
        out: &mut StyleBatch,
    ) -> bool {
        if self.pending != Some(handle) {
            tracing::trace!(widget = %self.id, ?handle, "ignoring stale frame");
            return false;
        }
        self.pending = None;

        let frame = FrameCtx {
            dt_secs: self.clock.advance(env.now_ms),
            ..*env
        };
        if self.tick(&frame, out) == TickControl::Continue {
            self.request(queue);
        }
        true
    }

    fn dispose(&mut self, queue: &mut FrameQueue) {
        if self.phase == Phase::Disposed {
            return;
        }
        if let Some(h) = self.pending.take() {
            queue.cancel(h);
        }
        self.widget.on_exit();
        self.phase = Phase::Disposed;
        tracing::debug!(widget = %self.id, "disposed");
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/mod.rs"]
mod tests;
