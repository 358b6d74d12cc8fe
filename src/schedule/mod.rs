//! Cooperative per-frame scheduling.
//!
//! Nothing here blocks or spawns: the host calls into the session once per display frame
//! with a timestamp, and every callback runs to completion on that thread.

pub mod clock;
pub mod queue;

use crate::config::device::DeviceProfile;
use crate::geometry::GeometryProvider;
use crate::input::InputSnapshot;
use crate::output::style::StyleBatch;

pub use clock::FrameClock;
pub use queue::{FrameHandle, FrameQueue};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Everything a widget may read during one frame.
#[derive(Clone, Copy)]
pub struct FrameCtx<'a> {
    pub now_ms: f64,
    /// Seconds since this widget's previous frame, already clamped.
    pub dt_secs: f64,
    pub input: &'a InputSnapshot,
    pub geometry: &'a dyn GeometryProvider,
    pub device: DeviceProfile,
}

/// One step of a frame loop: invoked with the frame context, reports whether it wants
/// another frame.
pub trait Tick {
    fn tick(&mut self, frame: &FrameCtx<'_>, out: &mut StyleBatch) -> TickControl;
}
