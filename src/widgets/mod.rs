//! Concrete scroll and pointer effects.
//!
//! Each widget owns its smoothed values and reads everything else from the
//! [`FrameCtx`] it is handed; the [`crate::driver::Driver`] decides when it runs.

pub mod custom_cursor;
pub mod design_canvas;
pub mod header;
pub mod hero_tilt;
pub mod magnetic;
pub mod manifesto;
pub mod principle;
pub mod process_track;
pub mod scroll_progress;
pub mod text_reveal;

use crate::animation::smoothing::Motion;
use crate::config::device::DeviceProfile;
use crate::foundation::core::{ElementId, WidgetId};
use crate::gate::VisibilityGate;
use crate::output::style::StyleBatch;
use crate::schedule::FrameCtx;

pub use custom_cursor::{CursorMode, CustomCursor};
pub use design_canvas::DesignCanvas;
pub use header::Header;
pub use hero_tilt::HeroTilt;
pub use magnetic::Magnetic;
pub use manifesto::Manifesto;
pub use principle::PrincipleReveal;
pub use process_track::ProcessTrack;
pub use scroll_progress::ScrollProgressBar;
pub use text_reveal::TextReveal;

pub trait Widget: 'static {
    /// Short stable name used in logs.
    fn kind(&self) -> &'static str;

    /// Region whose visibility gates this widget. `None` means always active.
    fn observed_region(&self) -> Option<ElementId> {
        None
    }

    fn gate(&self, _device: DeviceProfile) -> VisibilityGate {
        VisibilityGate::new(0.0)
    }

    /// Frames after each activation during which values snap to their targets.
    fn warmup_frames(&self) -> u32 {
        0
    }

    /// Targets depend only on input events and layout. The driver skips
    /// [`Widget::update_targets`] on frames where no input generation moved.
    fn input_driven(&self) -> bool {
        false
    }

    fn on_enter(&mut self) {}

    fn on_exit(&mut self) {}

    /// Map the frame's inputs and geometry to new targets.
    fn update_targets(&mut self, frame: &FrameCtx<'_>);

    /// Move displayed values toward their targets; `snap` jumps straight there.
    fn advance(&mut self, frame: &FrameCtx<'_>, snap: bool) -> Motion;

    fn compose(&self, id: WidgetId, frame: &FrameCtx<'_>, out: &mut StyleBatch);

    /// Whether another frame is needed after one that ended with `motion`.
    fn wants_frame(&self, motion: Motion) -> bool {
        motion.is_moving()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/testing.rs"]
pub(crate) mod testing;
