//! scrollfx drives decorative scroll- and pointer-reactive animations.
//!
//! The host feeds raw events into an [`AnimationSession`] and calls
//! [`AnimationSession::frame`] once per display frame with a timestamp. Each mounted
//! [`Widget`] is gated on viewport visibility, maps geometry to a target, moves its displayed
//! values toward that target with frame-rate independent smoothing, and writes formatted
//! styles to an [`OutputSurface`].
//!
//! - Describe geometry with a [`GeometryProvider`] (or a [`StaticLayout`])
//! - Mount widgets into an [`AnimationSession`] (or load a [`SceneConfig`])
//! - Forward input events and call `frame` every display refresh
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod config;
pub mod driver;
pub mod gate;
pub mod geometry;
pub mod input;
pub mod mapping;
pub mod output;
pub mod schedule;
pub mod session;
pub mod widgets;

pub use crate::foundation::core::{
    Affine, ElementId, Point, PointerSample, Rect, Vec2, Viewport, WidgetId,
};
pub use crate::foundation::error::{ScrollFxError, ScrollFxResult};
pub use crate::foundation::math::{Rng64, clamp01, lerp};

pub use crate::animation::ease::Ease;
pub use crate::animation::smoothing::{
    DEFAULT_EPSILON, Lerp, MAX_FRAME_DELTA_SECS, Motion, Smoothed, Smoothing,
};
pub use crate::config::{
    CursorLabel, DeviceProfile, DeviceSpec, InputEvent, SceneConfig, ScrollScript, TimedEvent,
    WidgetSpec,
};
pub use crate::driver::{AnyDriver, Driver, Phase};
pub use crate::gate::{VisibilityChange, VisibilityGate};
pub use crate::geometry::{ElementBox, GeometryProvider, StaticLayout, intersection_ratio};
pub use crate::input::{InputSampler, InputSnapshot, ScrollDirection};
pub use crate::mapping::active::ActiveSectionTracker;
pub use crate::mapping::progress::{ProgressMapper, ProgressTracker};
pub use crate::output::style::{RenderedStyle, Slot, Style, StyleBatch, Transform, TransformOp};
pub use crate::output::surface::{JsonLinesSurface, OutputSurface, RecordingSurface};
pub use crate::schedule::{FrameClock, FrameCtx, FrameHandle, FrameQueue, Tick, TickControl};
pub use crate::session::{AnimationSession, FrameStats, ReplayOpts, ReplayStats, replay};
pub use crate::widgets::Widget;
