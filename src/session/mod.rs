//! Session: owns every mounted widget, the shared input sampler and the frame queue.

pub mod replay;

use crate::config::device::{DeviceProfile, DeviceSpec};
use crate::config::scene::{SceneConfig, WidgetSpec};
use crate::config::script::InputEvent;
use crate::driver::{AnyDriver, Driver, Phase};
use crate::foundation::core::{ElementId, Viewport, WidgetId};
use crate::foundation::error::ScrollFxResult;
use crate::geometry::GeometryProvider;
use crate::input::{InputSampler, InputSnapshot};
use crate::output::style::StyleBatch;
use crate::output::surface::OutputSurface;
use crate::schedule::{FrameCtx, FrameQueue};
use crate::widgets::{
    CustomCursor, DesignCanvas, Header, HeroTilt, Magnetic, Manifesto, PrincipleReveal,
    ProcessTrack, ScrollProgressBar, TextReveal, Widget,
};

pub use replay::{ReplayOpts, ReplayStats, replay};

/// Counters for one [`AnimationSession::frame`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Callbacks that ran.
    pub ran: u32,
    /// Callbacks skipped because their handle was no longer current.
    pub stale: u32,
    /// Styles written to the surface.
    pub writes: u32,
}

pub struct AnimationSession {
    drivers: Vec<Box<dyn AnyDriver>>,
    queue: FrameQueue,
    input: InputSampler,
    device: DeviceProfile,
    device_spec: Option<DeviceSpec>,
    batch: StyleBatch,
    next_id: u32,
    frames: u64,
}

impl AnimationSession {
    /// Session with a fixed device profile.
    pub fn new(device: DeviceProfile) -> Self {
        Self {
            drivers: Vec::new(),
            queue: FrameQueue::new(),
            input: InputSampler::new(),
            device,
            device_spec: None,
            batch: StyleBatch::new(),
            next_id: 1,
            frames: 0,
        }
    }

    /// Session whose profile is re-derived from `spec` whenever the viewport is resized.
    pub fn with_device_spec(spec: DeviceSpec, viewport: Viewport) -> Self {
        Self {
            device_spec: Some(spec),
            ..Self::new(spec.profile(viewport.width))
        }
    }

    /// Validate `scene` and mount all of its widgets in order.
    pub fn from_scene(scene: &SceneConfig) -> ScrollFxResult<Self> {
        scene.validate()?;
        let mut session = Self::with_device_spec(scene.device, scene.viewport);
        for spec in &scene.widgets {
            session.mount_spec(spec);
        }
        Ok(session)
    }

    pub fn device(&self) -> DeviceProfile {
        self.device
    }

    pub fn input(&self) -> InputSnapshot {
        self.input.snapshot()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn pending_frames(&self) -> usize {
        self.queue.len()
    }

    pub fn widget_ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.drivers.iter().map(|d| d.id())
    }

    pub fn mount<W: Widget>(&mut self, widget: W) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        let mut driver = Driver::new(id, widget, self.device);
        tracing::debug!(widget = %id, kind = driver.widget().kind(), "mount");
        driver.start(&mut self.queue);
        self.drivers.push(Box::new(driver));
        id
    }

    pub fn mount_spec(&mut self, spec: &WidgetSpec) -> WidgetId {
        match spec {
            WidgetSpec::DesignCanvas { section, mapper } => {
                let w = DesignCanvas::new(*section);
                match mapper {
                    Some(m) => self.mount(w.with_mapper(*m)),
                    None => self.mount(w),
                }
            }
            WidgetSpec::Manifesto {
                section,
                principles,
                mapper,
            } => {
                let w = Manifesto::new(*section, principles.clone());
                match mapper {
                    Some(m) => self.mount(w.with_mapper(*m)),
                    None => self.mount(w),
                }
            }
            WidgetSpec::Principle {
                item,
                glyphs,
                words,
                jitter_seed,
                mapper,
            } => {
                let mut w = PrincipleReveal::new(*item, *glyphs, *words);
                if let Some(seed) = jitter_seed {
                    w = w.with_jitter(*seed);
                }
                if let Some(m) = mapper {
                    w = w.with_mapper(*m);
                }
                self.mount(w)
            }
            WidgetSpec::ProcessTrack {
                section,
                track,
                mapper,
            } => {
                let w = ProcessTrack::new(*section, *track);
                match mapper {
                    Some(m) => self.mount(w.with_mapper(*m)),
                    None => self.mount(w),
                }
            }
            WidgetSpec::Header { sections } => self.mount(Header::new(sections.clone())),
            WidgetSpec::CustomCursor {
                magnetic,
                clickable,
                labels,
            } => {
                let cursor = labels.iter().fold(
                    CustomCursor::new(magnetic.iter().copied())
                        .with_clickable(clickable.iter().copied()),
                    |c, l| c.with_label(l.element, l.text.clone()),
                );
                self.mount(cursor)
            }
            WidgetSpec::ScrollProgress => self.mount(ScrollProgressBar::new()),
            WidgetSpec::Magnetic { element, strength } => {
                self.mount(Magnetic::with_strength(*element, *strength))
            }
            WidgetSpec::HeroTilt { container } => self.mount(HeroTilt::new(*container)),
            WidgetSpec::TextReveal {
                block,
                words,
                delay_ms,
            } => self.mount(TextReveal::new(*block, *words).with_delay(*delay_ms)),
        }
    }

    /// Dispose and remove one widget. Its pending frame, if any, is cancelled.
    pub fn unmount(&mut self, id: WidgetId) -> bool {
        let Some(pos) = self.drivers.iter().position(|d| d.id() == id) else {
            return false;
        };
        let mut driver = self.drivers.remove(pos);
        driver.dispose(&mut self.queue);
        true
    }

    /// Dispose every widget; the session stays usable for new mounts.
    pub fn dispose(&mut self) {
        for d in &mut self.drivers {
            d.dispose(&mut self.queue);
        }
        self.drivers.clear();
        tracing::debug!("session disposed");
    }

    pub fn phase(&self, id: WidgetId) -> Option<Phase> {
        self.find(id).map(|d| d.phase())
    }

    /// Typed access to a mounted widget, e.g. to read the header's signals.
    pub fn widget<W: Widget>(&self, id: WidgetId) -> Option<&W> {
        self.find(id)?
            .as_any()
            .downcast_ref::<Driver<W>>()
            .map(Driver::widget)
    }

    pub fn widget_mut<W: Widget>(&mut self, id: WidgetId) -> Option<&mut W> {
        self.drivers
            .iter_mut()
            .find(|d| d.id() == id)?
            .as_any_mut()
            .downcast_mut::<Driver<W>>()
            .map(Driver::widget_mut)
    }

    fn find(&self, id: WidgetId) -> Option<&dyn AnyDriver> {
        self.drivers.iter().find(|d| d.id() == id).map(|d| &**d)
    }

    fn wake_all(&mut self) {
        for d in &mut self.drivers {
            d.wake(&mut self.queue);
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.input.on_scroll(scroll_y);
        self.wake_all();
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.input.on_pointer_move(x, y);
        self.wake_all();
    }

    pub fn on_pointer_leave(&mut self) {
        self.input.on_pointer_leave();
        self.wake_all();
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.input.on_resize(viewport);
        if let Some(spec) = self.device_spec
            && viewport.validate().is_ok()
        {
            let device = spec.profile(viewport.width);
            if device != self.device {
                tracing::debug!(?device, "device profile changed");
                self.device = device;
            }
        }
        self.wake_all();
    }

    pub fn on_hover(&mut self, target: Option<ElementId>) {
        self.input.on_hover(target);
        self.wake_all();
    }

    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Scroll { y } => self.on_scroll(y),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(x, y),
            InputEvent::PointerLeave => self.on_pointer_leave(),
            InputEvent::Resize { width, height } => self.on_resize(Viewport { width, height }),
            InputEvent::Hover { target } => self.on_hover(target),
        }
    }

    /// Run one display frame at `now_ms`.
    ///
    /// Visibility is evaluated first, so a widget that just left the viewport has its frame
    /// cancelled before callbacks fire. Frames requested while callbacks run are due on the
    /// next call.
    #[tracing::instrument(level = "trace", skip(self, geometry, surface))]
    pub fn frame(
        &mut self,
        now_ms: f64,
        geometry: &dyn GeometryProvider,
        surface: &mut dyn OutputSurface,
    ) -> FrameStats {
        self.frames += 1;
        surface.begin_frame(self.frames, now_ms);

        for d in &mut self.drivers {
            d.observe(geometry, &mut self.queue);
        }

        let input = self.input.snapshot();
        let env = FrameCtx {
            now_ms,
            dt_secs: 0.0,
            input: &input,
            geometry,
            device: self.device,
        };

        let mut stats = FrameStats::default();
        for (handle, owner) in self.queue.take_due() {
            let Some(d) = self.drivers.iter_mut().find(|d| d.id() == owner) else {
                stats.stale += 1;
                continue;
            };
            if !d.on_frame(handle, &env, &mut self.queue, &mut self.batch) {
                stats.stale += 1;
                continue;
            }
            stats.ran += 1;
            for (slot, style) in self.batch.render() {
                surface.write(slot, &style);
                stats.writes += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/mod.rs"]
mod tests;
