use crate::config::scene::SceneConfig;
use crate::config::script::{InputEvent, ScrollScript};
use crate::foundation::core::Viewport;
use crate::foundation::error::{ScrollFxError, ScrollFxResult};
use crate::output::surface::OutputSurface;
use crate::session::AnimationSession;

/// Highest accepted simulated refresh rate.
pub const MAX_FPS: f64 = 1000.0;

/// Options for [`replay`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReplayOpts {
    /// Simulated display refresh rate.
    pub fps: f64,
    /// Frames to run. `None` runs until the last event plus one second to settle.
    pub frames: Option<u64>,
}

impl Default for ReplayOpts {
    fn default() -> Self {
        Self {
            fps: 60.0,
            frames: None,
        }
    }
}

impl ReplayOpts {
    pub fn validate(&self) -> ScrollFxResult<()> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(ScrollFxError::validation("fps must be finite and > 0"));
        }
        if self.fps > MAX_FPS {
            return Err(ScrollFxError::validation(format!(
                "fps must be <= {MAX_FPS}, got {}",
                self.fps
            )));
        }
        Ok(())
    }

    fn frame_count(&self, script: &ScrollScript) -> u64 {
        self.frames.unwrap_or_else(|| {
            // Float-to-int `as` saturates.
            let events = (script.end_ms() * self.fps / 1000.0).ceil() as u64;
            events.saturating_add(self.fps.ceil() as u64)
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub frames: u64,
    pub events: u64,
    pub callbacks: u64,
    pub stale: u64,
    pub writes: u64,
}

/// Replay `script` against `scene` at a fixed frame rate, writing every style to `surface`.
///
/// Events are applied just before the first frame whose timestamp is at or after theirs.
/// Scroll and resize events also move the scene's geometry.
pub fn replay(
    scene: &SceneConfig,
    script: &ScrollScript,
    opts: ReplayOpts,
    surface: &mut dyn OutputSurface,
) -> ScrollFxResult<ReplayStats> {
    opts.validate()?;
    script.validate()?;

    let mut session = AnimationSession::from_scene(scene)?;
    let mut layout = scene.layout();
    let interval = 1000.0 / opts.fps;
    let frames = opts.frame_count(script);
    tracing::debug!(frames, fps = opts.fps, widgets = scene.widgets.len(), "replay");

    let mut stats = ReplayStats::default();
    let mut cursor = 0;
    for k in 0..frames {
        let now_ms = k as f64 * interval;
        while let Some(e) = script.events.get(cursor)
            && e.at_ms <= now_ms
        {
            match e.event {
                InputEvent::Scroll { y } => {
                    layout.scroll_to(y);
                    session.on_scroll(layout.scroll_y);
                }
                InputEvent::Resize { width, height } => {
                    let vp = Viewport { width, height };
                    if vp.validate().is_ok() {
                        layout.resize(vp);
                    }
                    session.on_resize(vp);
                }
                ref other => session.apply(other),
            }
            cursor += 1;
            stats.events += 1;
        }

        let f = session.frame(now_ms, &layout, surface);
        stats.frames += 1;
        stats.callbacks += u64::from(f.ran);
        stats.stale += u64::from(f.stale);
        stats.writes += u64::from(f.writes);
    }

    session.dispose();
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/session/replay.rs"]
mod tests;
