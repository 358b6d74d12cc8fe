//! One manifesto principle: a title revealed glyph by glyph and a description revealed word
//! by word as the item's top edge travels through the middle band of the viewport.

use crate::animation::smoothing::{Motion, Smoothed, Smoothing};
use crate::foundation::core::{ElementId, WidgetId};
use crate::foundation::math::Rng64;
use crate::mapping::progress::{ProgressMapper, ProgressTracker, stagger_progress};
use crate::output::style::{Slot, Style, StyleBatch, Transform, TransformOp};
use crate::schedule::FrameCtx;
use crate::widgets::Widget;

pub const BAND_START: f64 = 0.8;
pub const BAND_END: f64 = 0.2;

const CHAR_START: f64 = 0.25;
const CHAR_SPREAD: f64 = 0.3;
const CHAR_GAIN: f64 = 7.0;
const WORD_START: f64 = 0.6;
const WORD_SPREAD: f64 = 0.2;
const WORD_GAIN: f64 = 12.0;
const JITTER_PX: f64 = 3.0;

pub struct PrincipleReveal {
    item: ElementId,
    glyphs: usize,
    words: usize,
    jitter_seed: Option<u64>,
    mapper: ProgressMapper,
    progress: Smoothed<f64>,
    tracker: ProgressTracker,
}

impl PrincipleReveal {
    pub fn new(item: ElementId, glyphs: usize, words: usize) -> Self {
        Self {
            item,
            glyphs,
            words,
            jitter_seed: None,
            mapper: ProgressMapper::Band {
                start: BAND_START,
                end: BAND_END,
            },
            progress: Smoothed::new(0.0),
            tracker: ProgressTracker::new(0.0),
        }
    }

    /// Shake glyphs slightly while they are mid-reveal. Seeded, so replays are identical.
    pub fn with_jitter(mut self, seed: u64) -> Self {
        self.jitter_seed = Some(seed);
        self
    }

    pub fn with_mapper(mut self, mapper: ProgressMapper) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn progress(&self) -> f64 {
        self.progress.current()
    }

    pub fn glyph_progress(&self, index: usize) -> f64 {
        stagger_progress(self.progress(), CHAR_START, index, self.glyphs, CHAR_SPREAD, CHAR_GAIN)
    }

    pub fn word_progress(&self, index: usize) -> f64 {
        stagger_progress(self.progress(), WORD_START, index, self.words, WORD_SPREAD, WORD_GAIN)
    }

    pub fn cta_opacity(&self) -> f64 {
        ((self.progress() - 0.8) * 5.0).clamp(0.0, 1.0)
    }

    fn jitter(&self, index: usize, cp: f64, now_ms: f64) -> f64 {
        match self.jitter_seed {
            Some(seed) if cp > 0.2 && cp < 0.5 => {
                let mut rng = Rng64::for_key("principle", &[seed, index as u64, now_ms.to_bits()]);
                rng.next_centered() * JITTER_PX
            }
            _ => 0.0,
        }
    }
}

impl Widget for PrincipleReveal {
    fn kind(&self) -> &'static str {
        "principle"
    }

    fn observed_region(&self) -> Option<ElementId> {
        Some(self.item)
    }

    fn update_targets(&mut self, frame: &FrameCtx<'_>) {
        let viewport = frame.geometry.viewport();
        let mapped = frame
            .geometry
            .bounding_rect(self.item)
            .and_then(|r| self.mapper.map(r, viewport));
        self.tracker.update(mapped);
        self.progress.set_target(self.tracker.value());
    }

    fn advance(&mut self, frame: &FrameCtx<'_>, _snap: bool) -> Motion {
        self.progress.step(Smoothing::Immediate, frame.dt_secs)
    }

    fn compose(&self, id: WidgetId, frame: &FrameCtx<'_>, out: &mut StyleBatch) {
        let p = self.progress();

        for i in 0..self.glyphs {
            let cp = self.glyph_progress(i);
            let jitter = self.jitter(i, cp, frame.now_ms);
            let outline = Transform::translate(0.0, (1.0 - cp) * 15.0 + jitter)
                .then(TransformOp::Scale { s: 0.95 + cp * 0.05 });
            out.push(
                Slot::indexed(id, "glyph", i),
                Style::transform(outline).with_opacity(0.2 + cp * 0.8),
            );
            out.push(
                Slot::indexed(id, "glyph_fill", i),
                Style::transform(Transform::translate(jitter * 0.5, 0.0)).with_opacity(cp),
            );
        }

        for i in 0..self.words {
            let wp = self.word_progress(i);
            out.push(
                Slot::indexed(id, "word", i),
                Style::transform(Transform::translate(0.0, (1.0 - wp) * 10.0))
                    .with_opacity(0.1 + wp * 0.9),
            );
        }

        out.push(
            Slot::new(id, "rule"),
            Style::transform(Transform::new().then(TransformOp::ScaleX {
                s: ((p - 0.1) * 2.0).max(0.0),
            })),
        );
        out.push(
            Slot::new(id, "index_line"),
            Style::transform(Transform::new().then(TransformOp::ScaleY { s: p })),
        );
        let cta = self.cta_opacity();
        out.push(
            Slot::new(id, "cta"),
            Style::transform(Transform::translate(0.0, (1.0 - cta) * 20.0)).with_opacity(cta),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/principle.rs"]
mod tests;
