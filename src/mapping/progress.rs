//! Pure geometry → progress functions.
//!
//! Every scroll-linked mapper returns `None` instead of dividing by a zero or negative
//! distance; callers keep their previous progress in that case (see [`ProgressTracker`]).

use crate::foundation::core::{PointerSample, Rect, Vec2, Viewport};
use crate::foundation::error::{ScrollFxError, ScrollFxResult};
use crate::foundation::math::clamp01;

#[inline]
fn ratio(num: f64, denom: f64) -> Option<f64> {
    if denom.is_nan() || denom <= 0.0 {
        return None;
    }
    let v = num / denom;
    v.is_finite().then(|| clamp01(v))
}

/// `clamp((anchor - top) / (height - viewport_height), 0, 1)`.
///
/// 0 while the region's leading edge has not reached the anchor line, 1 once the region has
/// scrolled its full scrollable distance past it.
pub fn anchored_progress(anchor: f64, rect: Rect, viewport: Viewport) -> Option<f64> {
    ratio(anchor - rect.y0, rect.height() - viewport.height)
}

/// Progress through a tall section whose content is pinned to the viewport.
pub fn sticky_progress(rect: Rect, viewport: Viewport) -> Option<f64> {
    anchored_progress(0.0, rect, viewport)
}

/// 0 when the region's top enters at the bottom of the viewport, 1 when its bottom leaves at
/// the top.
pub fn pass_through_progress(rect: Rect, viewport: Viewport) -> Option<f64> {
    ratio(viewport.height - rect.y0, viewport.height + rect.height())
}

/// Progress of the region's top edge travelling from `start_frac` to `end_frac` of the
/// viewport height (e.g. 0.8 → 0.2 for a reveal focused in the middle of the screen).
pub fn band_progress(rect: Rect, viewport: Viewport, start_frac: f64, end_frac: f64) -> Option<f64> {
    let start = viewport.height * start_frac;
    let end = viewport.height * end_frac;
    ratio(start - rect.y0, start - end)
}

/// Whole-document scroll progress.
pub fn document_progress(scroll_y: f64, document_height: f64, viewport: Viewport) -> Option<f64> {
    ratio(scroll_y, document_height - viewport.height)
}

/// Pointer offset from the viewport center, each axis in `[-0.5, 0.5]` times `scale`.
pub fn pointer_offset(pointer: PointerSample, viewport: Viewport, scale: f64) -> Vec2 {
    Vec2::new(
        (pointer.x / viewport.width - 0.5) * scale,
        (pointer.y / viewport.height - 0.5) * scale,
    )
}

/// Pointer offset from the center of `rect`, normalized by its size.
pub fn element_pointer_offset(pointer: PointerSample, rect: Rect) -> Option<Vec2> {
    let (w, h) = (rect.width(), rect.height());
    if !(w > 0.0 && h > 0.0) {
        return None;
    }
    Some(Vec2::new(
        (pointer.x - rect.x0) / w - 0.5,
        (pointer.y - rect.y0) / h - 0.5,
    ))
}

/// Pointer displacement from the center of `rect`, in pixels.
pub fn center_offset(pointer: PointerSample, rect: Rect) -> Vec2 {
    pointer.to_point() - rect.center()
}

/// Per-item progress for staggered reveals.
///
/// Item `index` of `count` starts `index / count * spread` after `start` and completes over
/// `1 / gain` of the parent progress.
pub fn stagger_progress(
    progress: f64,
    start: f64,
    index: usize,
    count: usize,
    spread: f64,
    gain: f64,
) -> f64 {
    let offset = if count == 0 {
        0.0
    } else {
        index as f64 / count as f64 * spread
    };
    clamp01((progress - start - offset) * gain)
}

/// Scroll-linked mapping shape. Widgets carry a default one; scene files may override it
/// with a `mapper` object.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProgressMapper {
    Sticky,
    Anchored { anchor: f64 },
    PassThrough,
    Band { start: f64, end: f64 },
}

impl ProgressMapper {
    pub fn map(self, rect: Rect, viewport: Viewport) -> Option<f64> {
        match self {
            Self::Sticky => sticky_progress(rect, viewport),
            Self::Anchored { anchor } => anchored_progress(anchor, rect, viewport),
            Self::PassThrough => pass_through_progress(rect, viewport),
            Self::Band { start, end } => band_progress(rect, viewport, start, end),
        }
    }

    pub fn validate(&self) -> ScrollFxResult<()> {
        match *self {
            Self::Anchored { anchor } if !anchor.is_finite() => {
                Err(ScrollFxError::validation("anchored mapper anchor must be finite"))
            }
            Self::Band { start, end } if !(start.is_finite() && end.is_finite()) || start <= end => {
                Err(ScrollFxError::validation(
                    "band mapper needs finite bounds with start > end",
                ))
            }
            _ => Ok(()),
        }
    }
}

/// Last valid progress; degenerate updates leave it unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProgressTracker {
    value: f64,
}

impl ProgressTracker {
    pub fn new(initial: f64) -> Self {
        Self {
            value: clamp01(initial),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns `true` if the stored progress changed.
    pub fn update(&mut self, next: Option<f64>) -> bool {
        match next {
            Some(v) if v.is_finite() && v != self.value => {
                self.value = clamp01(v);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/progress.rs"]
mod tests;
