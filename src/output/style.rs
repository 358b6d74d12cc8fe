use std::fmt::{self, Write as _};

use crate::foundation::core::{Affine, Vec2, WidgetId};

/// Write `v` with at most 4 decimals and no trailing zeros (`1.6`, `-0.25`, `0`).
pub(crate) fn write_num(out: &mut impl fmt::Write, v: f64) -> fmt::Result {
    let v = if v.is_finite() { v } else { 0.0 };
    let rounded = (v * 10_000.0).round() / 10_000.0;
    // Avoid "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let s = format!("{rounded:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    out.write_str(s)
}

/// One step of a transform list. Angles are in degrees, lengths in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformOp {
    Translate { x: f64, y: f64 },
    Translate3d { x: f64, y: f64, z: f64 },
    /// Translation relative to the element's own size.
    TranslatePercent { x: f64, y: f64 },
    Scale { s: f64 },
    Scale3d { x: f64, y: f64, z: f64 },
    ScaleX { s: f64 },
    ScaleY { s: f64 },
    Rotate { deg: f64 },
    RotateX { deg: f64 },
    RotateY { deg: f64 },
}

impl TransformOp {
    fn to_affine(self) -> Option<Affine> {
        Some(match self {
            Self::Translate { x, y } => Affine::translate(Vec2::new(x, y)),
            Self::Translate3d { x, y, z } => {
                if z != 0.0 {
                    return None;
                }
                Affine::translate(Vec2::new(x, y))
            }
            Self::TranslatePercent { .. } => return None,
            Self::Scale { s } => Affine::scale(s),
            Self::Scale3d { x, y, .. } => Affine::scale_non_uniform(x, y),
            Self::ScaleX { s } => Affine::scale_non_uniform(s, 1.0),
            Self::ScaleY { s } => Affine::scale_non_uniform(1.0, s),
            Self::Rotate { deg } => Affine::rotate(deg.to_radians()),
            Self::RotateX { deg } | Self::RotateY { deg } => {
                if deg != 0.0 {
                    return None;
                }
                Affine::IDENTITY
            }
        })
    }
}

fn write_fn(f: &mut fmt::Formatter<'_>, name: &str, args: &[(f64, &str)]) -> fmt::Result {
    f.write_str(name)?;
    f.write_char('(')?;
    for (i, (v, unit)) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_num(f, *v)?;
        f.write_str(unit)?;
    }
    f.write_char(')')
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Translate { x, y } => write_fn(f, "translate", &[(x, "px"), (y, "px")]),
            Self::Translate3d { x, y, z } => {
                write_fn(f, "translate3d", &[(x, "px"), (y, "px"), (z, "px")])
            }
            Self::TranslatePercent { x, y } => write_fn(f, "translate", &[(x, "%"), (y, "%")]),
            Self::Scale { s } => write_fn(f, "scale", &[(s, "")]),
            Self::Scale3d { x, y, z } => write_fn(f, "scale3d", &[(x, ""), (y, ""), (z, "")]),
            Self::ScaleX { s } => write_fn(f, "scaleX", &[(s, "")]),
            Self::ScaleY { s } => write_fn(f, "scaleY", &[(s, "")]),
            Self::Rotate { deg } => write_fn(f, "rotate", &[(deg, "deg")]),
            Self::RotateX { deg } => write_fn(f, "rotateX", &[(deg, "deg")]),
            Self::RotateY { deg } => write_fn(f, "rotateY", &[(deg, "deg")]),
        }
    }
}

/// Ordered transform list, applied left to right like a CSS `transform` value.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Transform {
    ops: Vec<TransformOp>,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, op: TransformOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn translate(x: f64, y: f64) -> Self {
        Self::new().then(TransformOp::Translate { x, y })
    }

    pub fn translate3d(x: f64, y: f64, z: f64) -> Self {
        Self::new().then(TransformOp::Translate3d { x, y, z })
    }

    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Planar matrix for this list, or `None` when it contains genuinely 3D or
    /// size-relative steps.
    pub fn to_affine(&self) -> Option<Affine> {
        self.ops
            .iter()
            .try_fold(Affine::IDENTITY, |acc, op| Some(acc * op.to_affine()?))
    }

    /// Product of the horizontal scale factors in the list.
    pub fn scale_factor(&self) -> f64 {
        self.ops
            .iter()
            .map(|op| match *op {
                TransformOp::Scale { s } | TransformOp::ScaleX { s } => s,
                TransformOp::Scale3d { x, .. } => x,
                _ => 1.0,
            })
            .product()
    }

    /// Sum of the pixel translations in the list.
    pub fn translation(&self) -> Vec2 {
        self.ops.iter().fold(Vec2::ZERO, |acc, op| match *op {
            TransformOp::Translate { x, y } | TransformOp::Translate3d { x, y, .. } => {
                acc + Vec2::new(x, y)
            }
            _ => acc,
        })
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return f.write_str("none");
        }
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// Presentation values for one output slot.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Style {
    pub fn transform(t: Transform) -> Self {
        Self {
            transform: Some(t),
            opacity: None,
        }
    }

    pub fn opacity(o: f64) -> Self {
        Self {
            transform: None,
            opacity: Some(o),
        }
    }

    pub fn with_opacity(mut self, o: f64) -> Self {
        self.opacity = Some(o);
        self
    }

    fn merge(&mut self, other: Style) {
        if other.transform.is_some() {
            self.transform = other.transform;
        }
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
    }
}

/// Output target: one widget part, optionally indexed (grid items, glyphs, words).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Slot {
    pub widget: WidgetId,
    pub part: &'static str,
    pub index: u32,
}

impl Slot {
    pub fn new(widget: WidgetId, part: &'static str) -> Self {
        Self {
            widget,
            part,
            index: 0,
        }
    }

    pub fn indexed(widget: WidgetId, part: &'static str, index: usize) -> Self {
        Self {
            widget,
            part,
            index: u32::try_from(index).unwrap_or(u32::MAX),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.widget, self.part, self.index)
    }
}

/// A style together with its text form, formatted once per frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderedStyle {
    #[serde(skip)]
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<String>,
}

impl RenderedStyle {
    pub fn render(style: Style) -> Self {
        let transform = style.transform.as_ref().map(|t| t.to_string());
        let opacity = style.opacity.map(|o| {
            let mut s = String::new();
            // Writing into a String cannot fail.
            let _ = write_num(&mut s, o.clamp(0.0, 1.0));
            s
        });
        Self {
            style,
            transform,
            opacity,
        }
    }
}

/// Styles collected during one widget frame.
///
/// Widgets push numeric styles; [`StyleBatch::render`] formats every slot exactly once,
/// however many consumers read the result.
#[derive(Clone, Debug, Default)]
pub struct StyleBatch {
    entries: Vec<(Slot, Style)>,
}

impl StyleBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a style; pushing the same slot twice merges, later values win.
    pub fn push(&mut self, slot: Slot, style: Style) {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(s, _)| *s == slot) {
            existing.merge(style);
        } else {
            self.entries.push((slot, style));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn render(&mut self) -> Vec<(Slot, RenderedStyle)> {
        self.entries
            .drain(..)
            .map(|(slot, style)| (slot, RenderedStyle::render(style)))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/style.rs"]
mod tests;
