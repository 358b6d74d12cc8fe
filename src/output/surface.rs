use std::collections::BTreeMap;
use std::io::Write;

use crate::foundation::core::WidgetId;
use crate::output::style::{RenderedStyle, Slot};

/// Destination for formatted styles.
///
/// Writes are fire-and-forget: a surface that cannot apply a style drops it, and the next
/// frame overwrites it anyway.
pub trait OutputSurface {
    /// Called once at the start of every session frame.
    fn begin_frame(&mut self, _frame: u64, _now_ms: f64) {}

    fn write(&mut self, slot: Slot, style: &RenderedStyle);
}

/// In-memory surface keeping the latest style per slot and write counters.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    frame: u64,
    latest: BTreeMap<Slot, RenderedStyle>,
    writes_per_widget: BTreeMap<WidgetId, u64>,
    history: Vec<(u64, Slot, RenderedStyle)>,
    keep_history: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also keep every write, in order, for trajectory assertions.
    pub fn with_history() -> Self {
        Self {
            keep_history: true,
            ..Self::default()
        }
    }

    pub fn get(&self, slot: &Slot) -> Option<&RenderedStyle> {
        self.latest.get(slot)
    }

    pub fn total_writes(&self) -> u64 {
        self.writes_per_widget.values().sum()
    }

    pub fn writes_for(&self, widget: WidgetId) -> u64 {
        self.writes_per_widget.get(&widget).copied().unwrap_or(0)
    }

    pub fn history(&self) -> &[(u64, Slot, RenderedStyle)] {
        &self.history
    }

    /// Every recorded write to `slot`, in order.
    pub fn trajectory<'a>(&'a self, slot: &'a Slot) -> impl Iterator<Item = &'a RenderedStyle> + 'a {
        self.history
            .iter()
            .filter(move |(_, s, _)| s == slot)
            .map(|(_, _, r)| r)
    }
}

impl OutputSurface for RecordingSurface {
    fn begin_frame(&mut self, frame: u64, _now_ms: f64) {
        self.frame = frame;
    }

    fn write(&mut self, slot: Slot, style: &RenderedStyle) {
        *self.writes_per_widget.entry(slot.widget).or_default() += 1;
        if self.keep_history {
            self.history.push((self.frame, slot, style.clone()));
        }
        self.latest.insert(slot, style.clone());
    }
}

#[derive(serde::Serialize)]
struct JsonLine<'a> {
    frame: u64,
    t_ms: f64,
    slot: String,
    #[serde(flatten)]
    style: &'a RenderedStyle,
}

/// Streams one JSON object per write (`{"frame":..,"slot":..,"transform":..}`).
///
/// The first IO error is kept and reported by [`JsonLinesSurface::finish`]; later writes are
/// dropped.
pub struct JsonLinesSurface<W: Write> {
    out: W,
    frame: u64,
    now_ms: f64,
    lines: u64,
    error: Option<std::io::Error>,
}

impl<W: Write> JsonLinesSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            frame: 0,
            now_ms: 0.0,
            lines: 0,
            error: None,
        }
    }

    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    pub fn finish(mut self) -> std::io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> OutputSurface for JsonLinesSurface<W> {
    fn begin_frame(&mut self, frame: u64, now_ms: f64) {
        self.frame = frame;
        self.now_ms = now_ms;
    }

    fn write(&mut self, slot: Slot, style: &RenderedStyle) {
        if self.error.is_some() {
            return;
        }
        let line = JsonLine {
            frame: self.frame,
            t_ms: self.now_ms,
            slot: slot.to_string(),
            style,
        };
        let res = serde_json::to_writer(&mut self.out, &line)
            .map_err(std::io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        match res {
            Ok(()) => self.lines += 1,
            Err(e) => {
                tracing::warn!(error = %e, "json surface write failed, dropping further output");
                self.error = Some(e);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/surface.rs"]
mod tests;
