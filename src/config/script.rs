use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::ElementId;
use crate::foundation::error::{ScrollFxError, ScrollFxResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    Scroll { y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerLeave,
    Resize { width: f64, height: f64 },
    Hover { target: Option<ElementId> },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimedEvent {
    pub at_ms: f64,
    #[serde(flatten)]
    pub event: InputEvent,
}

/// Timestamped input events to replay against a scene.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollScript {
    #[serde(default)]
    pub events: Vec<TimedEvent>,
}

impl ScrollScript {
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrollFxResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ScrollFxError::serde(format!("parse script JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ScrollFxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrollFxError::config(format!("open script JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Events must carry finite, non-decreasing timestamps.
    pub fn validate(&self) -> ScrollFxResult<()> {
        let mut last = f64::NEG_INFINITY;
        for (i, e) in self.events.iter().enumerate() {
            if !e.at_ms.is_finite() || e.at_ms < 0.0 {
                return Err(ScrollFxError::validation(format!(
                    "events[{i}].at_ms must be finite and >= 0"
                )));
            }
            if e.at_ms < last {
                return Err(ScrollFxError::validation(format!(
                    "events[{i}] is out of order ({} < {last})",
                    e.at_ms
                )));
            }
            last = e.at_ms;
        }
        Ok(())
    }

    /// Timestamp of the last event, or 0 for an empty script.
    pub fn end_ms(&self) -> f64 {
        self.events.last().map_or(0.0, |e| e.at_ms)
    }

    /// Events with `from_ms <= at_ms < to_ms`, in order.
    pub fn window(&self, from_ms: f64, to_ms: f64) -> impl Iterator<Item = &TimedEvent> + '_ {
        self.events
            .iter()
            .filter(move |e| e.at_ms >= from_ms && e.at_ms < to_ms)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/script.rs"]
mod tests;
