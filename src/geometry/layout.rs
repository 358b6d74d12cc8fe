use std::collections::BTreeMap;

use crate::foundation::core::{ElementId, Rect, Viewport};
use crate::foundation::error::{ScrollFxError, ScrollFxResult};
use crate::geometry::GeometryProvider;

/// One region of a [`StaticLayout`], in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Content width when it overflows horizontally.
    #[serde(default)]
    pub scroll_width: Option<f64>,
    /// Positioned relative to the viewport (does not move with scrolling).
    #[serde(default)]
    pub fixed: bool,
}

impl ElementBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            scroll_width: None,
            fixed: false,
        }
    }

    pub fn with_scroll_width(mut self, w: f64) -> Self {
        self.scroll_width = Some(w);
        self
    }

    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }
}

/// Synthetic page geometry: a viewport, a document height, a scroll offset and a set of
/// element boxes. Used by tests and by the CLI to replay scroll sessions without a browser.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaticLayout {
    pub viewport: Viewport,
    pub document_height: f64,
    #[serde(default)]
    pub scroll_y: f64,
    #[serde(default)]
    pub elements: BTreeMap<ElementId, ElementBox>,
}

impl StaticLayout {
    pub fn new(viewport: Viewport, document_height: f64) -> Self {
        Self {
            viewport,
            document_height,
            scroll_y: 0.0,
            elements: BTreeMap::new(),
        }
    }

    pub fn with_element(mut self, id: ElementId, b: ElementBox) -> Self {
        self.elements.insert(id, b);
        self
    }

    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport.height).max(0.0)
    }

    /// Scroll to `y`, clamped to the scrollable range like a real document.
    pub fn scroll_to(&mut self, y: f64) {
        let y = if y.is_finite() { y } else { 0.0 };
        self.scroll_y = y.clamp(0.0, self.max_scroll());
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let y = self.scroll_y;
        self.scroll_to(y);
    }

    pub fn validate(&self) -> ScrollFxResult<()> {
        self.viewport.validate()?;
        if !(self.document_height.is_finite() && self.document_height >= 0.0) {
            return Err(ScrollFxError::validation(
                "document_height must be finite and >= 0",
            ));
        }
        for (id, b) in &self.elements {
            let finite = [b.x, b.y, b.width, b.height].iter().all(|v| v.is_finite());
            if !finite || b.width < 0.0 || b.height < 0.0 {
                return Err(ScrollFxError::validation(format!(
                    "element {id} must have a finite, non-negative box"
                )));
            }
            if let Some(w) = b.scroll_width
                && !(w.is_finite() && w >= 0.0)
            {
                return Err(ScrollFxError::validation(format!(
                    "element {id} scroll_width must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

impl GeometryProvider for StaticLayout {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn bounding_rect(&self, id: ElementId) -> Option<Rect> {
        let b = self.elements.get(&id)?;
        let top = if b.fixed { b.y } else { b.y - self.scroll_y };
        Some(Rect::new(b.x, top, b.x + b.width, top + b.height))
    }

    fn scroll_width(&self, id: ElementId) -> Option<f64> {
        let b = self.elements.get(&id)?;
        Some(b.scroll_width.unwrap_or(b.width))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/layout.rs"]
mod tests;
