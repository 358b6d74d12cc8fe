use crate::foundation::core::ElementId;
use crate::geometry::GeometryProvider;

/// Tracks which of several sections is "current" for navigation highlighting.
///
/// The first section in document order whose box straddles the anchor line wins. When no
/// section straddles it (gaps, page top, past the last section) the previous answer sticks.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSectionTracker {
    sections: Vec<ElementId>,
    anchor_fraction: f64,
    active: Option<ElementId>,
}

impl ActiveSectionTracker {
    pub const DEFAULT_ANCHOR_FRACTION: f64 = 1.0 / 3.0;

    pub fn new(sections: Vec<ElementId>, anchor_fraction: f64) -> Self {
        Self {
            sections,
            anchor_fraction,
            active: None,
        }
    }

    pub fn sections(&self) -> &[ElementId] {
        &self.sections
    }

    pub fn active(&self) -> Option<ElementId> {
        self.active
    }

    /// The section straddling the anchor line right now, ignoring history.
    pub fn straddling(&self, geometry: &dyn GeometryProvider) -> Option<ElementId> {
        let anchor = geometry.viewport().height * self.anchor_fraction;
        self.sections.iter().copied().find(|&id| {
            geometry
                .bounding_rect(id)
                .is_some_and(|r| r.y0 <= anchor && r.y1 >= anchor)
        })
    }

    /// Re-evaluate; returns the new active section only when it changed.
    pub fn update(&mut self, geometry: &dyn GeometryProvider) -> Option<ElementId> {
        let found = self.straddling(geometry)?;
        if self.active == Some(found) {
            return None;
        }
        tracing::debug!(section = %found, "active section changed");
        self.active = Some(found);
        Some(found)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/active.rs"]
mod tests;
