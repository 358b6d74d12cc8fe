//! Geometry queries, abstracted away from any real rendering surface.
//!
//! All rects returned by a [`GeometryProvider`] are in viewport coordinates (the equivalent of
//! a bounding client rect): `y0` is the distance of the region's top edge from the top of the
//! viewport, negative once it has scrolled past.

pub mod layout;

use crate::foundation::core::{ElementId, Rect, Viewport};

pub use layout::{ElementBox, StaticLayout};

pub trait GeometryProvider {
    fn viewport(&self) -> Viewport;

    /// Current vertical scroll offset of the document.
    fn scroll_y(&self) -> f64;

    /// Total scrollable height of the document.
    fn document_height(&self) -> f64;

    /// Viewport-relative bounding box of `id`, if the element exists.
    fn bounding_rect(&self, id: ElementId) -> Option<Rect>;

    /// Intrinsic content width (e.g. a horizontally overflowing track).
    fn scroll_width(&self, id: ElementId) -> Option<f64> {
        self.bounding_rect(id).map(|r| r.width())
    }
}

/// Fraction of `rect`'s area that lies inside the viewport, in `[0, 1]`.
///
/// Zero-area regions count as fully visible while they touch the viewport, matching how an
/// intersection observer reports empty targets.
pub fn intersection_ratio(rect: Rect, viewport: Viewport) -> f64 {
    let vp = viewport.rect();
    let area = rect.area();
    if area <= 0.0 {
        let touches = rect.x0 <= vp.x1 && rect.x1 >= vp.x0 && rect.y0 <= vp.y1 && rect.y1 >= vp.y0;
        return if touches { 1.0 } else { 0.0 };
    }
    let overlap = rect.intersect(vp);
    (overlap.area() / area).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mod.rs"]
mod tests;
