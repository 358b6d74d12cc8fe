//! Output application: numeric state → presentation directives → surface.

pub mod style;
pub mod surface;
