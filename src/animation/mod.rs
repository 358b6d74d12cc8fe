pub mod ease;
pub mod smoothing;
