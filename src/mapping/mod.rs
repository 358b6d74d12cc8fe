pub mod active;
pub mod progress;
