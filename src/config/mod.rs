//! JSON scene and input-script loading.

pub mod device;
pub mod scene;
pub mod script;

pub use device::{DeviceProfile, DeviceSpec};
pub use scene::{CursorLabel, SceneConfig, WidgetSpec};
pub use script::{InputEvent, ScrollScript, TimedEvent};
