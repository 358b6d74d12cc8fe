/// Viewport width below which the device is treated as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Hardware concurrency at or below which effects are toned down.
pub const LOW_PERF_CONCURRENCY: u32 = 4;

/// Capability flags that select cheaper effect variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeviceProfile {
    #[serde(default)]
    pub mobile: bool,
    #[serde(default)]
    pub low_perf: bool,
}

impl DeviceProfile {
    pub fn desktop() -> Self {
        Self::default()
    }

    pub fn detect(viewport_width: f64, hardware_concurrency: u32) -> Self {
        DeviceSpec {
            hardware_concurrency,
            breakpoint: MOBILE_BREAKPOINT,
        }
        .profile(viewport_width)
    }
}

/// Static device facts from a scene file; the profile is derived per viewport width.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceSpec {
    #[serde(default = "default_concurrency")]
    pub hardware_concurrency: u32,
    #[serde(default = "default_breakpoint")]
    pub breakpoint: f64,
}

fn default_concurrency() -> u32 {
    8
}

fn default_breakpoint() -> f64 {
    MOBILE_BREAKPOINT
}

impl Default for DeviceSpec {
    fn default() -> Self {
        Self {
            hardware_concurrency: default_concurrency(),
            breakpoint: default_breakpoint(),
        }
    }
}

impl DeviceSpec {
    pub fn profile(&self, viewport_width: f64) -> DeviceProfile {
        let mobile = viewport_width < self.breakpoint;
        DeviceProfile {
            mobile,
            low_perf: mobile || self.hardware_concurrency <= LOW_PERF_CONCURRENCY,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/device.rs"]
mod tests;
