//! Ledge marker placed at the selected parkour point

use skyparkour_sdk::{HostApi, IndicatorStyle, NiPoint3};

use crate::globals::HostGlobals;

/// World marker showing where the next parkour action lands
pub trait LedgeIndicator {
    /// Move the marker of `style` to `at`, facing `yaw` (radians about Z)
    fn place(&mut self, style: IndicatorStyle, at: NiPoint3, yaw: f32);

    fn set_enabled(&mut self, enabled: bool);
}

/// Host-side marker references
pub struct HostIndicator {
    api: &'static HostApi,
}

impl HostIndicator {
    pub fn new(globals: &HostGlobals) -> Self {
        Self { api: globals.api() }
    }
}

impl LedgeIndicator for HostIndicator {
    fn place(&mut self, style: IndicatorStyle, at: NiPoint3, yaw: f32) {
        unsafe { (self.api.indicator_place)(style, &at, yaw) }
    }

    fn set_enabled(&mut self, enabled: bool) {
        unsafe { (self.api.indicator_set_enabled)(enabled) }
    }
}
