//! Player facade
//!
//! [`PlayerActor`] is everything the parkour logic reads from or writes to
//! the player character. [`HostPlayer`] implements it over the host API.

use std::ffi::CString;

use skyparkour_sdk::{CharController, HostApi, NiPoint3, PlayerCharacter};

use crate::globals::HostGlobals;

/// Player character operations used by the hooks and the orchestration layer
pub trait PlayerActor {
    fn position(&self) -> NiPoint3;

    /// Absolute teleport-style set (not physics-integrated)
    fn set_position(&mut self, pos: NiPoint3);

    /// Euler angles (`x` is look pitch)
    fn angle(&self) -> NiPoint3;

    fn set_look_pitch(&mut self, pitch: f32);

    fn scale(&self) -> f32;

    fn is_moving(&self) -> bool;

    fn is_swimming(&self) -> bool;

    fn is_third_person(&self) -> bool;

    /// Clear the character controller's ground-support flag
    fn clear_support_flag(&mut self);

    fn controller_pitch(&self) -> f32;

    fn set_controller_pitch(&mut self, pitch: f32);

    /// Force the character controller state to "in air"
    fn force_in_air(&mut self);

    fn fall_time(&self) -> f32;

    fn set_graph_variable_int(&mut self, name: &str, value: i32) -> bool;

    fn notify_animation_graph(&mut self, event: &str) -> bool;

    /// Enable or disable the player controls in `controls` (bitmask)
    fn toggle_controls(&mut self, controls: u32, enable: bool);

    fn stamina(&self) -> f32;

    fn damage_stamina(&mut self, amount: f32);

    fn flash_stamina_meter(&mut self);
}

/// The live player character, reached through the host API
pub struct HostPlayer {
    api: &'static HostApi,
    player: *mut PlayerCharacter,
    controller: *mut CharController,
}

impl HostPlayer {
    /// Fetch the player singleton
    ///
    /// Returns `None` before the player exists (main menu, loading).
    pub fn current(globals: &HostGlobals) -> Option<Self> {
        let api = globals.api();
        let player = unsafe { (api.player)() };
        if player.is_null() {
            return None;
        }

        let controller = unsafe { (api.char_controller)(player) };

        Some(Self {
            api,
            player,
            controller,
        })
    }
}

impl PlayerActor for HostPlayer {
    fn position(&self) -> NiPoint3 {
        let mut out = NiPoint3::ZERO;
        unsafe { (self.api.get_position)(self.player, &mut out) };
        out
    }

    fn set_position(&mut self, pos: NiPoint3) {
        unsafe { (self.api.set_position)(self.player, &pos) };
    }

    fn angle(&self) -> NiPoint3 {
        let mut out = NiPoint3::ZERO;
        unsafe { (self.api.get_angle)(self.player, &mut out) };
        out
    }

    fn set_look_pitch(&mut self, pitch: f32) {
        unsafe { (self.api.set_angle_x)(self.player, pitch) };
    }

    fn scale(&self) -> f32 {
        unsafe { (self.api.get_scale)(self.player) }
    }

    fn is_moving(&self) -> bool {
        unsafe { (self.api.is_moving)(self.player) }
    }

    fn is_swimming(&self) -> bool {
        unsafe { (self.api.is_swimming)(self.player) }
    }

    fn is_third_person(&self) -> bool {
        unsafe { (self.api.is_third_person)() }
    }

    fn clear_support_flag(&mut self) {
        if !self.controller.is_null() {
            unsafe { (self.api.controller_clear_support)(self.controller) };
        }
    }

    fn controller_pitch(&self) -> f32 {
        if self.controller.is_null() {
            return 0.0;
        }
        unsafe { (self.api.controller_pitch)(self.controller) }
    }

    fn set_controller_pitch(&mut self, pitch: f32) {
        if !self.controller.is_null() {
            unsafe { (self.api.controller_set_pitch)(self.controller, pitch) };
        }
    }

    fn force_in_air(&mut self) {
        if !self.controller.is_null() {
            unsafe { (self.api.controller_set_in_air)(self.controller) };
        }
    }

    fn fall_time(&self) -> f32 {
        if self.controller.is_null() {
            return 0.0;
        }
        unsafe { (self.api.controller_fall_time)(self.controller) }
    }

    fn set_graph_variable_int(&mut self, name: &str, value: i32) -> bool {
        let Ok(name) = CString::new(name) else {
            return false;
        };
        unsafe { (self.api.set_graph_variable_int)(self.player, name.as_ptr(), value) }
    }

    fn notify_animation_graph(&mut self, event: &str) -> bool {
        let Ok(event) = CString::new(event) else {
            return false;
        };
        unsafe { (self.api.notify_animation_graph)(self.player, event.as_ptr()) }
    }

    fn toggle_controls(&mut self, controls: u32, enable: bool) {
        unsafe { (self.api.toggle_controls)(controls, enable) };
    }

    fn stamina(&self) -> f32 {
        unsafe { (self.api.get_stamina)(self.player) }
    }

    fn damage_stamina(&mut self, amount: f32) {
        unsafe { (self.api.damage_stamina)(self.player, amount) };
    }

    fn flash_stamina_meter(&mut self) {
        unsafe { (self.api.flash_stamina_meter)(self.player) };
    }
}
