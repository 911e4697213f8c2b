//! Ledge geometry probes
//!
//! The raycast heuristics live on the host side; this is the interface the
//! orchestration layer consumes.

use skyparkour_sdk::{HostApi, NiPoint3, PlayerCharacter};

use crate::globals::HostGlobals;

/// Geometry queries used to pick a ledge in front of the player
pub trait LedgeProbe {
    /// Returns `(ledge type code, ledge point)`
    fn ledge_check(&mut self, check_dir: NiPoint3, min_height: f32, max_height: f32) -> (i32, NiPoint3);

    /// Returns `(ledge type code, vault point)`
    fn vault_check(
        &mut self,
        check_dir: NiPoint3,
        vault_length: f32,
        max_elevation_increase: f32,
        min_height: f32,
        max_height: f32,
    ) -> (i32, NiPoint3);

    /// Water surface height at `at`, if the cell has water
    fn water_height(&self, at: NiPoint3) -> Option<f32>;

    /// Player facing direction projected onto the XY plane, normalized
    fn player_dir_flat(&self) -> NiPoint3;

    /// Whether the player is in a state that allows parkour at all
    fn is_parkour_allowed(&self) -> bool;
}

/// Host-side probe implementation
pub struct HostLedgeProbe {
    api: &'static HostApi,
    player: *mut PlayerCharacter,
}

impl HostLedgeProbe {
    pub fn current(globals: &HostGlobals) -> Option<Self> {
        let api = globals.api();
        let player = unsafe { (api.player)() };
        if player.is_null() {
            return None;
        }
        Some(Self { api, player })
    }
}

impl LedgeProbe for HostLedgeProbe {
    fn ledge_check(&mut self, check_dir: NiPoint3, min_height: f32, max_height: f32) -> (i32, NiPoint3) {
        let mut point = NiPoint3::ZERO;
        let code = unsafe { (self.api.ledge_check)(&mut point, &check_dir, min_height, max_height) };
        (code, point)
    }

    fn vault_check(
        &mut self,
        check_dir: NiPoint3,
        vault_length: f32,
        max_elevation_increase: f32,
        min_height: f32,
        max_height: f32,
    ) -> (i32, NiPoint3) {
        let mut point = NiPoint3::ZERO;
        let code = unsafe {
            (self.api.vault_check)(
                &mut point,
                &check_dir,
                vault_length,
                max_elevation_increase,
                min_height,
                max_height,
            )
        };
        (code, point)
    }

    fn water_height(&self, at: NiPoint3) -> Option<f32> {
        let mut height = 0.0;
        if unsafe { (self.api.water_height)(&at, &mut height) } {
            Some(height)
        } else {
            None
        }
    }

    fn player_dir_flat(&self) -> NiPoint3 {
        let mut out = NiPoint3::ZERO;
        unsafe { (self.api.player_dir_flat)(self.player, &mut out) };
        out
    }

    fn is_parkour_allowed(&self) -> bool {
        unsafe { (self.api.is_parkour_allowed)() }
    }
}
