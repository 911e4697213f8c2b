//! Ledge selection
//!
//! Runs every frame while the button listener is active and keeps the
//! selected ledge, its point and the approach vectors up to date.

use skyparkour_engine::{LedgeIndicator, LedgeProbe, PlayerActor};
use skyparkour_sdk::NiPoint3;

use super::indicator::place_and_show_indicator;
use super::LedgeType;
use crate::config::ParkourSettings;
use crate::context::ParkourContext;

/// Ledges this far below the water surface are rejected
const WATER_MARGIN: f32 = 10.0;

/// Probe for a ledge in front of the player
///
/// Vaults are probed first when the player is moving (or smart parkour is
/// off), climbable ledges otherwise. On success the ledge point and the
/// approach vectors are cached in `ctx`.
pub fn get_ledge_point<P, L>(
    ctx: &mut ParkourContext,
    settings: &ParkourSettings,
    player: &P,
    probe: &mut L,
) -> LedgeType
where
    P: PlayerActor + ?Sized,
    L: LedgeProbe + ?Sized,
{
    let detection = &settings.detection;
    let scale = ctx.player_scale;
    let dir_flat = probe.player_dir_flat();

    let mut found = (LedgeType::NoLedge.code(), NiPoint3::ZERO);
    if player.is_moving() || !settings.smart_parkour_enabled {
        found = probe.vault_check(
            dir_flat,
            detection.vault_length,
            detection.vault_max_elevation_increase * scale,
            detection.vault_min_height * scale,
            detection.vault_max_height * scale,
        );
    }
    if found.0 == LedgeType::NoLedge.code() {
        found = probe.ledge_check(
            dir_flat,
            detection.climb_min_height * scale,
            detection.climb_max_height * scale,
        );
    }

    let (code, ledge_point) = found;
    let ledge = match LedgeType::from_code(code) {
        Some(LedgeType::NoLedge) => return LedgeType::NoLedge,
        Some(ledge) => ledge,
        None => {
            tracing::warn!("Probe returned unknown ledge type {}", code);
            return LedgeType::NoLedge;
        }
    };

    // Never parkour into water
    if let Some(water) = probe.water_height(player.position()) {
        if ledge_point.z < water - WATER_MARGIN {
            return LedgeType::NoLedge;
        }
    }

    ctx.backward_adjustment = dir_flat * (settings.motion.backward_offset * scale);
    ctx.ledge_point = ledge_point;
    ctx.player_dir_flat = dir_flat;

    ledge
}

/// Per-frame refresh of the selected ledge and its marker
pub fn update_parkour_point<P, L, I>(
    ctx: &mut ParkourContext,
    settings: &ParkourSettings,
    player: &P,
    probe: &mut L,
    indicator: &mut I,
) where
    P: PlayerActor + ?Sized,
    L: LedgeProbe + ?Sized,
    I: LedgeIndicator + ?Sized,
{
    if ctx.parkour_end_queued {
        indicator.set_enabled(false);
        ctx.selected_ledge = LedgeType::NoLedge;
        return;
    }

    ctx.is_parkour_active = probe.is_parkour_allowed();
    ctx.player_scale = player.scale();
    ctx.selected_ledge = get_ledge_point(ctx, settings, player, probe);

    place_and_show_indicator(ctx, settings, player, indicator);
}
