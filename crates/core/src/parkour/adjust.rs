//! Moving the player onto the ledge

use std::time::Duration;

use skyparkour_engine::{PlayerActor, ScriptBridge};
use skyparkour_sdk::NiPoint3;

use super::LedgeType;
use crate::config::ParkourSettings;
use crate::context::ParkourContext;
use crate::tasks;

/// Backward offset for step actions, overriding the probe default
const STEP_BACKWARD_OFFSET: f32 = 30.0;
const GRAB_BACKWARD_OFFSET: f32 = 40.0;

/// Translate the player toward `position`, stopping after `timeout`
///
/// The stop request is issued from the main thread once the worker's delay
/// elapses. Returns `false` if the translate could not be dispatched.
pub fn interpolate_ref_to_position<B: ScriptBridge>(
    bridge: &B,
    position: NiPoint3,
    rotation: NiPoint3,
    speed: f32,
    timeout: Duration,
) -> bool {
    if !bridge.translate_to(position, rotation, speed, 0.0) {
        tracing::warn!("TranslateTo dispatch failed");
        return false;
    }

    let stop = bridge.clone();
    let spawned = tasks::spawn_delayed(timeout, move || {
        if !stop.stop_translation() {
            tracing::debug!("StopTranslation dispatch failed");
        }
    });
    if let Err(e) = spawned {
        tracing::warn!("Failed to spawn translation worker: {}", e);
    }
    true
}

/// Compute the motion target for `ledge` and start translating toward it
///
/// Records the target in `ctx`. A failed (low stamina) action stays in
/// place; no-ledge is not a valid action and only warns.
pub fn adjust_player_position<P, B>(
    ctx: &mut ParkourContext,
    settings: &ParkourSettings,
    ledge: LedgeType,
    player: &P,
    bridge: &B,
) -> Option<NiPoint3>
where
    P: PlayerActor + ?Sized,
    B: ScriptBridge,
{
    let scale = ctx.player_scale;
    let margin = match ledge {
        LedgeType::Failed => return None,
        LedgeType::NoLedge => {
            tracing::warn!("Position was not adjusted, invalid ledge type {}", ledge.code());
            return None;
        }
        LedgeType::StepHigh | LedgeType::StepLow => {
            ctx.backward_adjustment = ctx.player_dir_flat * (STEP_BACKWARD_OFFSET * scale);
            5.0
        }
        LedgeType::Grab => {
            ctx.backward_adjustment = ctx.player_dir_flat * (GRAB_BACKWARD_OFFSET * scale);
            3.0
        }
        _ => 3.0,
    };
    let elevation = settings.elevations.for_ledge(ledge)?;
    let z_adjust = -(elevation - margin) * scale;

    let target = NiPoint3::new(
        ctx.ledge_point.x - ctx.backward_adjustment.x,
        ctx.ledge_point.y - ctx.backward_adjustment.y,
        ctx.ledge_point.z + z_adjust,
    );
    ctx.target_position = target;

    let motion = &settings.motion;
    interpolate_ref_to_position(
        bridge,
        target,
        player.angle(),
        motion.translate_speed,
        Duration::from_millis(motion.translate_timeout_ms),
    );
    Some(target)
}
