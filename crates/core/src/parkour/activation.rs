//! Starting a parkour action from the button press

use skyparkour_engine::{LedgeProbe, PlayerActor};

use super::controls::toggle_controls_for_parkour;
use super::LedgeType;
use crate::config::ParkourSettings;
use crate::context::ParkourContext;

/// Behavior graph variable selecting the parkour animation
pub const LEDGE_GRAPH_VARIABLE: &str = "SkyParkourLedge";

/// TDM tilts the controller while swimming; above this the grab misfires
const TDM_SWIM_PITCH_LIMIT: f32 = 0.5;

/// Minimum fall time before a midair grab is allowed
const MIDAIR_GRAB_FALL_TIME: f32 = 0.17;

const JUMP_STANDING_START: &str = "JumpStandingStart";
const PARKOUR_START_EVENT: &str = "IdleLeverPushStart";

/// Validate and commit to the selected ledge
///
/// On success the end flag is raised, the graph variable is set and the
/// controls are locked. The caller must run [`ready_run`] with the returned
/// ledge on the next frame, once the camera state has caught up.
pub fn try_activate_parkour<P, L>(
    ctx: &mut ParkourContext,
    settings: &ParkourSettings,
    player: &mut P,
    probe: &L,
) -> Option<LedgeType>
where
    P: PlayerActor + ?Sized,
    L: LedgeProbe + ?Sized,
{
    let ledge = ctx.selected_ledge;

    // Conditions may have changed since the last frame
    if !probe.is_parkour_allowed() || ctx.parkour_end_queued {
        player.set_graph_variable_int(LEDGE_GRAPH_VARIABLE, LedgeType::NoLedge.code());
        return None;
    }
    if ledge == LedgeType::NoLedge {
        return None;
    }

    let is_moving = player.is_moving();
    let is_swimming = player.is_swimming();

    if settings.compatibility.true_directional_movement
        && is_swimming
        && player.is_third_person()
        && player.controller_pitch() > TDM_SWIM_PITCH_LIMIT
    {
        return None;
    }

    let fall_time = player.fall_time();
    if ledge == LedgeType::Grab {
        if fall_time < MIDAIR_GRAB_FALL_TIME && !is_swimming {
            return None;
        }
    } else if fall_time > 0.0 {
        return None;
    }

    if settings.smart_parkour_enabled && is_moving && !ledge.is_vault_action() {
        player.set_graph_variable_int(LEDGE_GRAPH_VARIABLE, LedgeType::NoLedge.code());
        return None;
    }

    ctx.parkour_end_queued = true;
    player.set_graph_variable_int(LEDGE_GRAPH_VARIABLE, ledge.code());
    toggle_controls_for_parkour(player, false);

    tracing::debug!(?ledge, "Parkour activated");
    Some(ledge)
}

/// Second half of the activation, one frame later
///
/// Locks the ledge for the whole action and sends the graph event that
/// starts the parkour animation. If the graph rejects it the activation is
/// rolled back.
pub fn ready_run<P: PlayerActor + ?Sized>(
    ctx: &mut ParkourContext,
    player: &mut P,
    ledge: LedgeType,
) -> bool {
    // Directional jumps fail this early
    if ledge == LedgeType::Grab && !player.is_swimming() {
        player.notify_animation_graph(JUMP_STANDING_START);
    }

    ctx.selected_ledge = ledge;
    if player.notify_animation_graph(PARKOUR_START_EVENT) {
        return true;
    }

    tracing::warn!(?ledge, "Behavior graph rejected {}", PARKOUR_START_EVENT);
    cancel_activation(ctx, player);
    false
}

/// Undo an accepted activation before its motion started
pub fn cancel_activation<P: PlayerActor + ?Sized>(ctx: &mut ParkourContext, player: &mut P) {
    ctx.parkour_end_queued = false;
    player.set_graph_variable_int(LEDGE_GRAPH_VARIABLE, LedgeType::NoLedge.code());
    toggle_controls_for_parkour(player, true);
}
