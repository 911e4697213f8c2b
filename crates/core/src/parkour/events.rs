//! Animation graph events and on/off switching

use skyparkour_engine::{LedgeIndicator, PlayerActor, ScriptBridge};

use super::activation::LEDGE_GRAPH_VARIABLE;
use super::adjust::adjust_player_position;
use super::controls::toggle_controls_for_parkour;
use super::stamina::post_parkour_stamina_damage;
use super::LedgeType;
use crate::config::ParkourSettings;
use crate::context::ParkourContext;

/// Player animation graph events the runtime reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    /// The parkour animation began
    Start,
    /// A movement marker was reached
    Marker,
    /// The parkour animation finished
    Stop,
}

impl AnimationEvent {
    pub fn classify(tag: &str, settings: &ParkourSettings) -> Option<Self> {
        let motion = &settings.motion;
        if tag == motion.start_event {
            Some(AnimationEvent::Start)
        } else if tag == motion.movement_marker {
            Some(AnimationEvent::Marker)
        } else if tag == motion.stop_event {
            Some(AnimationEvent::Stop)
        } else {
            None
        }
    }
}

/// Handle an animation event tag
///
/// Returns the classified event, or `None` if the tag is not ours.
pub fn on_animation_event<P, B>(
    ctx: &mut ParkourContext,
    settings: &ParkourSettings,
    tag: &str,
    player: &mut P,
    bridge: &B,
) -> Option<AnimationEvent>
where
    P: PlayerActor + ?Sized,
    B: ScriptBridge,
{
    let event = AnimationEvent::classify(tag, settings)?;
    match event {
        AnimationEvent::Start => begin_motion(ctx, settings, &*player, bridge),
        AnimationEvent::Marker => {
            if ctx.parkour_in_progress {
                ctx.motion.next_segment();
                ctx.player_start_position = player.position();
            }
        }
        AnimationEvent::Stop => end_motion(ctx, settings, player),
    }
    Some(event)
}

fn begin_motion<P, B>(ctx: &mut ParkourContext, settings: &ParkourSettings, player: &P, bridge: &B)
where
    P: PlayerActor + ?Sized,
    B: ScriptBridge,
{
    ctx.parkour_in_progress = true;
    ctx.timeline.clear();
    ctx.motion.reset();
    ctx.player_start_position = player.position();

    let ledge = ctx.selected_ledge;
    if adjust_player_position(ctx, settings, ledge, player, bridge).is_none() {
        // Nothing to move toward; hold the start position
        ctx.target_position = ctx.player_start_position;
    }
    tracing::debug!(?ledge, "Parkour motion started");
}

fn end_motion<P>(ctx: &mut ParkourContext, settings: &ParkourSettings, player: &mut P)
where
    P: PlayerActor + ?Sized,
{
    if !ctx.parkour_in_progress && !ctx.parkour_end_queued {
        return;
    }

    let ledge = ctx.selected_ledge;
    ctx.parkour_in_progress = false;
    ctx.parkour_end_queued = false;
    player.set_graph_variable_int(LEDGE_GRAPH_VARIABLE, LedgeType::NoLedge.code());
    toggle_controls_for_parkour(player, true);

    if ledge != LedgeType::Failed {
        post_parkour_stamina_damage(settings, player, ledge.is_vault_action());
    }
    tracing::debug!(?ledge, "Parkour motion ended");
}

/// Start or stop listening for the parkour button
///
/// Turning off also hides the ledge marker, restores the controls (when
/// there is a player) and drops all runtime state.
pub fn set_parkour_on_off<P, I>(
    ctx: &mut ParkourContext,
    turn_on: bool,
    player: Option<&mut P>,
    indicator: Option<&mut I>,
) where
    P: PlayerActor + ?Sized,
    I: LedgeIndicator + ?Sized,
{
    if turn_on {
        if !ctx.listening {
            ctx.listening = true;
            tracing::info!("Parkour button - Listening");
        }
        return;
    }

    if ctx.listening {
        ctx.listening = false;
        tracing::info!("Parkour button - Not Listening");
    }
    if let Some(indicator) = indicator {
        indicator.set_enabled(false);
    }
    if let Some(player) = player {
        toggle_controls_for_parkour(player, true);
    }
    ctx.reset_runtime();
}

/// Race switch of the player
///
/// Beast forms disable parkour; returning to a normal race re-enables it
/// when the mod is enabled.
pub fn on_race_switch<P, I>(
    ctx: &mut ParkourContext,
    settings: &ParkourSettings,
    beast_form: bool,
    player: &mut P,
    indicator: &mut I,
) where
    P: PlayerActor + ?Sized,
    I: LedgeIndicator + ?Sized,
{
    if beast_form {
        tracing::info!("Entering Beast Form");
        set_parkour_on_off(ctx, false, Some(player), Some(indicator));
    } else {
        tracing::info!("Exiting Beast Form");
        if settings.mod_enabled {
            set_parkour_on_off(ctx, true, Some(player), Some(indicator));
        }
    }
}
