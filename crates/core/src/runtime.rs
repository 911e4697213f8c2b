//! Host-facing entry points
//!
//! Binds the orchestration layer to the live host objects. Everything here
//! runs on the main thread, called from the plugin exports, frame callbacks
//! or queued tasks. Missing host objects are skipped silently.

use skyparkour_engine::{
    is_main_thread, try_host, HostGlobals, HostIndicator, HostLedgeProbe, HostPlayer,
    HostScriptBridge,
};

use crate::config;
use crate::context::{try_with_context, with_context};
use crate::frame::{self, FrameKey};
use crate::parkour::{self, AnimationEvent, LedgeType};
use crate::tasks;

fn main_thread_host() -> Option<&'static HostGlobals> {
    let host = try_host()?;
    if !is_main_thread() {
        tracing::warn!("Host entry point called off the main thread, ignoring");
        return None;
    }
    Some(host)
}

/// Per-frame ledge and marker refresh while the button listener is active
pub fn update_parkour_point() {
    let settings = config::settings();
    if !settings.mod_enabled {
        return;
    }
    let Some(host) = main_thread_host() else {
        return;
    };
    let (Some(player), Some(mut probe)) = (HostPlayer::current(host), HostLedgeProbe::current(host))
    else {
        return;
    };

    let mut indicator = HostIndicator::new(host);

    try_with_context(|ctx| {
        if ctx.listening {
            parkour::update_parkour_point(ctx, &settings, &player, &mut probe, &mut indicator);
        }
    });
}

/// Register the per-frame ledge refresh
pub fn register_frame_update() -> FrameKey {
    frame::register_frame_callback(|_| update_parkour_point())
}

/// The parkour button was pressed
///
/// Returns `true` if an action was accepted; its second half runs next frame.
pub fn parkour_button_pressed() -> bool {
    let settings = config::settings();
    let Some(host) = main_thread_host() else {
        return false;
    };
    let (Some(mut player), Some(probe)) = (HostPlayer::current(host), HostLedgeProbe::current(host))
    else {
        return false;
    };

    let activated = with_context(|ctx| {
        if !ctx.listening {
            return None;
        }
        parkour::try_activate_parkour(ctx, &settings, &mut player, &probe)
    });
    let Some(ledge) = activated else {
        return false;
    };

    // The camera state must update before the animation starts
    if tasks::queue_task(move || ready_run(ledge)).is_err() {
        tracing::warn!(?ledge, "Could not schedule parkour start, releasing controls");
        with_context(|ctx| parkour::cancel_activation(ctx, &mut player));
        return false;
    }
    true
}

fn ready_run(ledge: LedgeType) {
    let Some(host) = main_thread_host() else {
        return;
    };
    let Some(mut player) = HostPlayer::current(host) else {
        return;
    };
    with_context(|ctx| parkour::ready_run(ctx, &mut player, ledge));
}

/// Animation graph event on the player
pub fn animation_event(tag: &str) -> Option<AnimationEvent> {
    let settings = config::settings();
    let host = main_thread_host()?;
    let mut player = HostPlayer::current(host)?;
    let bridge = HostScriptBridge::for_player(host)?;

    with_context(|ctx| parkour::on_animation_event(ctx, &settings, tag, &mut player, &bridge))
}

/// Race switch of the player
pub fn race_switch(beast_form: bool) {
    let settings = config::settings();
    let Some(host) = main_thread_host() else {
        return;
    };
    let Some(mut player) = HostPlayer::current(host) else {
        return;
    };
    let mut indicator = HostIndicator::new(host);
    with_context(|ctx| {
        parkour::on_race_switch(ctx, &settings, beast_form, &mut player, &mut indicator)
    });
}

/// Enable or disable parkour at runtime
///
/// Works before a player exists (at load, in the main menu).
pub fn set_parkour_enabled(enabled: bool) {
    let host = main_thread_host();
    let mut player = host.and_then(HostPlayer::current);
    let mut indicator = host.map(HostIndicator::new);
    with_context(|ctx| {
        parkour::set_parkour_on_off(ctx, enabled, player.as_mut(), indicator.as_mut())
    });
}
