//! Clip generator callbacks
//!
//! `activate` records the movement marker timestamps of the clip that starts
//! playing during a parkour motion, `update` moves the player along the
//! current segment on the animation timestep, and `deactivate` drops the
//! timeline once the motion has ended.

use skyparkour_engine::{ClipSource, PlayerActor};

use crate::config::ParkourSettings;
use crate::context::ParkourContext;

/// Runs after the original `Activate`
///
/// Returns the number of marker timestamps recorded.
pub fn activate<C: ClipSource + ?Sized>(
    ctx: &mut ParkourContext,
    settings: &ParkourSettings,
    clip: &C,
) -> usize {
    if !ctx.parkour_in_progress || !ctx.timeline.is_empty() || !ctx.is_parkour_active {
        return 0;
    }

    let marker = settings.motion.movement_marker.as_str();
    for trigger in clip.triggers().iter().filter(|t| t.is_annotation) {
        // No string table means the name can't be resolved
        let Some(name) = clip.event_name(trigger.event_id) else {
            continue;
        };
        if name == marker {
            ctx.timeline.push(trigger.local_time);
        }
    }

    if !ctx.timeline.is_empty() {
        tracing::info!(
            clip = clip.animation_name().as_deref().unwrap_or("<unnamed>"),
            "Recorded {} movement markers: {:?}",
            ctx.timeline.len(),
            ctx.timeline.timestamps()
        );
    }
    ctx.timeline.len()
}

/// Runs before the original `Update`
pub fn update<P: PlayerActor>(ctx: &mut ParkourContext, player: &mut P, timestep: f32) {
    if !ctx.parkour_in_progress {
        return;
    }

    let start = ctx.player_start_position;
    let target = ctx.target_position;
    let Some(pos) = ctx.motion.sample(&ctx.timeline, start, target) else {
        return;
    };

    player.force_in_air();
    player.set_position(pos);
    ctx.motion.advance(timestep);
    tracing::trace!(
        "Clip size:{} idx:{} accum:{:.4} pos:({:.2}, {:.2}, {:.2})",
        ctx.timeline.len(),
        ctx.motion.clip_move_index,
        ctx.motion.accum_time,
        pos.x,
        pos.y,
        pos.z
    );
}

/// Runs before the original `Deactivate`
pub fn deactivate(ctx: &mut ParkourContext) {
    if ctx.parkour_in_progress || ctx.timeline.is_empty() {
        return;
    }

    tracing::info!(
        "Clip deactivated, dropping timeline {:?}",
        ctx.timeline.timestamps()
    );
    ctx.timeline.clear();
    ctx.motion.reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeClip, FakePlayer};
    use skyparkour_sdk::{ClipTrigger, NiPoint3};

    fn running_context() -> ParkourContext {
        ParkourContext {
            parkour_in_progress: true,
            is_parkour_active: true,
            player_start_position: NiPoint3::new(10.0, 0.0, 0.0),
            target_position: NiPoint3::new(10.0, 0.0, 80.0),
            ..Default::default()
        }
    }

    fn parkour_clip() -> FakeClip {
        FakeClip::with_annotations(&[
            (0.1, "SoundPlay.NPCHumanFootstep"),
            (0.2, "SPPF_Move"),
            (0.6, "SPPF_Move"),
            (0.8, "SkyParkour_Stop"),
            (1.0, "SPPF_Move"),
        ])
    }

    #[test]
    fn test_activate_records_marker_times() {
        let settings = ParkourSettings::default();
        let mut ctx = running_context();

        let recorded = activate(&mut ctx, &settings, &parkour_clip());

        assert_eq!(recorded, 3);
        assert_eq!(ctx.timeline.timestamps(), &[0.2, 0.6, 1.0]);
    }

    #[test]
    fn test_activate_requires_running_parkour() {
        let settings = ParkourSettings::default();

        let mut idle = ParkourContext::default();
        assert_eq!(activate(&mut idle, &settings, &parkour_clip()), 0);
        assert!(idle.timeline.is_empty());

        let mut inactive = running_context();
        inactive.is_parkour_active = false;
        assert_eq!(activate(&mut inactive, &settings, &parkour_clip()), 0);
        assert!(inactive.timeline.is_empty());
    }

    #[test]
    fn test_activate_keeps_existing_timeline() {
        let settings = ParkourSettings::default();
        let mut ctx = running_context();
        ctx.timeline.push(0.5);

        activate(&mut ctx, &settings, &parkour_clip());

        assert_eq!(ctx.timeline.timestamps(), &[0.5]);
    }

    #[test]
    fn test_activate_skips_unresolvable_triggers() {
        let settings = ParkourSettings::default();
        let mut ctx = running_context();

        let mut no_table = parkour_clip();
        no_table.event_names = None;
        assert_eq!(activate(&mut ctx, &settings, &no_table), 0);

        let mut mixed = parkour_clip();
        mixed.triggers.push(ClipTrigger {
            local_time: 1.4,
            event_id: 99,
            is_annotation: true,
        });
        mixed.triggers.push(ClipTrigger {
            local_time: 1.6,
            event_id: 1,
            is_annotation: false,
        });
        assert_eq!(activate(&mut ctx, &settings, &mixed), 3);
    }

    #[test]
    fn test_update_moves_player_on_timestep() {
        let mut ctx = running_context();
        for t in [0.2, 0.6, 1.0] {
            ctx.timeline.push(t);
        }
        ctx.motion.clip_move_index = 2;
        ctx.motion.accum_time = 0.2;
        let mut player = FakePlayer::new();

        update(&mut ctx, &mut player, 0.1);

        assert_eq!(player.in_air_forced, 1);
        assert!((player.position - NiPoint3::new(10.0, 0.0, 40.0)).length() < 1e-4);
        assert!((ctx.motion.accum_time - 0.3).abs() < 1e-6);
        assert_eq!(ctx.timeline.len(), 3);
    }

    #[test]
    fn test_update_holds_start_before_first_marker() {
        let mut ctx = running_context();
        ctx.timeline.push(0.3);
        let mut player = FakePlayer::new();

        update(&mut ctx, &mut player, 0.5);

        assert_eq!(player.position, ctx.player_start_position);
        assert_eq!(ctx.motion.accum_time, 0.5);
    }

    #[test]
    fn test_update_skips_without_timeline_or_parkour() {
        let mut player = FakePlayer::new();

        let mut empty = running_context();
        update(&mut empty, &mut player, 0.1);

        let mut idle = ParkourContext::default();
        idle.timeline.push(0.2);
        update(&mut idle, &mut player, 0.1);

        assert_eq!(player.in_air_forced, 0);
        assert!(player.set_positions.is_empty());
        assert_eq!(idle.motion.accum_time, 0.0);
    }

    #[test]
    fn test_deactivate_clears_after_motion() {
        let mut ctx = running_context();
        ctx.timeline.push(0.2);
        ctx.motion.clip_move_index = 1;
        ctx.motion.accum_time = 0.4;

        deactivate(&mut ctx);
        assert_eq!(ctx.timeline.len(), 1, "still in progress");

        ctx.parkour_in_progress = false;
        deactivate(&mut ctx);
        assert!(ctx.timeline.is_empty());
        assert_eq!(ctx.motion.clip_move_index, 0);
        assert_eq!(ctx.motion.accum_time, 0.0);
    }
}
