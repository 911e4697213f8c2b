//! Camera state callbacks (third and first person)
//!
//! While a parkour motion plays, the camera states stop consuming input and
//! their per-frame update drives the player along the current segment.

use skyparkour_engine::PlayerActor;

use crate::config::ParkourSettings;
use crate::context::ParkourContext;
use crate::hooks::Dispatch;

/// Which camera state a callback belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraView {
    ThirdPerson,
    FirstPerson,
}

/// `CanProcess`: deny input to the camera state during a parkour motion
pub fn can_process(ctx: &ParkourContext, settings: &ParkourSettings) -> Dispatch<bool> {
    if settings.mod_enabled && ctx.parkour_in_progress {
        return Dispatch::Override(false);
    }
    Dispatch::Forward
}

/// `Update`: runs before the original camera update every rendered frame
///
/// `frame_delta` is the real time since the last rendered frame.
pub fn update<P: PlayerActor>(
    ctx: &mut ParkourContext,
    settings: &ParkourSettings,
    view: CameraView,
    player: &mut P,
    frame_delta: f32,
) {
    if !ctx.parkour_in_progress {
        return;
    }

    // Keep Havok from pulling the player towards the ground
    player.clear_support_flag();

    match view {
        CameraView::ThirdPerson => {
            // TDM pitches the controller while swimming
            if settings.compatibility.true_directional_movement {
                let clamp = settings.camera.tdm_pitch_clamp;
                let pitch = player.controller_pitch();
                player.set_controller_pitch(limit_pitch(pitch, clamp));
            }
        }
        CameraView::FirstPerson => {
            let clamp = settings.camera.vertical_clamp_angle;
            let pitch = player.angle().x;
            let limited = limit_pitch(pitch, clamp);
            if limited != pitch {
                player.set_look_pitch(limited);
            }
        }
    }

    let start = ctx.player_start_position;
    let target = ctx.target_position;
    let Some(pos) = ctx.motion.sample(&ctx.timeline, start, target) else {
        return;
    };

    ctx.motion.advance(frame_delta);
    tracing::trace!(
        "{:?} size:{} idx:{} accum:{:.4} pos:({:.2}, {:.2}, {:.2})",
        view,
        ctx.timeline.len(),
        ctx.motion.clip_move_index,
        ctx.motion.accum_time,
        pos.x,
        pos.y,
        pos.z
    );
    player.set_position(pos);
}

/// Limit `pitch` to `[-|clamp|, |clamp|]`; a NaN clamp leaves it untouched
fn limit_pitch(pitch: f32, clamp: f32) -> f32 {
    let c = clamp.abs();
    if pitch > c {
        c
    } else if pitch < -c {
        -c
    } else {
        pitch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePlayer;
    use skyparkour_sdk::NiPoint3;

    fn active_context() -> ParkourContext {
        let mut ctx = ParkourContext {
            parkour_in_progress: true,
            player_start_position: NiPoint3::new(0.0, 0.0, 0.0),
            target_position: NiPoint3::new(0.0, 0.0, 100.0),
            ..Default::default()
        };
        ctx.timeline.push(0.2);
        ctx.timeline.push(0.6);
        ctx.timeline.push(1.0);
        ctx.motion.clip_move_index = 2;
        ctx
    }

    #[test]
    fn test_can_process_denies_during_parkour() {
        let settings = ParkourSettings::default();
        let ctx = active_context();
        assert_eq!(can_process(&ctx, &settings), Dispatch::Override(false));
    }

    #[test]
    fn test_can_process_forwards_otherwise() {
        let mut settings = ParkourSettings::default();
        let idle = ParkourContext::default();
        assert_eq!(can_process(&idle, &settings), Dispatch::Forward);

        settings.mod_enabled = false;
        assert_eq!(can_process(&active_context(), &settings), Dispatch::Forward);
    }

    #[test]
    fn test_update_idle_is_noop() {
        let settings = ParkourSettings::default();
        let mut ctx = ParkourContext::default();
        let mut player = FakePlayer::new();

        update(&mut ctx, &settings, CameraView::ThirdPerson, &mut player, 0.016);

        assert_eq!(player.support_cleared, 0);
        assert!(player.set_positions.is_empty());
    }

    #[test]
    fn test_update_interpolates_and_advances() {
        let settings = ParkourSettings::default();
        let mut ctx = active_context();
        ctx.motion.accum_time = 0.2;
        let mut player = FakePlayer::new();

        update(&mut ctx, &settings, CameraView::ThirdPerson, &mut player, 0.05);

        assert_eq!(player.support_cleared, 1);
        assert_eq!(player.set_positions.len(), 1);
        assert!((player.position.z - 50.0).abs() < 1e-3);
        assert!((ctx.motion.accum_time - 0.25).abs() < 1e-6);
        assert_eq!(ctx.timeline.len(), 3);
    }

    #[test]
    fn test_tdm_pitch_clamp() {
        let mut settings = ParkourSettings::default();
        let mut ctx = active_context();
        let mut player = FakePlayer::new();
        player.controller_pitch = 1.2;

        update(&mut ctx, &settings, CameraView::ThirdPerson, &mut player, 0.0);
        assert_eq!(player.controller_pitch, 1.2, "clamp only with TDM");

        settings.compatibility.true_directional_movement = true;
        update(&mut ctx, &settings, CameraView::ThirdPerson, &mut player, 0.0);
        assert_eq!(player.controller_pitch, 0.4);

        player.controller_pitch = -0.9;
        update(&mut ctx, &settings, CameraView::ThirdPerson, &mut player, 0.0);
        assert_eq!(player.controller_pitch, -0.4);
    }

    #[test]
    fn test_first_person_look_clamp() {
        let settings = ParkourSettings::default();
        let mut ctx = active_context();
        let mut player = FakePlayer::new();
        player.angle.x = -1.5;

        update(&mut ctx, &settings, CameraView::FirstPerson, &mut player, 0.0);
        assert_eq!(player.angle.x, -1.0);

        player.angle.x = 0.3;
        update(&mut ctx, &settings, CameraView::FirstPerson, &mut player, 0.0);
        assert_eq!(player.angle.x, 0.3);
    }

    #[test]
    fn test_update_with_empty_timeline_only_clamps() {
        let settings = ParkourSettings::default();
        let mut ctx = active_context();
        ctx.timeline.clear();
        let mut player = FakePlayer::new();

        update(&mut ctx, &settings, CameraView::FirstPerson, &mut player, 0.1);

        assert_eq!(player.support_cleared, 1);
        assert!(player.set_positions.is_empty());
        assert_eq!(ctx.motion.accum_time, 0.0);
    }

    #[test]
    fn test_negative_clamp_does_not_panic() {
        let mut settings = ParkourSettings::default();
        settings.camera.vertical_clamp_angle = -1.0;
        settings.camera.tdm_pitch_clamp = -0.4;
        settings.compatibility.true_directional_movement = true;
        let mut ctx = active_context();
        let mut player = FakePlayer::new();
        player.angle.x = 1.5;
        player.controller_pitch = -0.9;

        update(&mut ctx, &settings, CameraView::FirstPerson, &mut player, 0.0);
        assert_eq!(player.angle.x, 1.0);

        update(&mut ctx, &settings, CameraView::ThirdPerson, &mut player, 0.0);
        assert_eq!(player.controller_pitch, -0.4);
    }

    #[test]
    fn test_nan_clamp_leaves_pitch() {
        let mut settings = ParkourSettings::default();
        settings.camera.vertical_clamp_angle = f32::NAN;
        let mut ctx = active_context();
        let mut player = FakePlayer::new();
        player.angle.x = 1.5;

        update(&mut ctx, &settings, CameraView::FirstPerson, &mut player, 0.0);
        assert_eq!(player.angle.x, 1.5);
    }

    #[test]
    fn test_limit_pitch() {
        assert_eq!(limit_pitch(2.0, 1.0), 1.0);
        assert_eq!(limit_pitch(-2.0, 1.0), -1.0);
        assert_eq!(limit_pitch(0.5, -1.0), 0.5);
        assert_eq!(limit_pitch(-2.0, -1.0), -1.0);
    }
}
