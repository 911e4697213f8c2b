//! Shared parkour runtime state
//!
//! The flags the orchestration layer writes and the hook callbacks read,
//! together with the active clip's timeline and interpolation state.
//!
//! All access is confined to the host's main thread. The global instance is
//! behind a mutex whose guard acts as the single-owner token for one callback;
//! a re-entrant callback that finds the context taken skips its enhancement
//! and only forwards.

use std::sync::LazyLock;

use parking_lot::Mutex;
use skyparkour_sdk::NiPoint3;

use crate::motion::{InterpolationState, MotionTimeline};
use crate::parkour::LedgeType;

/// Runtime variables for one parkour session
#[derive(Debug, Clone)]
pub struct ParkourContext {
    /// A scripted parkour motion is playing
    pub parkour_in_progress: bool,
    /// The player is in a state that allows parkour (refreshed every frame)
    pub is_parkour_active: bool,
    /// An activation was accepted; no new one until the motion ends
    pub parkour_end_queued: bool,
    /// Button listener registered (off in beast form or when disabled)
    pub listening: bool,

    pub selected_ledge: LedgeType,
    pub ledge_point: NiPoint3,
    pub player_dir_flat: NiPoint3,
    pub backward_adjustment: NiPoint3,
    pub player_scale: f32,

    pub player_start_position: NiPoint3,
    pub target_position: NiPoint3,

    pub timeline: MotionTimeline,
    pub motion: InterpolationState,
}

impl Default for ParkourContext {
    fn default() -> Self {
        Self {
            parkour_in_progress: false,
            is_parkour_active: false,
            parkour_end_queued: false,
            listening: false,
            selected_ledge: LedgeType::NoLedge,
            ledge_point: NiPoint3::ZERO,
            player_dir_flat: NiPoint3::ZERO,
            backward_adjustment: NiPoint3::ZERO,
            player_scale: 1.0,
            player_start_position: NiPoint3::ZERO,
            target_position: NiPoint3::ZERO,
            timeline: MotionTimeline::new(),
            motion: InterpolationState::default(),
        }
    }
}

impl ParkourContext {
    /// Reset everything a session may have left behind, keeping listener state
    pub fn reset_runtime(&mut self) {
        let listening = self.listening;
        *self = Self {
            listening,
            ..Self::default()
        };
    }
}

static CONTEXT: LazyLock<Mutex<ParkourContext>> =
    LazyLock::new(|| Mutex::new(ParkourContext::default()));

/// Run `f` with exclusive access to the shared context
pub fn with_context<R>(f: impl FnOnce(&mut ParkourContext) -> R) -> R {
    f(&mut CONTEXT.lock())
}

/// Like [`with_context`], but returns `None` instead of blocking when the
/// context is already held further up the call stack
pub fn try_with_context<R>(f: impl FnOnce(&mut ParkourContext) -> R) -> Option<R> {
    CONTEXT.try_lock().map(|mut ctx| f(&mut ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_keeps_listener_state() {
        let mut ctx = ParkourContext {
            listening: true,
            parkour_in_progress: true,
            selected_ledge: LedgeType::High,
            ..Default::default()
        };
        ctx.timeline.push(0.3);
        ctx.motion.clip_move_index = 2;

        ctx.reset_runtime();

        assert!(ctx.listening);
        assert!(!ctx.parkour_in_progress);
        assert_eq!(ctx.selected_ledge, LedgeType::NoLedge);
        assert!(ctx.timeline.is_empty());
        assert_eq!(ctx.motion.clip_move_index, 0);
    }

    #[test]
    fn test_try_with_context_is_not_reentrant() {
        let _shared = crate::testing::lock_shared_context();
        let nested = with_context(|_| try_with_context(|_| ()));
        assert!(nested.is_none());
        assert!(try_with_context(|_| ()).is_some());
    }
}
