//! Player control masks

use bitflags::bitflags;
use skyparkour_engine::PlayerActor;

bitflags! {
    /// Host user event flags, as taken by `ToggleControls`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ControlFlags: u32 {
        const MOVEMENT = 1 << 0;
        const LOOKING = 1 << 1;
        const ACTIVATE = 1 << 2;
        const MENU = 1 << 3;
        const CONSOLE = 1 << 4;
        const POV_SWITCH = 1 << 5;
        const FIGHTING = 1 << 6;
        const SNEAKING = 1 << 7;
        const MAIN_FOUR = 1 << 8;
        const WHEEL_ZOOM = 1 << 9;
        const JUMPING = 1 << 10;
        const VATS = 1 << 11;

        /// Locked while a parkour motion plays; the camera stays free
        const PARKOUR = Self::MOVEMENT.bits()
            | Self::ACTIVATE.bits()
            | Self::MENU.bits()
            | Self::POV_SWITCH.bits()
            | Self::FIGHTING.bits()
            | Self::SNEAKING.bits()
            | Self::MAIN_FOUR.bits()
            | Self::WHEEL_ZOOM.bits()
            | Self::JUMPING.bits();
    }
}

pub fn toggle_controls_for_parkour<P: PlayerActor + ?Sized>(player: &mut P, enable: bool) {
    player.toggle_controls(ControlFlags::PARKOUR.bits(), enable);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePlayer;

    #[test]
    fn test_parkour_mask_keeps_camera() {
        assert!(!ControlFlags::PARKOUR.contains(ControlFlags::LOOKING));
        assert!(!ControlFlags::PARKOUR.contains(ControlFlags::CONSOLE));
        assert!(ControlFlags::PARKOUR.contains(ControlFlags::MOVEMENT | ControlFlags::JUMPING));
    }

    #[test]
    fn test_toggle_forwards_mask() {
        let mut player = FakePlayer::new();
        toggle_controls_for_parkour(&mut player, false);
        toggle_controls_for_parkour(&mut player, true);
        assert_eq!(
            player.controls,
            vec![
                (ControlFlags::PARKOUR.bits(), false),
                (ControlFlags::PARKOUR.bits(), true)
            ]
        );
    }
}
