//! Post-parkour stamina cost

use skyparkour_engine::PlayerActor;

use crate::config::ParkourSettings;

pub fn parkour_stamina_cost(settings: &ParkourSettings) -> f32 {
    settings.stamina.base_cost
}

pub fn has_enough_stamina<P: PlayerActor + ?Sized>(settings: &ParkourSettings, player: &P) -> bool {
    player.stamina() >= parkour_stamina_cost(settings)
}

/// Charge the player for a finished action
///
/// Vault-type actions always pay half. Anything else pays in full, or
/// flashes the stamina meter when the player can't afford it.
pub fn post_parkour_stamina_damage<P: PlayerActor + ?Sized>(
    settings: &ParkourSettings,
    player: &mut P,
    is_vault: bool,
) {
    if !settings.enable_stamina_consumption {
        return;
    }

    let cost = parkour_stamina_cost(settings);
    if is_vault {
        player.damage_stamina(cost / 2.0);
    } else if has_enough_stamina(settings, player) {
        player.damage_stamina(cost);
    } else {
        player.flash_stamina_meter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePlayer;

    #[test]
    fn test_vault_pays_half() {
        let settings = ParkourSettings::default();
        let mut player = FakePlayer::new();
        post_parkour_stamina_damage(&settings, &mut player, true);
        assert_eq!(player.stamina_damage, 10.0);
    }

    #[test]
    fn test_climb_pays_full_or_flashes() {
        let settings = ParkourSettings::default();
        let mut player = FakePlayer::new();
        post_parkour_stamina_damage(&settings, &mut player, false);
        assert_eq!(player.stamina_damage, 20.0);

        player.stamina = 5.0;
        post_parkour_stamina_damage(&settings, &mut player, false);
        assert_eq!(player.stamina_damage, 20.0);
        assert_eq!(player.meter_flashes, 1);
    }

    #[test]
    fn test_disabled_consumption() {
        let mut settings = ParkourSettings::default();
        settings.enable_stamina_consumption = false;
        let mut player = FakePlayer::new();
        post_parkour_stamina_damage(&settings, &mut player, false);
        assert_eq!(player.stamina_damage, 0.0);
        assert_eq!(player.meter_flashes, 0);
    }
}
