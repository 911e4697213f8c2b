//! Ledge marker placement

use skyparkour_engine::{LedgeIndicator, PlayerActor};
use skyparkour_sdk::{IndicatorStyle, NiPoint3};

use super::stamina::has_enough_stamina;
use super::LedgeType;
use crate::config::ParkourSettings;
use crate::context::ParkourContext;

/// The marker floats this far above the ledge point
const INDICATOR_LIFT: f32 = 10.0;

/// Low-stamina style only applies to actions that would be refused for it
pub fn indicator_style<P: PlayerActor + ?Sized>(
    settings: &ParkourSettings,
    ledge: LedgeType,
    player: &P,
) -> IndicatorStyle {
    if settings.enable_stamina_consumption
        && !has_enough_stamina(settings, player)
        && !ledge.is_vault_action()
    {
        IndicatorStyle::LowStamina
    } else {
        IndicatorStyle::Ready
    }
}

/// Move the marker to the selected ledge and show it while parkour is possible
///
/// Returns `false` when indicators are turned off.
pub fn place_and_show_indicator<P, I>(
    ctx: &ParkourContext,
    settings: &ParkourSettings,
    player: &P,
    indicator: &mut I,
) -> bool
where
    P: PlayerActor + ?Sized,
    I: LedgeIndicator + ?Sized,
{
    if !settings.use_indicators {
        return false;
    }

    let ledge = ctx.selected_ledge;
    let style = indicator_style(settings, ledge, player);
    let at = ctx.ledge_point + NiPoint3::new(0.0, 0.0, INDICATOR_LIFT);
    let yaw = ctx.player_dir_flat.x.atan2(ctx.player_dir_flat.y);
    indicator.place(style, at, yaw);

    // `ledge_point` is stale when nothing was found this frame
    indicator.set_enabled(ctx.is_parkour_active && ledge != LedgeType::NoLedge);
    true
}
