//! Parkour orchestration
//!
//! Ledge selection and its marker, activation, position adjustment and the animation
//! events that bracket a parkour motion. Everything here runs on the main
//! thread with the shared context borrowed.

pub mod activation;
pub mod adjust;
pub mod controls;
pub mod detect;
pub mod events;
pub mod indicator;
pub mod ledge;
pub mod stamina;

pub use activation::{cancel_activation, ready_run, try_activate_parkour, LEDGE_GRAPH_VARIABLE};
pub use adjust::{adjust_player_position, interpolate_ref_to_position};
pub use controls::{toggle_controls_for_parkour, ControlFlags};
pub use detect::{get_ledge_point, update_parkour_point};
pub use events::{on_animation_event, on_race_switch, set_parkour_on_off, AnimationEvent};
pub use indicator::{indicator_style, place_and_show_indicator};
pub use ledge::LedgeType;
pub use stamina::{has_enough_stamina, parkour_stamina_cost, post_parkour_stamina_damage};
