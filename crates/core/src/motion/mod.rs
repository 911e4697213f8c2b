//! Animation-synchronized motion
//!
//! The clip generator hooks record when a parkour clip's movement markers
//! fire ([`MotionTimeline`]); the per-frame hooks turn that into a
//! time-normalized player position ([`InterpolationState`]).

pub mod interpolation;
pub mod timeline;

pub use interpolation::{progress, InterpolationState};
pub use timeline::{MotionTimeline, Segment};
