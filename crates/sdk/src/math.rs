//! Engine vector math
//!
//! Mirrors the engine's `NiPoint3` so it can cross the FFI boundary by value.

use std::ops::{Add, Mul, Sub};

/// Engine 3-vector (world units)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NiPoint3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl NiPoint3 {
    pub const ZERO: NiPoint3 = NiPoint3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Linear interpolation: `a + (b - a) * alpha`
    pub fn lerp(a: NiPoint3, b: NiPoint3, alpha: f32) -> NiPoint3 {
        a + (b - a) * alpha
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Add for NiPoint3 {
    type Output = NiPoint3;

    fn add(self, rhs: NiPoint3) -> NiPoint3 {
        NiPoint3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for NiPoint3 {
    type Output = NiPoint3;

    fn sub(self, rhs: NiPoint3) -> NiPoint3 {
        NiPoint3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for NiPoint3 {
    type Output = NiPoint3;

    fn mul(self, rhs: f32) -> NiPoint3 {
        NiPoint3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
