//! C-compatible surface

pub mod exports;
