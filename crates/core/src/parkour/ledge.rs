//! Ledge classification

/// Discrete classification of a detected climbable/vaultable surface
///
/// The discriminants are the host-side codes, shared with the behavior graph
/// variable `SkyParkourLedge` and the geometry probes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedgeType {
    #[default]
    NoLedge = -1,
    /// Low stamina animation
    Failed = 0,
    /// Midair or out of water
    Grab = 1,
    Vault = 2,
    StepLow = 3,
    StepHigh = 4,
    Low = 5,
    Medium = 6,
    High = 7,
    Highest = 8,
}

impl LedgeType {
    /// Map a host code; unknown codes yield `None`
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            -1 => LedgeType::NoLedge,
            0 => LedgeType::Failed,
            1 => LedgeType::Grab,
            2 => LedgeType::Vault,
            3 => LedgeType::StepLow,
            4 => LedgeType::StepHigh,
            5 => LedgeType::Low,
            6 => LedgeType::Medium,
            7 => LedgeType::High,
            8 => LedgeType::Highest,
            _ => return None,
        })
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Actions performed without stopping (allowed while moving with smart parkour)
    pub fn is_vault_action(self) -> bool {
        matches!(self, LedgeType::Vault | LedgeType::StepLow | LedgeType::StepHigh)
    }
}
