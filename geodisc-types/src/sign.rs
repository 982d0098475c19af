use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which square-root branch a coordinate came from.
///
/// Serialized as the integer `-1`, `0` or `1`. `Unset` means no stage has assigned a
/// branch yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum BranchSign {
    Negative,
    #[default]
    Unset,
    Positive,
}

impl BranchSign {
    pub fn value(self) -> i8 {
        match self {
            BranchSign::Negative => -1,
            BranchSign::Unset => 0,
            BranchSign::Positive => 1,
        }
    }

    pub fn is_set(self) -> bool {
        !matches!(self, BranchSign::Unset)
    }

    /// Multiplies `w` by this sign. `Unset` collapses `w` to zero.
    pub fn apply(self, w: Complex64) -> Complex64 {
        w * f64::from(self.value())
    }
}

impl From<BranchSign> for i8 {
    fn from(sign: BranchSign) -> Self {
        sign.value()
    }
}

impl TryFrom<i8> for BranchSign {
    type Error = InvalidBranchSign;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(BranchSign::Negative),
            0 => Ok(BranchSign::Unset),
            1 => Ok(BranchSign::Positive),
            other => Err(InvalidBranchSign(other)),
        }
    }
}

impl fmt::Display for BranchSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchSign::Negative => f.write_str("-1"),
            BranchSign::Unset => f.write_str("0"),
            BranchSign::Positive => f.write_str("+1"),
        }
    }
}

/// A raw integer outside `{-1, 0, 1}` was offered as a branch sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBranchSign(pub i8);

impl fmt::Display for InvalidBranchSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "branch sign must be -1, 0 or 1, got {}", self.0)
    }
}

impl std::error::Error for InvalidBranchSign {}
