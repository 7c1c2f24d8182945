// crates/shared-kernel/src/value_objects/size.rs
use std::{fmt, ops::Add};

use serde::{Deserialize, Serialize};

/// Volume size in gibibytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeGiB(u64);

impl SizeGiB {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Lossy for sizes above 2^53 GiB, far beyond any real volume.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl Add for SizeGiB {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl From<u64> for SizeGiB {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<u32> for SizeGiB {
    fn from(value: u32) -> Self {
        Self::new(u64::from(value))
    }
}

impl From<SizeGiB> for u64 {
    fn from(value: SizeGiB) -> Self {
        value.0
    }
}

impl fmt::Display for SizeGiB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
