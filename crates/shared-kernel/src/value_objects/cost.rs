// crates/shared-kernel/src/value_objects/cost.rs
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

/// Estimated monthly cost, currency-agnostic.
///
/// The value is kept at full precision; rounding to cents happens only when
/// it is displayed (see [`MonthlyCost::display`]), so sums never accumulate
/// display rounding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyCost(f64);

impl MonthlyCost {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0.0)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Cost as shown to users: two decimals.
    ///
    /// Uses Rust's `{:.2}` formatting: the exact binary value is rounded to
    /// the nearest cent and exact ties go to the even digit. Every output
    /// format goes through this method.
    pub fn display(self) -> String {
        format!("{:.2}", self.0)
    }

    /// Numeric counterpart of [`MonthlyCost::display`], for formats that
    /// carry costs as native numbers.
    pub fn rounded(self) -> f64 {
        self.display().parse().unwrap_or(self.0)
    }
}

impl Add for MonthlyCost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for MonthlyCost {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for MonthlyCost {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a MonthlyCost> for MonthlyCost {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<f64> for MonthlyCost {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for MonthlyCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
