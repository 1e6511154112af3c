//! Utilities functions which do not linked to domain

use std::ops::{Div, Neg, Rem};

/// Split a signed value into its absolute value
/// and a flag telling whether the original was non-negative
pub(crate) trait ToUnsigned: Default + Copy + PartialOrd + Neg<Output = Self> {
    fn unsigned_abs(self) -> (Self, bool) {
        if self >= Self::default() {
            (self, true)
        } else {
            (-self, false)
        }
    }
}

impl ToUnsigned for f64 {}

/// Division and remainder in one step
pub(crate) fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}
