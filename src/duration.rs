use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{CheckedAdd, CheckedSub, Zero};

use crate::TimeComponent;

/// An exact, signed amount of elapsed time with nanosecond resolution.
///
/// Wide enough to hold the distance between any two instants.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub struct Duration {
    nanos: i128,
}

impl Duration {
    pub const ZERO: Duration = Duration { nanos: 0 };

    pub(crate) const fn new(nanos: i128) -> Self {
        Self { nanos }
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Self::from_component(TimeComponent::Second, seconds)
    }

    pub fn from_millis(millis: i64) -> Self {
        Self::from_component(TimeComponent::Millisecond, millis)
    }

    pub fn from_nanos(nanos: i64) -> Self {
        Self::new(nanos as i128)
    }

    /// `amount` whole units of `component`.
    pub fn from_component(component: TimeComponent, amount: i64) -> Self {
        // Cannot overflow: a week is below 2^50 ns and amount is below 2^63.
        Self::new(amount as i128 * component.nanos())
    }

    pub fn as_nanos(&self) -> i128 {
        self.nanos
    }

    /// Whole units of `component` in this duration, truncated toward zero.
    pub fn total(&self, component: TimeComponent) -> i128 {
        self.nanos / component.nanos()
    }

    pub fn is_negative(&self) -> bool {
        self.nanos < 0
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs)
            .expect("duration addition overflow")
    }
}

impl CheckedAdd for Duration {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        self.nanos.checked_add(v.nanos).map(Self::new)
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs)
            .expect("duration subtraction overflow")
    }
}

impl CheckedSub for Duration {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        self.nanos.checked_sub(v.nanos).map(Self::new)
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.nanos)
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        self.nanos
            .checked_mul(rhs as i128)
            .map(Self::new)
            .expect("duration multiplication overflow")
    }
}

impl Zero for Duration {
    fn zero() -> Self {
        Duration::ZERO
    }

    fn is_zero(&self) -> bool {
        self.nanos == 0
    }
}
