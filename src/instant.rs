use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;
use std::time::SystemTime;

use num_integer::Integer;

use crate::component::{NANOS_PER_MILLI, NANOS_PER_SECOND};
use crate::parse::{self, Formatter, ParseOptions};
use crate::{Clock, Duration, Error, TimeComponent, ZonedDateTime};

/// A point on the continuous utc timeline, stored as whole seconds since
/// 1970-01-01T00:00:00Z plus a nanosecond-of-second adjustment.
///
/// Every constructor and operation keeps `0 <= nano < 1_000_000_000`, folding
/// whole seconds into `second` with floor semantics. The only way around that
/// is the raw API ([`Instant::from_raw_parts`], [`Instant::set_second_raw`],
/// [`Instant::set_nano_raw`]), which stores what it is given.
///
/// Equality, ordering and hashing look at the exact position on the timeline,
/// so a raw instant compares equal to its normalized form.
#[derive(Clone, Copy)]
pub struct Instant {
    second: i64,
    nano: i32,
}

impl Instant {
    /// 1970-01-01T00:00:00Z.
    pub const EPOCH: Instant = Instant { second: 0, nano: 0 };

    /// -1000000000-01-01T00:00:00Z.
    pub const MIN: Instant = Instant {
        second: -31_557_014_167_219_200,
        nano: 0,
    };

    /// +1000000000-12-31T23:59:59.999999999Z.
    pub const MAX: Instant = Instant {
        second: 31_556_889_864_403_199,
        nano: 999_999_999,
    };

    /// Builds an instant from seconds and nanoseconds since the epoch. `nano`
    /// may be negative or span several seconds.
    ///
    /// # Panics
    ///
    /// Panics if the seconds no longer fit in an `i64` after folding.
    pub fn new(second: i64, nano: i64) -> Self {
        Self::checked_new(second, nano).expect("instant out of range")
    }

    pub fn checked_new(second: i64, nano: i64) -> Option<Self> {
        Self::from_total_nanos(second as i128 * NANOS_PER_SECOND as i128 + nano as i128)
    }

    pub fn from_epoch_milli(epoch_milli: i64) -> Self {
        let (second, milli) = epoch_milli.div_mod_floor(&1_000);
        Instant {
            second,
            nano: (milli * NANOS_PER_MILLI) as i32,
        }
    }

    /// Stores `second` and `nano` without normalizing them.
    pub const fn from_raw_parts(second: i64, nano: i32) -> Self {
        Instant { second, nano }
    }

    /// The current point in time according to the system clock.
    pub fn now() -> Self {
        SystemTime::now().into()
    }

    pub(crate) fn from_total_nanos(total: i128) -> Option<Self> {
        let (second, nano) = total.div_mod_floor(&(NANOS_PER_SECOND as i128));
        Some(Instant {
            second: i64::try_from(second).ok()?,
            nano: nano as i32,
        })
    }

    pub(crate) fn total_nanos(&self) -> i128 {
        self.second as i128 * NANOS_PER_SECOND as i128 + self.nano as i128
    }

    pub fn second(&self) -> i64 {
        self.second
    }

    pub fn nano(&self) -> i32 {
        self.nano
    }

    /// Overwrites the second count. Nothing is normalized.
    pub fn set_second_raw(&mut self, second: i64) {
        self.second = second;
    }

    /// Overwrites the nanosecond adjustment. Nothing is normalized, so `nano`
    /// may leave the instant outside its usual invariant until the next
    /// operation.
    pub fn set_nano_raw(&mut self, nano: i32) {
        self.nano = nano;
    }

    /// Folds an out-of-range nanosecond adjustment into the second count.
    ///
    /// # Panics
    ///
    /// Panics if the seconds no longer fit in an `i64` after folding.
    pub fn normalized(self) -> Self {
        self.checked_normalized().expect("instant out of range")
    }

    pub fn checked_normalized(self) -> Option<Self> {
        Self::from_total_nanos(self.total_nanos())
    }

    pub fn is_normalized(&self) -> bool {
        (0..NANOS_PER_SECOND as i32).contains(&self.nano)
    }

    /// Milliseconds since the epoch; sub-millisecond precision is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the result does not fit in an `i64`, which happens roughly
    /// 292 million years away from the epoch.
    pub fn epoch_milli(&self) -> i64 {
        self.checked_epoch_milli()
            .expect("epoch millisecond overflow")
    }

    pub fn checked_epoch_milli(&self) -> Option<i64> {
        let milli = self.total_nanos().div_floor(&(NANOS_PER_MILLI as i128));
        i64::try_from(milli).ok()
    }

    fn checked_add_nanos(self, delta: i128) -> Option<Self> {
        Self::from_total_nanos(self.total_nanos().checked_add(delta)?)
    }

    fn add_nanos(self, delta: i128) -> Self {
        self.checked_add_nanos(delta)
            .expect("instant arithmetic overflow")
    }

    pub fn plus_seconds(self, seconds: i64) -> Self {
        self.plus(TimeComponent::Second, seconds)
    }

    pub fn plus_nanos(self, nanos: i64) -> Self {
        self.plus(TimeComponent::Nanosecond, nanos)
    }

    pub fn plus_millis(self, millis: i64) -> Self {
        self.plus(TimeComponent::Millisecond, millis)
    }

    /// Adds both amounts before normalizing, so the nanoseconds may carry into
    /// or borrow from the seconds.
    pub fn plus_seconds_and_nanos(self, seconds: i64, nanos: i64) -> Self {
        self.add_nanos(Duration::from_seconds(seconds).as_nanos() + nanos as i128)
    }

    /// Moves `amount` whole units of `component` forward in time.
    ///
    /// # Panics
    ///
    /// Panics if the resulting second count does not fit in an `i64`.
    pub fn plus(self, component: TimeComponent, amount: i64) -> Self {
        self.add_nanos(Duration::from_component(component, amount).as_nanos())
    }

    pub fn checked_plus(self, component: TimeComponent, amount: i64) -> Option<Self> {
        self.checked_add_nanos(Duration::from_component(component, amount).as_nanos())
    }

    pub fn plus_duration(self, duration: Duration) -> Self {
        self.add_nanos(duration.as_nanos())
    }

    pub fn minus_seconds(self, seconds: i64) -> Self {
        self.minus(TimeComponent::Second, seconds)
    }

    pub fn minus_nanos(self, nanos: i64) -> Self {
        self.minus(TimeComponent::Nanosecond, nanos)
    }

    pub fn minus_millis(self, millis: i64) -> Self {
        self.minus(TimeComponent::Millisecond, millis)
    }

    pub fn minus_seconds_and_nanos(self, seconds: i64, nanos: i64) -> Self {
        self.add_nanos(-(Duration::from_seconds(seconds).as_nanos() + nanos as i128))
    }

    pub fn minus(self, component: TimeComponent, amount: i64) -> Self {
        self.add_nanos(-Duration::from_component(component, amount).as_nanos())
    }

    pub fn checked_minus(self, component: TimeComponent, amount: i64) -> Option<Self> {
        self.checked_add_nanos(-Duration::from_component(component, amount).as_nanos())
    }

    pub fn minus_duration(self, duration: Duration) -> Self {
        self.add_nanos(-duration.as_nanos())
    }

    /// Replaces one field of the instant.
    ///
    /// `Second` replaces the second count and keeps the nanosecond adjustment.
    /// `Millisecond`, `Microsecond` and `Nanosecond` replace the nanosecond
    /// adjustment with `value` units and keep the second count. A replacement
    /// outside one second is normalized like any other constructor input, so
    /// `with(Nanosecond, 1_500_000_000)` lands half a second into the next
    /// second. Longer components have no field of their own and are rejected.
    pub fn with(self, component: TimeComponent, value: i64) -> Result<Self, Error> {
        let current = self.checked_normalized().ok_or(Error::OutOfRange)?;
        match component {
            TimeComponent::Second => Ok(Instant {
                second: value,
                nano: current.nano,
            }),
            TimeComponent::Millisecond
            | TimeComponent::Microsecond
            | TimeComponent::Nanosecond => {
                let nanos = Duration::from_component(component, value).as_nanos();
                Self::from_total_nanos(current.second as i128 * NANOS_PER_SECOND as i128 + nanos)
                    .ok_or(Error::OutOfRange)
            }
            TimeComponent::Minute
            | TimeComponent::Hour
            | TimeComponent::Day
            | TimeComponent::Week => Err(Error::UnsupportedComponent(component)),
        }
    }

    /// Whole units of `component` from `self` to `end`, truncated toward
    /// zero. Negative when `end` lies before `self`.
    ///
    /// # Panics
    ///
    /// Panics if the count does not fit in an `i64`.
    pub fn until(&self, end: Instant, component: TimeComponent) -> i64 {
        self.checked_until(end, component)
            .expect("interval overflow")
    }

    pub fn checked_until(&self, end: Instant, component: TimeComponent) -> Option<i64> {
        i64::try_from((end - *self).total(component)).ok()
    }

    /// Calendar fields of this instant in utc.
    pub fn to_zone(&self) -> ZonedDateTime {
        self.to_zone_with(&Clock::UTC)
    }

    /// Calendar fields of this instant at the offset of `clock`.
    pub fn to_zone_with(&self, clock: &Clock) -> ZonedDateTime {
        ZonedDateTime::from_instant(*self, *clock)
    }

    /// Parses an ISO-8601 timestamp such as `1970-1-1T0:1:5.123Z`.
    ///
    /// Returns `None` for anything that does not describe an instant between
    /// [`Instant::MIN`] and [`Instant::MAX`].
    pub fn parse(text: &str) -> Option<Self> {
        Self::parse_with(text, &ParseOptions::default())
    }

    pub fn parse_with(text: &str, options: &ParseOptions<'_>) -> Option<Self> {
        Self::try_parse_with(text, options).ok()
    }

    pub fn try_parse_with(text: &str, options: &ParseOptions<'_>) -> Result<Self, Error> {
        parse::parse_instant(text, options).map_err(|err| {
            debug!("failed to parse instant {:?}: {}", text, err);
            err
        })
    }

    pub fn format(&self, formatter: &dyn Formatter, clock: &Clock) -> String {
        formatter.format(&self.to_zone_with(clock))
    }
}

impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        self.total_nanos() == other.total_nanos()
    }
}

impl Eq for Instant {}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Instant {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lexicographic on (second, nano) for normalized instants.
        self.total_nanos().cmp(&other.total_nanos())
    }
}

impl Hash for Instant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_nanos().hash(state);
    }
}

impl Default for Instant {
    fn default() -> Self {
        Instant::EPOCH
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instant = self.checked_normalized().unwrap_or(*self);
        write!(f, "{}.{:09}", instant.second, instant.nano)
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Instant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Instant::try_parse_with(s, &ParseOptions::default())
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        self.checked_add_nanos(rhs.as_nanos())
            .expect("instant addition overflow")
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self::Output {
        self.checked_add_nanos(-rhs.as_nanos())
            .expect("instant subtraction underflow")
    }
}

impl Sub for Instant {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        // Two i64 second counts scaled to nanoseconds stay far below i128::MAX.
        Duration::new(self.total_nanos() - rhs.total_nanos())
    }
}

impl From<SystemTime> for Instant {
    fn from(value: SystemTime) -> Self {
        match value.duration_since(SystemTime::UNIX_EPOCH) {
            Ok(after) => Instant::new(after.as_secs() as i64, after.subsec_nanos() as i64),
            Err(err) => {
                let before = err.duration();
                Instant::new(-(before.as_secs() as i64), -(before.subsec_nanos() as i64))
            }
        }
    }
}
