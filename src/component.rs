/// A fixed-length unit of time.
///
/// Every unit has an exact length in nanoseconds, so arithmetic and interval
/// measurement on an [`Instant`](crate::Instant) never depend on a calendar.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum TimeComponent {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_MILLI: i64 = 1_000_000;

impl TimeComponent {
    /// Length of one unit in nanoseconds.
    pub const fn nanos(self) -> i128 {
        match self {
            TimeComponent::Nanosecond => 1,
            TimeComponent::Microsecond => 1_000,
            TimeComponent::Millisecond => NANOS_PER_MILLI as i128,
            TimeComponent::Second => NANOS_PER_SECOND as i128,
            TimeComponent::Minute => 60 * NANOS_PER_SECOND as i128,
            TimeComponent::Hour => 3_600 * NANOS_PER_SECOND as i128,
            TimeComponent::Day => 86_400 * NANOS_PER_SECOND as i128,
            TimeComponent::Week => 604_800 * NANOS_PER_SECOND as i128,
        }
    }
}
