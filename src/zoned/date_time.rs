use std::fmt;

use num_integer::Integer;

use crate::component::NANOS_PER_SECOND;
use crate::gregorian;
use crate::zoned::{
    ZonedDateTimeBuilder, HOURS_PER_DAY, MINUTES_PER_HOUR, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use crate::{Clock, Error, Instant};

/// Gregorian calendar and wall clock fields of an instant as seen at the
/// offset of a [`Clock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZonedDateTime {
    clock: Clock,
    year: i64,
    month: u8,
    day: u8,
    // Seconds since local midnight.
    second: u32,
    nanosecond: u32,
}

impl ZonedDateTime {
    pub fn builder() -> ZonedDateTimeBuilder {
        ZonedDateTimeBuilder::new()
    }

    pub(super) fn new(
        clock: Clock,
        year: i64,
        month: u8,
        day: u8,
        second: u32,
        nanosecond: u32,
    ) -> Self {
        ZonedDateTime {
            clock,
            year,
            month,
            day,
            second,
            nanosecond,
        }
    }

    pub(crate) fn from_instant(instant: Instant, clock: Clock) -> Self {
        // Working on the total nanosecond count means raw, unnormalized instants
        // project the same way as their normalized form.
        let local = instant.total_nanos()
            + clock.offset_seconds() as i128 * NANOS_PER_SECOND as i128;
        let nanos_per_day = SECONDS_PER_DAY as i128 * NANOS_PER_SECOND as i128;
        let (days, nanos_into_day) = local.div_mod_floor(&nanos_per_day);
        let (second, nanosecond) = nanos_into_day.div_rem(&(NANOS_PER_SECOND as i128));
        let (year, month, day) = gregorian::date_from_days(days as i64);
        ZonedDateTime::new(
            clock,
            year,
            month,
            day,
            second as u32,
            nanosecond as u32,
        )
    }

    /// The instant these fields describe. Exact inverse of
    /// [`Instant::to_zone_with`].
    pub fn to_instant(&self) -> Result<Instant, Error> {
        let days = gregorian::days_from_date(self.year, self.month, self.day)?;
        let local = days * SECONDS_PER_DAY as i64 + self.second as i64;
        Ok(Instant::from_raw_parts(
            local - self.clock.offset_seconds() as i64,
            self.nanosecond as i32,
        ))
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        let hour = (self.second / SECONDS_PER_HOUR as u32) as u8;
        debug_assert!(hour < HOURS_PER_DAY);
        hour
    }

    pub fn minute(&self) -> u8 {
        let seconds_into_hour = (self.second % SECONDS_PER_HOUR as u32) as u16;
        (seconds_into_hour / MINUTES_PER_HOUR as u16) as u8
    }

    pub fn second(&self) -> u8 {
        (self.second % SECONDS_PER_MINUTE as u32) as u8
    }

    pub fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    pub fn is_leap_year(&self) -> bool {
        gregorian::is_leap_year(self.year)
    }

    pub fn days_in_month(&self) -> u8 {
        gregorian::days_in_month(self.year, self.month)
    }
}

impl fmt::Display for ZonedDateTime {
    /// Extended ISO-8601, e.g. `1970-01-01T00:01:05.123000000Z`. The fraction
    /// is left out when it is zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}", self.year.unsigned_abs())?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.month,
            self.day,
            self.hour(),
            self.minute(),
            self.second()
        )?;
        if self.nanosecond != 0 {
            write!(f, ".{:09}", self.nanosecond)?;
        }
        write!(f, "{}", self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_fields() {
        let date_time = ZonedDateTime::builder()
            .year(2000)
            .month(3)
            .day(1)
            .hour(13)
            .minute(59)
            .second(7)
            .nanosecond(42)
            .build();
        assert_eq!(date_time.year(), 2000);
        assert_eq!(date_time.month(), 3);
        assert_eq!(date_time.day(), 1);
        assert_eq!(date_time.hour(), 13);
        assert_eq!(date_time.minute(), 59);
        assert_eq!(date_time.second(), 7);
        assert_eq!(date_time.nanosecond(), 42);
        assert_eq!(date_time.clock(), Clock::UTC);
        assert!(date_time.is_leap_year());
        assert_eq!(date_time.days_in_month(), 31);
    }

    #[test]
    fn projection_before_epoch() {
        let date_time = Instant::new(-1, 0).to_zone();
        assert_eq!(date_time.year(), 1969);
        assert_eq!(date_time.month(), 12);
        assert_eq!(date_time.day(), 31);
        assert_eq!(date_time.hour(), 23);
        assert_eq!(date_time.minute(), 59);
        assert_eq!(date_time.second(), 59);
        assert_eq!(date_time.to_instant(), Ok(Instant::new(-1, 0)));
    }

    #[test]
    fn projection_with_offset() {
        let clock = Clock::from_hours_minutes(5, 30).unwrap();
        let date_time = Instant::EPOCH.to_zone_with(&clock);
        assert_eq!(date_time.year(), 1970);
        assert_eq!(date_time.day(), 1);
        assert_eq!(date_time.hour(), 5);
        assert_eq!(date_time.minute(), 30);
        assert_eq!(date_time.to_instant(), Ok(Instant::EPOCH));

        let clock = Clock::from_hours_minutes(-8, 0).unwrap();
        let date_time = Instant::EPOCH.to_zone_with(&clock);
        assert_eq!((date_time.year(), date_time.month(), date_time.day()), (1969, 12, 31));
        assert_eq!(date_time.hour(), 16);
        assert_eq!(date_time.to_instant(), Ok(Instant::EPOCH));
    }

    #[test]
    fn projection_of_bounds() {
        let min = Instant::MIN.to_zone();
        assert_eq!((min.year(), min.month(), min.day()), (-1_000_000_000, 1, 1));
        assert_eq!((min.hour(), min.minute(), min.second()), (0, 0, 0));
        assert_eq!(min.to_instant(), Ok(Instant::MIN));

        let max = Instant::MAX.to_zone();
        assert_eq!((max.year(), max.month(), max.day()), (1_000_000_000, 12, 31));
        assert_eq!((max.hour(), max.minute(), max.second()), (23, 59, 59));
        assert_eq!(max.nanosecond(), 999_999_999);
        assert_eq!(max.to_instant(), Ok(Instant::MAX));

        let clock = Clock::from_offset_seconds(-18 * 3_600).unwrap();
        let shifted = Instant::MIN.to_zone_with(&clock);
        assert_eq!(shifted.year(), -1_000_000_001);
        assert_eq!(shifted.to_instant(), Ok(Instant::MIN));
    }

    #[test]
    fn raw_instants_project_like_normalized_ones() {
        let raw = Instant::from_raw_parts(64, 1_123_000_000);
        assert_eq!(raw.to_zone(), Instant::new(65, 123_000_000).to_zone());
    }

    #[test]
    fn display() {
        let date_time = Instant::new(65, 123_000_000).to_zone();
        assert_eq!(date_time.to_string(), "1970-01-01T00:01:05.123000000Z");
        let clock = Clock::from_hours_minutes(5, 30).unwrap();
        assert_eq!(Instant::EPOCH.to_zone_with(&clock).to_string(), "1970-01-01T05:30:00+05:30");
        assert_eq!(Instant::MIN.to_zone().to_string(), "-1000000000-01-01T00:00:00Z");
        let date_time = ZonedDateTime::builder().year(-1).month(2).day(3).build();
        assert_eq!(date_time.to_string(), "-0001-02-03T00:00:00Z");
    }
}
