use crate::component::NANOS_PER_SECOND;
use crate::gregorian;
use crate::zoned::{
    ZonedDateTime, HOURS_PER_DAY, MINUTES_PER_HOUR, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::{Clock, Error};

/// Assembles a [`ZonedDateTime`] from individual fields.
///
/// The year is required. Month and day default to 1, the time of day to
/// midnight and the clock to utc.
#[derive(Debug, Default, Clone)]
pub struct ZonedDateTimeBuilder {
    clock: Option<Clock>,
    year: Option<i64>,
    month: Option<u8>,
    day: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
    nanosecond: Option<u32>,
}

impl ZonedDateTimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clock(&mut self, clock: Clock) -> &mut Self {
        self.clock = Some(clock);
        self
    }

    pub fn year(&mut self, year: i64) -> &mut Self {
        self.year = Some(year);
        self
    }

    pub fn month(&mut self, month: u8) -> &mut Self {
        self.month = Some(month);
        self
    }

    pub fn day(&mut self, day: u8) -> &mut Self {
        self.day = Some(day);
        self
    }

    pub fn hour(&mut self, hour: u8) -> &mut Self {
        self.hour = Some(hour);
        self
    }

    pub fn minute(&mut self, minute: u8) -> &mut Self {
        self.minute = Some(minute);
        self
    }

    pub fn second(&mut self, second: u8) -> &mut Self {
        self.second = Some(second);
        self
    }

    pub fn nanosecond(&mut self, nanosecond: u32) -> &mut Self {
        self.nanosecond = Some(nanosecond);
        self
    }

    /// # Panics
    ///
    /// Panics if the fields do not describe a valid date and time.
    pub fn build(&self) -> ZonedDateTime {
        match self.checked_build() {
            Ok(dt) => dt,
            Err(e) => panic!("{:?}", e),
        }
    }

    pub fn checked_build(&self) -> Result<ZonedDateTime, Error> {
        let year = self.year.ok_or(Error::InvalidDate)?;
        let month = self.month.unwrap_or(1);
        let day = self.day.unwrap_or(1);
        let hour = self.hour.unwrap_or(0);
        let minute = self.minute.unwrap_or(0);
        let second = self.second.unwrap_or(0);
        let nanosecond = self.nanosecond.unwrap_or(0);

        // Validates the date and the year range.
        gregorian::days_from_date(year, month, day)?;

        if hour >= HOURS_PER_DAY
            || minute >= MINUTES_PER_HOUR
            || second >= SECONDS_PER_MINUTE
            || nanosecond >= NANOS_PER_SECOND as u32
        {
            return Err(Error::InvalidTime);
        }

        let second = hour as u32 * SECONDS_PER_HOUR as u32
            + minute as u32 * SECONDS_PER_MINUTE as u32
            + second as u32;
        Ok(ZonedDateTime::new(
            self.clock.unwrap_or_default(),
            year,
            month,
            day,
            second,
            nanosecond,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        // GregorianNormalizedDate epoch
        let dt = ZonedDateTimeBuilder::new()
            .year(2000)
            .month(3)
            .day(1)
            .hour(0)
            .minute(0)
            .second(0)
            .build();
        assert_eq!(dt.year(), 2000);
        assert_eq!(dt.month(), 3);
        assert_eq!(dt.day(), 1);
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 0);
        assert_eq!(dt.second(), 0);

        // Unix epoch, relying on defaults.
        let dt = ZonedDateTimeBuilder::new().year(1970).build();
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 1);
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.to_instant(), Ok(crate::Instant::EPOCH));

        // Missing year.
        let result = ZonedDateTimeBuilder::new().month(1).day(1).checked_build();
        assert_eq!(result, Err(Error::InvalidDate));

        // Out of bounds year.
        let result = ZonedDateTimeBuilder::new()
            .year(gregorian::MAX_YEAR + 1)
            .checked_build();
        assert_eq!(result, Err(Error::OutOfRange));

        // Invalid month.
        let result = ZonedDateTimeBuilder::new()
            .year(2000)
            .month(13)
            .day(1)
            .checked_build();
        assert_eq!(result, Err(Error::InvalidDate));

        // Invalid day of month.
        let result = ZonedDateTimeBuilder::new()
            .year(2000)
            .month(3)
            .day(32)
            .checked_build();
        assert_eq!(result, Err(Error::InvalidDate));

        // Leap day on a non-leap year.
        let result = ZonedDateTimeBuilder::new()
            .year(2001)
            .month(2)
            .day(29)
            .checked_build();
        assert_eq!(result, Err(Error::InvalidDate));

        // Leap day on a leap year.
        let result = ZonedDateTimeBuilder::new()
            .year(2000)
            .month(2)
            .day(29)
            .checked_build();
        assert!(result.is_ok());

        // Invalid hour.
        let result = ZonedDateTimeBuilder::new().year(2000).hour(24).checked_build();
        assert_eq!(result, Err(Error::InvalidTime));

        // Invalid minute.
        let result = ZonedDateTimeBuilder::new().year(2000).minute(60).checked_build();
        assert_eq!(result, Err(Error::InvalidTime));

        // No leap seconds.
        let result = ZonedDateTimeBuilder::new()
            .year(1972)
            .month(6)
            .day(30)
            .hour(23)
            .minute(59)
            .second(60)
            .checked_build();
        assert_eq!(result, Err(Error::InvalidTime));

        // Invalid nanosecond.
        let result = ZonedDateTimeBuilder::new()
            .year(2000)
            .nanosecond(1_000_000_000)
            .checked_build();
        assert_eq!(result, Err(Error::InvalidTime));
    }

    #[test]
    fn clock_shifts_the_instant() {
        let clock = Clock::from_hours_minutes(1, 0).unwrap();
        let dt = ZonedDateTimeBuilder::new()
            .clock(clock)
            .year(1970)
            .hour(1)
            .build();
        assert_eq!(dt.clock(), clock);
        assert_eq!(dt.to_instant(), Ok(crate::Instant::EPOCH));
    }

    #[test]
    #[should_panic(expected = "InvalidTime")]
    fn build_panics_on_invalid_fields() {
        ZonedDateTimeBuilder::new().year(2000).hour(25).build();
    }
}
