use crate::parse::{
    expect, fraction_to_nanos, number, offset, year, Formatter, OffsetStyle, MAX_YEAR_DIGITS,
};
use crate::slice_cursor::SliceCursor;
use crate::{Clock, Error, ZonedDateTime};

/// Reads ISO-8601 style timestamps without insisting on zero padding, e.g.
/// `1970-1-1T0:1:5.123Z`, `2024-02-29T12:30:45+05:30` or
/// `2024-02-29 12:30` (seconds and zone designator are optional).
///
/// Formats as extended ISO-8601.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoFormatter;

impl Formatter for IsoFormatter {
    fn parse(&self, text: &str, clock: &Clock) -> Result<ZonedDateTime, Error> {
        let mut cursor = SliceCursor::at_start(text.as_bytes());
        let mut builder = ZonedDateTime::builder();

        builder.year(year(&mut cursor, 1, MAX_YEAR_DIGITS)?);
        expect(&mut cursor, b'-', "expected '-' after year")?;
        builder.month(number(&mut cursor, 1, 2, "expected month")? as u8);
        expect(&mut cursor, b'-', "expected '-' after month")?;
        builder.day(number(&mut cursor, 1, 2, "expected day")? as u8);

        let pos = cursor.pos();
        if cursor
            .eat_if(|b| matches!(b, b'T' | b't' | b' '))
            .is_none()
        {
            return Err(Error::parse(pos, "expected 'T' between date and time"));
        }

        builder.hour(number(&mut cursor, 1, 2, "expected hour")? as u8);
        expect(&mut cursor, b':', "expected ':' after hour")?;
        builder.minute(number(&mut cursor, 1, 2, "expected minute")? as u8);
        if cursor.eat(b':') {
            builder.second(number(&mut cursor, 1, 2, "expected second")? as u8);
            if cursor.eat_if(|b| b == b'.' || b == b',').is_some() {
                let pos = cursor.pos();
                let digits = cursor.digits(usize::MAX);
                if digits.is_empty() {
                    return Err(Error::parse(pos, "expected fraction digits"));
                }
                builder.nanosecond(fraction_to_nanos(digits));
            }
        }

        let clock = offset(&mut cursor, OffsetStyle::Any)?.unwrap_or(*clock);
        builder.clock(clock);

        if !cursor.at_end() {
            return Err(Error::parse(cursor.pos(), "unexpected trailing input"));
        }
        builder.checked_build()
    }

    fn format(&self, date_time: &ZonedDateTime) -> String {
        date_time.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Instant;

    fn parse(text: &str) -> Result<ZonedDateTime, Error> {
        IsoFormatter.parse(text, &Clock::UTC)
    }

    #[test]
    fn unpadded_fields() {
        let dt = parse("1970-1-1T0:1:5.123Z").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (1970, 1, 1));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 1, 5));
        assert_eq!(dt.nanosecond(), 123_000_000);
        assert_eq!(dt.clock(), Clock::UTC);
    }

    #[test]
    fn optional_parts() {
        let dt = parse("2024-02-29 12:30").unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (12, 30, 0));
        assert_eq!(dt.nanosecond(), 0);

        let dt = parse("2024-02-29t12:30:45,5z").unwrap();
        assert_eq!(dt.nanosecond(), 500_000_000);
        assert_eq!(dt.clock(), Clock::UTC);
    }

    #[test]
    fn offsets_and_local_time() {
        let dt = parse("2024-02-29T12:30:45.678+05:30").unwrap();
        assert_eq!(dt.clock(), Clock::from_hours_minutes(5, 30).unwrap());
        assert_eq!(dt.to_instant(), Ok(Instant::new(1_709_190_045, 678_000_000)));

        let local = Clock::from_hours_minutes(-2, 0).unwrap();
        let dt = IsoFormatter.parse("1970-01-01T00:00:00", &local).unwrap();
        assert_eq!(dt.clock(), local);
        assert_eq!(dt.to_instant(), Ok(Instant::new(7_200, 0)));

        // An explicit designator wins over the clock.
        let dt = IsoFormatter.parse("1970-01-01T00:00:00Z", &local).unwrap();
        assert_eq!(dt.to_instant(), Ok(Instant::EPOCH));
    }

    #[test]
    fn negative_years() {
        let dt = parse("-0001-12-31T23:59:59Z").unwrap();
        assert_eq!(dt.year(), -1);
        let dt = parse("+2024-01-01T00:00Z").unwrap();
        assert_eq!(dt.year(), 2024);
    }

    #[test]
    fn long_fractions_are_truncated() {
        let dt = parse("1970-01-01T00:00:00.1234567898765Z").unwrap();
        assert_eq!(dt.nanosecond(), 123_456_789);
    }

    #[test]
    fn malformed_input() {
        assert!(matches!(parse(""), Err(Error::Parse { position: 0, .. })));
        assert!(matches!(parse("1970"), Err(Error::Parse { position: 4, .. })));
        assert!(matches!(parse("1970-01-01"), Err(Error::Parse { position: 10, .. })));
        assert!(matches!(parse("1970-01-01T"), Err(Error::Parse { position: 11, .. })));
        assert!(matches!(parse("1970-01-01T00:00:00."), Err(Error::Parse { .. })));
        assert!(matches!(parse("1970-01-01T00:00:00Zjunk"), Err(Error::Parse { position: 20, .. })));
        assert!(matches!(parse("1970-123-01T00:00Z"), Err(Error::Parse { .. })));
        assert_eq!(parse("1970-02-30T00:00:00Z"), Err(Error::InvalidDate));
        assert_eq!(parse("1970-01-01T24:00:00Z"), Err(Error::InvalidTime));
        assert_eq!(parse("1970-01-01T00:00:60Z"), Err(Error::InvalidTime));
        assert_eq!(parse("1970-01-01T00:00:00+18:01"), Err(Error::InvalidOffset));
    }

    #[test]
    fn format_round_trip() {
        let dt = parse("1970-1-1T0:1:5.123Z").unwrap();
        assert_eq!(IsoFormatter.format(&dt), "1970-01-01T00:01:05.123000000Z");
        assert_eq!(parse(&IsoFormatter.format(&dt)), Ok(dt));
    }
}
