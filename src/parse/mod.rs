//! Text to instant conversion.
//!
//! Parsing always goes through a [`Formatter`], which turns text into
//! [`ZonedDateTime`] fields. The fields are then converted to an instant and
//! checked against [`Instant::MIN`] and [`Instant::MAX`]. Without an explicit
//! formatter the lenient [`IsoFormatter`] is used.

pub use lenient::IsoFormatter;
pub use pattern::PatternFormatter;

use crate::slice_cursor::SliceCursor;
use crate::{Clock, Error, Instant, ZonedDateTime};

mod lenient;
mod pattern;

/// Converts between text and calendar fields.
pub trait Formatter {
    /// Reads calendar fields from `text`. Timestamps without a zone
    /// designator are read at the offset of `clock`.
    fn parse(&self, text: &str, clock: &Clock) -> Result<ZonedDateTime, Error>;

    fn format(&self, date_time: &ZonedDateTime) -> String;
}

/// How to read a timestamp: which formatter to use and which clock supplies
/// the offset for local timestamps. Both default when not set.
#[derive(Clone, Copy, Default)]
pub struct ParseOptions<'f> {
    formatter: Option<&'f dyn Formatter>,
    clock: Clock,
}

impl<'f> ParseOptions<'f> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn formatter(mut self, formatter: &'f dyn Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

pub(crate) fn parse_instant(text: &str, options: &ParseOptions<'_>) -> Result<Instant, Error> {
    let formatter = options.formatter.unwrap_or(&IsoFormatter);
    trace!("parsing {:?} with clock {}", text, options.clock);
    let instant = formatter.parse(text, &options.clock)?.to_instant()?;
    if instant < Instant::MIN || instant > Instant::MAX {
        return Err(Error::OutOfRange);
    }
    Ok(instant)
}

/// Enough digits for any year between `MIN_YEAR` and `MAX_YEAR`.
const MAX_YEAR_DIGITS: usize = 10;

/// Reads between `min` and `max` digits.
fn number(
    cursor: &mut SliceCursor<'_, u8>,
    min: usize,
    max: usize,
    reason: &'static str,
) -> Result<i64, Error> {
    let pos = cursor.pos();
    let digits = cursor.digits(max);
    if digits.len() < min {
        return Err(Error::parse(pos, reason));
    }
    Ok(to_number(digits))
}

fn to_number(digits: &[u8]) -> i64 {
    digits
        .iter()
        .fold(0i64, |n, d| n * 10 + (d - b'0') as i64)
}

/// A year of `min` to `max` digits with an optional sign.
fn year(cursor: &mut SliceCursor<'_, u8>, min: usize, max: usize) -> Result<i64, Error> {
    let negative = cursor.eat_if(|b| b == b'+' || b == b'-') == Some(b'-');
    let year = number(cursor, min, max, "expected year")?;
    Ok(if negative { -year } else { year })
}

/// Nanoseconds for the fraction `0.<digits>`. Digits past the ninth are
/// dropped.
fn fraction_to_nanos(digits: &[u8]) -> u32 {
    (0..9).fold(0u32, |nanos, i| {
        let digit = digits.get(i).map_or(0, |d| (d - b'0') as u32);
        nanos * 10 + digit
    })
}

fn expect(cursor: &mut SliceCursor<'_, u8>, byte: u8, reason: &'static str) -> Result<(), Error> {
    if cursor.eat(byte) {
        Ok(())
    } else {
        Err(Error::parse(cursor.pos(), reason))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OffsetStyle {
    /// `Z` or `+hh`
    Hours,
    /// `Z` or `+hhmm`
    Basic,
    /// `Z` or `+hh:mm`
    Extended,
    /// `Z`, `+hh`, `+hhmm` or `+hh:mm`, in either case.
    Any,
}

/// Reads a utc offset. Returns `None` if the input has no zone designator
/// here and `style` allows leaving it out.
fn offset(cursor: &mut SliceCursor<'_, u8>, style: OffsetStyle) -> Result<Option<Clock>, Error> {
    let pos = cursor.pos();
    if cursor.eat(b'Z') || (style == OffsetStyle::Any && cursor.eat(b'z')) {
        return Ok(Some(Clock::UTC));
    }
    let negative = match cursor.eat_if(|b| b == b'+' || b == b'-') {
        Some(sign) => sign == b'-',
        None if style == OffsetStyle::Any => return Ok(None),
        None => return Err(Error::parse(pos, "expected utc offset")),
    };
    let hours = number(cursor, 2, 2, "expected offset hours")?;
    let minutes = match style {
        OffsetStyle::Hours => 0,
        OffsetStyle::Basic => number(cursor, 2, 2, "expected offset minutes")?,
        OffsetStyle::Extended => {
            expect(cursor, b':', "expected ':' in offset")?;
            number(cursor, 2, 2, "expected offset minutes")?
        }
        OffsetStyle::Any => {
            let colon = cursor.eat(b':');
            let pos = cursor.pos();
            let digits = cursor.digits(2);
            match digits.len() {
                0 if !colon => 0,
                2 => to_number(digits),
                _ => return Err(Error::parse(pos, "expected offset minutes")),
            }
        }
    };
    if minutes >= 60 {
        return Err(Error::InvalidOffset);
    }
    let seconds = (hours * 3_600 + minutes * 60) as i32;
    Clock::from_offset_seconds(if negative { -seconds } else { seconds }).map(Some)
}
