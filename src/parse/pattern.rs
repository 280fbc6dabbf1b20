use std::fmt::{self, Write};

use crate::parse::{expect, number, offset, year, Formatter, OffsetStyle, MAX_YEAR_DIGITS};
use crate::slice_cursor::SliceCursor;
use crate::{Clock, Error, ZonedDateTime};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    // Bounds on the digit count; the lower one is also the format width.
    Year { min: usize, max: usize },
    // The payload is the number of pattern letters.
    Month(usize),
    Day(usize),
    Hour(usize),
    Minute(usize),
    Second(usize),
    Fraction(usize),
    Offset(OffsetStyle),
}

/// A [`Formatter`] driven by an LDML-style pattern such as
/// `yyyy-MM-dd'T'HH:mm:ss.SSSXXX`.
///
/// | letters      | field                                        |
/// |--------------|----------------------------------------------|
/// | `y`, `yyyy`  | year, see below                              |
/// | `M`, `MM`    | month                                        |
/// | `d`, `dd`    | day of month                                 |
/// | `H`, `HH`    | hour of day (0-23)                           |
/// | `m`, `mm`    | minute                                       |
/// | `s`, `ss`    | second                                       |
/// | `S` to `SSSSSSSSS` | fraction of second, one digit per letter |
/// | `X`, `XX`, `XXX` | utc offset as `Z`, `+hh`, `+hhmm`, `+hh:mm` |
///
/// A single letter reads one or two digits, two letters read exactly two.
/// A year reads at least as many digits as there are letters and at most
/// ten. When two or more year letters run straight into another numeric
/// field, as in `yyyyMMdd`, the year reads exactly as many digits as there
/// are letters.
/// Text in single quotes is literal, `''` is a quote. Other characters that
/// are not ascii letters match themselves.
#[derive(Debug, Clone)]
pub struct PatternFormatter {
    pattern: String,
    tokens: Vec<Token>,
}

impl PatternFormatter {
    pub fn new(pattern: &str) -> Result<Self, Error> {
        let tokens = compile(pattern).map_err(|err| {
            warn!("rejected date pattern {:?}: {}", pattern, err);
            err
        })?;
        Ok(PatternFormatter {
            pattern: pattern.to_string(),
            tokens,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

fn push_literal(tokens: &mut Vec<Token>, c: char) {
    match tokens.last_mut() {
        Some(Token::Literal(text)) => text.push(c),
        _ => tokens.push(Token::Literal(c.to_string())),
    }
}

fn compile(pattern: &str) -> Result<Vec<Token>, Error> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.next_if_eq(&'\'').is_some() {
                push_literal(&mut tokens, '\'');
                continue;
            }
            loop {
                match chars.next() {
                    Some('\'') if chars.next_if_eq(&'\'').is_some() => {
                        push_literal(&mut tokens, '\'')
                    }
                    Some('\'') => break,
                    Some(c) => push_literal(&mut tokens, c),
                    None => return Err(Error::InvalidPattern("unterminated quote".to_string())),
                }
            }
            continue;
        }
        if !c.is_ascii_alphabetic() {
            push_literal(&mut tokens, c);
            continue;
        }

        let mut count = 1;
        while chars.next_if_eq(&c).is_some() {
            count += 1;
        }
        let token = match (c, count) {
            ('y', 1..=MAX_YEAR_DIGITS) => Token::Year {
                min: count,
                max: MAX_YEAR_DIGITS,
            },
            ('M', 1..=2) => Token::Month(count),
            ('d', 1..=2) => Token::Day(count),
            ('H', 1..=2) => Token::Hour(count),
            ('m', 1..=2) => Token::Minute(count),
            ('s', 1..=2) => Token::Second(count),
            ('S', 1..=9) => Token::Fraction(count),
            ('X', 1) => Token::Offset(OffsetStyle::Hours),
            ('X', 2) => Token::Offset(OffsetStyle::Basic),
            ('X', 3) => Token::Offset(OffsetStyle::Extended),
            _ => {
                return Err(Error::InvalidPattern(format!(
                    "unsupported field {}",
                    c.to_string().repeat(count)
                )))
            }
        };
        tokens.push(token);
    }

    for i in 1..tokens.len() {
        if tokens[i].is_numeric() {
            if let Token::Year { min, max } = &mut tokens[i - 1] {
                if *min >= 2 {
                    *max = *min;
                }
            }
        }
    }
    Ok(tokens)
}

/// One letter reads one or two digits, two letters exactly two.
fn field(
    cursor: &mut SliceCursor<'_, u8>,
    letters: usize,
    reason: &'static str,
) -> Result<u8, Error> {
    Ok(number(cursor, letters, 2, reason)? as u8)
}

impl Formatter for PatternFormatter {
    fn parse(&self, text: &str, clock: &Clock) -> Result<ZonedDateTime, Error> {
        let mut cursor = SliceCursor::at_start(text.as_bytes());
        let mut builder = ZonedDateTime::builder();
        builder.clock(*clock);
        for token in &self.tokens {
            match *token {
                Token::Literal(ref literal) => {
                    for byte in literal.bytes() {
                        expect(&mut cursor, byte, "text does not match pattern")?;
                    }
                }
                Token::Year { min, max } => {
                    builder.year(year(&mut cursor, min, max)?);
                }
                Token::Month(letters) => {
                    builder.month(field(&mut cursor, letters, "expected month")?);
                }
                Token::Day(letters) => {
                    builder.day(field(&mut cursor, letters, "expected day")?);
                }
                Token::Hour(letters) => {
                    builder.hour(field(&mut cursor, letters, "expected hour")?);
                }
                Token::Minute(letters) => {
                    builder.minute(field(&mut cursor, letters, "expected minute")?);
                }
                Token::Second(letters) => {
                    builder.second(field(&mut cursor, letters, "expected second")?);
                }
                Token::Fraction(letters) => {
                    let fraction = number(&mut cursor, letters, letters, "expected fraction")?;
                    builder.nanosecond(fraction as u32 * 10u32.pow(9 - letters as u32));
                }
                Token::Offset(style) => {
                    if let Some(clock) = offset(&mut cursor, style)? {
                        builder.clock(clock);
                    }
                }
            }
        }
        if !cursor.at_end() {
            return Err(Error::parse(cursor.pos(), "unexpected trailing input"));
        }
        builder.checked_build()
    }

    fn format(&self, date_time: &ZonedDateTime) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            token
                .write(&mut out, date_time)
                .expect("writing to a String cannot fail");
        }
        out
    }
}

impl Token {
    fn is_numeric(&self) -> bool {
        !matches!(self, Token::Literal(_) | Token::Offset(_))
    }

    fn write(&self, out: &mut String, date_time: &ZonedDateTime) -> fmt::Result {
        match *self {
            Token::Literal(ref literal) => out.write_str(literal),
            Token::Year { min: width, .. } => {
                let year = date_time.year();
                let sign = if year < 0 { "-" } else { "" };
                write!(out, "{}{:0width$}", sign, year.unsigned_abs(), width = width)
            }
            Token::Month(width) => write!(out, "{:0width$}", date_time.month(), width = width),
            Token::Day(width) => write!(out, "{:0width$}", date_time.day(), width = width),
            Token::Hour(width) => write!(out, "{:0width$}", date_time.hour(), width = width),
            Token::Minute(width) => write!(out, "{:0width$}", date_time.minute(), width = width),
            Token::Second(width) => write!(out, "{:0width$}", date_time.second(), width = width),
            Token::Fraction(digits) => {
                let fraction = date_time.nanosecond() / 10u32.pow(9 - digits as u32);
                write!(out, "{:0width$}", fraction, width = digits)
            }
            Token::Offset(style) => write_offset(out, date_time.clock(), style),
        }
    }
}

fn write_offset(out: &mut String, clock: Clock, style: OffsetStyle) -> fmt::Result {
    if clock.is_utc() {
        return out.write_char('Z');
    }
    let offset = clock.offset_seconds();
    let sign = if offset < 0 { '-' } else { '+' };
    let minutes = offset.unsigned_abs() / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    match style {
        OffsetStyle::Hours => write!(out, "{}{:02}", sign, hours),
        OffsetStyle::Basic => write!(out, "{}{:02}{:02}", sign, hours, minutes),
        OffsetStyle::Extended | OffsetStyle::Any => {
            write!(out, "{}{:02}:{:02}", sign, hours, minutes)
        }
    }
}
