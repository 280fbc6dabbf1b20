//! Proleptic gregorian calendar arithmetic. Every day has exactly 86400
//! seconds; leap seconds do not exist here.
//!
//! Day numbers count from 1970-01-01. Internally dates are measured from
//! 2000-03-01, the first day of a 400-year cycle once years are taken to start
//! in March. That puts every leap day at the very end of its year, its
//! 4-year period, its century and its cycle, so the extra day is simply the
//! last one and never shifts a month start.

use std::cmp::min;

use num_integer::Integer;

use crate::Error;

/// Smallest year accepted when converting a date to a day count. One year of
/// slack beyond `Instant::MIN` leaves room for negative utc offsets.
pub const MIN_YEAR: i64 = -1_000_000_001;
/// Largest year accepted when converting a date to a day count.
pub const MAX_YEAR: i64 = 1_000_000_001;

const DAYS_PER_CYCLE: i64 = 146_097;
const DAYS_PER_CENTURY: i64 = 36_524;
const DAYS_PER_QUADRENNIUM: i64 = 1_461;
const DAYS_PER_YEAR: i64 = 365;
const YEARS_PER_CYCLE: i64 = 400;
// 2000-03-01 as a day number.
const CYCLE_START_DAY: i64 = 11_017;
const CYCLE_START_YEAR: i64 = 2000;

const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_leap_year(year: i64) -> bool {
    let year_of_cycle = year.mod_floor(&YEARS_PER_CYCLE);
    year_of_cycle % 4 == 0 && (year_of_cycle % 100 != 0 || year_of_cycle == 0)
}

/// Number of days in the given month.
///
/// # Panics
///
/// Panics if `month` is not in the range 1-12.
pub fn days_in_month(year: i64, month: u8) -> u8 {
    assert!((1..=12).contains(&month), "Month must be in range 1-12");
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_LENGTHS[(month - 1) as usize]
    }
}

// Days from March 1 to the first of the given March-based month (0 = March,
// 11 = February). Month lengths from March repeat 31, 30, 31, 30, 31 so the
// start days fall on a line of slope 153/5.
fn march_month_start(month: i64) -> i64 {
    (153 * month + 2) / 5
}

fn march_month_from_day(day_of_year: i64) -> i64 {
    (5 * day_of_year + 2) / 153
}

/// Days since 1970-01-01 for the given date.
pub fn days_from_date(year: i64, month: u8, day: u8) -> Result<i64, Error> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::OutOfRange);
    }
    if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
        return Err(Error::InvalidDate);
    }

    // January and February belong to the March-based year before.
    let (year, month) = if month <= 2 {
        (year - 1, month as i64 + 9)
    } else {
        (year, month as i64 - 3)
    };
    let day_of_year = march_month_start(month) + day as i64 - 1;

    let (cycle, year_of_cycle) = (year - CYCLE_START_YEAR).div_mod_floor(&YEARS_PER_CYCLE);
    // A leap day closes every fourth year except at the end of a century that
    // is not the last one of the cycle.
    let leap_days = year_of_cycle / 4 - year_of_cycle / 100;
    let day_of_cycle = year_of_cycle * DAYS_PER_YEAR + leap_days + day_of_year;
    Ok(CYCLE_START_DAY + cycle * DAYS_PER_CYCLE + day_of_cycle)
}

/// The `(year, month, day)` that lies `days` days after 1970-01-01.
pub fn date_from_days(days: i64) -> (i64, u8, u8) {
    let (cycle, day_of_cycle) = (days - CYCLE_START_DAY).div_mod_floor(&DAYS_PER_CYCLE);

    // The last century, 4-year period and year of each enclosing span is one
    // day longer. Capping the quotient keeps that day in the last one instead
    // of rolling over into a span that does not exist.
    let century = min(day_of_cycle / DAYS_PER_CENTURY, 3);
    let day_of_century = day_of_cycle - century * DAYS_PER_CENTURY;
    let quadrennium = day_of_century / DAYS_PER_QUADRENNIUM;
    let day_of_quadrennium = day_of_century - quadrennium * DAYS_PER_QUADRENNIUM;
    let year_of_quadrennium = min(day_of_quadrennium / DAYS_PER_YEAR, 3);
    let day_of_year = day_of_quadrennium - year_of_quadrennium * DAYS_PER_YEAR;

    let year = CYCLE_START_YEAR
        + cycle * YEARS_PER_CYCLE
        + century * 100
        + quadrennium * 4
        + year_of_quadrennium;
    let month = march_month_from_day(day_of_year);
    let day = day_of_year - march_month_start(month) + 1;
    if month < 10 {
        (year, (month + 3) as u8, day as u8)
    } else {
        (year + 1, (month - 9) as u8, day as u8)
    }
}
