use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::{Error, Instant};

const MAX_OFFSET_SECONDS: i32 = 18 * 3_600;

/// Source of the utc offset used when projecting an instant onto the calendar
/// and when reading local timestamps that carry no zone designator.
///
/// Only fixed offsets are supported. There is no daylight saving time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clock {
    offset_seconds: i32,
}

lazy_static! {
    static ref NAMED_CLOCKS: HashMap<&'static str, Clock> = {
        let mut clocks = HashMap::new();
        for name in ["UTC", "GMT", "UT", "Z", "ZULU"] {
            clocks.insert(name, Clock::UTC);
        }
        clocks
    };
}

impl Clock {
    pub const UTC: Clock = Clock { offset_seconds: 0 };

    pub fn from_offset_seconds(offset_seconds: i32) -> Result<Self, Error> {
        if !(-MAX_OFFSET_SECONDS..=MAX_OFFSET_SECONDS).contains(&offset_seconds) {
            return Err(Error::InvalidOffset);
        }
        Ok(Clock { offset_seconds })
    }

    /// Offset of `hours` and `minutes`; both must carry the same sign.
    pub fn from_hours_minutes(hours: i8, minutes: i8) -> Result<Self, Error> {
        let mixed_signs = (hours < 0 && minutes > 0) || (hours > 0 && minutes < 0);
        if !(-59..=59).contains(&minutes) || mixed_signs {
            return Err(Error::InvalidOffset);
        }
        Self::from_offset_seconds(hours as i32 * 3_600 + minutes as i32 * 60)
    }

    /// Looks up one of the well-known names for utc (`UTC`, `GMT`, `UT`, `Z`,
    /// `Zulu`), ignoring case.
    pub fn named(name: &str) -> Option<Self> {
        let clock = NAMED_CLOCKS.get(name.to_ascii_uppercase().as_str()).copied();
        if clock.is_none() {
            debug!("unknown clock name {:?}", name);
        }
        clock
    }

    pub fn offset_seconds(&self) -> i32 {
        self.offset_seconds
    }

    pub fn is_utc(&self) -> bool {
        self.offset_seconds == 0
    }

    /// The current point in time according to the system clock.
    pub fn instant(&self) -> Instant {
        Instant::now()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::UTC
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_utc() {
            return write!(f, "Z");
        }
        let sign = if self.offset_seconds < 0 { '-' } else { '+' };
        let total = self.offset_seconds.unsigned_abs();
        let (hours, minutes, seconds) = (total / 3_600, total / 60 % 60, total % 60);
        write!(f, "{}{:02}:{:02}", sign, hours, minutes)?;
        if seconds != 0 {
            write!(f, ":{:02}", seconds)?;
        }
        Ok(())
    }
}
