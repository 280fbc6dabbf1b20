pub use builder::ZonedDateTimeBuilder;
pub use date_time::ZonedDateTime;

mod builder;
mod date_time;

const SECONDS_PER_MINUTE: u8 = 60;
const MINUTES_PER_HOUR: u8 = 60;
const HOURS_PER_DAY: u8 = 24;
const SECONDS_PER_HOUR: u16 = SECONDS_PER_MINUTE as u16 * MINUTES_PER_HOUR as u16;
const SECONDS_PER_DAY: u32 = 86_400;
