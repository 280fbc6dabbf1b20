//! Nanosecond precision points on the utc timeline.
//!
//! [`Instant`] is the core type. [`ZonedDateTime`] gives its calendar fields
//! at a fixed [`Clock`] offset, and the [`parse`] module reads timestamps.

#[macro_use]
mod logging;

pub use clock::Clock;
pub use component::TimeComponent;
pub use duration::Duration;
pub use error::Error;
pub use instant::Instant;
pub use parse::{Formatter, IsoFormatter, ParseOptions, PatternFormatter};
pub use zoned::{ZonedDateTime, ZonedDateTimeBuilder};

mod clock;
mod component;
mod duration;
mod error;
pub mod gregorian;
mod instant;
pub mod parse;
mod slice_cursor;
mod zoned;
