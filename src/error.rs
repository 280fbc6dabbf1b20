use thiserror::Error;

use crate::TimeComponent;

/// Everything that can go wrong when building, projecting or parsing a
/// point in time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid date")]
    InvalidDate,
    #[error("invalid time of day")]
    InvalidTime,
    #[error("instant is out of range")]
    OutOfRange,
    #[error("utc offset must be within +-18:00")]
    InvalidOffset,
    #[error("component {0:?} cannot be replaced on an instant")]
    UnsupportedComponent(TimeComponent),
    #[error("parse error at byte {position}: {reason}")]
    Parse { position: usize, reason: &'static str },
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

impl Error {
    pub(crate) fn parse(position: usize, reason: &'static str) -> Self {
        Error::Parse { position, reason }
    }
}
