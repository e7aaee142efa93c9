//! Shift-time rules
//!
//! Shift times are wall-clock times on the shift's own date, restricted to
//! quarter-hour marks. A shift never crosses midnight, so a span is just a
//! pair of minute-of-day offsets.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Allowed minute marks
const QUARTER_HOURS: [u8; 4] = [0, 15, 30, 45];

/// A validated `HH:MM` time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShiftTime {
    hour: u8,
    minute: u8,
}

impl ShiftTime {
    /// Parse `H:MM`, `HH:MM` or `HH:MM:SS` (seconds must be zero)
    ///
    /// Only checks the shape and the 0-23 hour range; quarter-hour alignment
    /// is checked by [`validate_shift_time`].
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.trim().split(':');
        let hour = parse_component(parts.next()?)?;
        let minute = parse_component(parts.next()?)?;
        if let Some(seconds) = parts.next()
            && parse_component(seconds)? != 0
        {
            return None;
        }
        if parts.next().is_some() || hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since midnight
    pub fn minute_of_day(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }

    pub fn is_quarter_hour(&self) -> bool {
        QUARTER_HOURS.contains(&self.minute)
    }
}

fn parse_component(part: &str) -> Option<u8> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for ShiftTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for ShiftTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid time: {}", value))
    }
}

impl From<ShiftTime> for String {
    fn from(time: ShiftTime) -> Self {
        time.to_string()
    }
}

/// Whether `value` is a valid shift boundary: hour 0-23, minute on a quarter hour
pub fn validate_shift_time(value: &str) -> bool {
    ShiftTime::parse(value).is_some_and(|t| t.is_quarter_hour())
}

/// First failing check of a shift's start/end pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpanError {
    #[error("Start time not within 24 hours of a day or minutes not in 15 minutes interval.")]
    InvalidStart,
    #[error("End time not within 24 hours of a day or minutes not in 15 minutes interval.")]
    InvalidEnd,
    #[error("End time must be after start time.")]
    EndNotAfterStart,
}

/// Half-open `[start, end)` interval of one shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftSpan {
    pub start: ShiftTime,
    pub end: ShiftTime,
}

impl ShiftSpan {
    /// Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &ShiftSpan) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Length in minutes
    pub fn duration_minutes(&self) -> u16 {
        self.end.minute_of_day().saturating_sub(self.start.minute_of_day())
    }
}

/// Check start, then end, then ordering; the first failure wins
pub fn validate_shift_span(start: &str, end: &str) -> Result<ShiftSpan, SpanError> {
    let start = ShiftTime::parse(start)
        .filter(ShiftTime::is_quarter_hour)
        .ok_or(SpanError::InvalidStart)?;
    let end = ShiftTime::parse(end)
        .filter(ShiftTime::is_quarter_hour)
        .ok_or(SpanError::InvalidEnd)?;
    if end <= start {
        return Err(SpanError::EndNotAfterStart);
    }
    Ok(ShiftSpan { start, end })
}
