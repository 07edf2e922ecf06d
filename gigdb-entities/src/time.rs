use std::{
    fmt,
    ops::{Add, Sub},
    str::FromStr,
};

use thiserror::Error;
use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    Duration, OffsetDateTime, PrimitiveDateTime,
};

// The shape an HTML datetime form field posts.
const FORM_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

// Display format for show times.
const DISPLAY_FORMAT: &[FormatItem<'static>] =
    format_description!("[month]/[day]/[year], [hour]:[minute]");

/// UTC timestamp with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid or unparseable timestamp")]
pub struct TimestampParseError;

impl Timestamp {
    pub fn now() -> Self {
        let secs = OffsetDateTime::now_utc().unix_timestamp();
        Self::try_from_secs(secs).expect("current time as unix timestamp")
    }

    pub fn try_from_secs(secs: i64) -> Result<Self, TimestampParseError> {
        OffsetDateTime::from_unix_timestamp(secs)
            .map(Self)
            .map_err(|_| TimestampParseError)
    }

    pub fn as_secs(self) -> i64 {
        self.0.unix_timestamp()
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    /// Accepts RFC 3339 or the `YYYY-MM-DD HH:MM:SS` shape posted by
    /// HTML forms, the latter interpreted as UTC.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(parsed) = OffsetDateTime::parse(s, &Rfc3339) {
            return Ok(Self(parsed));
        }
        PrimitiveDateTime::parse(s, FORM_FORMAT)
            .map(|dt| Self(dt.assume_utc()))
            .map_err(|_| TimestampParseError)
    }
}

impl fmt::Display for Timestamp {
    /// `MM/DD/YYYY, HH:MM`, the directory's display format for show times.
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let formatted = self.0.format(DISPLAY_FORMAT).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;
    fn add(self, duration: Duration) -> Self {
        Self(self.0 + duration)
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Self;
    fn sub(self, duration: Duration) -> Self {
        Self(self.0 - duration)
    }
}
