//! Front matter date parsing.
//!
//! Dates arrive as raw front matter text and are only interpreted when an
//! item is resolved, so a bad date fails the build at the item that carries it.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Unrecognized date: {0:?}")]
    Unrecognized(String),
}

/// Date-time layouts accepted without an offset; all are read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-time layouts that carry a numeric offset but no seconds.
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Which file timestamp the generator substitutes for a keyword date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileTimestamp {
    Created,
    LastModified,
    GitCreated,
    GitLastModified,
}

impl FileTimestamp {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "created" => Some(FileTimestamp::Created),
            "last modified" => Some(FileTimestamp::LastModified),
            "git created" => Some(FileTimestamp::GitCreated),
            "git last modified" => Some(FileTimestamp::GitLastModified),
            _ => None,
        }
    }
}

/// A parsed front matter date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostDate {
    /// A concrete instant
    Instant(DateTime<Utc>),
    /// A keyword the generator fills in from file metadata
    File(FileTimestamp),
}

impl PostDate {
    /// Parse a front matter date value
    ///
    /// ```
    /// use postlink_core::date::PostDate;
    ///
    /// let date = PostDate::parse("2024-06-01").unwrap();
    /// assert_eq!(date.to_string(), "2024-06-01T00:00:00+00:00");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, DateError> {
        let value = raw.trim();

        if let Some(keyword) = FileTimestamp::from_keyword(value) {
            return Ok(PostDate::File(keyword));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Ok(PostDate::Instant(dt.with_timezone(&Utc)));
        }

        for format in OFFSET_DATETIME_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(value, format) {
                return Ok(PostDate::Instant(dt.with_timezone(&Utc)));
            }
        }

        // A trailing `Z` is UTC, which is how offset-free values are read anyway
        let naive_value = value
            .strip_suffix('Z')
            .or_else(|| value.strip_suffix('z'))
            .unwrap_or(value);

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(naive_value, format) {
                return Ok(PostDate::Instant(naive.and_utc()));
            }
        }

        if let Some(date) = parse_calendar_date(value) {
            return Ok(PostDate::Instant(date.and_time(NaiveTime::MIN).and_utc()));
        }

        Err(DateError::Unrecognized(raw.to_string()))
    }

    /// Whether this date lies strictly after `now`
    ///
    /// File timestamps describe files that already exist, so they never do.
    pub fn is_after(&self, now: DateTime<Utc>) -> bool {
        match self {
            PostDate::Instant(instant) => *instant > now,
            PostDate::File(_) => false,
        }
    }
}

impl std::fmt::Display for PostDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostDate::Instant(instant) => write!(f, "{}", instant.to_rfc3339()),
            PostDate::File(FileTimestamp::Created) => write!(f, "Created"),
            PostDate::File(FileTimestamp::LastModified) => write!(f, "Last Modified"),
            PostDate::File(FileTimestamp::GitCreated) => write!(f, "git Created"),
            PostDate::File(FileTimestamp::GitLastModified) => write!(f, "git Last Modified"),
        }
    }
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`; shorter forms start at the first day of the period
fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());

    match value.split('-').collect::<Vec<_>>().as_slice() {
        [_, _, _] => NaiveDate::parse_from_str(value, "%Y-%m-%d").ok(),
        [year, month] if digits(year, 4) && digits(month, 2) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        [year] if digits(year, 4) => NaiveDate::from_ymd_opt(year.parse().ok()?, 1, 1),
        _ => None,
    }
}

/// Parse a `--now` style argument: any accepted date, but keywords are rejected
pub fn parse_now(raw: &str) -> Result<DateTime<Utc>, DateError> {
    match PostDate::parse(raw)? {
        PostDate::Instant(instant) => Ok(instant),
        PostDate::File(_) => Err(DateError::Unrecognized(raw.to_string())),
    }
}
