//! Pseudo-version date decoding
//!
//! A pseudo-version such as `v0.0.0-20190227000051-27936f6d90f9` embeds the
//! UTC commit time in its second hyphen-delimited segment. Only the
//! `YYYYMMDD` part is read; the result is midnight UTC of that day.

use crate::domain::Timestamp;
use crate::error::VersionError;
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading timestamp characters that are decoded
const DATE_DIGITS: usize = 8;

// YYYYMMDD at the start of the timestamp segment
static DATE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})(\d{2})(\d{2})").unwrap());

/// Decodes the commit date embedded in a pseudo-version
pub fn decode(raw: &str) -> Result<Timestamp, VersionError> {
    let segment = raw
        .split('-')
        .nth(1)
        .ok_or_else(|| VersionError::malformed(raw, "missing timestamp segment"))?;

    if segment.len() < DATE_DIGITS {
        return Err(VersionError::malformed(
            raw,
            format!("timestamp segment '{}' is shorter than {} characters", segment, DATE_DIGITS),
        ));
    }

    let caps = DATE_PREFIX_RE.captures(segment).ok_or_else(|| {
        VersionError::malformed(raw, format!("'{}' does not start with YYYYMMDD", segment))
    })?;

    let field = |i: usize| -> Result<u32, VersionError> {
        caps[i]
            .parse::<u32>()
            .map_err(|e| VersionError::malformed(raw, e.to_string()))
    };
    let (year, month, day) = (field(1)?, field(2)?, field(3)?);

    let date = NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
        VersionError::malformed(raw, format!("{}-{}-{} is not a calendar date", year, month, day))
    })?;

    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
