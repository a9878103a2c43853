//! Birth input resolution
//!
//! Turns the loosely-typed request fields (an ISO 8601 datetime, or a
//! separate date and time, plus an IANA timezone id) into a wall-clock
//! birth time with its UTC offset, and the civil timestamp the engine
//! consumes.

use chrono::{
    DateTime, Datelike, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeDelta, TimeZone, Timelike,
};
use chrono_tz::Tz;
use soulchat_core::CivilTimestamp;
use thiserror::Error;
use tracing::debug;

use crate::config::AnalysisConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BirthInputError {
    #[error("Invalid birth_datetime format (use ISO 8601)")]
    InvalidDatetime,

    #[error("Provide birth_datetime or birth_date + birth_time")]
    MissingBirth,

    #[error("Invalid birth_date/birth_time format")]
    InvalidDateTimePair,

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

impl BirthInputError {
    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            BirthInputError::InvalidDatetime => "birth_datetime",
            BirthInputError::MissingBirth => "birth_datetime",
            BirthInputError::InvalidDateTimePair => "birth_date",
            BirthInputError::UnknownTimezone(_) => "timezone",
        }
    }
}

/// Raw birth fields as received. Blank strings count as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct BirthInput<'a> {
    pub birth_datetime: Option<&'a str>,
    pub birth_date: Option<&'a str>,
    pub birth_time: Option<&'a str>,
    pub timezone: Option<&'a str>,
}

/// A birth moment pinned to a named timezone.
///
/// `local` is the wall-clock reading in that timezone. It is kept as given
/// even when it falls in a DST gap, in which case `offset` is the one in
/// force before the transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBirth {
    pub local: NaiveDateTime,
    pub offset: FixedOffset,
    pub timezone: String,
}

impl ResolvedBirth {
    pub fn civil(&self) -> CivilTimestamp {
        CivilTimestamp::new(
            self.local.year(),
            self.local.month() as i32,
            self.local.day() as i32,
            self.local.hour() as i32,
        )
    }

    /// ISO 8601 with offset; microseconds only when present.
    pub fn iso(&self) -> String {
        let fmt = if self.local.nanosecond() == 0 {
            "%Y-%m-%dT%H:%M:%S"
        } else {
            "%Y-%m-%dT%H:%M:%S%.6f"
        };
        format!("{}{}", self.local.format(fmt), self.offset)
    }
}

enum ParsedDateTime {
    Naive(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `YYYY-MM-DD` or basic `YYYYMMDD`.
fn parse_date(s: &str) -> Option<NaiveDate> {
    match s.len() {
        10 => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
        8 if all_digits(s) => NaiveDate::parse_from_str(s, "%Y%m%d").ok(),
        _ => None,
    }
}

/// `HH`, `HH:MM`, `HH:MM:SS[.f]`, `HHMM` or `HHMMSS[.f]`.
fn parse_clock(s: &str) -> Option<NaiveTime> {
    let (whole, fraction) = match s.split_once('.') {
        Some((whole, fraction)) if all_digits(fraction) => (whole, Some(fraction)),
        Some(_) => return None,
        None => (s, None),
    };

    let (hour, minute, second) = if whole.contains(':') {
        let parts: Vec<&str> = whole.split(':').collect();
        if parts.iter().any(|p| p.len() != 2 || !all_digits(p)) {
            return None;
        }
        match parts.as_slice() {
            [h, m] if fraction.is_none() => (*h, *m, "0"),
            [h, m, sec] => (*h, *m, *sec),
            _ => return None,
        }
    } else {
        if !all_digits(whole) {
            return None;
        }
        match whole.len() {
            2 if fraction.is_none() => (whole, "0", "0"),
            4 if fraction.is_none() => (&whole[..2], &whole[2..], "0"),
            6 => (&whole[..2], &whole[2..4], &whole[4..]),
            _ => return None,
        }
    };

    let nanos = match fraction {
        Some(f) => {
            let digits: String = f.chars().chain(std::iter::repeat('0')).take(9).collect();
            digits.parse().ok()?
        }
        None => 0,
    };

    NaiveTime::from_hms_nano_opt(
        hour.parse().ok()?,
        minute.parse().ok()?,
        second.parse().ok()?,
        nanos,
    )
}

/// `Z`, `±HH`, `±HHMM`, `±HH:MM` or `±HH:MM:SS`.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    if s.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }

    let sign = match s.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let body = &s[1..];
    let digits: String = body.chars().filter(|c| *c != ':').collect();
    if !all_digits(&digits) || (body.contains(':') && body.len() != 5 && body.len() != 8) {
        return None;
    }

    let field = |range: std::ops::Range<usize>| digits.get(range).map(|d| d.parse::<i32>().ok());
    let (h, m, sec) = match digits.len() {
        2 => (field(0..2)??, 0, 0),
        4 => (field(0..2)??, field(2..4)??, 0),
        6 => (field(0..2)??, field(2..4)??, field(4..6)??),
        _ => return None,
    };
    if m >= 60 || sec >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (h * 3600 + m * 60 + sec))
}

/// Split a time component into the clock reading and an optional offset.
fn split_offset(time: &str) -> (&str, Option<&str>) {
    match time.find(|c: char| c == '+' || c == '-' || c == 'Z' || c == 'z') {
        Some(at) => (&time[..at], Some(&time[at..])),
        None => (time, None),
    }
}

/// Parse the ISO 8601 calendar forms: a date alone, or a date and time
/// joined by `T` or a space, in extended or basic notation, with an
/// optional UTC offset.
fn parse_iso(raw: &str) -> Option<ParsedDateTime> {
    let s = raw.trim();

    let (date_part, time_part) = match s.find(|c: char| c == 'T' || c == 't' || c == ' ') {
        Some(at) => (&s[..at], Some(&s[at + 1..])),
        None => (s, None),
    };
    let date = parse_date(date_part)?;

    let Some(time_part) = time_part else {
        return Some(ParsedDateTime::Naive(date.and_time(NaiveTime::MIN)));
    };

    let (clock, offset) = split_offset(time_part);
    let naive = date.and_time(parse_clock(clock)?);

    match offset {
        None => Some(ParsedDateTime::Naive(naive)),
        Some(offset) => naive
            .and_local_timezone(parse_offset(offset)?)
            .single()
            .map(ParsedDateTime::Offset),
    }
}

/// Pin a wall-clock reading to `tz`.
///
/// A repeated reading (DST fall-back) takes the standard-time offset. A
/// reading inside a DST gap keeps its wall-clock fields and takes the offset
/// in force before the transition.
fn localize(naive: NaiveDateTime, tz: Tz) -> FixedOffset {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.offset().fix(),
        LocalResult::Ambiguous(_, latest) => latest.offset().fix(),
        LocalResult::None => {
            let before = naive - TimeDelta::days(1);
            let offset = tz.offset_from_utc_datetime(&before).fix();
            debug!(local = %naive, timezone = %tz, offset = %offset, "Local time falls in a DST gap");
            offset
        }
    }
}

/// Resolve request fields to a zoned birth moment.
///
/// `birth_datetime` wins over `birth_date` + `birth_time`. Naive values are
/// read as wall-clock time in the timezone; values carrying an offset are
/// converted into it.
pub fn resolve_birth(
    input: &BirthInput<'_>,
    defaults: &AnalysisConfig,
) -> Result<ResolvedBirth, BirthInputError> {
    let tz_name = non_blank(input.timezone).unwrap_or(defaults.default_timezone.as_str());
    let tz: Tz = tz_name
        .parse()
        .map_err(|_| BirthInputError::UnknownTimezone(tz_name.to_string()))?;

    let parsed = if let Some(raw) = non_blank(input.birth_datetime) {
        parse_iso(raw).ok_or(BirthInputError::InvalidDatetime)?
    } else {
        match (non_blank(input.birth_date), non_blank(input.birth_time)) {
            (Some(date), Some(time)) => parse_iso(&format!("{}T{}", date, time))
                .ok_or(BirthInputError::InvalidDateTimePair)?,
            _ => return Err(BirthInputError::MissingBirth),
        }
    };

    let (local, offset) = match parsed {
        ParsedDateTime::Naive(naive) => (naive, localize(naive, tz)),
        ParsedDateTime::Offset(dt) => {
            let zoned = dt.with_timezone(&tz);
            (zoned.naive_local(), zoned.offset().fix())
        }
    };
    debug!(timezone = tz_name, local = %local, offset = %offset, "Resolved birth input");

    Ok(ResolvedBirth {
        local,
        offset,
        timezone: tz_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(input: BirthInput<'_>) -> Result<ResolvedBirth, BirthInputError> {
        resolve_birth(&input, &AnalysisConfig::default())
    }

    #[test]
    fn test_naive_datetime_uses_default_timezone() {
        let birth = resolve(BirthInput {
            birth_datetime: Some("1992-03-14T23:30"),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(birth.timezone, "Asia/Shanghai");
        assert_eq!(birth.iso(), "1992-03-14T23:30:00+08:00");
        assert_eq!(birth.civil(), CivilTimestamp::new(1992, 3, 14, 23));
    }

    #[test]
    fn test_accepted_datetime_forms() {
        for raw in [
            "1992-03-14T23:30",
            "1992-03-14T23:30:00",
            "1992-03-14 23:30",
            "1992-03-14T23:30:00.250",
            "  1992-03-14T23:30  ",
        ] {
            let birth = resolve(BirthInput {
                birth_datetime: Some(raw),
                ..Default::default()
            })
            .unwrap_or_else(|e| panic!("{:?} rejected: {}", raw, e));
            assert_eq!(birth.civil(), CivilTimestamp::new(1992, 3, 14, 23), "{:?}", raw);
        }
    }

    #[test]
    fn test_fractional_seconds_in_iso() {
        let birth = resolve(BirthInput {
            birth_datetime: Some("1992-03-14T23:30:00.5"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(birth.iso(), "1992-03-14T23:30:00.500000+08:00");
    }

    #[test]
    fn test_date_only_is_midnight() {
        let birth = resolve(BirthInput {
            birth_datetime: Some("2001-09-09"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(birth.civil(), CivilTimestamp::new(2001, 9, 9, 0));
    }

    #[test]
    fn test_offset_is_converted_into_timezone() {
        let birth = resolve(BirthInput {
            birth_datetime: Some("1992-03-14T20:30:00Z"),
            ..Default::default()
        })
        .unwrap();
        // 20:30 UTC is 04:30 the next day in Shanghai.
        assert_eq!(birth.civil(), CivilTimestamp::new(1992, 3, 15, 4));
        assert_eq!(birth.iso(), "1992-03-15T04:30:00+08:00");

        let birth = resolve(BirthInput {
            birth_datetime: Some("1992-03-14T23:30+09:00"),
            timezone: Some("Asia/Kuala_Lumpur"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(birth.civil(), CivilTimestamp::new(1992, 3, 14, 22));
    }

    #[test]
    fn test_date_and_time_pair() {
        let birth = resolve(BirthInput {
            birth_date: Some("1992-03-14"),
            birth_time: Some("07:05"),
            timezone: Some("Asia/Kuala_Lumpur"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(birth.civil(), CivilTimestamp::new(1992, 3, 14, 7));
        assert_eq!(birth.timezone, "Asia/Kuala_Lumpur");
    }

    #[test]
    fn test_blank_datetime_falls_back_to_pair() {
        let birth = resolve(BirthInput {
            birth_datetime: Some("   "),
            birth_date: Some("1992-03-14"),
            birth_time: Some("23:30"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(birth.civil().hour, 23);
    }

    #[test]
    fn test_blank_timezone_uses_default() {
        let birth = resolve(BirthInput {
            birth_datetime: Some("1992-03-14T23:30"),
            timezone: Some(""),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(birth.timezone, "Asia/Shanghai");
    }

    #[test]
    fn test_errors() {
        let err = resolve(BirthInput {
            birth_datetime: Some("14/03/1992"),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, BirthInputError::InvalidDatetime);
        assert_eq!(err.to_string(), "Invalid birth_datetime format (use ISO 8601)");

        let err = resolve(BirthInput {
            birth_date: Some("1992-03-14"),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, BirthInputError::MissingBirth);
        assert_eq!(
            err.to_string(),
            "Provide birth_datetime or birth_date + birth_time"
        );

        let err = resolve(BirthInput {
            birth_date: Some("1992-13-14"),
            birth_time: Some("23:30"),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err, BirthInputError::InvalidDateTimePair);

        let err = resolve(BirthInput {
            birth_datetime: Some("1992-03-14T23:30"),
            timezone: Some("Mars/Olympus_Mons"),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.field(), "timezone");
        assert_eq!(err.to_string(), "Unknown timezone: Mars/Olympus_Mons");
    }

    #[test]
    fn test_dst_transitions() {
        // 2021-03-14 02:30 does not exist in New York: the wall clock is
        // kept and the pre-transition standard offset applies.
        let birth = resolve(BirthInput {
            birth_datetime: Some("2021-03-14T02:30"),
            timezone: Some("America/New_York"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(birth.civil(), CivilTimestamp::new(2021, 3, 14, 2));
        assert_eq!(birth.iso(), "2021-03-14T02:30:00-05:00");

        // Same rule through the date + time pair.
        let birth = resolve(BirthInput {
            birth_date: Some("2021-03-14"),
            birth_time: Some("02:00"),
            timezone: Some("America/New_York"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(birth.civil().hour, 2);
        assert_eq!(birth.iso(), "2021-03-14T02:00:00-05:00");

        // 2021-11-07 01:30 happens twice; the standard-time reading wins.
        let birth = resolve(BirthInput {
            birth_datetime: Some("2021-11-07T01:30"),
            timezone: Some("America/New_York"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(birth.iso(), "2021-11-07T01:30:00-05:00");
    }

    #[test]
    fn test_iso_8601_forms() {
        let cases = [
            ("1992-03-14", "1992-03-14T00:00:00+08:00"),
            ("19920314", "1992-03-14T00:00:00+08:00"),
            ("1992-03-14T23", "1992-03-14T23:00:00+08:00"),
            ("1992-03-14T23:30", "1992-03-14T23:30:00+08:00"),
            ("1992-03-14t23:30:15", "1992-03-14T23:30:15+08:00"),
            ("1992-03-14 23:30:15.5", "1992-03-14T23:30:15.500000+08:00"),
            ("19920314T23", "1992-03-14T23:00:00+08:00"),
            ("19920314T2330", "1992-03-14T23:30:00+08:00"),
            ("19920314T233015", "1992-03-14T23:30:15+08:00"),
            ("19920314T233015.25", "1992-03-14T23:30:15.250000+08:00"),
            ("1992-03-14T15:30Z", "1992-03-14T23:30:00+08:00"),
            ("1992-03-14T15Z", "1992-03-14T23:00:00+08:00"),
            ("1992-03-14T23:30+08:00", "1992-03-14T23:30:00+08:00"),
            ("1992-03-14T23:30+0800", "1992-03-14T23:30:00+08:00"),
            ("1992-03-14T23:30+08", "1992-03-14T23:30:00+08:00"),
            ("1992-03-14T10:30-05:00", "1992-03-14T23:30:00+08:00"),
            ("19920314T1030-0500", "1992-03-14T23:30:00+08:00"),
        ];

        for (raw, expected) in cases {
            let birth = resolve(BirthInput {
                birth_datetime: Some(raw),
                ..Default::default()
            })
            .unwrap_or_else(|e| panic!("{:?} rejected: {}", raw, e));
            assert_eq!(birth.iso(), expected, "{:?}", raw);
        }
    }

    #[test]
    fn test_malformed_forms_rejected() {
        for raw in [
            "1992-3-14",
            "1992-03-14T",
            "1992-03-14T2",
            "1992-03-14T233",
            "1992-03-14T23:3",
            "1992-03-14T24:00",
            "1992-03-14T23:30:00+8",
            "1992-03-14T23:30:00+08:60",
            "1992031",
            "1992-03-14T23:30:00.x",
        ] {
            let err = resolve(BirthInput {
                birth_datetime: Some(raw),
                ..Default::default()
            })
            .unwrap_err();
            assert_eq!(err, BirthInputError::InvalidDatetime, "{:?}", raw);
        }
    }

    #[test]
    fn test_pair_accepts_hour_only_time() {
        let birth = resolve(BirthInput {
            birth_date: Some("1992-03-14"),
            birth_time: Some("23"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(birth.civil(), CivilTimestamp::new(1992, 3, 14, 23));
        assert_eq!(birth.iso(), "1992-03-14T23:00:00+08:00");
    }
}
