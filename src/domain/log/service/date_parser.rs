//! Multi-format date parsing for the `from` / `to` query parameters.
//!
//! Formats are tried in order; the first strategy that recognises the input
//! wins. When none does, the caller gets a [`DateParseError`] carrying the
//! raw string.

use chrono::{
    DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
    Utc,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised date: {input}")]
pub struct DateParseError {
    pub input: String,
}

/// A named parsing strategy. Returns `None` when the input is not its format.
pub struct DateStrategy {
    pub name: &'static str,
    pub parse: fn(&str) -> Option<DateTime<Utc>>,
}

pub const STRATEGIES: &[DateStrategy] = &[
    DateStrategy {
        name: "simple-date",
        parse: parse_simple_date,
    },
    DateStrategy {
        name: "verbose-date-time",
        parse: parse_verbose_date_time,
    },
    DateStrategy {
        name: "iso-8601",
        parse: parse_iso_8601,
    },
];

pub fn parse_date(input: &str) -> Result<DateTime<Utc>, DateParseError> {
    let trimmed = input.trim();
    STRATEGIES
        .iter()
        .find_map(|strategy| {
            let parsed = (strategy.parse)(trimmed)?;
            tracing::trace!(strategy = strategy.name, input, "Parsed date");
            Some(parsed)
        })
        .ok_or_else(|| DateParseError {
            input: input.to_string(),
        })
}

/// Resolves a wall-clock time in the local zone to an instant.
///
/// Ambiguous times (DST fold) take the earlier instant. Times inside a DST gap
/// are read with the offset in force before the gap, which lands them just
/// past it (00:30 in a 00:00-01:00 gap becomes 01:30).
pub fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    resolve_local(&Local, naive)
}

fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.with_timezone(&Utc)),
        LocalResult::None => {
            let before_gap = naive.checked_sub_signed(Duration::days(1))?;
            let offset = tz.offset_from_local_datetime(&before_gap).earliest()?;
            let utc = naive
                .checked_sub_signed(Duration::seconds(i64::from(offset.fix().local_minus_utc())))?;
            Some(Utc.from_utc_datetime(&utc))
        }
    }
}

pub fn local_midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    local_to_utc(date.and_time(NaiveTime::MIN))
}

/// `23:59:59.999` local time on `date`.
pub fn local_end_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    let end = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?;
    local_to_utc(date.and_time(end))
}

/// Checks the `DD-MM-YYYY` shape and returns the calendar date, if valid.
fn dd_mm_yyyy(s: &str) -> Option<Option<NaiveDate>> {
    let b = s.as_bytes();
    let shaped = b.len() == 10
        && b[2] == b'-'
        && b[5] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 2 || i == 5 || c.is_ascii_digit());
    if !shaped {
        return None;
    }
    Some(NaiveDate::parse_from_str(s, "%d-%m-%Y").ok())
}

/// `DD-MM-YYYY` at local midnight.
fn parse_simple_date(s: &str) -> Option<DateTime<Utc>> {
    local_midnight(dd_mm_yyyy(s)??)
}

/// `DD-MM-YYYYT<Www> <Mon> <DD> <YYYY> <HH>:<MM>:<SS> GMT±HHMM[ (zone name)]`.
///
/// The leading date token only has to be well-formed; the date and time come
/// from the verbose part and are read as local time.
fn parse_verbose_date_time(s: &str) -> Option<DateTime<Utc>> {
    let (head, rest) = s.split_at_checked(10)?;
    dd_mm_yyyy(head)?;
    let verbose = rest.strip_prefix('T')?;

    let (weekday, verbose) = verbose.split_at_checked(4)?;
    let weekday = weekday.as_bytes();
    if !weekday[..3].iter().all(u8::is_ascii_alphabetic) || weekday[3] != b' ' {
        return None;
    }

    let (naive, remainder) =
        NaiveDateTime::parse_and_remainder(verbose, "%b %d %Y %H:%M:%S GMT").ok()?;
    let offset = remainder.as_bytes();
    let has_offset = offset.len() >= 5
        && (offset[0] == b'+' || offset[0] == b'-')
        && offset[1..5].iter().all(u8::is_ascii_digit);
    if !has_offset {
        return None;
    }

    local_to_utc(naive)
}

/// RFC 3339, or an offset-less ISO date-time / date read as local time.
fn parse_iso_8601(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return local_to_utc(naive);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return local_midnight(date);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike};

    fn local(dt: DateTime<Utc>) -> NaiveDateTime {
        dt.with_timezone(&Local).naive_local()
    }

    #[test]
    fn simple_date_is_local_midnight() {
        for (input, y, m, d) in [
            ("10-01-2025", 2025, 1, 10),
            ("29-02-2024", 2024, 2, 29),
            ("31-12-1999", 1999, 12, 31),
        ] {
            let parsed = local(parse_date(input).unwrap());
            assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(y, m, d).unwrap());
            assert_eq!(parsed.time(), NaiveTime::MIN);
        }
    }

    #[test]
    fn impossible_simple_date_is_rejected() {
        let err = parse_date("31-02-2025").unwrap_err();
        assert_eq!(err.input, "31-02-2025");
        assert!(parse_date("29-02-2025").is_err());
    }

    #[test]
    fn verbose_form_uses_the_verbose_fields() {
        let parsed =
            parse_date("01-01-2000TFri Jan 10 2025 14:30:15 GMT+0530 (India Standard Time)")
                .unwrap();
        let local = local(parsed);
        assert_eq!(local.date(), NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        assert_eq!((local.hour(), local.minute(), local.second()), (14, 30, 15));
    }

    #[test]
    fn verbose_form_takes_month_from_month_name() {
        let parsed = parse_date("10-01-2025TMon Mar 03 2025 08:00:00 GMT-0400").unwrap();
        assert_eq!(
            local(parsed).date(),
            NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
        );
    }

    #[test]
    fn verbose_form_requires_a_gmt_offset() {
        assert!(parse_date("10-01-2025TFri Jan 10 2025 14:30:15").is_err());
        assert!(parse_date("10-01-2025TFri Jan 10 2025 14:30:15 GMT").is_err());
    }

    #[test]
    fn iso_fallbacks() {
        let rfc = parse_date("2025-01-10T12:00:00Z").unwrap();
        assert_eq!(rfc, Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap());

        let naive = local(parse_date("2025-01-10T07:45:00").unwrap());
        assert_eq!((naive.hour(), naive.minute()), (7, 45));

        let date_only = local(parse_date("2025-01-10").unwrap());
        assert_eq!(date_only.date(), NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        assert_eq!(date_only.time(), NaiveTime::MIN);
    }

    #[test]
    fn garbage_reports_the_raw_input() {
        let err = parse_date("  next tuesday ").unwrap_err();
        assert_eq!(err.input, "  next tuesday ");
        assert!(parse_date("").is_err());
    }

    #[test]
    fn end_of_day_is_last_millisecond() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let end = local(local_end_of_day(date).unwrap());
        assert_eq!(end.date(), date);
        assert_eq!(end.time(), NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap());
    }

    /// UTC-4 until 2024-09-08T04:00Z, UTC-3 afterwards. Local 00:00-01:00 on
    /// 2024-09-08 does not exist.
    #[derive(Debug, Clone, Copy)]
    struct SpringForward;

    impl SpringForward {
        fn before() -> FixedOffset {
            FixedOffset::west_opt(4 * 3600).unwrap()
        }

        fn after() -> FixedOffset {
            FixedOffset::west_opt(3 * 3600).unwrap()
        }

        fn gap_start() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 9, 8).unwrap().and_time(NaiveTime::MIN)
        }
    }

    impl TimeZone for SpringForward {
        type Offset = FixedOffset;

        fn from_offset(_: &FixedOffset) -> Self {
            SpringForward
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let gap_end = Self::gap_start() + Duration::hours(1);
            if *local < Self::gap_start() {
                LocalResult::Single(Self::before())
            } else if *local < gap_end {
                LocalResult::None
            } else {
                LocalResult::Single(Self::after())
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < Self::gap_start() + Duration::hours(4) {
                Self::before()
            } else {
                Self::after()
            }
        }
    }

    #[test]
    fn times_inside_a_dst_gap_move_past_it() {
        let in_gap = SpringForward::gap_start() + Duration::minutes(30);
        let resolved = resolve_local(&SpringForward, in_gap).unwrap();

        assert_eq!(resolved, Utc.with_ymd_and_hms(2024, 9, 8, 4, 30, 0).unwrap());
        assert_eq!(
            resolved.with_timezone(&SpringForward).naive_local(),
            SpringForward::gap_start() + Duration::minutes(90)
        );
    }

    #[test]
    fn times_around_a_dst_gap_resolve_normally() {
        let before = SpringForward::gap_start() - Duration::minutes(1);
        assert_eq!(
            resolve_local(&SpringForward, before).unwrap(),
            Utc.with_ymd_and_hms(2024, 9, 8, 3, 59, 0).unwrap()
        );

        let after = SpringForward::gap_start() + Duration::hours(1);
        assert_eq!(
            resolve_local(&SpringForward, after).unwrap(),
            Utc.with_ymd_and_hms(2024, 9, 8, 4, 0, 0).unwrap()
        );
    }

    #[test]
    fn strategies_are_tried_in_declared_order() {
        let names: Vec<&str> = STRATEGIES.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["simple-date", "verbose-date-time", "iso-8601"]);
    }
}
