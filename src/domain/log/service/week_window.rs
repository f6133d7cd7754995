use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::core::persistence::logs::log_filter::TimestampRange;

use super::date_parser::local_to_utc;

pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Name for a 1-based day number (1 = Sunday .. 7 = Saturday).
pub fn day_name(day_of_week: u32) -> &'static str {
    DAY_NAMES[((day_of_week + 6) % 7) as usize]
}

/// A Sunday 00:00:00.000 to Saturday 23:59:59.999 span in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl WeekWindow {
    /// The week `offset` weeks away from the one containing `today`.
    /// `None` when the shift leaves the representable calendar.
    pub fn for_offset(today: NaiveDate, offset: i64) -> Option<Self> {
        let current_week_start =
            today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
        let shift = Duration::try_days(offset.checked_mul(7)?)?;
        let start_date = current_week_start.checked_add_signed(shift)?;
        let end_date = start_date.checked_add_signed(Duration::days(6))?;

        Some(Self {
            start: start_date.and_time(NaiveTime::MIN),
            end: end_date.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?),
        })
    }

    pub fn to_timestamp_range(&self) -> Option<TimestampRange> {
        Some(TimestampRange::between(
            local_to_utc(self.start)?,
            local_to_utc(self.end)?,
        ))
    }
}

/// The latest date strictly before `today` that falls on `day_of_week`
/// (1 = Sunday .. 7 = Saturday). Today's own weekday maps to a week ago.
pub fn most_recent_prior(today: NaiveDate, day_of_week: u32) -> NaiveDate {
    let current = today.weekday().number_from_sunday();
    let diff = (7 + day_of_week - current) % 7;
    today - Duration::days(i64::from(7 - diff))
}
