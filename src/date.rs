//! Date helpers
//!
//! Formatting, relative descriptions and calendar arithmetic on
//! [`chrono::DateTime`]. Calendar components are read in the date's own
//! time zone; pass `DateTime<Local>` for local-time behavior.

use chrono::{
    DateTime, Datelike, Days, Local, LocalResult, Months, NaiveDate, Offset, TimeDelta, TimeZone,
    Timelike, Utc,
};
use thiserror::Error;

/// Pattern used by [`format_date`] in the common case.
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("Date is out of the representable range")]
    OutOfRange,
}

/// Replaces the tokens `YYYY`, `MM`, `DD`, `HH`, `mm` and `ss` in `format`.
///
/// Tokens are substituted in that order and only their first occurrence
/// is replaced; every other character is copied literally.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use pure_utils::date::{format_date, DEFAULT_DATE_FORMAT};
///
/// let date = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
/// assert_eq!(format_date(&date, DEFAULT_DATE_FORMAT), "2024-03-07 09:05:02");
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String {
    let replacements = [
        ("YYYY", date.year().to_string()),
        ("MM", format!("{:02}", date.month())),
        ("DD", format!("{:02}", date.day())),
        ("HH", format!("{:02}", date.hour())),
        ("mm", format!("{:02}", date.minute())),
        ("ss", format!("{:02}", date.second())),
    ];

    let formatted = replacements
        .iter()
        .fold(format.to_string(), |acc, (token, value)| acc.replacen(token, value, 1));

    #[cfg(feature = "tracing")]
    tracing::debug!("format_date({:?}) -> {}", format, formatted);

    formatted
}

/// Describes how long ago `date` was, e.g. `3 hours ago`.
pub fn get_relative_time<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    relative_time_between(date, &Utc::now())
}

/// Describes the time elapsed from `date` to `now`.
///
/// Buckets, with floor division: under a minute (future dates included)
/// is `just now`, then minutes, hours, days under 30, months of 30 days
/// under 365 days, and years of 365 days.
pub fn relative_time_between<Tz: TimeZone, Tz2: TimeZone>(
    date: &DateTime<Tz>,
    now: &DateTime<Tz2>,
) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = MINUTE * 60;
    const DAY: i64 = HOUR * 24;
    const MONTH: i64 = DAY * 30;
    const YEAR: i64 = DAY * 365;

    let elapsed = now.clone().signed_duration_since(date.clone());
    let seconds = elapsed.num_seconds();

    let (count, unit) = match seconds {
        s if s < MINUTE => return "just now".to_string(),
        s if s < HOUR => (s / MINUTE, "minute"),
        s if s < DAY => (s / HOUR, "hour"),
        s if s < MONTH => (s / DAY, "day"),
        s if s < YEAR => (s / MONTH, "month"),
        s => (s / YEAR, "year"),
    };
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

/// `true` if both dates fall on the same calendar day in `d1`'s time zone.
///
/// `d2` is converted to that zone first, so the same instant seen from two
/// offsets always compares equal.
pub fn is_same_day<Tz: TimeZone, Tz2: TimeZone>(d1: &DateTime<Tz>, d2: &DateTime<Tz2>) -> bool {
    d1.date_naive() == d2.with_timezone(&d1.timezone()).date_naive()
}

/// Shifts `date` by `days` calendar days, keeping the wall-clock time.
///
/// When that wall-clock time is repeated in `Tz` the earlier instant is
/// used. When it is skipped by a transition, the offset in effect before
/// the gap is applied, moving the time forward by the gap's length.
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] if the shifted date cannot be
/// represented.
pub fn add_days<Tz: TimeZone>(date: &DateTime<Tz>, days: i64) -> Result<DateTime<Tz>, DateError> {
    let magnitude = Days::new(days.unsigned_abs());
    let naive = date.naive_local();
    let shifted = if days >= 0 {
        naive.checked_add_days(magnitude)
    } else {
        naive.checked_sub_days(magnitude)
    }
    .ok_or(DateError::OutOfRange)?;

    let tz = date.timezone();
    match tz.from_local_datetime(&shifted) {
        LocalResult::Single(resolved) => Ok(resolved),
        LocalResult::Ambiguous(earliest, _latest) => Ok(earliest),
        LocalResult::None => {
            let before_gap = shifted
                .checked_sub_signed(TimeDelta::days(1))
                .and_then(|earlier| tz.from_local_datetime(&earlier).earliest())
                .map_or_else(|| date.offset().fix(), |earlier| earlier.offset().fix());
            let utc = shifted
                .checked_sub_signed(TimeDelta::seconds(i64::from(before_gap.local_minus_utc())))
                .ok_or(DateError::OutOfRange)?;

            #[cfg(feature = "tracing")]
            tracing::debug!("add_days: {} falls in a time zone gap", shifted);

            Ok(tz.from_utc_datetime(&utc))
        }
    }
}

/// Number of days in a 1-indexed `month` of `year`.
///
/// # Errors
///
/// Returns [`DateError::InvalidMonth`] unless `month` is in `1..=12`.
pub fn get_days_in_month(year: i32, month: u32) -> Result<u32, DateError> {
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidMonth(month));
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(DateError::OutOfRange)?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or(DateError::OutOfRange)?;
    let days = next.signed_duration_since(first).num_days();
    u32::try_from(days).map_err(|_| DateError::OutOfRange)
}

/// Local date for a Unix timestamp in milliseconds.
pub fn from_timestamp_millis(millis: i64) -> Result<DateTime<Local>, DateError> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|utc| utc.with_timezone(&Local))
        .ok_or(DateError::OutOfRange)
}
