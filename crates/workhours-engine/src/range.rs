//! Twelve-hour time-range parsing.
//!
//! Turns a calendar date plus text like `"3:52 pm - 1:11 am"` into a pair of
//! timezone-aware instants and the real time elapsed between them.
//!
//! # Rules
//!
//! - The grammar is `H:MM am|pm <sep> H:MM am|pm`, case-insensitive, with free
//!   whitespace around each piece. `<sep>` is a hyphen, en-dash or em-dash.
//! - A range whose end reads earlier than or equal to its start runs into the
//!   next calendar day. Equal ends therefore mean a full 24 hours, never zero.
//! - Elapsed time is measured between UTC instants, not wall-clock readings,
//!   so a range across a spring-forward transition is an hour shorter than it
//!   looks and one across a fall-back transition is an hour longer.
//!
//! # Local times that do not exist or exist twice
//!
//! A wall-clock time inside a spring-forward gap is read with the offset in
//! force before the jump, which lands it that far past the gap (2:30 becomes
//! 3:30 daylight time). If that pushes the start onto or past the end, the
//! range is rejected as malformed. A time repeated by a fall-back transition
//! resolves to its first occurrence.

use chrono::{
    DateTime, Days, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::config::parse_timezone;
use crate::dates::parse_iso_date;
use crate::error::{HoursError, Result};

static TIME_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d{1,2}):(\d{2})\s*([ap]m)\s*[-–—]\s*(\d{1,2}):(\d{2})\s*([ap]m)\s*$")
        .expect("time range pattern compiles")
});

// ── parse_clock_range ───────────────────────────────────────────────────────

/// The start and end wall-clock readings of a range, without a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ClockRange {
    /// Whether the range runs past midnight into the next day.
    pub fn is_overnight(&self) -> bool {
        self.end <= self.start
    }
}

/// Parse range text into 24-hour wall-clock times.
///
/// # Errors
///
/// Returns [`HoursError::InvalidFormat`] if the text does not follow the
/// twelve-hour grammar, or an hour is above 12 or a minute above 59.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use workhours_engine::range::parse_clock_range;
///
/// let range = parse_clock_range("3:52 PM – 1:11 am").unwrap();
/// assert_eq!(range.start, NaiveTime::from_hms_opt(15, 52, 0).unwrap());
/// assert_eq!(range.end, NaiveTime::from_hms_opt(1, 11, 0).unwrap());
/// assert!(range.is_overnight());
/// ```
pub fn parse_clock_range(text: &str) -> Result<ClockRange> {
    let caps = TIME_RANGE.captures(text).ok_or_else(|| {
        HoursError::InvalidFormat(format!(
            "'{}': expected a range like '3:52 pm - 1:11 am'",
            text.trim()
        ))
    })?;

    Ok(ClockRange {
        start: clock_time(text, &caps, 1)?,
        end: clock_time(text, &caps, 4)?,
    })
}

/// Read the `H`, `MM`, `am|pm` capture triple starting at group `first`.
fn clock_time(text: &str, caps: &Captures<'_>, first: usize) -> Result<NaiveTime> {
    let out_of_range =
        || HoursError::InvalidFormat(format!("'{}': clock time out of range", text.trim()));

    let hour12: u32 = caps[first].parse().map_err(|_| out_of_range())?;
    let minute: u32 = caps[first + 1].parse().map_err(|_| out_of_range())?;
    let is_pm = caps[first + 2].eq_ignore_ascii_case("pm");

    if hour12 > 12 {
        return Err(out_of_range());
    }
    let hour24 = hour12 % 12 + if is_pm { 12 } else { 0 };

    NaiveTime::from_hms_opt(hour24, minute, 0).ok_or_else(out_of_range)
}

// ── parse_range ─────────────────────────────────────────────────────────────

/// A time range pinned to real instants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedInterval {
    /// Start instant (RFC 3339 with offset).
    pub start: DateTime<Tz>,
    /// End instant, strictly after `start`.
    pub end: DateTime<Tz>,
    /// Whole hours of real elapsed time.
    pub hours: i64,
    /// Remaining minutes of real elapsed time (0-59).
    pub minutes: i64,
    /// Minutes between the two wall-clock readings, ignoring offset changes.
    pub wall_clock_minutes: i64,
    /// Whether the UTC offset at `end` differs from the one at `start`.
    pub dst_adjusted: bool,
}

impl ParsedInterval {
    /// Real elapsed minutes.
    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }

    /// `"3:52 pm – 1:11 am"`: lowercase, twelve-hour, no leading zero.
    pub fn time_label(&self) -> String {
        format!(
            "{} – {}",
            twelve_hour(&self.start),
            twelve_hour(&self.end)
        )
    }
}

/// Parse a date, range text, and IANA timezone into a [`ParsedInterval`].
///
/// # Arguments
///
/// * `date` — A `YYYY-MM-DD` calendar date
/// * `range` — Range text such as `"9:00 am - 5:30 pm"`
/// * `timezone` — An IANA timezone name (e.g., `"America/Chicago"`)
///
/// # Errors
///
/// Returns [`HoursError::InvalidDate`], [`HoursError::InvalidFormat`], or
/// [`HoursError::InvalidTimezone`] for the corresponding bad input. Callers
/// that want a fallback zone instead of an error should resolve it through
/// [`crate::ReportConfig::resolve_timezone`] and use [`parse_range_in`].
///
/// # Examples
///
/// ```
/// use workhours_engine::range::parse_range;
///
/// // US spring-forward night: two hours on the clock, one hour worked.
/// let interval = parse_range("2025-03-09", "1:30 am - 3:30 am", "America/Chicago").unwrap();
/// assert_eq!(interval.wall_clock_minutes, 120);
/// assert_eq!((interval.hours, interval.minutes), (1, 0));
/// assert!(interval.dst_adjusted);
/// ```
pub fn parse_range(date: &str, range: &str, timezone: &str) -> Result<ParsedInterval> {
    let date = parse_iso_date(date)?;
    let tz = parse_timezone(timezone)?;
    parse_range_in(date, range, tz)
}

/// Parse range text on an already-resolved date and timezone.
///
/// # Errors
///
/// Returns [`HoursError::InvalidFormat`] if the range text is malformed or
/// its start falls in a spring-forward gap that swallows the whole range.
/// Returns [`HoursError::InvalidDate`] if either end lies outside the
/// representable dates once the timezone is applied.
pub fn parse_range_in(date: NaiveDate, range: &str, tz: Tz) -> Result<ParsedInterval> {
    let clock = parse_clock_range(range)?;

    let end_date = if clock.is_overnight() {
        date.checked_add_days(Days::new(1)).ok_or_else(|| {
            HoursError::InvalidDate(format!("'{date}': no following day"))
        })?
    } else {
        date
    };

    let start_local = date.and_time(clock.start);
    let end_local = end_date.and_time(clock.end);

    let start = localize(&tz, start_local)?;
    let end = localize(&tz, end_local)?;

    // A start inside a gap moves forward and can land on or past the end.
    if end <= start {
        return Err(HoursError::InvalidFormat(format!(
            "'{}': start does not exist on {date} in {}",
            range.trim(),
            tz.name()
        )));
    }

    let elapsed = (end.with_timezone(&Utc) - start.with_timezone(&Utc)).num_minutes();

    Ok(ParsedInterval {
        hours: elapsed / 60,
        minutes: elapsed % 60,
        wall_clock_minutes: (end_local - start_local).num_minutes(),
        dst_adjusted: start.offset().fix() != end.offset().fix(),
        start,
        end,
    })
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Attach `tz` to a wall-clock reading, resolving gaps and folds.
///
/// Fails with [`HoursError::InvalidDate`] when the reading or its UTC
/// instant falls outside chrono's representable range.
fn localize(tz: &Tz, naive: NaiveDateTime) -> Result<DateTime<Tz>> {
    let out_of_range =
        || HoursError::InvalidDate(format!("'{}': outside the supported range", naive.date()));

    let dt = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let day_before = naive
                .checked_sub_signed(chrono::Duration::days(1))
                .ok_or_else(out_of_range)?;
            let before = tz.offset_from_utc_datetime(&day_before).fix();
            let utc = naive
                .checked_sub_signed(chrono::Duration::seconds(i64::from(
                    before.local_minus_utc(),
                )))
                .ok_or_else(out_of_range)?;
            tz.from_utc_datetime(&utc)
        }
    };

    // Formatting reads the local fields back, so they must be representable too.
    dt.naive_utc()
        .checked_add_signed(chrono::Duration::seconds(i64::from(
            dt.offset().fix().local_minus_utc(),
        )))
        .ok_or_else(out_of_range)?;
    Ok(dt)
}

fn twelve_hour(dt: &DateTime<Tz>) -> String {
    dt.format("%-I:%M %p").to_string().to_lowercase()
}

// ── Tests ───────────────────────────────────────────────────────────────────
