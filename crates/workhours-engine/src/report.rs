//! Report aggregation.
//!
//! Runs every raw `(date, range)` row through the range parser, keeps the ones
//! that parse, and rolls them up:
//!
//! - rows are ordered by date (stable, so same-day rows keep input order)
//! - hours and minutes are summed as separate columns into a *subtotal*, and
//!   the minute column is carried into hours once to give the *total*
//! - the earliest and latest dates become a period title such as
//!   `"October 25 – 27, 2025"`
//!
//! A row that is blank or malformed never fails the report. It comes back as
//! [`RowOutcome::Skipped`] with the reason, and the rest of the report is
//! built without it.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::dates::{month_name, parse_month, parse_row_date};
use crate::error::{HoursError, Result};
use crate::range::{parse_range_in, ParsedInterval};

// ── Inputs ──────────────────────────────────────────────────────────────────

/// One line of the form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub range: String,
}

impl RawRow {
    pub fn new(date: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            range: range.into(),
        }
    }
}

/// Everything needed to build one report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Display year. Also the year for row dates typed without one.
    pub year: i32,
    /// Display month as a number, abbreviation, or name. Needed for rows
    /// typed as a bare day number.
    #[serde(default)]
    pub month: Option<String>,
    /// IANA timezone; the configured default is used when absent or unknown.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub rows: Vec<RawRow>,
}

// ── Outputs ─────────────────────────────────────────────────────────────────

/// A parsed row, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Position of the row in the request.
    pub index: usize,
    pub date: NaiveDate,
    /// `MM/DD/YYYY`
    pub display_date: String,
    /// Full weekday name, e.g. `"Saturday"`.
    pub weekday: String,
    /// e.g. `"3:52 pm – 1:11 am"`
    pub time_label: String,
    #[serde(flatten)]
    pub interval: ParsedInterval,
}

impl ReportRow {
    pub fn hours(&self) -> i64 {
        self.interval.hours
    }

    pub fn minutes(&self) -> i64 {
        self.interval.minutes
    }

    /// Minutes zero-padded to two digits.
    pub fn display_minutes(&self) -> String {
        format!("{:02}", self.interval.minutes)
    }

    pub fn dst_adjusted(&self) -> bool {
        self.interval.dst_adjusted
    }
}

/// Why a row was left out of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    EmptyDate,
    EmptyRange,
    InvalidDate(String),
    InvalidRange(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyDate => f.write_str("date is empty"),
            SkipReason::EmptyRange => f.write_str("time range is empty"),
            SkipReason::InvalidDate(msg) | SkipReason::InvalidRange(msg) => f.write_str(msg),
        }
    }
}

/// A row left out of the report, echoed back with its reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub index: usize,
    pub date: String,
    pub range: String,
    pub reason: SkipReason,
}

/// What happened to one input row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Included(ReportRow),
    Skipped(SkippedRow),
}

/// Column sums over the included rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportTotals {
    /// Sum of the hours column.
    pub subtotal_hours: i64,
    /// Sum of the minutes column, before any carry.
    pub subtotal_minutes: i64,
    /// Whole hours contained in `subtotal_minutes`.
    pub subtotal_minutes_as_hours: i64,
    /// Minutes left in `subtotal_minutes` after taking out whole hours.
    pub subtotal_minutes_remainder: i64,
    /// `subtotal_hours + subtotal_minutes_as_hours`
    pub total_hours: i64,
    /// Same as `subtotal_minutes_remainder`.
    pub total_minutes: i64,
}

impl ReportTotals {
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        let subtotal_hours: i64 = rows.iter().map(ReportRow::hours).sum();
        let subtotal_minutes: i64 = rows.iter().map(ReportRow::minutes).sum();

        let carried = subtotal_minutes / 60;
        let remainder = subtotal_minutes % 60;

        Self {
            subtotal_hours,
            subtotal_minutes,
            subtotal_minutes_as_hours: carried,
            subtotal_minutes_remainder: remainder,
            total_hours: subtotal_hours + carried,
            total_minutes: remainder,
        }
    }

    /// Total minutes zero-padded to two digits.
    pub fn display_total_minutes(&self) -> String {
        format!("{:02}", self.total_minutes)
    }
}

/// A finished work-hours report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// e.g. `"Jane Doe — Work Hours (October 2025)"`
    pub heading: String,
    /// Date span of the included rows, or the bare year when there are none.
    pub period_title: String,
    /// IANA name of the timezone the rows were read in.
    pub timezone: String,
    /// Included rows, ascending by date.
    pub rows: Vec<ReportRow>,
    pub totals: ReportTotals,
    /// Whether any included row crosses a UTC-offset change.
    pub dst_adjusted: bool,
    /// Rows left out, in input order.
    pub skipped: Vec<SkippedRow>,
}

// ── Operations ──────────────────────────────────────────────────────────────

/// Build a report from a request.
///
/// The request's timezone goes through [`ReportConfig::resolve_timezone`], so
/// an unknown zone falls back to the configured default.
///
/// # Errors
///
/// Returns [`crate::HoursError::InvalidMonth`] if the request names a display
/// month that is not recognized. Row-level problems never produce an error.
pub fn aggregate(request: &ReportRequest, config: &ReportConfig) -> Result<Report> {
    let month = request
        .month
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(parse_month)
        .transpose()?;
    let tz = config.resolve_timezone(request.timezone.as_deref());

    Ok(build_report(
        &request.first_name,
        &request.last_name,
        &request.rows,
        request.year,
        month,
        tz,
    ))
}

/// Build an unnamed report from raw rows on an already-resolved timezone.
pub fn aggregate_rows(rows: &[RawRow], year: i32, month: Option<u32>, tz: Tz) -> Report {
    build_report("", "", rows, year, month, tz)
}

/// Evaluate one raw row. `index` is its position in the request.
pub fn evaluate_row(
    index: usize,
    row: &RawRow,
    year: i32,
    month: Option<u32>,
    tz: Tz,
) -> RowOutcome {
    let skipped = |reason| {
        RowOutcome::Skipped(SkippedRow {
            index,
            date: row.date.clone(),
            range: row.range.clone(),
            reason,
        })
    };

    let date_text = row.date.trim();
    let range_text = row.range.trim();
    if date_text.is_empty() {
        return skipped(SkipReason::EmptyDate);
    }
    if range_text.is_empty() {
        return skipped(SkipReason::EmptyRange);
    }

    let date = match parse_row_date(date_text, year, month) {
        Ok(date) => date,
        Err(err) => return skipped(SkipReason::InvalidDate(err.to_string())),
    };
    let interval = match parse_range_in(date, range_text, tz) {
        Ok(interval) => interval,
        Err(err @ HoursError::InvalidDate(_)) => {
            return skipped(SkipReason::InvalidDate(err.to_string()))
        }
        Err(err) => return skipped(SkipReason::InvalidRange(err.to_string())),
    };

    RowOutcome::Included(ReportRow {
        index,
        date,
        display_date: date.format("%m/%d/%Y").to_string(),
        weekday: date.format("%A").to_string(),
        time_label: interval.time_label(),
        interval,
    })
}

/// Evaluate every row, returning one outcome per row in input order.
pub fn evaluate_rows(rows: &[RawRow], year: i32, month: Option<u32>, tz: Tz) -> Vec<RowOutcome> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| evaluate_row(index, row, year, month, tz))
        .collect()
}

/// Human-readable span of `dates`, falling back to `year` when empty.
///
/// - same month: `"October 25 – 27, 2025"` (a single day reads `"October 25 – 25, 2025"`)
/// - same year: `"October 25 – November 3, 2025"`
/// - otherwise: `"December 30, 2024 – January 2, 2025"`
pub fn period_title(dates: impl IntoIterator<Item = NaiveDate>, year: i32) -> String {
    let mut dates = dates.into_iter();
    let Some(first) = dates.next() else {
        return year.to_string();
    };
    let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));

    if min.year() != max.year() {
        format!("{} – {}", min.format("%B %-d, %Y"), max.format("%B %-d, %Y"))
    } else if min.month() != max.month() {
        format!(
            "{} – {}, {}",
            min.format("%B %-d"),
            max.format("%B %-d"),
            min.year()
        )
    } else {
        format!("{} – {}, {}", min.format("%B %-d"), max.day(), min.year())
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn build_report(
    first_name: &str,
    last_name: &str,
    raw_rows: &[RawRow],
    year: i32,
    month: Option<u32>,
    tz: Tz,
) -> Report {
    let mut rows = Vec::new();
    let mut skipped = Vec::new();
    for outcome in evaluate_rows(raw_rows, year, month, tz) {
        match outcome {
            RowOutcome::Included(row) => rows.push(row),
            RowOutcome::Skipped(row) => {
                tracing::debug!(index = row.index, reason = %row.reason, "skipping row");
                skipped.push(row);
            }
        }
    }

    rows.sort_by_key(|row| row.date);

    let totals = ReportTotals::from_rows(&rows);
    tracing::debug!(
        included = rows.len(),
        skipped = skipped.len(),
        total_hours = totals.total_hours,
        total_minutes = totals.total_minutes,
        "aggregated report"
    );

    Report {
        heading: heading(first_name, last_name, year, month),
        period_title: period_title(rows.iter().map(|row| row.date), year),
        timezone: tz.name().to_string(),
        dst_adjusted: rows.iter().any(ReportRow::dst_adjusted),
        rows,
        totals,
        skipped,
    }
}

fn heading(first_name: &str, last_name: &str, year: i32, month: Option<u32>) -> String {
    let name = [first_name.trim(), last_name.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let period = match month.and_then(month_name) {
        Some(month) => format!("{month} {year}"),
        None => year.to_string(),
    };

    if name.is_empty() {
        format!("Work Hours ({period})")
    } else {
        format!("{name} — Work Hours ({period})")
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HoursError;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rows(pairs: &[(&str, &str)]) -> Vec<RawRow> {
        pairs.iter().map(|(d, r)| RawRow::new(*d, *r)).collect()
    }

    // ── aggregate_rows tests ────────────────────────────────────────────

    #[test]
    fn test_sorts_and_sums() {
        let report = aggregate_rows(
            &rows(&[
                ("2025-10-27", "9:00 am - 5:00 pm"),
                ("2025-10-25", "9:00 am - 1:00 pm"),
            ]),
            2025,
            None,
            Tz::UTC,
        );
        assert_eq!(report.rows[0].date, ymd(2025, 10, 25));
        assert_eq!(report.rows[1].date, ymd(2025, 10, 27));
        assert_eq!(report.totals.subtotal_hours, 12);
        assert_eq!(report.totals.subtotal_minutes, 0);
        assert_eq!(report.period_title, "October 25 – 27, 2025");
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_empty_rows() {
        let report = aggregate_rows(&[], 2025, None, Tz::UTC);
        assert!(report.rows.is_empty());
        assert_eq!(report.totals, ReportTotals::default());
        assert_eq!(report.period_title, "2025");
        assert!(!report.dst_adjusted);
    }

    #[test]
    fn test_all_rows_skipped_falls_back_to_year() {
        let report = aggregate_rows(&rows(&[("", ""), ("junk", "junk")]), 2024, None, Tz::UTC);
        assert!(report.rows.is_empty());
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.period_title, "2024");
        assert_eq!(report.totals.total_hours, 0);
    }

    #[test]
    fn test_minute_carry() {
        let report = aggregate_rows(
            &rows(&[
                ("2025-10-01", "9:00 am - 10:45 am"),
                ("2025-10-02", "9:00 am - 10:30 am"),
                ("2025-10-03", "9:00 am - 9:50 am"),
            ]),
            2025,
            None,
            Tz::UTC,
        );
        let totals = report.totals;
        assert_eq!(totals.subtotal_hours, 2);
        assert_eq!(totals.subtotal_minutes, 125);
        assert_eq!(totals.subtotal_minutes_as_hours, 2);
        assert_eq!(totals.subtotal_minutes_remainder, 5);
        assert_eq!(totals.total_hours, 4);
        assert_eq!(totals.total_minutes, 5);
        assert_eq!(totals.display_total_minutes(), "05");
    }

    #[test]
    fn test_same_date_keeps_input_order() {
        let report = aggregate_rows(
            &rows(&[
                ("2025-10-02", "6:00 pm - 8:00 pm"),
                ("2025-10-01", "9:00 am - 5:00 pm"),
                ("2025-10-02", "8:00 am - 12:00 pm"),
            ]),
            2025,
            None,
            Tz::UTC,
        );
        let order: Vec<usize> = report.rows.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn test_bad_rows_do_not_block_good_ones() {
        let report = aggregate_rows(
            &rows(&[
                ("2025-10-01", "9:00 am - 5:00 pm"),
                ("", "9:00 am - 5:00 pm"),
                ("2025-10-02", ""),
                ("2025-02-30", "9:00 am - 5:00 pm"),
                ("2025-10-03", "all day"),
                ("2025-10-04", "1:00 pm - 2:15 pm"),
            ]),
            2025,
            None,
            Tz::UTC,
        );
        assert_eq!(report.rows.len(), 2);
        let reasons: Vec<&SkipReason> = report.skipped.iter().map(|s| &s.reason).collect();
        assert_eq!(reasons[0], &SkipReason::EmptyDate);
        assert_eq!(reasons[1], &SkipReason::EmptyRange);
        assert!(matches!(reasons[2], SkipReason::InvalidDate(_)));
        assert!(matches!(reasons[3], SkipReason::InvalidRange(_)));
        let indices: Vec<usize> = report.skipped.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
        assert_eq!(report.totals.total_hours, 9);
        assert_eq!(report.totals.total_minutes, 15);
    }

    #[test]
    fn test_row_past_representable_dates_is_skipped() {
        let last_day = format!("12/31/{}", NaiveDate::MAX.year());
        let report = aggregate_rows(
            &rows(&[
                (last_day.as_str(), "9:00 pm - 11:00 pm"),
                ("2025-10-01", "9:00 am - 5:00 pm"),
            ]),
            2025,
            None,
            Tz::America__Chicago,
        );
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].index, 1);
        assert_eq!(report.skipped[0].index, 0);
        assert!(matches!(report.skipped[0].reason, SkipReason::InvalidDate(_)));
    }

    #[test]
    fn test_range_swallowed_by_spring_forward_is_skipped() {
        let report = aggregate_rows(
            &rows(&[
                ("2025-03-09", "2:30 am - 3:00 am"),
                ("2025-03-10", "9:00 am - 10:00 am"),
            ]),
            2025,
            None,
            Tz::America__Chicago,
        );
        assert_eq!(report.rows.len(), 1);
        assert!(matches!(report.skipped[0].reason, SkipReason::InvalidRange(_)));
        assert_eq!(report.totals.total_hours, 1);
        assert_eq!(report.totals.total_minutes, 0);
    }

    #[test]
    fn test_row_display_fields() {
        let report = aggregate_rows(
            &rows(&[("2025-10-25", "3:52 pm - 1:11 am")]),
            2025,
            None,
            Tz::UTC,
        );
        let row = &report.rows[0];
        assert_eq!(row.display_date, "10/25/2025");
        assert_eq!(row.weekday, "Saturday");
        assert_eq!(row.time_label, "3:52 pm – 1:11 am");
        assert_eq!((row.hours(), row.minutes()), (9, 19));
        assert_eq!(row.display_minutes(), "19");
    }

    #[test]
    fn test_short_row_dates_use_display_context() {
        let report = aggregate_rows(
            &rows(&[
                ("14", "9:00 am - 5:00 pm"),
                ("10/15", "9:00 am - 5:00 pm"),
                ("10/16/2025", "9:00 am - 5:00 pm"),
            ]),
            2025,
            Some(10),
            Tz::UTC,
        );
        let dates: Vec<NaiveDate> = report.rows.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![ymd(2025, 10, 14), ymd(2025, 10, 15), ymd(2025, 10, 16)]
        );
    }

    #[test]
    fn test_dst_flag_rolls_up() {
        let tz = Tz::America__Chicago;
        let plain = aggregate_rows(&rows(&[("2025-03-08", "1:30 am - 3:30 am")]), 2025, None, tz);
        assert!(!plain.dst_adjusted);

        let crossing = aggregate_rows(
            &rows(&[
                ("2025-03-08", "1:30 am - 3:30 am"),
                ("2025-03-09", "1:30 am - 3:30 am"),
            ]),
            2025,
            None,
            tz,
        );
        assert!(crossing.dst_adjusted);
        assert!(!crossing.rows[0].dst_adjusted());
        assert!(crossing.rows[1].dst_adjusted());
        assert_eq!(crossing.totals.total_hours, 3);
    }

    #[test]
    fn test_aggregating_twice_is_identical() {
        let input = rows(&[
            ("2025-10-03", "10:00 pm - 2:30 am"),
            ("2025-10-01", "8:15 am - 4:40 pm"),
        ]);
        let first = aggregate_rows(&input, 2025, None, Tz::UTC);
        let second = aggregate_rows(&input, 2025, None, Tz::UTC);
        assert_eq!(first, second);
    }

    // ── evaluate_row tests ──────────────────────────────────────────────

    #[test]
    fn test_evaluate_row_included() {
        let outcome = evaluate_row(
            3,
            &RawRow::new(" 2025-10-01 ", " 9:00 am - 5:00 pm "),
            2025,
            None,
            Tz::UTC,
        );
        match outcome {
            RowOutcome::Included(row) => {
                assert_eq!(row.index, 3);
                assert_eq!(row.hours(), 8);
            }
            RowOutcome::Skipped(s) => panic!("unexpected skip: {}", s.reason),
        }
    }

    #[test]
    fn test_evaluate_row_skipped_echoes_input() {
        let outcome = evaluate_row(0, &RawRow::new("2025-10-01", "noon"), 2025, None, Tz::UTC);
        let RowOutcome::Skipped(skipped) = outcome else {
            panic!("expected skip");
        };
        assert_eq!(skipped.date, "2025-10-01");
        assert_eq!(skipped.range, "noon");
        assert!(skipped.reason.to_string().contains("Invalid time range"));
    }

    #[test]
    fn test_evaluate_rows_one_outcome_per_row() {
        let outcomes = evaluate_rows(
            &rows(&[("2025-10-02", "9:00 am - 5:00 pm"), ("", "")]),
            2025,
            None,
            Tz::UTC,
        );
        assert_eq!(outcomes.len(), 2);
        assert!(matches!(outcomes[0], RowOutcome::Included(_)));
        assert!(matches!(outcomes[1], RowOutcome::Skipped(_)));
    }

    // ── period_title tests ──────────────────────────────────────────────

    #[test]
    fn test_period_title_same_month() {
        let title = period_title([ymd(2025, 10, 27), ymd(2025, 10, 5)], 2025);
        assert_eq!(title, "October 5 – 27, 2025");
    }

    #[test]
    fn test_period_title_single_day() {
        assert_eq!(period_title([ymd(2025, 7, 4)], 2025), "July 4 – 4, 2025");
        let title = period_title([ymd(2025, 10, 25), ymd(2025, 10, 25)], 2025);
        assert_eq!(title, "October 25 – 25, 2025");
    }

    #[test]
    fn test_period_title_across_months() {
        let title = period_title([ymd(2025, 10, 25), ymd(2025, 11, 3)], 2025);
        assert_eq!(title, "October 25 – November 3, 2025");
    }

    #[test]
    fn test_period_title_across_years() {
        let title = period_title([ymd(2025, 1, 2), ymd(2024, 12, 30)], 2025);
        assert_eq!(title, "December 30, 2024 – January 2, 2025");
    }

    #[test]
    fn test_period_title_empty() {
        assert_eq!(period_title(Vec::<NaiveDate>::new(), 2031), "2031");
    }

    // ── aggregate tests ─────────────────────────────────────────────────

    fn request() -> ReportRequest {
        ReportRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            year: 2025,
            month: Some("oct".to_string()),
            timezone: Some("America/Chicago".to_string()),
            rows: rows(&[("2025-10-01", "9:00 am - 5:00 pm")]),
        }
    }

    #[test]
    fn test_aggregate_heading_and_timezone() {
        let report = aggregate(&request(), &ReportConfig::default()).unwrap();
        assert_eq!(report.heading, "Jane Doe — Work Hours (October 2025)");
        assert_eq!(report.timezone, "America/Chicago");
        assert_eq!(report.rows[0].interval.start.to_rfc3339(), "2025-10-01T09:00:00-05:00");
    }

    #[test]
    fn test_aggregate_heading_without_month_or_name() {
        let req = ReportRequest {
            first_name: String::new(),
            last_name: String::new(),
            month: None,
            ..request()
        };
        let report = aggregate(&req, &ReportConfig::default()).unwrap();
        assert_eq!(report.heading, "Work Hours (2025)");
    }

    #[test]
    fn test_aggregate_unknown_timezone_uses_default() {
        let req = ReportRequest {
            timezone: Some("Atlantis/Capital".to_string()),
            ..request()
        };
        let config = ReportConfig::new(Tz::Europe__London);
        let report = aggregate(&req, &config).unwrap();
        assert_eq!(report.timezone, "Europe/London");
        assert_eq!(report.rows.len(), 1);
    }

    #[test]
    fn test_aggregate_unknown_month_is_error() {
        let req = ReportRequest {
            month: Some("Brumaire".to_string()),
            ..request()
        };
        let err = aggregate(&req, &ReportConfig::default()).unwrap_err();
        assert!(matches!(err, HoursError::InvalidMonth(_)), "got: {err:?}");
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "first_name": "Jane",
            "year": 2025,
            "rows": [
                {"date": "2025-10-27", "range": "9:00 am - 5:00 pm"},
                {"date": "2025-10-25"}
            ]
        }"#;
        let req: ReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.last_name, "");
        assert_eq!(req.month, None);
        assert_eq!(req.rows[1].range, "");

        let report = aggregate(&req, &ReportConfig::default()).unwrap();
        assert_eq!(report.heading, "Jane — Work Hours (2025)");
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.skipped[0].reason, SkipReason::EmptyRange);
    }

    #[test]
    fn test_report_serializes() {
        let report = aggregate(&request(), &ReportConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["period_title"], "October 1 – 1, 2025");
        assert_eq!(json["rows"][0]["weekday"], "Wednesday");
        assert_eq!(json["rows"][0]["hours"], 8);
        assert_eq!(json["totals"]["total_hours"], 8);
    }

    #[test]
    fn test_skip_reason_serializes_tagged() {
        let json = serde_json::to_value(SkipReason::InvalidDate("'x'".to_string())).unwrap();
        assert_eq!(json["kind"], "invalid_date");
        assert_eq!(json["detail"], "'x'");
        let json = serde_json::to_value(SkipReason::EmptyDate).unwrap();
        assert_eq!(json["kind"], "empty_date");
    }
}
