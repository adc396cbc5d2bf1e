//! # workhours-engine
//!
//! Deterministic work-hours computation.
//!
//! Turns hand-typed, twelve-hour time ranges ("3:52 pm - 1:11 am") attached to
//! calendar dates into timezone-aware intervals, then rolls them up into a
//! report: rows sorted by date, subtotal and carried total hours, and a
//! human-readable period title. Everything here is pure: no clock, no I/O.
//!
//! ## Modules
//!
//! - [`range`] — Time-range text → [`ParsedInterval`] (overnight and DST aware)
//! - [`report`] — Raw rows → [`Report`] with totals and a period title
//! - [`dates`] — Row-date parsing and month-name lookup
//! - [`config`] — [`ReportConfig`] carrying the default timezone
//! - [`error`] — Error types

pub mod config;
pub mod dates;
pub mod error;
pub mod range;
pub mod report;

pub use config::ReportConfig;
pub use dates::{month_name, parse_iso_date, parse_month, parse_row_date};
pub use error::{HoursError, Result};
pub use range::{parse_clock_range, parse_range, parse_range_in, ClockRange, ParsedInterval};
pub use report::{
    aggregate, aggregate_rows, evaluate_row, evaluate_rows, period_title, RawRow, Report,
    ReportRequest, ReportRow, ReportTotals, RowOutcome, SkipReason, SkippedRow,
};
