//! Row dates and month names.
//!
//! Dates arrive either from a date picker (`YYYY-MM-DD`) or typed by hand in
//! a shorter form that borrows the year and month of the report being built:
//!
//! - `DD` — day of the display month and year
//! - `MM/DD` — month and day of the display year
//! - `MM/DD/YYYY` — fully explicit
//!
//! Hyphens are accepted anywhere a slash is.

use chrono::{Month, NaiveDate};

use crate::error::{HoursError, Result};

/// Month spellings accepted for the report's display month.
#[rustfmt::skip]
const MONTH_ALIASES: &[(&str, u32)] = &[
    ("1", 1), ("01", 1), ("jan", 1), ("january", 1),
    ("2", 2), ("02", 2), ("feb", 2), ("february", 2),
    ("3", 3), ("03", 3), ("mar", 3), ("march", 3),
    ("4", 4), ("04", 4), ("apr", 4), ("april", 4),
    ("5", 5), ("05", 5), ("may", 5),
    ("6", 6), ("06", 6), ("jun", 6), ("june", 6),
    ("7", 7), ("07", 7), ("jul", 7), ("july", 7),
    ("8", 8), ("08", 8), ("aug", 8), ("august", 8),
    ("9", 9), ("09", 9), ("sep", 9), ("sept", 9), ("september", 9),
    ("10", 10), ("oct", 10), ("october", 10),
    ("11", 11), ("nov", 11), ("november", 11),
    ("12", 12), ("dec", 12), ("december", 12),
];

/// Parse a month given as a number, abbreviation, or full name (case-insensitive).
///
/// # Errors
///
/// Returns [`HoursError::InvalidMonth`] for anything not in the alias table.
pub fn parse_month(s: &str) -> Result<u32> {
    let key = s.trim().to_lowercase();
    MONTH_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, month)| *month)
        .ok_or_else(|| HoursError::InvalidMonth(format!("'{}'", s.trim())))
}

/// English name of a month number (1-12).
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns [`HoursError::InvalidDate`] if the string is not in that form or
/// does not name a real day.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    if !is_iso_shaped(s) {
        return Err(HoursError::InvalidDate(format!(
            "'{s}': expected YYYY-MM-DD"
        )));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| HoursError::InvalidDate(format!("'{}': {}", s, e)))
}

/// Parse a row date, filling in the display year and month for short forms.
///
/// # Errors
///
/// Returns [`HoursError::InvalidDate`] if the text matches none of the
/// accepted shapes, does not name a real day, or is a bare day number while
/// no display month is known.
pub fn parse_row_date(s: &str, year: i32, month: Option<u32>) -> Result<NaiveDate> {
    let s = s.trim();
    if is_iso_shaped(s) {
        return parse_iso_date(s);
    }

    let invalid = || HoursError::InvalidDate(format!("'{s}'"));
    let parts: Vec<&str> = s.split(['/', '-']).filter(|p| !p.is_empty()).collect();
    let number = |p: &str| p.parse::<u32>().map_err(|_| invalid());

    let (y, m, d) = match parts.as_slice() {
        [day] => {
            let m = month.ok_or_else(|| {
                HoursError::InvalidDate(format!("'{s}': a bare day needs a display month"))
            })?;
            (year, m, number(day)?)
        }
        [m, day] => (year, number(m)?, number(day)?),
        [m, day, y] => {
            let y = y.parse::<i32>().map_err(|_| invalid())?;
            (y, number(m)?, number(day)?)
        }
        _ => return Err(invalid()),
    };

    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(invalid)
}

/// `\d{4}-\d{2}-\d{2}`
fn is_iso_shaped(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}
