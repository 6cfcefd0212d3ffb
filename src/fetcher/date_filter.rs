use crate::errors::{AppError, AppResult};
use crate::models::Boletin;
use chrono::NaiveDate;

/// Validates that a date bound matches the expected format
/// (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`).
///
/// Returns `Ok(())` if valid, or `DateValidationError` otherwise.
pub fn validate_date_bound(bound: &str) -> AppResult<()> {
    if bound.is_empty() {
        return Err(AppError::DateValidationError {
            date: bound.to_string(),
            reason: "expected YYYY, YYYY-MM or YYYY-MM-DD, got empty string".to_string(),
        });
    }
    if parse_date_bound(bound).is_none() {
        return Err(AppError::DateValidationError {
            date: bound.to_string(),
            reason: "expected YYYY, YYYY-MM or YYYY-MM-DD".to_string(),
        });
    }
    Ok(())
}

/// Parses a date bound into `(year, month_opt, day_opt)`.
///
/// Day-level bounds are checked against the actual calendar, so
/// `2024-02-30` is rejected. Returns `None` on any malformed input.
pub(crate) fn parse_date_bound(bound: &str) -> Option<(i32, Option<u32>, Option<u32>)> {
    let mut parts = bound.split('-');

    let year_part = parts.next()?;
    if year_part.len() != 4 || !year_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year_part.parse().ok()?;

    let month = match parts.next() {
        Some(m) => {
            if m.len() != 2 || !m.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let m: u32 = m.parse().ok()?;
            if !(1..=12).contains(&m) {
                return None;
            }
            Some(m)
        }
        None => None,
    };

    let day = match parts.next() {
        Some(d) => {
            if d.len() != 2 || !d.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let d: u32 = d.parse().ok()?;
            NaiveDate::from_ymd_opt(year, month?, d)?;
            Some(d)
        }
        None => None,
    };

    if parts.next().is_some() {
        return None;
    }

    Some((year, month, day))
}

/// Inclusive lower bound: `YYYY` covers from Jan 1, `YYYY-MM` from the 1st.
fn lower_bound(year: i32, month: Option<u32>, day: Option<u32>) -> Option<NaiveDate> {
    match (month, day) {
        (Some(m), Some(d)) => NaiveDate::from_ymd_opt(year, m, d),
        (Some(m), None) => NaiveDate::from_ymd_opt(year, m, 1),
        (None, _) => NaiveDate::from_ymd_opt(year, 1, 1),
    }
}

/// Inclusive upper bound: `YYYY` covers through Dec 31, `YYYY-MM` through
/// the last day of the month.
fn upper_bound(year: i32, month: Option<u32>, day: Option<u32>) -> Option<NaiveDate> {
    match (month, day) {
        (Some(m), Some(d)) => NaiveDate::from_ymd_opt(year, m, d),
        (Some(m), None) => last_day_of_month(year, m),
        (None, _) => NaiveDate::from_ymd_opt(year, 12, 31),
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    first_of_next.pred_opt()
}

/// Resolves a bound string to a concrete calendar date, using the lower or
/// upper expansion depending on which end of the range it sits on.
fn resolve_bound(bound: &str, is_start: bool) -> AppResult<NaiveDate> {
    validate_date_bound(bound)?;
    let (year, month, day) = parse_date_bound(bound).ok_or_else(|| {
        AppError::DateValidationError {
            date: bound.to_string(),
            reason: "expected YYYY, YYYY-MM or YYYY-MM-DD".to_string(),
        }
    })?;

    let resolved = if is_start {
        lower_bound(year, month, day)
    } else {
        upper_bound(year, month, day)
    };

    resolved.ok_or_else(|| AppError::DateValidationError {
        date: bound.to_string(),
        reason: "not a valid calendar date".to_string(),
    })
}

/// Checks whether a bulletin's publication date falls inside the range.
///
/// With no bounds every bulletin passes, including those whose date does
/// not parse; with at least one bound an unparseable date is excluded.
fn boletin_in_range(boletin: &Boletin, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    if start.is_none() && end.is_none() {
        return true;
    }
    let fecha = match boletin.fecha() {
        Some(fecha) => fecha,
        None => return false,
    };
    if let Some(start_date) = start {
        if fecha < start_date {
            return false;
        }
    }
    if let Some(end_date) = end {
        if fecha > end_date {
            return false;
        }
    }
    true
}

/// Filters bulletins to those published within the inclusive date range.
///
/// Bounds accept `YYYY`, `YYYY-MM` or `YYYY-MM-DD`; a year or month bound
/// covers the whole year or month on its end of the range. Input order is
/// preserved in the result.
///
/// # Arguments
///
/// * `boletines` - Bulletin collection to filter
/// * `start` - Optional first publication date (inclusive). If `None`, no lower bound.
/// * `end` - Optional last publication date (inclusive). If `None`, no upper bound.
///
/// # Errors
///
/// Returns `DateValidationError` if a bound has an invalid format, and
/// `InvalidInput` if the start bound resolves after the end bound.
pub fn filter_boletines_by_range(
    boletines: &[Boletin],
    start: Option<&str>,
    end: Option<&str>,
) -> AppResult<Vec<Boletin>> {
    let start_date = match start {
        Some(bound) => Some(resolve_bound(bound, true)?),
        None => None,
    };
    let end_date = match end {
        Some(bound) => Some(resolve_bound(bound, false)?),
        None => None,
    };

    if let (Some(start_date), Some(end_date)) = (start_date, end_date) {
        if start_date > end_date {
            return Err(AppError::InvalidInput(format!(
                "Start date '{}' must be less than or equal to end date '{}'",
                start.unwrap_or(""),
                end.unwrap_or("")
            )));
        }
    }

    Ok(boletines
        .iter()
        .filter(|boletin| boletin_in_range(boletin, start_date, end_date))
        .cloned()
        .collect())
}
