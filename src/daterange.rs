use chrono::{Datelike, NaiveDate};

use crate::error::{OutlayError, Result};

/// Half-open date interval: contains d where start <= d < end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Resolve a `YYYY-MM` month expression to the range covering that whole
/// month. December rolls over to January 1 of the next year.
pub fn month_range(input: &str) -> Result<DateRange> {
    let trimmed = input.trim();
    // chrono has no month-only parse; pin the day to the first.
    let start = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
        .map_err(|_| OutlayError::Format("Invalid format. Use YYYY-MM".into()))?;

    let (year, month) = match start.month() {
        12 => (start.year() + 1, 1),
        m => (start.year(), m + 1),
    };
    let end = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| OutlayError::Format("Invalid format. Use YYYY-MM".into()))?;

    Ok(DateRange { start, end })
}

/// Resolve a `YYYY-MM-DD` day expression to the one-day range [d, d+1).
pub fn day_range(input: &str) -> Result<DateRange> {
    let trimmed = input.trim();
    let start = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| OutlayError::Format("Invalid format. Use YYYY-MM-DD".into()))?;
    let end = start
        .succ_opt()
        .ok_or_else(|| OutlayError::Format("Invalid format. Use YYYY-MM-DD".into()))?;

    Ok(DateRange { start, end })
}

/// Turn the optional month / day filter expressions into at most one range.
/// Neither given means no filter; both given is rejected.
pub fn resolve(month: Option<&str>, day: Option<&str>) -> Result<Option<DateRange>> {
    match (month, day) {
        (None, None) => Ok(None),
        (Some(m), None) => month_range(m).map(Some),
        (None, Some(d)) => day_range(d).map(Some),
        (Some(_), Some(_)) => Err(OutlayError::Format(
            "Choose a month filter or a date filter, not both".into(),
        )),
    }
}
