//! Helpers for turning a pair of request dates into an inclusive range.

use std::ops::RangeInclusive;

use time::{Date, Month};

use crate::Error;

/// Build an inclusive range from dates that must both be given.
///
/// # Errors
/// Returns [Error::InvalidDateRange] if `start` is after `end`.
pub fn date_range(start: Date, end: Date) -> Result<RangeInclusive<Date>, Error> {
    if start > end {
        return Err(Error::InvalidDateRange { start, end });
    }

    Ok(start..=end)
}

/// Build an inclusive range from optional dates, where the range is either
/// fully specified or not at all.
///
/// # Errors
/// Returns [Error::IncompleteDateRange] if only one of the dates is given, or
/// [Error::InvalidDateRange] if `start` is after `end`.
pub fn optional_date_range(
    start: Option<Date>,
    end: Option<Date>,
) -> Result<Option<RangeInclusive<Date>>, Error> {
    match (start, end) {
        (Some(start), Some(end)) => date_range(start, end).map(Some),
        (None, None) => Ok(None),
        _ => Err(Error::IncompleteDateRange),
    }
}

/// The range from January 1st to December 31st of `year`.
///
/// # Errors
/// Returns [Error::InvalidYear] if `year` cannot be represented.
pub fn year_range(year: i32) -> Result<RangeInclusive<Date>, Error> {
    let start = Date::from_calendar_date(year, Month::January, 1)
        .map_err(|_| Error::InvalidYear(year))?;
    let end = Date::from_calendar_date(year, Month::December, 31)
        .map_err(|_| Error::InvalidYear(year))?;

    Ok(start..=end)
}
