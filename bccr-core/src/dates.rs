use chrono::{Datelike, NaiveDate};

use bccr_types::BccrError;

/// Which end of a range a loose date expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    /// Expand a bare year or month to its first day.
    Start,
    /// Expand a bare year or month to its last day.
    End,
}

/// Parse a loose date bound.
///
/// Accepted forms: `YYYY`, `YYYY/MM`, `YYYY-MM`, `YYYY-MM-DD`, `YYYY/MM/DD`
/// and `DD/MM/YYYY`. A bare year or year-month expands to its first day for
/// [`DateBound::Start`] and to its last day for [`DateBound::End`].
///
/// ```
/// use bccr_core::{parse_date_bound, DateBound};
/// use chrono::NaiveDate;
///
/// let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// assert_eq!(parse_date_bound("2010", DateBound::Start).unwrap(), d(2010, 1, 1));
/// assert_eq!(parse_date_bound("2012/02", DateBound::End).unwrap(), d(2012, 2, 29));
/// assert_eq!(parse_date_bound("15/03/2010", DateBound::End).unwrap(), d(2010, 3, 15));
/// ```
///
/// # Errors
/// Returns `BccrError::InvalidArg` when the text matches none of the forms or
/// names an impossible date.
pub fn parse_date_bound(text: &str, bound: DateBound) -> Result<NaiveDate, BccrError> {
    let s = text.trim();
    let invalid = || BccrError::InvalidArg(format!("unrecognized date '{s}'"));
    let num = |p: &str| p.parse::<u32>().map_err(|_| invalid());

    let parts: Vec<&str> = s.split(['/', '-']).collect();
    let (year, month, day) = match parts.as_slice() {
        [y] if y.len() == 4 => (num(y)?, None, None),
        [y, m] if y.len() == 4 => (num(y)?, Some(num(m)?), None),
        [y, m, d] if y.len() == 4 => (num(y)?, Some(num(m)?), Some(num(d)?)),
        [d, m, y] if y.len() == 4 => (num(y)?, Some(num(m)?), Some(num(d)?)),
        _ => return Err(invalid()),
    };
    let year = i32::try_from(year).map_err(|_| invalid())?;

    let date = match (month, day, bound) {
        (None, _, DateBound::Start) => NaiveDate::from_ymd_opt(year, 1, 1),
        (None, _, DateBound::End) => NaiveDate::from_ymd_opt(year, 12, 31),
        (Some(m), None, DateBound::Start) => NaiveDate::from_ymd_opt(year, m, 1),
        (Some(m), None, DateBound::End) => last_day_of_month(year, m),
        (Some(m), Some(d), _) => NaiveDate::from_ymd_opt(year, m, d),
    };
    date.ok_or_else(invalid)
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(first.year(), month + 1, 1)?
    };
    next.pred_opt()
}
