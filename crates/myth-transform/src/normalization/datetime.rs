//! Release-calendar date parsing.
//!
//! Catalog exports carry dates either as a full `M/D/YYYY` date or as a
//! partial `M/YYYY` month, in which case the day resolves to the first of
//! the month. A non-blank value matching neither shape is the engine's only
//! fatal input: the whole record is rejected rather than silently dropping
//! a schedule entry.
//!
//! Whether a release date counts as *confirmed* is derived separately, from
//! the raw string's character length alone: the 6- and 7-character lengths
//! are the partial `M/YYYY` shapes (one- or two-digit month plus a 4-digit
//! year). The two computations are independent by design and must stay
//! that way; the confirmation flag is not a by-product of which format
//! matched.

use chrono::NaiveDate;

use crate::error::{MapError, Result};

const MONTH_DAY_YEAR: &str = "%m/%d/%Y";
const MONTH_YEAR_WITH_DAY: &str = "%m/%Y %d";

/// Parses a non-blank date string, trying `M/D/YYYY` then `M/YYYY`.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, MONTH_DAY_YEAR) {
        return Ok(date);
    }
    // Partial month/year input resolves to the first day of the month.
    NaiveDate::parse_from_str(&format!("{raw} 1"), MONTH_YEAR_WITH_DAY)
        .map_err(|_| MapError::InvalidDate(raw.to_string()))
}

/// Parses an optional date field. Blank and absent input are not dates and
/// not errors.
pub fn parse_optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value).map(Some),
    }
}

/// Derives the tri-state confirmation flag from a raw date string's length.
///
/// Length 0 (or absent) is unknown, lengths 6 and 7 are the partial
/// month/year shapes and count as unconfirmed, every other non-empty
/// length counts as confirmed.
pub fn date_confirmation(raw: Option<&str>) -> Option<bool> {
    match raw.map_or(0, |value| value.chars().count()) {
        0 => None,
        6 | 7 => Some(false),
        _ => Some(true),
    }
}
