//! Tests for date parsing and the confirmation flag.

use chrono::NaiveDate;
use myth_transform::normalization::{date_confirmation, parse_date, parse_optional_date};
use myth_transform::MapError;

#[test]
fn full_date_format_wins_first() {
    assert_eq!(
        parse_date("1/15/2020"),
        Ok(NaiveDate::from_ymd_opt(2020, 1, 15).unwrap())
    );
    assert_eq!(
        parse_date("12/25/2023"),
        Ok(NaiveDate::from_ymd_opt(2023, 12, 25).unwrap())
    );
}

#[test]
fn month_year_falls_back_to_first_of_month() {
    assert_eq!(
        parse_date("6/2021"),
        Ok(NaiveDate::from_ymd_opt(2021, 6, 1).unwrap())
    );
    assert_eq!(
        parse_date("11/2020"),
        Ok(NaiveDate::from_ymd_opt(2020, 11, 1).unwrap())
    );
}

#[test]
fn unparseable_date_is_fatal_and_names_the_string() {
    let err = parse_date("13/2020").unwrap_err();
    assert_eq!(err, MapError::InvalidDate("13/2020".to_string()));
    assert_eq!(err.to_string(), "invalid date format: 13/2020");

    assert!(parse_date("2020-06-01").is_err());
    assert!(parse_date("June 2021").is_err());
}

#[test]
fn blank_optional_date_is_absent_not_an_error() {
    assert_eq!(parse_optional_date(None), Ok(None));
    assert_eq!(parse_optional_date(Some("")), Ok(None));
    assert_eq!(
        parse_optional_date(Some("6/2021")),
        Ok(Some(NaiveDate::from_ymd_opt(2021, 6, 1).unwrap()))
    );
}

#[test]
fn confirmation_follows_string_length_only() {
    // Absent or blank: unknown.
    assert_eq!(date_confirmation(None), None);
    assert_eq!(date_confirmation(Some("")), None);

    // Lengths 6 and 7 are the partial month/year shapes.
    assert_eq!(date_confirmation(Some("6/2021")), Some(false));
    assert_eq!(date_confirmation(Some("12/2021")), Some(false));

    // Any other non-empty length is confirmed.
    assert_eq!(date_confirmation(Some("1/15/2020")), Some(true));
    assert_eq!(date_confirmation(Some("1/5/2020")), Some(true));
}

#[test]
fn confirmation_is_independent_of_what_parses() {
    // "13/2020" matches neither date format, yet its length still drives
    // the flag: the two computations never consult each other.
    assert!(parse_date("13/2020").is_err());
    assert_eq!(date_confirmation(Some("13/2020")), Some(false));

    assert_eq!(date_confirmation(Some("garbage!")), Some(true));
}
