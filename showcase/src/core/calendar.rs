//! Date composition and whole-year age arithmetic.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use crate::core::functions::TriFunction;

/// Compose `year-month-day` and parse it as an ISO calendar date.
///
/// The composed text must be `YYYY-MM-DD`: a four-digit year and two-digit
/// month and day, no padding added. So `(5, 3, 1990)` composes to `1990-3-5`
/// and fails, as do negative components. Well-formed text with an
/// impossible date (month 13, April 31) fails with the chrono reason.
pub fn parse_date(day: i32, month: i32, year: i32) -> Result<NaiveDate> {
    let text = format!("{year}-{month}-{day}");
    if !is_iso_local_date(&text) {
        bail!("parse date {text}: expected YYYY-MM-DD");
    }
    NaiveDate::parse_from_str(&text, "%Y-%m-%d").with_context(|| format!("parse date {text}"))
}

fn is_iso_local_date(text: &str) -> bool {
    let mut fields = text.split('-');
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(year), Some(month), Some(day), None) => {
            digits(year, 4) && digits(month, 2) && digits(day, 2)
        }
        _ => false,
    }
}

fn digits(field: &str, width: usize) -> bool {
    field.len() == width && field.bytes().all(|b| b.is_ascii_digit())
}

/// Whole calendar years from `birth` to `today`. Partial years round down;
/// a birth date after `today` gives a negative age.
pub fn years_between(birth: NaiveDate, today: NaiveDate) -> i32 {
    match today.years_since(birth) {
        Some(years) => years as i32,
        None => birth
            .years_since(today)
            .map(|years| -(years as i32))
            .unwrap_or_default(),
    }
}

/// Build an age calculator on top of any date parser, pinned to `today`.
pub fn calculate_age<P>(parse: P, today: NaiveDate) -> impl Fn(i32, i32, i32) -> Result<i32>
where
    P: TriFunction<i32, i32, i32, Result<NaiveDate>>,
{
    move |day, month, year| Ok(years_between(parse.apply(day, month, year)?, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn parses_composed_date() {
        assert_eq!(parse_date(13, 10, 1988).expect("parse"), date(1988, 10, 13));
    }

    #[test]
    fn rejects_out_of_range_components() {
        for (day, month, year) in [(13, 13, 1988), (32, 10, 2020), (31, 11, 2021), (13, 0, 2000)] {
            assert!(
                parse_date(day, month, year).is_err(),
                "{year}-{month}-{day} should not parse"
            );
        }
    }

    #[test]
    fn rejects_text_that_is_not_iso_width() {
        for (day, month, year) in [(5, 3, 1990), (13, 10, 88), (13, 10, 12345), (1, 12, 2000)] {
            let err = parse_date(day, month, year).expect_err("non-ISO text");
            assert!(
                err.to_string().contains("expected YYYY-MM-DD"),
                "{year}-{month}-{day}: {err}"
            );
        }
        assert!(parse_date(13, 10, -1988).is_err());
    }

    #[test]
    fn three_digit_year_is_rejected() {
        assert!(parse_date(13, 10, 988).is_err());
        assert_eq!(parse_date(13, 10, 1000).expect("parse"), date(1000, 10, 13));
    }

    #[test]
    fn rejects_negative_components_with_composed_text() {
        let err = parse_date(-1, 10, 1988).expect_err("negative day");
        assert!(err.to_string().contains("1988-10--1"));
    }

    #[test]
    fn age_counts_completed_years_only() {
        let age = calculate_age(parse_date, date(2024, 10, 13));
        assert_eq!(age(13, 10, 1988).expect("age"), 36);

        let age = calculate_age(parse_date, date(2024, 10, 12));
        assert_eq!(age(13, 10, 1988).expect("age"), 35);
    }

    #[test]
    fn leap_day_birthday_completes_on_march_first() {
        let birth = date(2000, 2, 29);
        assert_eq!(years_between(birth, date(2001, 2, 28)), 0);
        assert_eq!(years_between(birth, date(2001, 3, 1)), 1);
    }

    #[test]
    fn future_birth_date_is_negative() {
        assert_eq!(years_between(date(2030, 1, 1), date(2024, 6, 1)), -5);
    }

    #[test]
    fn age_propagates_parse_errors() {
        let age = calculate_age(parse_date, date(2024, 1, 1));
        assert!(age(1, 13, 1988).is_err());
    }
}
