//! Compact `YYYYMMDD` calendar dates.

use chrono::NaiveDate;

use crate::EaselError;

/// Parses a date in the compact `YYYYMMDD` form.
///
/// The input must be exactly eight ASCII digits forming a valid calendar
/// date.
///
/// # Errors
///
/// Returns [`EaselError::InvalidDate`] for anything else.
pub fn parse_date(input: &str) -> Result<NaiveDate, EaselError> {
    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EaselError::invalid_date(input, "expected eight digits YYYYMMDD"));
    }
    NaiveDate::parse_from_str(input, "%Y%m%d")
        .map_err(|err| EaselError::invalid_date(input, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = parse_date("20191002").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2019, 10, 2).unwrap());
    }

    #[test]
    fn test_parse_malformed_dates() {
        for input in ["", "201910-2", "2019102", "201910021", "2019-10-02", "2019１002"] {
            let err = parse_date(input).unwrap_err();
            assert!(
                matches!(err, EaselError::InvalidDate { .. }),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_impossible_calendar_date() {
        assert!(parse_date("20190230").is_err());
        assert!(parse_date("20191300").is_err());
    }

    #[test]
    fn test_error_names_input() {
        let err = parse_date("201910-2").unwrap_err();
        assert!(err.to_string().contains("201910-2"));
    }
}
