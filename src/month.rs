//! The months that can be picked in the month selector.

use time::Month;

use crate::Error;

/// Every month in calendar order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// The month selected when the dashboard is first loaded.
pub const DEFAULT_MONTH: Month = Month::March;

/// Parse the English name of a month, e.g. "March".
///
/// # Errors
/// Returns [Error::InvalidMonth] if `name` is not exactly one of the names
/// in the month selector.
pub fn parse_month(name: &str) -> Result<Month, Error> {
    MONTHS
        .into_iter()
        .find(|month| month.to_string() == name)
        .ok_or_else(|| Error::InvalidMonth(name.to_owned()))
}

#[cfg(test)]
mod tests {
    use time::Month;

    use crate::Error;

    use super::{MONTHS, parse_month};

    #[test]
    fn parses_every_month_name() {
        for month in MONTHS {
            assert_eq!(parse_month(&month.to_string()), Ok(month));
        }
    }

    #[test]
    fn month_names_are_english() {
        let names: Vec<_> = MONTHS.iter().map(ToString::to_string).collect();

        assert_eq!(names.first().map(String::as_str), Some("January"));
        assert_eq!(names.get(2).map(String::as_str), Some("March"));
        assert_eq!(names.last().map(String::as_str), Some("December"));
    }

    #[test]
    fn rejects_unknown_month() {
        assert_eq!(
            parse_month("Smarch"),
            Err(Error::InvalidMonth("Smarch".to_owned()))
        );
    }

    #[test]
    fn rejects_wrong_case() {
        assert!(parse_month("march").is_err());
        assert_eq!(parse_month("March"), Ok(Month::March));
    }
}
