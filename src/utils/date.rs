use chrono::{DateTime, Datelike};

use crate::core::library::LibraryResult;

// Providers report publication dates as ISO-8601 timestamps with a numeric
// offset, e.g. "2008-04-01T00:00:00.000-0700".
pub const PUBLISHED_DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Extracts the 4-digit publication year from a provider date string.
/// Malformed dates are an error, not a silent fallback.
pub fn published_year(published_date: &str) -> LibraryResult<i32> {
    let parsed = DateTime::parse_from_str(published_date, PUBLISHED_DATE_FMT)?;
    Ok(parsed.year())
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::utils::date::published_year;

    #[tokio::test]
    async fn test_should_extract_year() {
        let year = published_year("2008-04-01T00:00:00.000-0700").expect("should parse date");
        assert_eq!(2008, year);
    }

    #[tokio::test]
    async fn test_should_extract_year_without_millis() {
        let year = published_year("1999-12-31T23:59:59+0000").expect("should parse date");
        assert_eq!(1999, year);
    }

    #[tokio::test]
    async fn test_should_fail_on_malformed_date() {
        let res = published_year("04/01/2008");
        assert!(matches!(res, Err(LibraryError::Validation { message: _ })));
    }
}
