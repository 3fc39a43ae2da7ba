//! Decoders for the NDBC text formats.
//!
//! Columnar files share the same shape: one or two `#` header lines followed
//! by whitespace separated rows whose first five fields are the UTC
//! timestamp (`YY MM DD hh mm`). Missing values are written as `MM`.

pub mod detailed;
pub mod latest;
pub mod spectral;
pub mod standard;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::error::{BuoyDataError, BuoyDataResult};

/// Number of leading timestamp columns in every columnar format.
pub(crate) const TIMESTAMP_FIELDS: usize = 5;

/// Parse a numeric field, treating `MM` as missing.
pub(crate) fn parse_value(token: &str) -> Option<f64> {
    if token == "MM" || token == "N/A" {
        return None;
    }
    token.parse().ok()
}

/// Parse a spectral field, treating any of `missing` as a placeholder.
pub(crate) fn parse_spectral_value(token: &str, missing: &[f64]) -> Option<f64> {
    parse_value(token).filter(|v| !missing.iter().any(|s| (v - s).abs() < 1e-9))
}

/// Parse the `YY MM DD hh mm` prefix of a row.
pub(crate) fn parse_timestamp(
    tokens: &[&str],
    format: &'static str,
    line: usize,
) -> BuoyDataResult<DateTime<Utc>> {
    if tokens.len() < TIMESTAMP_FIELDS {
        return Err(BuoyDataError::malformed(format, line, "missing timestamp fields"));
    }

    let field = |i: usize| -> BuoyDataResult<u32> {
        tokens[i].parse::<u32>().map_err(|_| {
            BuoyDataError::malformed(format, line, format!("bad timestamp field '{}'", tokens[i]))
        })
    };

    let mut year = field(0)? as i32;
    if year < 100 {
        year += if year < 70 { 2000 } else { 1900 };
    }

    let naive = NaiveDate::from_ymd_opt(year, field(1)?, field(2)?)
        .and_then(|d| d.and_hms_opt(field(3).ok()?, field(4).ok()?, 0))
        .ok_or_else(|| BuoyDataError::InvalidTimestamp(tokens[..TIMESTAMP_FIELDS].join(" ")))?;

    Ok(Utc.from_utc_datetime(&naive))
}

/// Data rows of a columnar file with their 1-based line numbers.
pub(crate) fn data_rows(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| (n, line.split_whitespace().collect()))
}

/// Column names from the first `#` header line.
pub(crate) fn header_columns(text: &str) -> Option<Vec<&str>> {
    let line = text.lines().map(str::trim).find(|l| l.starts_with('#'))?;
    Some(line.trim_start_matches('#').split_whitespace().collect())
}

/// Header-driven column lookup for a columnar file.
pub(crate) struct Columns<'a> {
    names: Vec<&'a str>,
}

impl<'a> Columns<'a> {
    /// Read the header, requiring the timestamp columns to be present.
    pub(crate) fn from_header(text: &'a str, format: &'static str) -> BuoyDataResult<Self> {
        let names = header_columns(text).ok_or(BuoyDataError::MissingHeader { format })?;
        if names.len() <= TIMESTAMP_FIELDS || !names[0].eq_ignore_ascii_case("YY") {
            return Err(BuoyDataError::MissingHeader { format });
        }
        Ok(Self { names })
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    /// Raw token for a named column in a row.
    pub(crate) fn token<'r>(&self, row: &[&'r str], name: &str) -> Option<&'r str> {
        let index = self.names.iter().position(|n| *n == name)?;
        row.get(index).copied()
    }

    /// Numeric value for a named column, `None` when missing.
    pub(crate) fn value(&self, row: &[&str], name: &str) -> Option<f64> {
        self.token(row, name).and_then(parse_value)
    }
}

/// Requested record counts below one still return the newest record.
pub(crate) fn clamp_count(count: usize) -> usize {
    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("MM"), None);
        assert_eq!(parse_value("1017.5"), Some(1017.5));
        assert_eq!(parse_value("-1.2"), Some(-1.2));
        assert_eq!(parse_value("garbage"), None);
        // A 99 degree wind direction is a real reading in the met files
        assert_eq!(parse_value("99"), Some(99.0));
    }

    #[test]
    fn test_parse_spectral_value() {
        let missing = [99.0, 999.0];
        assert_eq!(parse_spectral_value("999.0", &missing), None);
        assert_eq!(parse_spectral_value("99.00", &missing), None);
        assert_eq!(parse_spectral_value("MM", &missing), None);
        assert_eq!(parse_spectral_value("0.125", &missing), Some(0.125));
        assert_eq!(parse_spectral_value("99.0", &[999.0]), Some(99.0));
    }

    #[test]
    fn test_parse_timestamp() {
        let tokens = ["2016", "05", "23", "10", "50"];
        let ts = parse_timestamp(&tokens, "test", 1).unwrap();
        assert_eq!(ts.to_rfc3339(), "2016-05-23T10:50:00+00:00");
    }

    #[test]
    fn test_parse_two_digit_year() {
        let tokens = ["98", "01", "02", "03", "04"];
        assert_eq!(parse_timestamp(&tokens, "test", 1).unwrap().year(), 1998);
    }

    #[test]
    fn test_parse_timestamp_out_of_range() {
        let tokens = ["2016", "13", "40", "10", "50"];
        assert!(matches!(
            parse_timestamp(&tokens, "test", 3),
            Err(BuoyDataError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_data_rows_skip_headers() {
        let text = "#YY MM\n#yr mo\n\n2016 05 23 10 50 1.0\n";
        let rows: Vec<_> = data_rows(text).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, 4);
        assert_eq!(rows[0].1.len(), 6);
    }

    #[test]
    fn test_columns_lookup() {
        let text = "#YY  MM DD hh mm WDIR WSPD\n2016 05 23 10 50 MM 5.0\n";
        let columns = Columns::from_header(text, "test").unwrap();
        let (_, row) = data_rows(text).next().unwrap();
        assert_eq!(columns.len(), 7);
        assert_eq!(columns.value(&row, "WDIR"), None);
        assert_eq!(columns.value(&row, "WSPD"), Some(5.0));
        assert_eq!(columns.token(&row, "GST"), None);
    }

    #[test]
    fn test_columns_require_header() {
        assert!(matches!(
            Columns::from_header("2016 05 23 10 50 1.0", "test"),
            Err(BuoyDataError::MissingHeader { format: "test" })
        ));
    }

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(0), 1);
        assert_eq!(clamp_count(5), 5);
    }
}
