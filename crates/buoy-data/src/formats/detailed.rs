//! Detailed wave summary history (`realtime2/{id}.spec`).
//!
//! Each row splits the sea state into a swell and a wind wave component,
//! with compass directions instead of bearings.

use crate::error::{BuoyDataError, BuoyDataResult};
use crate::reading::BuoyDataItem;
use crate::swell::Swell;
use crate::units::UnitSystem;

use super::{clamp_count, data_rows, parse_timestamp, Columns};

const FORMAT: &str = "detailed wave";

/// Parse up to `count` records, newest first as published.
pub fn parse(text: &str, count: usize) -> BuoyDataResult<Vec<BuoyDataItem>> {
    let columns = Columns::from_header(text, FORMAT)?;

    let mut items = Vec::new();
    for (line, row) in data_rows(text).take(clamp_count(count)) {
        if row.len() < columns.len() {
            return Err(BuoyDataError::malformed(
                FORMAT,
                line,
                format!("expected {} columns, found {}", columns.len(), row.len()),
            ));
        }

        let mut item = BuoyDataItem::new(parse_timestamp(&row, FORMAT, line)?, UnitSystem::Metric);

        let swell = component(&columns, &row, "SwH", "SwP", "SwD");
        let wind_wave = component(&columns, &row, "WWH", "WWP", "WWD");

        item.average_period = columns.value(&row, "APD");
        item.mean_wave_direction = columns.value(&row, "MWD");
        item.steepness = columns
            .token(&row, "STEEPNESS")
            .filter(|s| *s != "MM" && *s != "N/A")
            .map(str::to_string);

        if let Some(height) = columns.value(&row, "WVHT") {
            // The file has no dominant period column; take the larger component's
            let dominant = match (&swell, &wind_wave) {
                (Some(s), Some(w)) if w.wave_height > s.wave_height => Some(w),
                (Some(s), _) => Some(s),
                (None, w) => w.as_ref(),
            };
            item.wave_summary = Some(Swell::new(
                height,
                dominant.map(|d| d.period).unwrap_or(0.0),
                item.mean_wave_direction,
                UnitSystem::Metric,
            ));
        }

        item.swell_components.extend(swell);
        item.swell_components.extend(wind_wave);
        item.swell_components
            .sort_by(|a, b| b.wave_height.total_cmp(&a.wave_height));

        items.push(item);
    }

    if items.is_empty() {
        return Err(BuoyDataError::NoData(FORMAT));
    }
    Ok(items)
}

fn component(
    columns: &Columns<'_>,
    row: &[&str],
    height: &str,
    period: &str,
    direction: &str,
) -> Option<Swell> {
    let height = columns.value(row, height)?;
    let period = columns.value(row, period).unwrap_or(0.0);
    Some(match columns.token(row, direction).filter(|d| *d != "MM") {
        Some(compass) => Swell::from_compass(height, period, compass, UnitSystem::Metric),
        None => Swell::new(height, period, None, UnitSystem::Metric),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "\
#YY  MM DD hh mm WVHT  SwH  SwP  WWH  WWP SwD WWD  STEEPNESS  APD MWD
#yr  mo dy hr mn    m    m  sec    m  sec  -  degT     -      sec degT
2016 05 23 10 40  0.6  0.3  7.7  0.5  3.8 ESE  NE    STEEP  3.9  45
2016 05 23 09 40  0.7  0.6  8.3  0.2  3.6  SE  NE  AVERAGE  4.2 135
2016 05 23 08 40   MM   MM   MM   MM   MM  MM  MM       MM   MM  MM
";

    #[test]
    fn test_parse_components() {
        let items = parse(TEXT, 2).unwrap();
        assert_eq!(items.len(), 2);

        let first = &items[0];
        assert_eq!(first.date.to_rfc3339(), "2016-05-23T10:40:00+00:00");
        assert_eq!(first.steepness.as_deref(), Some("STEEP"));
        assert_eq!(first.average_period, Some(3.9));
        assert_eq!(first.mean_wave_direction, Some(45.0));

        // Wind wave is larger, so it sorts first and sets the summary period
        assert_eq!(first.swell_components.len(), 2);
        assert_eq!(first.swell_components[0].compass_direction, "NE");
        assert_eq!(first.swell_components[1].compass_direction, "ESE");
        let summary = first.wave_summary.as_ref().unwrap();
        assert_eq!(summary.wave_height, 0.6);
        assert_eq!(summary.period, 3.8);
    }

    #[test]
    fn test_swell_dominant() {
        let item = &parse(TEXT, 2).unwrap()[1];
        assert_eq!(item.wave_summary.as_ref().unwrap().period, 8.3);
        assert_eq!(item.swell_components[0].direction, Some(135.0));
    }

    #[test]
    fn test_all_missing_row() {
        let item = &parse(TEXT, 3).unwrap()[2];
        assert!(item.wave_summary.is_none());
        assert!(item.swell_components.is_empty());
        assert_eq!(item.steepness, None);
        assert!(!item.has_wave_data());
    }

    #[test]
    fn test_missing_header() {
        let err = parse("2016 05 23 10 40 0.6\n", 1).unwrap_err();
        assert!(matches!(err, BuoyDataError::MissingHeader { .. }));
    }
}
