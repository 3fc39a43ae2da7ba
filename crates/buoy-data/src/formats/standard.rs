//! Standard meteorological history (`realtime2/{id}.txt`).

use crate::error::{BuoyDataError, BuoyDataResult};
use crate::reading::BuoyDataItem;
use crate::swell::{degrees_to_compass, Swell};
use crate::units::UnitSystem;

use super::{clamp_count, data_rows, parse_timestamp, Columns};

const FORMAT: &str = "standard";

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

        item.wind_direction = columns.value(&row, "WDIR");
        item.wind_compass_direction = item.wind_direction.map(|d| degrees_to_compass(d).to_string());
        item.wind_speed = columns.value(&row, "WSPD");
        item.wind_gust = columns.value(&row, "GST");
        item.average_period = columns.value(&row, "APD");
        item.mean_wave_direction = columns.value(&row, "MWD");
        item.pressure = columns.value(&row, "PRES");
        item.pressure_tendency = columns.value(&row, "PTDY");
        item.air_temperature = columns.value(&row, "ATMP");
        item.water_temperature = columns.value(&row, "WTMP");
        item.dewpoint_temperature = columns.value(&row, "DEWP");
        item.visibility = columns.value(&row, "VIS");
        item.tide = columns.value(&row, "TIDE");

        if let Some(height) = columns.value(&row, "WVHT") {
            item.wave_summary = Some(Swell::new(
                height,
                columns.value(&row, "DPD").unwrap_or(0.0),
                item.mean_wave_direction,
                UnitSystem::Metric,
            ));
        }

        items.push(item);
    }

    if items.is_empty() {
        return Err(BuoyDataError::NoData(FORMAT));
    }
    Ok(items)
}
