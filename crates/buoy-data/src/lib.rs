//! NDBC buoy data model and parsers.
//!
//! This crate turns the raw documents published by the National Data Buoy
//! Center into typed records:
//!
//! - the active station directory (XML)
//! - latest observations (labelled text, English units)
//! - standard meteorological history (fixed columns)
//! - detailed wave summaries (fixed columns)
//! - directional and energy wave spectra (frequency/value pairs)
//!
//! # Example
//!
//! ```rust
//! use buoy_data::{Location, StationList};
//!
//! let xml = r#"<stations>
//!   <station id="44097" lat="40.967" lon="-71.126" name="Block Island" type="buoy" met="n"/>
//! </stations>"#;
//!
//! let stations = StationList::from_xml(xml).unwrap();
//! let closest = stations.closest_active_wave_station(&Location::new(41.0, -71.0));
//! assert_eq!(closest.unwrap().station_id, "44097");
//! ```

pub mod buoy;
pub mod error;
pub mod formats;
pub mod location;
pub mod reading;
pub mod spectra;
pub mod station;
pub mod swell;
pub mod units;

pub use buoy::{Buoy, ReadingKind};
pub use error::{BuoyDataError, BuoyDataResult};
pub use location::Location;
pub use reading::BuoyDataItem;
pub use spectra::WaveSpectra;
pub use station::{Station, StationList};
pub use swell::{compass_to_degrees, degrees_to_compass, Swell};
pub use units::UnitSystem;

/// Default NDBC endpoints.
pub mod endpoints {
    /// Directory of currently reporting stations.
    pub const ACTIVE_STATIONS_URL: &str = "https://www.ndbc.noaa.gov/activestations.xml";
    /// Root of the per-station data files.
    pub const DATA_BASE_URL: &str = "https://www.ndbc.noaa.gov/data";
}
