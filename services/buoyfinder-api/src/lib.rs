//! Buoy Finder API
//!
//! Finds the NOAA NDBC wave buoy closest to a location (or a named station),
//! fetches its readings and returns the record nearest a requested time as
//! JSON or an HTML page with spectra charts.

pub mod config;
pub mod error;
pub mod handlers;
pub mod lookup;
pub mod metrics;
pub mod router;
pub mod state;
pub mod templates;
pub mod upstream;
