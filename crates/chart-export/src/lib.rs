//! Chart rendering for buoy wave spectra.
//!
//! Chart options are built as Highcharts JSON and rendered to PNG by a
//! remote export server. Rendering is best effort: callers that embed
//! charts in responses use [`render_base64`], which yields an empty string
//! instead of failing the request.

pub mod error;
pub mod export;
pub mod gradient;
pub mod numbers;
pub mod options;

pub use error::{ChartError, ChartResult};
pub use export::{render_base64, ChartRenderer, HighchartsExporter};
pub use gradient::{Color, PeriodGradient};
pub use numbers::to_fixed_point;
pub use options::{directional_spectra_options, spectra_distribution_options};

/// Default public Highcharts export server.
pub const DEFAULT_EXPORT_URL: &str = "https://export.highcharts.com/";
