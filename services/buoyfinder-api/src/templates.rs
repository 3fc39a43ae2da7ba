//! HTML templates.

use buoy_data::UnitSystem;
use chart_export::{to_fixed_point, PeriodGradient};
use minijinja::value::ViaDeserialize;
use minijinja::Environment;
use serde::Serialize;

use crate::error::ApiError;

pub const INDEX: &str = "index.html";
pub const API_DOC: &str = "apidoc.html";
pub const BUOY: &str = "buoy.html";

/// Build the template environment with the page templates and filters.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("base.html", include_str!("../templates/base.html"))?;
    env.add_template(INDEX, include_str!("../templates/index.html"))?;
    env.add_template(API_DOC, include_str!("../templates/apidoc.html"))?;
    env.add_template(BUOY, include_str!("../templates/buoy.html"))?;

    env.add_filter("fixed", |value: f64, precision: i32| to_fixed_point(value, precision));

    env.add_filter("height_units", |units: ViaDeserialize<UnitSystem>| {
        units.height_label()
    });

    let gradient = PeriodGradient::default();
    env.add_filter("period_color", move |period: f64| gradient.color_for(period).to_hex());

    Ok(env)
}

/// Render a named template.
pub fn render<S: Serialize>(env: &Environment<'_>, name: &str, ctx: S) -> Result<String, ApiError> {
    let template = env.get_template(name)?;
    Ok(template.render(ctx)?)
}
