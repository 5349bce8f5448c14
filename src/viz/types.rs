//! Chart descriptions handed to the renderers.

use chrono::NaiveDate;
use serde::Serialize;

/// Single-series line chart over calendar dates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Ascending by date.
    pub points: Vec<(NaiveDate, f64)>,
}

/// One economy placed on the world map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapRegion {
    pub code: String,
    pub name: String,
    pub value: f64,
    pub lat: f64,
    pub lon: f64,
}

/// Countries coloured by value on a continuous scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethMap {
    pub title: String,
    pub regions: Vec<MapRegion>,
}

impl ChoroplethMap {
    /// Smallest and largest value, if any region is present.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.regions.iter().map(|r| r.value).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

/// Categorical bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
}

/// Anything the dashboard can draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Chart {
    Line(LineChart),
    Choropleth(ChoroplethMap),
    Bar(BarChart),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Line(c) => &c.title,
            Chart::Choropleth(c) => &c.title,
            Chart::Bar(c) => &c.title,
        }
    }
}

/// Output format, picked from the file extension by [`super::render_to_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }
}
