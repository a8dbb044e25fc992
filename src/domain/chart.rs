// Chart domain models
use super::series::{MeasureSeries, YearPoint};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    ScatterMap,
    Scatter,
    StackedBar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub label: String,
    pub lat: f64,
    pub lon: f64,
    pub size: Option<f64>,
    pub population_millions: Option<f64>,
    pub gdp_per_capita: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct XyPoint {
    /// Short label drawn next to the marker.
    pub label: String,
    pub name: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub size: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPoint {
    pub category: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeriesPoints {
    Year(Vec<YearPoint>),
    Geo(Vec<GeoPoint>),
    Xy(Vec<XyPoint>),
    Category(Vec<CategoryPoint>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub points: SeriesPoints,
}

impl SeriesData {
    pub fn new(id: String, name: String, points: SeriesPoints) -> Self {
        Self { id, name, points }
    }
}

impl From<MeasureSeries> for SeriesData {
    fn from(series: MeasureSeries) -> Self {
        Self::new(series.measure, series.name, SeriesPoints::Year(series.points))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub unit: Option<String>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub note: Option<String>,
    pub series: Vec<SeriesData>,
}

impl ChartData {
    pub fn new(id: String, title: String, kind: ChartKind, series: Vec<SeriesData>) -> Self {
        Self {
            id,
            title,
            kind,
            unit: None,
            x_title: None,
            y_title: None,
            note: None,
            series,
        }
    }
}
