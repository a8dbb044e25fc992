// Series domain model - requests and results of the filter-and-reshape pipeline
use super::observation::WINDOW_START_YEAR;
use serde::Deserialize;
use std::ops::RangeInclusive;

const CONSUMPTION_MARKER: &str = "Consumption";

/// How a measure name is turned into a legend label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    #[default]
    Raw,
    /// Keep only the text before "Consumption",
    /// e.g. "Renewable Consumption – Twh" becomes "Renewable".
    StripConsumption,
}

impl LabelStyle {
    pub fn display_name(&self, measure: &str) -> String {
        match self {
            LabelStyle::Raw => measure.to_string(),
            LabelStyle::StripConsumption => match measure.split_once(CONSUMPTION_MARKER) {
                Some((head, _)) if !head.trim().is_empty() => head.trim().to_string(),
                _ => measure.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRequest {
    pub entity: String,
    /// Inclusive upper bound of the window.
    pub year_bound: i32,
    /// Measures in legend order. Repeats are kept.
    pub measures: Vec<String>,
    pub label_style: LabelStyle,
}

impl SeriesRequest {
    pub fn new(entity: impl Into<String>, year_bound: i32, measures: Vec<String>) -> Self {
        Self {
            entity: entity.into(),
            year_bound,
            measures,
            label_style: LabelStyle::Raw,
        }
    }

    pub fn with_label_style(mut self, label_style: LabelStyle) -> Self {
        self.label_style = label_style;
        self
    }

    /// Years selected by this request. Empty when the bound precedes the
    /// window start.
    pub fn window(&self) -> RangeInclusive<i32> {
        WINDOW_START_YEAR..=self.year_bound
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearPoint {
    pub year: i32,
    /// `None` when the row exists but the cell was empty.
    pub value: Option<f64>,
}

impl YearPoint {
    pub fn new(year: i32, value: Option<f64>) -> Self {
        Self { year, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeasureSeries {
    pub measure: String,
    pub name: String,
    pub points: Vec<YearPoint>,
}

impl MeasureSeries {
    pub fn new(measure: String, name: String, points: Vec<YearPoint>) -> Self {
        Self {
            measure,
            name,
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesResult {
    pub entity: String,
    pub year_bound: i32,
    pub series: Vec<MeasureSeries>,
}

impl SeriesResult {
    pub fn new(entity: String, year_bound: i32, series: Vec<MeasureSeries>) -> Self {
        Self {
            entity,
            year_bound,
            series,
        }
    }
}
