// Mapper to convert domain models to JSON payloads for the rendering layer
use crate::domain::chart::{ChartData, ChartKind, SeriesData, SeriesPoints};
use crate::domain::country::CountryProfile;
use crate::domain::dashboard::Dashboard;
use crate::domain::series::{MeasureSeries, SeriesResult, YearPoint};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub title: String,
    pub country: String,
    pub year_bound: i32,
    pub charts: Vec<ChartPayload>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub id: String,
    pub title: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub series: Vec<SeriesPayload>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPayload {
    pub id: String,
    pub name: String,
    pub points: Vec<PointPayload>,
}

/// Undefined values serialize as `null` so charts draw a gap.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PointPayload {
    #[serde(rename_all = "camelCase")]
    Xy {
        x: serde_json::Value,
        y: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<f64>,
    },
    #[serde(rename_all = "camelCase")]
    Geo {
        lat: f64,
        lon: f64,
        label: String,
        size: Option<f64>,
        population_millions: Option<f64>,
        gdp_per_capita: Option<f64>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesResultPayload {
    pub entity: String,
    pub year_bound: i32,
    pub series: Vec<SeriesPayload>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryProfilePayload {
    pub country: String,
    pub code: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub population: Option<f64>,
    pub gdp_per_capita: Option<f64>,
    pub gdp: Option<f64>,
    pub renewable_twh: Option<f64>,
    pub total_consumption: Option<f64>,
    pub renewable_consumption: Option<f64>,
    pub non_renewable_consumption: Option<f64>,
    pub renewable_share: Option<f64>,
    pub non_renewable_share: Option<f64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub indicators: BTreeMap<String, Option<f64>>,
}

pub fn dashboard_to_payload(dashboard: Dashboard) -> DashboardPayload {
    DashboardPayload {
        title: dashboard.title,
        country: dashboard.country,
        year_bound: dashboard.year_bound,
        charts: dashboard.charts.into_iter().map(chart_to_payload).collect(),
    }
}

pub fn series_result_to_payload(result: SeriesResult) -> SeriesResultPayload {
    SeriesResultPayload {
        entity: result.entity,
        year_bound: result.year_bound,
        series: result.series.into_iter().map(measure_series_to_payload).collect(),
    }
}

pub fn country_profile_to_payload(profile: CountryProfile) -> CountryProfilePayload {
    CountryProfilePayload {
        country: profile.name,
        code: profile.code,
        lat: profile.lat,
        lon: profile.lon,
        population: profile.population,
        gdp_per_capita: profile.gdp_per_capita,
        gdp: profile.gdp,
        renewable_twh: profile.renewable_twh,
        total_consumption: profile.total_consumption,
        renewable_consumption: profile.renewable_consumption,
        non_renewable_consumption: profile.balance.non_renewable,
        renewable_share: profile.balance.renewable_share,
        non_renewable_share: profile.balance.non_renewable_share,
        indicators: profile.indicators,
    }
}

fn chart_to_payload(chart: ChartData) -> ChartPayload {
    let kind = match chart.kind {
        ChartKind::Line => "line",
        ChartKind::ScatterMap => "scatterMap",
        ChartKind::Scatter => "scatter",
        ChartKind::StackedBar => "stackedBar",
    };

    ChartPayload {
        id: chart.id,
        title: chart.title,
        kind,
        unit: chart.unit,
        x_title: chart.x_title,
        y_title: chart.y_title,
        note: chart.note,
        series: chart.series.into_iter().map(series_to_payload).collect(),
    }
}

fn measure_series_to_payload(series: MeasureSeries) -> SeriesPayload {
    series_to_payload(SeriesData::from(series))
}

fn series_to_payload(series: SeriesData) -> SeriesPayload {
    let points = match series.points {
        SeriesPoints::Year(points) => points.into_iter().map(year_point).collect(),
        SeriesPoints::Geo(points) => points
            .into_iter()
            .map(|p| PointPayload::Geo {
                lat: p.lat,
                lon: p.lon,
                label: p.label,
                size: p.size,
                population_millions: p.population_millions,
                gdp_per_capita: p.gdp_per_capita,
            })
            .collect(),
        SeriesPoints::Xy(points) => points
            .into_iter()
            .map(|p| PointPayload::Xy {
                x: p.x.map(serde_json::Value::from).unwrap_or_default(),
                y: p.y,
                label: Some(p.label),
                name: Some(p.name),
                size: p.size,
            })
            .collect(),
        SeriesPoints::Category(points) => points
            .into_iter()
            .map(|p| PointPayload::Xy {
                x: serde_json::Value::from(p.category),
                y: p.value,
                label: None,
                name: None,
                size: None,
            })
            .collect(),
    };

    SeriesPayload {
        id: series.id,
        name: series.name,
        points,
    }
}

fn year_point(point: YearPoint) -> PointPayload {
    PointPayload::Xy {
        x: serde_json::Value::from(point.year),
        y: point.value,
        label: None,
        name: None,
        size: None,
    }
}
