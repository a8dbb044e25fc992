// Command handlers
use crate::application::dashboard_service::DashboardRequest;
use crate::domain::series::{LabelStyle, SeriesRequest};
use crate::infrastructure::json_mapper::{
    country_profile_to_payload, dashboard_to_payload, series_result_to_payload,
};
use crate::presentation::app_state::AppState;
use crate::presentation::cli::Command;
use anyhow::Context;
use serde_json::{json, Value};

/// Run one command and return its JSON payload.
pub fn handle(state: &AppState, command: Command) -> anyhow::Result<Value> {
    match command {
        Command::Countries => Ok(list_countries(state)),
        Command::Measures => Ok(list_measures(state)),
        Command::Series {
            country,
            year,
            measures,
            strip_consumption,
        } => {
            let label_style = if strip_consumption {
                LabelStyle::StripConsumption
            } else {
                LabelStyle::Raw
            };
            let request = SeriesRequest::new(
                country.unwrap_or_else(|| state.defaults.country.clone()),
                year.unwrap_or(state.defaults.year),
                measures,
            )
            .with_label_style(label_style);
            series(state, &request)
        }
        Command::Profile { country } => {
            country_profile(state, &country.unwrap_or_else(|| state.defaults.country.clone()))
        }
        Command::Dashboard {
            country,
            year,
            energy_types,
            no_exclusions,
        } => {
            let mut request = DashboardRequest::new(
                country.unwrap_or_else(|| state.defaults.country.clone()),
                year.unwrap_or(state.defaults.year),
            );
            request.energy_types = (!energy_types.is_empty()).then_some(energy_types);
            request.apply_exclusions = !no_exclusions;
            dashboard(state, &request)
        }
    }
}

pub fn list_countries(state: &AppState) -> Value {
    json!({ "countries": state.country_service.country_options() })
}

pub fn list_measures(state: &AppState) -> Value {
    let years = state
        .country_service
        .year_range()
        .map(|(min, max)| json!({ "min": min, "max": max }))
        .unwrap_or(Value::Null);

    json!({
        "measures": state.country_service.measure_options(),
        "energyTypes": state.country_service.energy_options(),
        "years": years,
    })
}

pub fn series(state: &AppState, request: &SeriesRequest) -> anyhow::Result<Value> {
    let result = state
        .dashboard_service
        .get_series(request)
        .with_context(|| format!("Failed to build series for {}", request.entity))?;
    Ok(serde_json::to_value(series_result_to_payload(result))?)
}

pub fn country_profile(state: &AppState, country: &str) -> anyhow::Result<Value> {
    let profile = state.country_service.profile(country)?;
    Ok(serde_json::to_value(country_profile_to_payload(profile))?)
}

pub fn dashboard(state: &AppState, request: &DashboardRequest) -> anyhow::Result<Value> {
    let dashboard = state
        .dashboard_service
        .get_dashboard(request)
        .with_context(|| format!("Failed to build dashboard for {}", request.country))?;
    Ok(serde_json::to_value(dashboard_to_payload(dashboard))?)
}
