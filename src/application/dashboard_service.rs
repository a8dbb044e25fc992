// Dashboard service - Use case for building dashboards from chart configuration
use crate::application::chart_builder;
use crate::application::energy_repository::EnergyRepository;
use crate::application::series_builder;
use crate::domain::chart::{ChartData, ChartKind, SeriesData};
use crate::domain::dashboard::Dashboard;
use crate::domain::error::DashboardError;
use crate::domain::series::{SeriesRequest, SeriesResult};
use crate::infrastructure::config::{ChartConfig, WidgetsConfig};
use std::sync::Arc;

/// User selections driving one dashboard render.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRequest {
    pub country: String,
    pub year_bound: i32,
    /// Replaces the measures of selectable line charts when set.
    pub energy_types: Option<Vec<String>>,
    /// Apply the stacked bar's configured country exclusions.
    pub apply_exclusions: bool,
}

impl DashboardRequest {
    pub fn new(country: impl Into<String>, year_bound: i32) -> Self {
        Self {
            country: country.into(),
            year_bound,
            energy_types: None,
            apply_exclusions: true,
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn EnergyRepository>,
    widgets_config: WidgetsConfig,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn EnergyRepository>, widgets_config: WidgetsConfig) -> Self {
        Self {
            repository,
            widgets_config,
        }
    }

    pub fn get_series(&self, request: &SeriesRequest) -> Result<SeriesResult, DashboardError> {
        series_builder::build(self.repository.observations(), request)
    }

    /// Build every configured chart, in configuration order.
    pub fn get_dashboard(&self, request: &DashboardRequest) -> Result<Dashboard, DashboardError> {
        let charts = self
            .widgets_config
            .charts
            .iter()
            .map(|chart_config| self.build_chart(chart_config, request))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            country = %request.country,
            year_bound = request.year_bound,
            charts = charts.len(),
            "Built dashboard"
        );

        Ok(Dashboard::new(
            self.widgets_config.title.clone(),
            request.country.clone(),
            request.year_bound,
            charts,
        ))
    }

    fn build_chart(
        &self,
        chart_config: &ChartConfig,
        request: &DashboardRequest,
    ) -> Result<ChartData, DashboardError> {
        let countries = self.repository.countries();

        let series = match chart_config.kind {
            ChartKind::Line => self.line_series(chart_config, request)?,
            ChartKind::ScatterMap => vec![chart_builder::population_map(countries)],
            ChartKind::Scatter => vec![chart_builder::renewables_vs_gdp(countries)],
            ChartKind::StackedBar => {
                let excluded: &[String] = if request.apply_exclusions {
                    &chart_config.excluded_countries
                } else {
                    &[]
                };
                chart_builder::energy_mix(countries, excluded)
            }
        };

        let mut chart = ChartData::new(
            chart_config.id.clone(),
            chart_config.title.clone(),
            chart_config.kind,
            series,
        );
        chart.unit = chart_config.unit.clone();
        chart.x_title = chart_config.x_title.clone();
        chart.y_title = chart_config.y_title.clone();
        chart.note = chart_config.note.clone();
        Ok(chart)
    }

    fn line_series(
        &self,
        chart_config: &ChartConfig,
        request: &DashboardRequest,
    ) -> Result<Vec<SeriesData>, DashboardError> {
        let measures = match (&request.energy_types, chart_config.selectable) {
            (Some(selected), true) => selected.clone(),
            _ => chart_config.measures.clone(),
        };

        let series_request =
            SeriesRequest::new(request.country.clone(), request.year_bound, measures)
                .with_label_style(chart_config.label_style);
        let result = self.get_series(&series_request)?;

        if result.series.iter().all(|s| s.points.is_empty()) {
            tracing::debug!(
                chart = %chart_config.id,
                country = %request.country,
                "No observations in window"
            );
        }

        Ok(result.series.into_iter().map(SeriesData::from).collect())
    }
}
