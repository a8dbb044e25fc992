use crate::domain::chart::ChartKind;
use crate::domain::series::LabelStyle;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "EU_DASHBOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    pub dataset: DatasetSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    /// Per-country sheet exported to CSV
    pub countries_path: PathBuf,
    /// Per-country, per-year sheet exported to CSV
    pub observations_path: PathBuf,
    #[serde(default = "default_entity_column")]
    pub entity_column: String,
    #[serde(default = "default_year_column")]
    pub year_column: String,
    /// Time-series columns that are neither key nor measure
    #[serde(default)]
    pub ignored_columns: Vec<String>,
    /// Raw headers renamed to legend-friendly measure names
    #[serde(default)]
    pub measure_aliases: Vec<MeasureAlias>,
    #[serde(default)]
    pub profile_columns: ProfileColumns,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MeasureAlias {
    pub column: String,
    pub name: String,
}

impl DatasetSettings {
    /// Measure name for a raw time-series header.
    pub fn measure_name<'a>(&'a self, column: &'a str) -> &'a str {
        self.measure_aliases
            .iter()
            .find(|alias| alias.column == column)
            .map(|alias| alias.name.as_str())
            .unwrap_or(column)
    }

    /// Anchor relative sheet paths at `base`. Absolute paths are kept.
    fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.countries_path, &mut self.observations_path] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Headers of the per-country sheet.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProfileColumns {
    pub name: String,
    pub code: String,
    pub lat: String,
    pub lon: String,
    pub population: String,
    pub gdp_per_capita: String,
    pub gdp: String,
    pub renewable_twh: String,
    pub total_consumption: String,
    pub renewable_consumption: String,
    /// Extra numeric columns kept as named indicators
    pub indicators: Vec<String>,
}

impl Default for ProfileColumns {
    fn default() -> Self {
        Self {
            name: "Countries".to_string(),
            code: "Country Code".to_string(),
            lat: "lat".to_string(),
            lon: "lon".to_string(),
            population: "Population, total 2022".to_string(),
            gdp_per_capita: "GDP per capita (current US$) 2020".to_string(),
            gdp: "GDP (current US$) 2020".to_string(),
            renewable_twh: "Renewable Consumption – Twh".to_string(),
            total_consumption: "Total final energy consumption (TFEC) (TJ) 2015".to_string(),
            renewable_consumption: "Renewable energy consumption (TJ) 2015".to_string(),
            indicators: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WidgetsConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub defaults: SelectionDefaults,
    /// Choices offered by the energy type selector
    #[serde(default)]
    pub energy_types: Vec<String>,
    #[serde(default)]
    pub charts: Vec<ChartConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SelectionDefaults {
    pub country: String,
    pub year: i32,
}

impl Default for SelectionDefaults {
    fn default() -> Self {
        Self {
            country: "Portugal".to_string(),
            year: 2020,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub unit: Option<String>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub note: Option<String>,
    /// Line charts only: measures plotted when the request does not pick any
    #[serde(default)]
    pub measures: Vec<String>,
    /// Line charts only: whether the request's energy types replace `measures`
    #[serde(default)]
    pub selectable: bool,
    #[serde(default)]
    pub label_style: LabelStyle,
    /// Stacked bar only: countries left out of the chart
    #[serde(default)]
    pub excluded_countries: Vec<String>,
}

fn default_entity_column() -> String {
    "Countries".to_string()
}

fn default_year_column() -> String {
    "Year".to_string()
}

fn default_title() -> String {
    "Consumption of Energy in European Union Countries".to_string()
}

/// Load `<dir>/dataset.*`, overridable through `EU_DASHBOARD_DATASET__*`
/// environment variables. Relative sheet paths are taken relative to `dir`.
pub fn load_dataset_config(dir: &Path) -> anyhow::Result<DatasetConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(&dir.join("dataset").to_string_lossy()))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let mut config: DatasetConfig = settings.try_deserialize()?;
    config.dataset.resolve_paths(dir);
    Ok(config)
}

pub fn load_widgets_config(dir: &Path) -> anyhow::Result<WidgetsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(&dir.join("widgets").to_string_lossy()))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::energy_repository::EnergyRepository;
    use crate::infrastructure::csv_loader::load_repository;

    #[test]
    fn test_widgets_config_defaults() {
        let config: WidgetsConfig = toml::from_str(
            r#"
            [[charts]]
            id = "energy_by_type"
            title = "Energy Consumption per Type"
            kind = "line"
            selectable = true
            measures = ["Wind", "Hydro"]
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Consumption of Energy in European Union Countries");
        assert_eq!(config.defaults, SelectionDefaults::default());
        assert_eq!(config.charts[0].kind, ChartKind::Line);
        assert_eq!(config.charts[0].label_style, LabelStyle::Raw);
        assert!(config.charts[0].excluded_countries.is_empty());
    }

    #[test]
    fn test_chart_kinds_and_label_style_parse() {
        let config: WidgetsConfig = toml::from_str(
            r#"
            [[charts]]
            id = "mix"
            title = "Energy Mix"
            kind = "stacked_bar"
            excluded_countries = ["Malta"]

            [[charts]]
            id = "totals"
            title = "Energy Consumption"
            kind = "line"
            label_style = "strip_consumption"
            "#,
        )
        .unwrap();

        assert_eq!(config.charts[0].kind, ChartKind::StackedBar);
        assert_eq!(config.charts[0].excluded_countries, vec!["Malta"]);
        assert_eq!(config.charts[1].label_style, LabelStyle::StripConsumption);
    }

    #[test]
    fn test_load_dataset_config_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("dataset.toml"),
            r#"
            [dataset]
            countries_path = "data/countries.csv"
            observations_path = "data/observations.csv"
            ignored_columns = ["Country Code"]
            measure_aliases = [{ column = "Geo Biomass Other - TWh", name = "Geo Biomass Other" }]

            [dataset.profile_columns]
            population = "Population"
            "#,
        )
        .unwrap();

        let config = load_dataset_config(dir.path()).unwrap();

        assert_eq!(config.dataset.entity_column, "Countries");
        assert_eq!(config.dataset.year_column, "Year");
        assert_eq!(config.dataset.ignored_columns, vec!["Country Code"]);
        assert_eq!(config.dataset.profile_columns.population, "Population");
        assert_eq!(config.dataset.profile_columns.name, "Countries");
        assert_eq!(
            config.dataset.measure_name("Geo Biomass Other - TWh"),
            "Geo Biomass Other"
        );
        assert_eq!(config.dataset.measure_name("Wind"), "Wind");
        assert_eq!(config.dataset.countries_path, dir.path().join("data/countries.csv"));
        assert_eq!(
            config.dataset.observations_path,
            dir.path().join("data/observations.csv")
        );
    }

    #[test]
    fn test_absolute_sheet_paths_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("dataset.toml"),
            r#"
            [dataset]
            countries_path = "/srv/eu/countries.csv"
            observations_path = "observations.csv"
            "#,
        )
        .unwrap();

        let config = load_dataset_config(dir.path()).unwrap();

        assert_eq!(config.dataset.countries_path, PathBuf::from("/srv/eu/countries.csv"));
        assert_eq!(config.dataset.observations_path, dir.path().join("observations.csv"));
    }

    #[test]
    fn test_shipped_configuration_matches_sample_data() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("config");
        let dataset = load_dataset_config(&dir).unwrap();
        let widgets = load_widgets_config(&dir).unwrap();

        let repository = load_repository(&dataset.dataset).unwrap();
        let observations = repository.observations();
        let configured = widgets.charts.iter().flat_map(|c| &c.measures);

        for measure in configured.chain(&widgets.energy_types) {
            assert!(observations.measure_index(measure).is_some(), "unknown measure {measure}");
        }
        assert_eq!(widgets.defaults.country, "Portugal");
    }

    #[test]
    fn test_missing_widgets_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_widgets_config(dir.path()).is_err());
    }
}
