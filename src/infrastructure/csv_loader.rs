// CSV loader - Builds the in-memory tables from the exported workbook sheets
use crate::domain::country::{CountryProfile, CountryTable};
use crate::domain::error::TableError;
use crate::domain::observation::{Observation, ObservationTable};
use crate::infrastructure::config::{DatasetSettings, ProfileColumns};
use crate::infrastructure::memory_repository::InMemoryRepository;
use csv::StringRecord;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("{source_name}: missing column '{column}'")]
    MissingColumn { source_name: String, column: String },

    #[error("{source_name}: line {line}, column '{column}': invalid number '{value}'")]
    InvalidNumber {
        source_name: String,
        line: u64,
        column: String,
        value: String,
    },

    #[error("{source_name}: line {line}: invalid year '{value}'")]
    InvalidYear {
        source_name: String,
        line: u64,
        value: String,
    },

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Load both sheets named in `settings` and derive the share columns.
pub fn load_repository(settings: &DatasetSettings) -> Result<InMemoryRepository, LoadError> {
    let observations = load_observations(&settings.observations_path, settings)?;
    let countries = load_countries(&settings.countries_path, &settings.profile_columns)?;

    if observations.is_empty() || countries.is_empty() {
        tracing::warn!(
            observations = %settings.observations_path.display(),
            countries = %settings.countries_path.display(),
            "Dataset has an empty sheet"
        );
    }

    tracing::info!(
        observations = observations.rows().len(),
        measures = observations.measures().len(),
        countries = countries.len(),
        "Loaded energy dataset"
    );

    Ok(InMemoryRepository::new(observations, countries))
}

pub fn load_observations(
    path: &Path,
    settings: &DatasetSettings,
) -> Result<ObservationTable, LoadError> {
    let reader = open(path)?;
    read_observations(reader, &path.display().to_string(), settings)
}

pub fn load_countries(path: &Path, columns: &ProfileColumns) -> Result<CountryTable, LoadError> {
    let reader = open(path)?;
    read_countries(reader, &path.display().to_string(), columns)
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, LoadError> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| LoadError::Csv {
            source_name: path.display().to_string(),
            source,
        })
}

/// Every column other than the entity, the year and the ignored ones is a
/// measure, named after its alias when one is configured.
pub fn read_observations<R: Read>(
    mut reader: csv::Reader<R>,
    source_name: &str,
    settings: &DatasetSettings,
) -> Result<ObservationTable, LoadError> {
    let headers = headers(&mut reader, source_name)?;
    let entity_idx = column_index(&headers, &settings.entity_column, source_name)?;
    let year_idx = column_index(&headers, &settings.year_column, source_name)?;

    let measure_columns: Vec<(usize, &str)> = headers
        .iter()
        .enumerate()
        .filter(|(idx, header)| {
            *idx != entity_idx
                && *idx != year_idx
                && !settings.ignored_columns.iter().any(|c| c.as_str() == *header)
        })
        .collect();
    let measures: Vec<String> = measure_columns
        .iter()
        .map(|(_, header)| settings.measure_name(header).to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| LoadError::Csv {
            source_name: source_name.to_string(),
            source,
        })?;
        let line = line_of(&record);

        let entity = record.get(entity_idx).unwrap_or_default().to_string();
        let year = parse_year(record.get(year_idx).unwrap_or_default(), source_name, line)?;
        let values = measure_columns
            .iter()
            .map(|(idx, header)| parse_cell(record.get(*idx), source_name, line, header))
            .collect::<Result<Vec<_>, _>>()?;

        rows.push(Observation::new(entity, year, values));
    }

    tracing::debug!(source = source_name, rows = rows.len(), "Read observation sheet");
    Ok(ObservationTable::new(measures, rows)?)
}

pub fn read_countries<R: Read>(
    mut reader: csv::Reader<R>,
    source_name: &str,
    columns: &ProfileColumns,
) -> Result<CountryTable, LoadError> {
    let headers = headers(&mut reader, source_name)?;
    let idx = |column: &str| column_index(&headers, column, source_name);

    let name_idx = idx(&columns.name)?;
    let code_idx = idx(&columns.code)?;
    let lat_idx = idx(&columns.lat)?;
    let lon_idx = idx(&columns.lon)?;
    let population_idx = idx(&columns.population)?;
    let gdp_per_capita_idx = idx(&columns.gdp_per_capita)?;
    let gdp_idx = idx(&columns.gdp)?;
    let renewable_twh_idx = idx(&columns.renewable_twh)?;
    let total_idx = idx(&columns.total_consumption)?;
    let renewable_idx = idx(&columns.renewable_consumption)?;
    let indicator_idx = columns
        .indicators
        .iter()
        .map(|column| idx(column).map(|i| (i, column.as_str())))
        .collect::<Result<Vec<_>, _>>()?;

    let mut profiles = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| LoadError::Csv {
            source_name: source_name.to_string(),
            source,
        })?;
        let line = line_of(&record);
        let number = |i: usize, column: &str| parse_cell(record.get(i), source_name, line, column);

        let mut profile = CountryProfile::new(
            record.get(name_idx).unwrap_or_default(),
            record.get(code_idx).unwrap_or_default(),
        )
        .with_consumption(
            number(total_idx, &columns.total_consumption)?,
            number(renewable_idx, &columns.renewable_consumption)?,
        );
        profile.lat = number(lat_idx, &columns.lat)?;
        profile.lon = number(lon_idx, &columns.lon)?;
        profile.population = number(population_idx, &columns.population)?;
        profile.gdp_per_capita = number(gdp_per_capita_idx, &columns.gdp_per_capita)?;
        profile.gdp = number(gdp_idx, &columns.gdp)?;
        profile.renewable_twh = number(renewable_twh_idx, &columns.renewable_twh)?;
        for (i, column) in &indicator_idx {
            profile
                .indicators
                .insert(column.to_string(), number(*i, *column)?);
        }

        profiles.push(profile);
    }

    tracing::debug!(source = source_name, rows = profiles.len(), "Read country sheet");
    Ok(CountryTable::new(profiles)?)
}

fn headers<R: Read>(
    reader: &mut csv::Reader<R>,
    source_name: &str,
) -> Result<StringRecord, LoadError> {
    reader.headers().cloned().map_err(|source| LoadError::Csv {
        source_name: source_name.to_string(),
        source,
    })
}

fn column_index(
    headers: &StringRecord,
    column: &str,
    source_name: &str,
) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| LoadError::MissingColumn {
            source_name: source_name.to_string(),
            column: column.to_string(),
        })
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}

/// Empty cells and spreadsheet NaN markers are missing values.
fn parse_cell(
    raw: Option<&str>,
    source_name: &str,
    line: u64,
    column: &str,
) -> Result<Option<f64>, LoadError> {
    let raw = raw.unwrap_or_default().trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }

    raw.parse::<f64>()
        .map(|v| v.is_finite().then_some(v))
        .map_err(|_| LoadError::InvalidNumber {
            source_name: source_name.to_string(),
            line,
            column: column.to_string(),
            value: raw.to_string(),
        })
}

/// Accepts `2015` as well as the `2015.0` some exporters write.
fn parse_year(raw: &str, source_name: &str, line: u64) -> Result<i32, LoadError> {
    let raw = raw.trim();
    let invalid = || LoadError::InvalidYear {
        source_name: source_name.to_string(),
        line,
        value: raw.to_string(),
    };

    if let Ok(year) = raw.parse::<i32>() {
        return Ok(year);
    }
    let year = raw.parse::<f64>().map_err(|_| invalid())?;
    if year.fract() == 0.0 && year >= f64::from(i32::MIN) && year <= f64::from(i32::MAX) {
        Ok(year as i32)
    } else {
        Err(invalid())
    }
}
