// Chart builders - Country-level charts that do not depend on the selected year
use crate::domain::chart::{CategoryPoint, GeoPoint, SeriesData, SeriesPoints, XyPoint};
use crate::domain::country::CountryTable;

const MAP_SIZE_DIVISOR: f64 = 2_000_000.0;
const SCATTER_SIZE_DIVISOR: f64 = 1_000_000.0;

/// Bubble map of every country with coordinates, sized by population.
pub fn population_map(countries: &CountryTable) -> SeriesData {
    let points = countries
        .iter()
        .filter_map(|country| {
            let (lat, lon) = (country.lat?, country.lon?);
            Some(GeoPoint {
                label: country.name.clone(),
                lat,
                lon,
                size: country.population.map(|p| p / MAP_SIZE_DIVISOR),
                population_millions: country.population.map(|p| round_to(p / 1_000_000.0, 1)),
                gdp_per_capita: country.gdp_per_capita,
            })
        })
        .collect();

    SeriesData::new(
        "countries".to_string(),
        "Countries".to_string(),
        SeriesPoints::Geo(points),
    )
}

/// Renewable consumption (TWh) against GDP, one marker per country.
pub fn renewables_vs_gdp(countries: &CountryTable) -> SeriesData {
    let points = countries
        .iter()
        .map(|country| XyPoint {
            label: country.code.clone(),
            name: country.name.clone(),
            x: country.renewable_twh.map(|v| round_to(v, 2)),
            y: country.gdp.map(|v| round_to(v, 2)),
            size: country.population.map(|p| p / SCATTER_SIZE_DIVISOR),
        })
        .collect();

    SeriesData::new(
        "renewables_vs_gdp".to_string(),
        "Renewable Consumption vs GDP".to_string(),
        SeriesPoints::Xy(points),
    )
}

/// Renewable and non-renewable shares per country, for a stacked bar.
/// Countries listed in `excluded` are left out.
pub fn energy_mix(countries: &CountryTable, excluded: &[String]) -> Vec<SeriesData> {
    let included: Vec<_> = countries
        .iter()
        .filter(|country| !excluded.contains(&country.name))
        .collect();

    let renewable = included
        .iter()
        .map(|country| CategoryPoint {
            category: country.name.clone(),
            value: country.balance.renewable_share,
        })
        .collect();
    let non_renewable = included
        .iter()
        .map(|country| CategoryPoint {
            category: country.name.clone(),
            value: country.balance.non_renewable_share,
        })
        .collect();

    vec![
        SeriesData::new(
            "renewable_share".to_string(),
            "Renewable".to_string(),
            SeriesPoints::Category(renewable),
        ),
        SeriesData::new(
            "non_renewable_share".to_string(),
            "Non-renewable".to_string(),
            SeriesPoints::Category(non_renewable),
        ),
    ]
}

fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
