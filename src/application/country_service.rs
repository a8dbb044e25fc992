// Country service - Selector options and country profiles
use crate::application::energy_repository::EnergyRepository;
use crate::domain::country::CountryProfile;
use crate::domain::error::DashboardError;
use std::sync::Arc;

#[derive(Clone)]
pub struct CountryService {
    repository: Arc<dyn EnergyRepository>,
    energy_types: Vec<String>,
}

impl CountryService {
    pub fn new(repository: Arc<dyn EnergyRepository>, energy_types: Vec<String>) -> Self {
        Self {
            repository,
            energy_types,
        }
    }

    /// Country names for the country selector, in sheet order.
    pub fn country_options(&self) -> Vec<String> {
        self.repository.countries().names()
    }

    pub fn energy_options(&self) -> &[String] {
        &self.energy_types
    }

    /// Every measure of the time-series table.
    pub fn measure_options(&self) -> &[String] {
        self.repository.observations().measures()
    }

    /// Bounds for the year selector.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        self.repository.observations().year_range()
    }

    /// Static attributes and derived shares of one country.
    pub fn profile(&self, country: &str) -> Result<CountryProfile, DashboardError> {
        self.repository
            .countries()
            .get(country)
            .cloned()
            .ok_or_else(|| DashboardError::UnknownCountry(country.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::country::CountryTable;
    use crate::domain::observation::{Observation, ObservationTable};
    use crate::infrastructure::memory_repository::InMemoryRepository;

    fn service() -> CountryService {
        let observations = ObservationTable::new(
            vec!["Wind".to_string()],
            vec![
                Observation::new("Portugal", 2004, vec![Some(1.0)]),
                Observation::new("Portugal", 2019, vec![Some(2.0)]),
            ],
        )
        .unwrap();
        let countries = CountryTable::new(vec![
            CountryProfile::new("Portugal", "PRT").with_consumption(Some(100.0), Some(40.0)),
            CountryProfile::new("Austria", "AUT"),
        ])
        .unwrap();

        CountryService::new(
            Arc::new(InMemoryRepository::new(observations, countries)),
            vec!["Wind".to_string(), "Hydro".to_string()],
        )
    }

    #[test]
    fn test_options() {
        let service = service();

        assert_eq!(service.country_options(), vec!["Portugal", "Austria"]);
        assert_eq!(service.energy_options(), ["Wind", "Hydro"]);
        assert_eq!(service.measure_options(), ["Wind"]);
        assert_eq!(service.year_range(), Some((2004, 2019)));
    }

    #[test]
    fn test_profile() {
        let service = service();

        let profile = service.profile("Portugal").unwrap();
        assert_eq!(profile.code, "PRT");
        assert_eq!(profile.balance.renewable_share, Some(0.4));

        assert_eq!(
            service.profile("Atlantis").unwrap_err(),
            DashboardError::UnknownCountry("Atlantis".to_string())
        );
    }
}
