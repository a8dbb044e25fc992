// In-memory repository implementation
use crate::application::energy_repository::EnergyRepository;
use crate::domain::country::CountryTable;
use crate::domain::observation::ObservationTable;

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    observations: ObservationTable,
    countries: CountryTable,
}

impl InMemoryRepository {
    pub fn new(observations: ObservationTable, countries: CountryTable) -> Self {
        Self {
            observations,
            countries,
        }
    }
}

impl EnergyRepository for InMemoryRepository {
    fn observations(&self) -> &ObservationTable {
        &self.observations
    }

    fn countries(&self) -> &CountryTable {
        &self.countries
    }
}
