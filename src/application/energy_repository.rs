// Repository trait for energy data access
use crate::domain::country::CountryTable;
use crate::domain::observation::ObservationTable;

/// Read-only handle over the tables loaded at start-up. Implementations
/// never mutate the tables after construction, so one handle can be shared
/// across any number of concurrent requests.
pub trait EnergyRepository: Send + Sync {
    /// Per-country, per-year measures
    fn observations(&self) -> &ObservationTable;

    /// Per-country static attributes with derived shares
    fn countries(&self) -> &CountryTable;
}
