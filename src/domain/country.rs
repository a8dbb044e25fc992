// Country domain model - static per-country attributes and derived energy shares
use super::error::TableError;
use std::collections::{BTreeMap, HashSet};

/// Consumption split derived once from total and renewable consumption.
///
/// Every field is `None` when an operand is missing, and the shares are
/// `None` when the total is zero. Nothing is ever coerced to `0.0` or left
/// as `NaN`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergyBalance {
    pub non_renewable: Option<f64>,
    pub renewable_share: Option<f64>,
    pub non_renewable_share: Option<f64>,
}

impl EnergyBalance {
    pub fn derive(total: Option<f64>, renewable: Option<f64>) -> Self {
        let non_renewable = match (total, renewable) {
            (Some(total), Some(renewable)) => Some(total - renewable),
            _ => None,
        };

        Self {
            non_renewable,
            renewable_share: share(renewable, total),
            non_renewable_share: share(non_renewable, total),
        }
    }
}

fn share(part: Option<f64>, total: Option<f64>) -> Option<f64> {
    let (part, total) = (part?, total?);
    if total == 0.0 {
        return None;
    }
    let ratio = part / total;
    ratio.is_finite().then_some(ratio)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryProfile {
    pub name: String,
    pub code: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub population: Option<f64>,
    pub gdp_per_capita: Option<f64>,
    pub gdp: Option<f64>,
    /// Renewable consumption in TWh, the scatter chart's x axis.
    pub renewable_twh: Option<f64>,
    pub total_consumption: Option<f64>,
    pub renewable_consumption: Option<f64>,
    pub balance: EnergyBalance,
    pub indicators: BTreeMap<String, Option<f64>>,
}

impl CountryProfile {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            ..Default::default()
        }
    }

    /// Set the two consumption columns and recompute the derived balance.
    pub fn with_consumption(mut self, total: Option<f64>, renewable: Option<f64>) -> Self {
        self.total_consumption = total;
        self.renewable_consumption = renewable;
        self.balance = EnergyBalance::derive(total, renewable);
        self
    }
}

/// Immutable table of country profiles, unique by name, in load order.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    profiles: Vec<CountryProfile>,
}

impl CountryTable {
    pub fn new(profiles: Vec<CountryProfile>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(profiles.len());
        for profile in &profiles {
            if !seen.insert(profile.name.as_str()) {
                return Err(TableError::DuplicateCountry(profile.name.clone()));
            }
        }
        Ok(Self { profiles })
    }

    pub fn get(&self, name: &str) -> Option<&CountryProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryProfile> {
        self.profiles.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_shares() {
        let balance = EnergyBalance::derive(Some(100.0), Some(40.0));

        assert_eq!(balance.non_renewable, Some(60.0));
        assert_eq!(balance.renewable_share, Some(0.4));
        assert_eq!(balance.non_renewable_share, Some(0.6));

        let sum = balance.renewable_share.unwrap() + balance.non_renewable_share.unwrap();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total_leaves_shares_undefined() {
        let balance = EnergyBalance::derive(Some(0.0), Some(0.0));

        assert_eq!(balance.non_renewable, Some(0.0));
        assert_eq!(balance.renewable_share, None);
        assert_eq!(balance.non_renewable_share, None);
    }

    #[test]
    fn test_missing_operand_leaves_everything_undefined() {
        assert_eq!(EnergyBalance::derive(None, Some(5.0)), EnergyBalance::default());
        assert_eq!(EnergyBalance::derive(Some(5.0), None), EnergyBalance::default());
    }

    #[test]
    fn test_with_consumption_recomputes_balance() {
        let profile =
            CountryProfile::new("Portugal", "PRT").with_consumption(Some(200.0), Some(50.0));

        assert_eq!(profile.balance.renewable_share, Some(0.25));
        assert_eq!(profile.balance.non_renewable, Some(150.0));
    }

    #[test]
    fn test_rejects_duplicate_country() {
        let profiles = vec![
            CountryProfile::new("Malta", "MLT"),
            CountryProfile::new("Malta", "MLT"),
        ];

        assert_eq!(
            CountryTable::new(profiles).unwrap_err(),
            TableError::DuplicateCountry("Malta".to_string())
        );
    }

    #[test]
    fn test_lookup_keeps_order() {
        let table = CountryTable::new(vec![
            CountryProfile::new("Spain", "ESP"),
            CountryProfile::new("Austria", "AUT"),
        ])
        .unwrap();

        assert_eq!(table.names(), vec!["Spain", "Austria"]);
        assert_eq!(table.get("Austria").map(|p| p.code.as_str()), Some("AUT"));
        assert!(table.get("Atlantis").is_none());
    }
}
