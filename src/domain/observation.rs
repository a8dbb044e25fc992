// Observation domain model - yearly measures per country
use super::error::TableError;
use std::collections::HashSet;

/// First year of every selectable time window.
pub const WINDOW_START_YEAR: i32 = 2000;

/// One row of the time-series sheet. `values` is aligned with the owning
/// table's measure list; a missing cell is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub entity: String,
    pub year: i32,
    pub values: Vec<Option<f64>>,
}

impl Observation {
    pub fn new(entity: impl Into<String>, year: i32, values: Vec<Option<f64>>) -> Self {
        Self {
            entity: entity.into(),
            year,
            values,
        }
    }
}

/// Immutable per-(country, year) table. Rows keep the order they were
/// loaded in.
#[derive(Debug, Clone, Default)]
pub struct ObservationTable {
    measures: Vec<String>,
    rows: Vec<Observation>,
}

impl ObservationTable {
    /// Assemble a table, rejecting repeated measure names, rows whose width
    /// does not match the measure list and repeated (entity, year) pairs.
    pub fn new(measures: Vec<String>, rows: Vec<Observation>) -> Result<Self, TableError> {
        let mut names = HashSet::with_capacity(measures.len());
        if let Some(measure) = measures.iter().find(|m| !names.insert(m.as_str())) {
            return Err(TableError::DuplicateMeasure(measure.clone()));
        }

        let mut seen = HashSet::with_capacity(rows.len());

        for row in &rows {
            if row.values.len() != measures.len() {
                return Err(TableError::RowWidth {
                    entity: row.entity.clone(),
                    year: row.year,
                    expected: measures.len(),
                    found: row.values.len(),
                });
            }
            if !seen.insert((row.entity.as_str(), row.year)) {
                return Err(TableError::DuplicateObservation {
                    entity: row.entity.clone(),
                    year: row.year,
                });
            }
        }

        Ok(Self { measures, rows })
    }

    pub fn measures(&self) -> &[String] {
        &self.measures
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column position of a measure, if the table carries it.
    pub fn measure_index(&self, measure: &str) -> Option<usize> {
        self.measures.iter().position(|m| m == measure)
    }

    /// Smallest and largest year present.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.rows.iter().map(|r| r.year).min()?;
        let max = self.rows.iter().map(|r| r.year).max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measures() -> Vec<String> {
        vec!["Wind".to_string(), "Solar".to_string()]
    }

    #[test]
    fn test_rejects_duplicate_year_for_entity() {
        let rows = vec![
            Observation::new("Portugal", 2000, vec![Some(1.0), None]),
            Observation::new("Portugal", 2000, vec![Some(2.0), None]),
        ];

        let err = ObservationTable::new(measures(), rows).unwrap_err();
        assert_eq!(
            err,
            TableError::DuplicateObservation {
                entity: "Portugal".to_string(),
                year: 2000
            }
        );
    }

    #[test]
    fn test_same_year_for_different_entities_is_fine() {
        let rows = vec![
            Observation::new("Portugal", 2000, vec![Some(1.0), None]),
            Observation::new("Spain", 2000, vec![Some(2.0), None]),
        ];

        let table = ObservationTable::new(measures(), rows).unwrap();
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn test_rejects_repeated_measure_name() {
        let measures = vec!["Wind".to_string(), "Solar".to_string(), "Wind".to_string()];

        let err = ObservationTable::new(measures, Vec::new()).unwrap_err();
        assert_eq!(err, TableError::DuplicateMeasure("Wind".to_string()));
    }

    #[test]
    fn test_rejects_short_row() {
        let rows = vec![Observation::new("Spain", 2003, vec![Some(1.0)])];

        let err = ObservationTable::new(measures(), rows).unwrap_err();
        assert!(matches!(err, TableError::RowWidth { expected: 2, found: 1, .. }));
    }

    #[test]
    fn test_measure_index_and_year_range() {
        let rows = vec![
            Observation::new("Spain", 2003, vec![Some(1.0), Some(2.0)]),
            Observation::new("Spain", 2011, vec![None, Some(2.0)]),
            Observation::new("France", 2001, vec![None, None]),
        ];
        let table = ObservationTable::new(measures(), rows).unwrap();

        assert_eq!(table.measure_index("Solar"), Some(1));
        assert_eq!(table.measure_index("Coal"), None);
        assert_eq!(table.year_range(), Some((2001, 2011)));
        assert_eq!(ObservationTable::default().year_range(), None);
    }
}
