// Series builder - Filter observations for one country and reshape them per measure
use crate::domain::error::DashboardError;
use crate::domain::observation::{Observation, ObservationTable};
use crate::domain::series::{MeasureSeries, SeriesRequest, SeriesResult, YearPoint};

/// Build one point list per requested measure from the rows of
/// `request.entity` whose year falls in `[2000, request.year_bound]`.
///
/// Rows keep table order. Years without a row contribute no point; a row
/// with an empty cell contributes a point with an undefined value. An
/// unknown entity or an empty window yields empty series. The only failure
/// is a measure the table does not carry, which is reported before any row
/// is read.
pub fn build(
    table: &ObservationTable,
    request: &SeriesRequest,
) -> Result<SeriesResult, DashboardError> {
    let columns = request
        .measures
        .iter()
        .map(|measure| {
            table
                .measure_index(measure)
                .ok_or_else(|| DashboardError::InvalidRequest {
                    measure: measure.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let window = request.window();
    let rows: Vec<&Observation> = table
        .rows()
        .iter()
        .filter(|row| row.entity == request.entity && window.contains(&row.year))
        .collect();

    tracing::debug!(
        entity = %request.entity,
        year_bound = request.year_bound,
        rows = rows.len(),
        measures = request.measures.len(),
        "Filtered observations"
    );

    let series = request
        .measures
        .iter()
        .zip(columns)
        .map(|(measure, column)| {
            let points = rows
                .iter()
                .map(|row| YearPoint::new(row.year, row.values[column]))
                .collect();
            MeasureSeries::new(
                measure.clone(),
                request.label_style.display_name(measure),
                points,
            )
        })
        .collect();

    Ok(SeriesResult::new(
        request.entity.clone(),
        request.year_bound,
        series,
    ))
}
