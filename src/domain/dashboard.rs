// Dashboard domain model
use super::chart::ChartData;

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub title: String,
    pub country: String,
    pub year_bound: i32,
    pub charts: Vec<ChartData>,
}

impl Dashboard {
    pub fn new(title: String, country: String, year_bound: i32, charts: Vec<ChartData>) -> Self {
        Self {
            title,
            country,
            year_bound,
            charts,
        }
    }
}
