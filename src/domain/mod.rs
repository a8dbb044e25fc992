// Domain layer - Core models with no I/O
pub mod chart;
pub mod country;
pub mod dashboard;
pub mod error;
pub mod observation;
pub mod series;
