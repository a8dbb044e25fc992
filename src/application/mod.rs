// Application layer - Use cases over the loaded tables
pub mod chart_builder;
pub mod country_service;
pub mod dashboard_service;
pub mod energy_repository;
pub mod series_builder;
