// Application state shared by command handlers
use crate::application::country_service::CountryService;
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::SelectionDefaults;

#[derive(Clone)]
pub struct AppState {
    pub country_service: CountryService,
    pub dashboard_service: DashboardService,
    pub defaults: SelectionDefaults,
}
