use crate::dashboards::d100_overview;
use crate::shared::api_utils::ApiConfig;
use crate::shared::http::{ApiClient, ApiError};
use crate::system::auth::session_expired_hook;
use contracts::dashboards::d100_overview::OverviewData;

/// Shared state of the running page
#[derive(Debug, Clone)]
pub struct App {
    pub client: ApiClient,
}

impl App {
    /// API from the build/page configuration, 401 redirects to the login form
    pub fn new() -> Self {
        Self::with_config(ApiConfig::from_env())
    }

    pub fn with_config(config: ApiConfig) -> Self {
        let client = ApiClient::new(config.clone(), session_expired_hook(config));
        Self { client }
    }

    pub async fn load_overview(&self) -> Result<OverviewData, ApiError> {
        d100_overview::load_overview(&self.client).await
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
