//! API utilities for frontend-backend communication
//!
//! Provides the API configuration and helpers for constructing API URLs.

/// Port the Django backend listens on when no explicit URL is configured
pub const DEFAULT_API_PORT: u16 = 8000;

/// Path prefix of the REST API on the backend
pub const API_PREFIX: &str = "/api";

/// Browsable-API login page, relative to the site root
pub const DEFAULT_LOGIN_PATH: &str = "/api-auth/login/";

pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";

/// Where the API lives and how the session is carried
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:8000/api`
    pub base_url: String,
    pub login_path: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
}

impl ApiConfig {
    /// Configuration for the running page
    ///
    /// `DELTAD_API_URL` set at build time wins, otherwise the API is
    /// expected on the current host at port 8000.
    pub fn from_env() -> Self {
        let base_url = option_env!("DELTAD_API_URL")
            .map(str::to_string)
            .unwrap_or_else(api_base);
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_string(),
            csrf_header: DEFAULT_CSRF_HEADER.to_string(),
        }
    }

    /// Full URL for an API path
    ///
    /// # Example
    /// ```rust
    /// use frontend::shared::api_utils::ApiConfig;
    ///
    /// let config = ApiConfig::with_base_url("http://localhost:8000/api/");
    /// assert_eq!(config.url("/pecas/7/"), "http://localhost:8000/api/pecas/7/");
    /// ```
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000/api"
/// - "http://127.0.0.1:8000/api" if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return format!("http://127.0.0.1:{}{}", DEFAULT_API_PORT, API_PREFIX),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}{}", protocol, hostname, DEFAULT_API_PORT, API_PREFIX)
}

/// Build a full API URL from a path using the page configuration
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/pecas/estoque_baixo/");
/// ```
pub fn api_url(path: &str) -> String {
    ApiConfig::from_env().url(path)
}
