//! Session boundary
//!
//! The API authenticates with the Django session cookie, so there are no
//! tokens to store. When the server answers 401 the page goes to the login
//! form and comes back to where the user was.

use crate::shared::api_utils::ApiConfig;
use std::cell::Cell;
use web_sys::window;

const LOGOUT_PATH: &str = "/api-auth/logout/";

/// Login page URL that returns to `next` after authentication
pub fn login_url(config: &ApiConfig, next: &str) -> String {
    if next.is_empty() {
        return config.login_path.clone();
    }
    format!("{}?next={}", config.login_path, urlencoding::encode(next))
}

pub fn logout_url(next: &str) -> String {
    format!("{}?next={}", LOGOUT_PATH, urlencoding::encode(next))
}

/// Path and query of the current page
fn current_location() -> Option<String> {
    let location = window()?.location();
    let path = location.pathname().ok()?;
    let search = location.search().unwrap_or_default();
    Some(format!("{}{}", path, search))
}

/// Navigate to the login page
pub fn redirect_to_login(config: &ApiConfig) {
    let next = current_location().unwrap_or_else(|| "/".to_string());
    let url = login_url(config, &next);
    log::warn!("Session expired, redirecting to {}", url);

    let Some(window) = window() else {
        return;
    };
    if let Err(e) = window.location().set_href(&url) {
        log::error!("Failed to redirect to login: {:?}", e);
    }
}

/// Wrap a callback so only its first invocation has effect
///
/// Parallel requests failing with 401 trigger one redirect, not one each.
pub fn first_call_only<F: Fn()>(f: F) -> impl Fn() {
    let fired = Cell::new(false);
    move || {
        if !fired.replace(true) {
            f();
        }
    }
}

/// Default session-expired hook for the API client
pub fn session_expired_hook(config: ApiConfig) -> impl Fn() + 'static {
    first_call_only(move || redirect_to_login(&config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_login_url_encodes_next() {
        let config = ApiConfig::with_base_url("http://localhost:8000/api");
        assert_eq!(
            login_url(&config, "/pecas?search=andaime 1"),
            "/api-auth/login/?next=%2Fpecas%3Fsearch%3Dandaime%201"
        );
        assert_eq!(login_url(&config, ""), "/api-auth/login/");
        assert_eq!(logout_url("/"), "/api-auth/logout/?next=%2F");
    }

    #[test]
    fn test_first_call_only() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let hook = first_call_only(move || counter.set(counter.get() + 1));
        hook();
        hook();
        hook();
        assert_eq!(calls.get(), 1);
    }
}
