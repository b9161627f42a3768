pub mod api_utils;
pub mod crud;
pub mod debounce;
pub mod fetch_all;
pub mod http;
pub mod list_utils;
