pub mod api;
pub mod loader;

pub use loader::{load_overview, OverviewSource};
