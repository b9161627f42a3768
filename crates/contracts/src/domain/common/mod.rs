//! Common types and traits for all resources

pub mod aggregate_id;
pub mod aggregate_root;
pub mod entity_metadata;
pub mod list;

// Re-exports
pub use aggregate_id::EntityId;
pub use aggregate_root::Resource;
pub use entity_metadata::EntityMetadata;
pub use list::{normalize_search, ListResponse, PeriodQuery};
