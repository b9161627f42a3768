pub mod format;
pub mod money;
pub mod tax_id;
pub mod validation;
