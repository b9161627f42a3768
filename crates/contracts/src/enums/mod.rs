pub mod badge_color;
pub mod client_status;
pub mod movement_kind;
pub mod movement_reason;
pub mod person_kind;
pub mod rental_status;
pub mod stock_level;

pub use badge_color::BadgeColor;
pub use client_status::ClientStatus;
pub use movement_kind::MovementKind;
pub use movement_reason::MovementReason;
pub use person_kind::PersonKind;
pub use rental_status::RentalStatus;
pub use stock_level::StockLevel;
