pub mod a001_part_type;
pub mod a002_part;
pub mod a003_client;
pub mod a004_rental;
pub mod a005_rental_item;
pub mod a006_stock_movement;
