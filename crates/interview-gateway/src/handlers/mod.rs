//! HTTP request handlers for the interview gateway.

pub mod config_status;
pub mod health;
pub mod rooms;

pub use config_status::{client_config, config_status};
pub use health::health_check;
pub use rooms::{create_room, room_service_status};
