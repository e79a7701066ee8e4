//! HTTP handlers.

pub mod auth_handler;
pub mod health_handler;
pub mod nav_handler;
pub mod villa_handler;

pub use auth_handler::auth_routes;
pub use health_handler::health_routes;
pub use nav_handler::nav_routes;
pub use villa_handler::{villa_admin_routes, villa_routes};
