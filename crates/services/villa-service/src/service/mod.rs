//! Service layer - business logic.

mod catalog_service;
mod tag_service;

pub use catalog_service::{CatalogManager, VillaCatalog};
pub use tag_service::{TagMaintenance, TagUpdater};
