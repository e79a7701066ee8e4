//! Villa Service Library
//!
//! Data access for the villa catalog: the SeaORM database handle and
//! repositories, the PostgREST RPC client, and the catalog and tag services
//! built on them.

pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use crate::infra::Database;
use crate::repository::{CalendarStore, ProfileStore, VillaStore};
use crate::service::CatalogManager;

/// Wire the catalog service onto a connected database.
pub fn catalog(db: &Database) -> CatalogManager {
    CatalogManager::new(
        Arc::new(VillaStore::new(db.get_connection())),
        Arc::new(CalendarStore::new(db.get_connection())),
    )
}

/// Profile repository over a connected database.
pub fn profiles(db: &Database) -> ProfileStore {
    ProfileStore::new(db.get_connection())
}
