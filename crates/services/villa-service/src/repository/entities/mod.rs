//! SeaORM entities mirroring the hosted database tables.
//!
//! The schema is owned by the database; these models only read it.

pub mod calendar_event;
pub mod tag;
pub mod user;
pub mod villa;
pub mod villa_image;
pub mod villa_tag;
