//! Repository layer for data access.

mod calendar_repository;
pub mod entities;
mod profile_repository;
mod villa_repository;

pub use calendar_repository::{CalendarRepository, CalendarStore};
pub use profile_repository::{ProfileRepository, ProfileStore};
pub use villa_repository::{VillaPage, VillaRepository, VillaStore};

#[cfg(any(test, feature = "test-utils"))]
pub use calendar_repository::MockCalendarRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use profile_repository::MockProfileRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use villa_repository::MockVillaRepository;
