//! Domain layer - Core entities and value objects of the villa rental site.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Persisted entities are owned by the external database; the types here are
//! request-scoped representations of its rows.

pub mod access;
pub mod calendar;
pub mod constants;
pub mod error;
pub mod filter;
pub mod password;
pub mod tag;
pub mod user;
pub mod villa;

pub use access::permits;
pub use calendar::{CalendarEvent, CalendarEventType, CalendarStatus};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use filter::{ActiveFilter, FilterParams};
pub use password::Password;
pub use tag::Tag;
pub use user::{NotificationPreferences, UserProfile, UserProfileResponse, UserRole, UserStatus};
pub use villa::{cover_image, Villa, VillaDetail, VillaImage};
