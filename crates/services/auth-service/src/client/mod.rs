//! Clients for data owned outside the auth service.

mod profile_client;

pub use profile_client::{ProfileClient, ProfileLookup};

#[cfg(any(test, feature = "test-utils"))]
pub use profile_client::MockProfileLookup;
