//! Domain-level constants.
//!
//! These constants define business rules and the wire values of closed enumerations.

// =============================================================================
// User Roles & Status
// =============================================================================

/// Default role assigned to new users
pub const ROLE_CUSTOMER: &str = "CUSTOMER";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "ADMIN";

pub const STATUS_ACTIVE: &str = "ACTIVE";
pub const STATUS_INACTIVE: &str = "INACTIVE";
pub const STATUS_BANNED: &str = "BANNED";

// =============================================================================
// Calendar
// =============================================================================

pub const CALENDAR_AVAILABLE: &str = "AVAILABLE";
pub const CALENDAR_PENDING: &str = "PENDING";
pub const CALENDAR_RESERVED: &str = "RESERVED";
pub const CALENDAR_BLOCKED: &str = "BLOCKED";

pub const EVENT_CHECKIN: &str = "CHECKIN";
pub const EVENT_CHECKOUT: &str = "CHECKOUT";
pub const EVENT_SPECIAL_OFFER: &str = "SPECIAL_OFFER";

/// Default calendar window when the caller gives no end date
pub const DEFAULT_CALENDAR_WINDOW_DAYS: u64 = 90;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// Pagination
// =============================================================================

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 12;

/// Maximum allowed items per page to prevent excessive queries
pub const MAX_PAGE_SIZE: u64 = 100;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

// =============================================================================
// Sessions
// =============================================================================

/// Default session lifetime in hours (30 days)
pub const DEFAULT_SESSION_EXPIRATION_HOURS: i64 = 720;

/// Longest accepted session lifetime in hours (one year)
pub const MAX_SESSION_EXPIRATION_HOURS: i64 = 8760;

/// Minimum session signing secret length (security requirement)
pub const MIN_SESSION_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Cookie carrying the signed session token
pub const SESSION_COOKIE: &str = "session_token";

/// Legacy cookie cleared on logout
pub const AUTH_TOKEN_COOKIE: &str = "authToken";

// =============================================================================
// Remote procedures
// =============================================================================

/// Stored procedure that recomputes villa/tag associations
pub const RPC_UPDATE_VILLA_TAGS: &str = "update_villa_tags";
