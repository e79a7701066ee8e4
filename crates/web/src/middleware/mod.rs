//! Middleware for session resolution and role checks.

mod session;

pub use session::{authorize, require_admin, session_middleware, session_token, CurrentUser};
