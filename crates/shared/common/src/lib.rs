//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling for HTTP handlers
//! - Configuration structures and environment loading
//! - Shared response and pagination types

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
