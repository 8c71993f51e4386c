//! Utility module — logging and shared type aliases
//!
//! Error types come from `shared::error` and are re-exported here so
//! handlers can keep their imports short.

pub mod logger;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
