//! API route modules
//!
//! - [`health`] - liveness probe
//! - [`orders`] - order lifecycle endpoints

pub mod health;
pub mod orders;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
