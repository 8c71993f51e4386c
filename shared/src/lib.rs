//! Shared vocabulary for the Fripe marketplace backend.
//!
//! Types the HTTP server and its clients must agree on:
//!
//! - [`error`]: unified error codes, [`error::AppError`] and the API
//!   response envelope
//! - [`order`]: canonical order statuses, status alias resolution, and the
//!   buyer/seller transition table

pub mod error;
pub mod order;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use order::{OrderActor, OrderStatus, ReceptionMode};
