//! Fripe Server - peer-to-peer clothing marketplace backend
//!
//! # Architecture
//!
//! ```text
//! fripe-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── auth/          # JWT validation, current-user extractor
//! ├── db/            # SQLite pool, models, repositories
//! ├── orders/        # Order lifecycle: creation, transitions, queries
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # Notification dispatch
//! └── utils/         # Logging and helpers
//! ```
//!
//! The order lifecycle is the heart of the server: orders are created in
//! `pending` and only ever move along the transition table in
//! [`shared::order`], gated by the acting user's relationship to the order
//! (buyer or seller) and the order's stored reception mode.

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use crate::core::{AppState, Config, Server};
pub use orders::{OrderCreationService, OrderQueryService, OrderTransitionEngine};
pub use services::{MailRelayNotifier, Notifier};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
