//! Authentication plumbing
//!
//! Token issuance lives in the external auth service; this module only
//! validates incoming Bearer tokens and exposes the acting user to handlers.

pub mod extractor;
pub mod jwt;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
