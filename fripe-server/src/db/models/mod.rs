//! Database models

pub mod listing;
pub mod order;
pub mod user;

pub use listing::{Listing, ListingCreate, generate_listing_reference};
pub use order::{Order, OrderCreate, OrderSummary};
pub use user::{User, UserCreate};
