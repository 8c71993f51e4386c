//! Order lifecycle vocabulary
//!
//! The canonical status enumeration, the alias table that absorbs legacy and
//! localized status strings, and the buyer/seller transition table. The
//! transition rules here are pure functions over [`OrderStatus`]; persistence
//! and actor lookup live in the server crate.

mod status;
mod transition;

pub use status::{OrderStatus, ReceptionMode};
pub use transition::{CANCELLABLE_FROM, OrderActor, allowed_targets, can_transition};
