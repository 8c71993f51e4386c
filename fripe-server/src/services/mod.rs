//! Auxiliary services consumed by the order core

pub mod notification;

pub use notification::{MailRelayNotifier, Notifier, NotifyError};
