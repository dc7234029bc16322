//! User-visible notifications and where they go.
//!
//! The calculator emits exactly two kinds of notification, each a title/description
//! pair. Sinks decide how they reach the user: `LogSink` writes them to the log,
//! `ChannelSink` hands them to another thread over a `crossbeam_channel`.

use crossbeam_channel::Sender;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ExchangeError;
use crate::quote::Quote;

/// Title of the notification emitted after a successful calculation.
pub const EXCHANGE_CALCULATED: &str = "Exchange Calculated";
/// Title of the notification emitted by the purchase placeholder.
pub const PURCHASE_INITIATED: &str = "Purchase Initiated";
/// Description of the purchase placeholder notification.
pub const PURCHASE_DESCRIPTION: &str =
    "You're being redirected to complete your cryptocurrency purchase.";

/// Title/description pair shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Short heading.
    pub title: String,
    /// One-line body.
    pub description: String,
}

impl Notification {
    /// Create a notification from its parts.
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// "Exchange Calculated" with the quote summary as description.
    pub fn exchange_calculated(quote: &Quote) -> Self {
        Self::new(EXCHANGE_CALCULATED, &quote.summary())
    }

    /// "Purchase Initiated" placeholder.
    pub fn purchase_initiated() -> Self {
        Self::new(PURCHASE_INITIATED, PURCHASE_DESCRIPTION)
    }
}

/// Destination for notifications.
pub trait NotificationSink {
    /// Deliver one notification.
    fn notify(&self, notification: Notification) -> Result<(), ExchangeError>;
}

/// Writes notifications to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: Notification) -> Result<(), ExchangeError> {
        info!("{}: {}", notification.title, notification.description);
        Ok(())
    }
}

/// Forwards notifications to a channel receiver.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<Notification>,
}

impl ChannelSink {
    /// Wrap the sending half of a notification channel.
    pub fn new(tx: Sender<Notification>) -> Self {
        Self { tx }
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&self, notification: Notification) -> Result<(), ExchangeError> {
        self.tx
            .send(notification)
            .map_err(|e| ExchangeError::ChannelSend(format!("notification: {}", e)))
    }
}
