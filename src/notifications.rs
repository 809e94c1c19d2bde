// ABOUTME: Transient success/error notifications raised by controllers and flows
// ABOUTME: Delivered over an unbounded mpsc channel to whatever presentation layer is listening

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGlow

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Operation succeeded
    Success,
    /// Non-fatal failure
    Error,
}

/// Toast-style message for the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity
    pub level: NotificationLevel,
    /// Human readable text
    pub message: String,
}

impl Notification {
    /// Success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    /// Error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NotificationLevel::Success => write!(f, "✓ {}", self.message),
            NotificationLevel::Error => write!(f, "✗ {}", self.message),
        }
    }
}

/// Sending half of the notification channel
///
/// A notifier without a channel, or whose receiver is gone, only logs.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    sender: Option<mpsc::UnboundedSender<Notification>>,
}

impl Notifier {
    /// Notifier that only logs
    #[must_use]
    pub const fn silent() -> Self {
        Self { sender: None }
    }

    /// Notifier delivering to `sender`
    #[must_use]
    pub const fn with_channel(sender: mpsc::UnboundedSender<Notification>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Create a notifier and the receiver it delivers to
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::with_channel(sender), receiver)
    }

    /// Deliver `notification`
    pub fn notify(&self, notification: Notification) {
        debug!(level = ?notification.level, message = %notification.message, "Notification");
        if let Some(sender) = &self.sender {
            if let Err(e) = sender.send(notification) {
                warn!(error = %e, "Failed to deliver notification");
            }
        }
    }

    /// Deliver a success notification
    pub fn success(&self, message: impl Into<String>) {
        self.notify(Notification::success(message));
    }

    /// Deliver an error notification
    pub fn error(&self, message: impl Into<String>) {
        self.notify(Notification::error(message));
    }
}
