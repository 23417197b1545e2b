//! User-facing notifications
//!
//! Every failure is caught at the edge of the operation that produced it
//! and turned into one of these. Whatever shows them to the user (a toast,
//! a log line, an HTTP body) implements [`Notifier`].

use serde::Serialize;
use tracing::{info, warn};

use crate::record::QuoteRecord;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Notification {
    /// Creates a success notification
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: None,
        }
    }

    /// Creates an error notification
    pub fn error(title: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: None,
        }
    }

    /// Adds a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Success notification for a generated quote, describing the record as JSON
    pub fn quote_submitted(record: &QuoteRecord) -> Self {
        let notification = Self::success("Quote submitted successfully!");
        match serde_json::to_string_pretty(record) {
            Ok(json) => notification.with_description(json),
            Err(_) => notification,
        }
    }

    /// Aggregated notification for a form with field errors
    pub fn validation_failed() -> Self {
        Self::error("Please fill in all required fields.")
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Receives notifications for the user
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<F> Notifier for F
where
    F: Fn(Notification) + Send + Sync,
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

/// Notifier that writes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => info!(title = %notification.title, "Notification"),
            NotificationKind::Error => warn!(title = %notification.title, "Notification"),
        }
    }
}
