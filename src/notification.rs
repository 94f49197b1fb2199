//! Rendering diagnostics
//!
//! Style variables that are read but not honoured, or values that had to be
//! replaced, do not abort a render. They are collected as `Notification`
//! items on the document instead; see [`CadDocument::notifications`].
//!
//! [`CadDocument::notifications`]: crate::document::CadDocument::notifications

use crate::types::Handle;
use std::fmt;

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// A dimension feature is not yet implemented.
    NotImplemented,
    /// Style variable exists but is ignored by the renderer.
    NotSupported,
    /// A value was replaced by a usable default.
    Warning,
    /// Error that was recovered from.
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImplemented => write!(f, "NotImplemented"),
            Self::NotSupported => write!(f, "NotSupported"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single diagnostic, optionally tied to the entity it concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub message: String,
    /// Entity being rendered, `None` for document level issues
    pub handle: Option<Handle>,
}

impl Notification {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
            handle: None,
        }
    }

    /// Attach the handle of the entity the notification concerns.
    pub fn for_entity(mut self, handle: Handle) -> Self {
        self.handle = Some(handle).filter(|h| h.is_valid());
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.handle {
            Some(handle) => write!(f, "[{}] {}: {}", self.notification_type, handle, self.message),
            None => write!(f, "[{}] {}", self.notification_type, self.message),
        }
    }
}

/// Notifications collected over the lifetime of a document.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.push(Notification::new(notification_type, message));
    }

    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(%notification, "render notification");
        self.items.push(notification);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Drop all collected notifications.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Extend<Notification> for NotificationCollection {
    fn extend<I: IntoIterator<Item = Notification>>(&mut self, iter: I) {
        for notification in iter {
            self.push(notification);
        }
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
